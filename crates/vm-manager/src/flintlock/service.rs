//! Create, fetch and delete the microvm described by a [`Scope`].

use super::client::MicroVmApi;
use super::grpc::flintlock::types::{MicroVm, MicroVmSpec};
use super::grpc::microvm::services::api::v1alpha1::{
    CreateMicroVmRequest, DeleteMicroVmRequest, GetMicroVmRequest,
};
use super::{mac, mapper, metadata};
use crate::error::{Error, Result};
use crate::scope::Scope;
use std::collections::HashMap;

const OP_CREATE: &str = "creating microvm";
const OP_GET: &str = "getting microvm";
const OP_DELETE: &str = "deleting microvm";

/// Provisions one microvm on one Flintlock host.
pub struct MicroVmService<S, C> {
    scope: S,
    client: C,
    host_id: String,
}

impl<S: Scope, C: MicroVmApi> MicroVmService<S, C> {
    /// `host_id` identifies the Flintlock host and is recorded in the
    /// guest's instance metadata.
    pub fn new(scope: S, client: C, host_id: impl Into<String>) -> Self {
        Self {
            scope,
            client,
            host_id: host_id.into(),
        }
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }

    /// Create the microvm.
    ///
    /// Metadata and MAC addresses are resolved before the request is sent;
    /// any failure there aborts without contacting the host.
    pub async fn create(&self) -> Result<MicroVm> {
        let spec = self.build_spec()?;
        let id = spec.id.clone();

        tracing::debug!(id = %id, namespace = %spec.namespace, host = %self.host_id, "creating microvm");

        let request = CreateMicroVmRequest {
            microvm: Some(spec),
            metadata: HashMap::new(),
        };

        let response = self
            .client
            .create_microvm(request)
            .await
            .map_err(|status| Error::rpc(OP_CREATE, id.as_str(), status))?;

        let microvm = response.microvm.ok_or(Error::EmptyResponse(OP_CREATE))?;
        let uid = microvm.spec.as_ref().and_then(|s| s.uid.as_deref());
        tracing::info!(id = %id, uid = ?uid, "created microvm");

        Ok(microvm)
    }

    /// Fetch the microvm by the scope's instance id.
    pub async fn get(&self) -> Result<MicroVm> {
        let uid = self.scope.instance_id();
        tracing::debug!(uid = %uid, "getting microvm");

        let response = self
            .client
            .get_microvm(GetMicroVmRequest {
                uid: uid.to_string(),
            })
            .await
            .map_err(|status| Error::rpc(OP_GET, uid, status))?;

        response.microvm.ok_or(Error::EmptyResponse(OP_GET))
    }

    /// Delete the microvm by the scope's instance id.
    pub async fn delete(&self) -> Result<()> {
        let uid = self.scope.instance_id();
        tracing::debug!(uid = %uid, "deleting microvm");

        self.client
            .delete_microvm(DeleteMicroVmRequest {
                uid: uid.to_string(),
            })
            .await
            .map_err(|status| Error::rpc(OP_DELETE, uid, status))?;

        tracing::info!(uid = %uid, "deleted microvm");
        Ok(())
    }

    /// Release the client. Idempotent.
    pub fn close(&self) {
        self.client.close();
    }

    fn build_spec(&self) -> Result<MicroVmSpec> {
        let mut spec = mapper::to_microvm_spec(&self.scope);

        let raw = self.scope.raw_bootstrap_data().map_err(Error::BootstrapData)?;
        spec.metadata = metadata::generate(
            self.scope.name(),
            &raw,
            &self.scope.ssh_public_keys(),
            &self.host_id,
        )?;

        for iface in &mut spec.interfaces {
            if iface.guest_mac.as_deref().unwrap_or_default().is_empty() {
                let mac = mac::allocate()?;
                tracing::debug!(device = %iface.device_id, mac = %mac, "allocated guest mac");
                iface.guest_mac = Some(mac.to_string());
            }
        }

        Ok(spec)
    }
}
