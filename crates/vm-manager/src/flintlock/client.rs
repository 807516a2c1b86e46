use super::grpc::microvm::services::api::v1alpha1::micro_vm_client::MicroVmClient;
use super::grpc::microvm::services::api::v1alpha1::{
    CreateMicroVmRequest, CreateMicroVmResponse, DeleteMicroVmRequest, GetMicroVmRequest,
    GetMicroVmResponse, ListMessage, ListMicroVMsRequest, ListMicroVMsResponse,
};
use super::transport::{AuthenticatedChannel, Transport};
use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use mvmkit_common::{ClientOptions, FlintlockConfig};
use std::sync::{Arc, Mutex, PoisonError};
use tonic::{Request, Status};

type GrpcClient = MicroVmClient<AuthenticatedChannel>;

/// Typed operations of the Flintlock MicroVM service.
///
/// Calls forward their request and return the remote response or status
/// unchanged.
#[async_trait]
pub trait MicroVmApi: Send + Sync {
    async fn create_microvm(
        &self,
        request: CreateMicroVmRequest,
    ) -> std::result::Result<CreateMicroVmResponse, Status>;

    async fn get_microvm(
        &self,
        request: GetMicroVmRequest,
    ) -> std::result::Result<GetMicroVmResponse, Status>;

    async fn delete_microvm(&self, request: DeleteMicroVmRequest) -> std::result::Result<(), Status>;

    async fn list_microvms(
        &self,
        request: ListMicroVMsRequest,
    ) -> std::result::Result<ListMicroVMsResponse, Status>;

    async fn list_microvms_stream(
        &self,
        request: ListMicroVMsRequest,
    ) -> std::result::Result<BoxStream<'static, std::result::Result<ListMessage, Status>>, Status>;

    /// Release the connection. Safe to call more than once.
    fn close(&self);
}

/// gRPC client for a single Flintlock host.
///
/// Cheap to clone; clones share the underlying channel, and closing one
/// closes all of them.
#[derive(Clone)]
pub struct FlintlockClient {
    address: Arc<str>,
    inner: Arc<Mutex<Option<GrpcClient>>>,
}

impl FlintlockClient {
    /// Connect to `address`, failing if the host cannot be reached.
    pub async fn connect(address: &str, options: &ClientOptions) -> Result<Self> {
        let channel = Transport::build(address, options)?.connect().await?;
        Ok(Self::new(address, channel))
    }

    /// Validate options and return a client that dials on first use.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect_lazy(address: &str, options: &ClientOptions) -> Result<Self> {
        let channel = Transport::build(address, options)?.connect_lazy();
        Ok(Self::new(address, channel))
    }

    /// Connect using a loaded configuration.
    pub async fn from_config(config: &FlintlockConfig) -> Result<Self> {
        Self::connect(&config.endpoint, &config.options).await
    }

    fn new(address: &str, channel: AuthenticatedChannel) -> Self {
        Self {
            address: Arc::from(address),
            inner: Arc::new(Mutex::new(Some(MicroVmClient::new(channel)))),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_closed(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn grpc(&self) -> std::result::Result<GrpcClient, Status> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| Status::unavailable("flintlock client is closed"))
    }
}

impl std::fmt::Debug for FlintlockClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlintlockClient")
            .field("address", &self.address)
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[async_trait]
impl MicroVmApi for FlintlockClient {
    async fn create_microvm(
        &self,
        request: CreateMicroVmRequest,
    ) -> std::result::Result<CreateMicroVmResponse, Status> {
        tracing::debug!(address = %self.address, "CreateMicroVM");
        let response = self.grpc()?.create_micro_vm(Request::new(request)).await?;
        Ok(response.into_inner())
    }

    async fn get_microvm(
        &self,
        request: GetMicroVmRequest,
    ) -> std::result::Result<GetMicroVmResponse, Status> {
        tracing::debug!(address = %self.address, uid = %request.uid, "GetMicroVM");
        let response = self.grpc()?.get_micro_vm(Request::new(request)).await?;
        Ok(response.into_inner())
    }

    async fn delete_microvm(&self, request: DeleteMicroVmRequest) -> std::result::Result<(), Status> {
        tracing::debug!(address = %self.address, uid = %request.uid, "DeleteMicroVM");
        self.grpc()?.delete_micro_vm(Request::new(request)).await?;
        Ok(())
    }

    async fn list_microvms(
        &self,
        request: ListMicroVMsRequest,
    ) -> std::result::Result<ListMicroVMsResponse, Status> {
        tracing::debug!(address = %self.address, namespace = %request.namespace, "ListMicroVMs");
        let response = self.grpc()?.list_micro_v_ms(Request::new(request)).await?;
        Ok(response.into_inner())
    }

    async fn list_microvms_stream(
        &self,
        request: ListMicroVMsRequest,
    ) -> std::result::Result<BoxStream<'static, std::result::Result<ListMessage, Status>>, Status> {
        tracing::debug!(address = %self.address, namespace = %request.namespace, "ListMicroVMsStream");
        let response = self.grpc()?.list_micro_v_ms_stream(Request::new(request)).await?;
        Ok(response.into_inner().boxed())
    }

    fn close(&self) {
        let closed = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if closed.is_some() {
            tracing::debug!(address = %self.address, "closed flintlock client");
        }
    }
}
