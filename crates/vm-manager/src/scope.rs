//! Caller-provided view of the machine being provisioned.

use crate::error::BoxError;
use mvmkit_common::{SshPublicKey, VmSpec};
use std::collections::HashMap;

/// Everything the provisioning service needs to know about one machine.
///
/// Implemented by the orchestration layer (typically a wrapper around a
/// reconciled object). All accessors are read-only.
pub trait Scope: Send + Sync {
    /// Name of the object creating the microvm. Used as the microvm id and hostname.
    fn name(&self) -> &str;

    /// Namespace of the object creating the microvm.
    fn namespace(&self) -> &str;

    /// Full declarative spec as configured by the caller.
    fn microvm_spec(&self) -> &VmSpec;

    /// UID assigned to the microvm by the remote API.
    fn instance_id(&self) -> &str;

    /// Bootstrap data (cloud-init or script) to run at first boot.
    ///
    /// # Errors
    /// Implementations may fail when the data lives elsewhere (a secret, a file).
    fn raw_bootstrap_data(&self) -> Result<String, BoxError>;

    /// Public keys to install in the guest.
    fn ssh_public_keys(&self) -> Vec<SshPublicKey>;

    /// Labels to apply to the microvm.
    fn labels(&self) -> HashMap<String, String>;
}
