//! Client-side provisioning of Flintlock microVMs.
//!
//! This crate provides:
//! - `FlintlockClient`, a gRPC client with optional TLS, proxy and basic auth
//! - `MicroVmService`, which turns a [`Scope`] into Create/Get/Delete calls
//! - The translation from the declarative `VmSpec` to Flintlock's wire spec

pub mod error;
pub mod flintlock;
pub mod scope;

// Re-export main types
pub use error::{BoxError, Error, Result};
pub use flintlock::{FlintlockClient, MacAddress, MicroVmApi, MicroVmService};
pub use scope::Scope;
