//! Common types shared across mvmkit.
//!
//! This crate provides:
//! - The declarative microVM specification (`VmSpec` and friends)
//! - Client configuration records (`ClientOptions`, `TlsConfig`, `Proxy`)
//! - Error handling types

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use config::{ClientOptions, FlintlockConfig, Proxy, TlsConfig};
pub use error::{Error, Result};
pub use types::{ContainerFileSource, IfaceType, NetworkInterface, SshPublicKey, VmSpec, Volume};
