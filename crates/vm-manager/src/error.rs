//! Error types for mvmkit-vm-manager.

use thiserror::Error;

/// Result type alias for vm-manager operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by [`Scope`](crate::Scope) accessors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while building a client or provisioning a microVM.
#[derive(Debug, Error)]
pub enum Error {
    /// Client certificate and key could not be loaded as a key pair.
    #[error("loading TLS key pair: {0}")]
    TlsKeyPair(String),

    /// CA certificate could not be added to the trust pool.
    #[error("could not add CA certificate to pool: {0}")]
    CaPool(String),

    /// Proxy endpoint is not a usable URL.
    #[error("parsing proxy server url {url}: {reason}")]
    ProxyUrl {
        /// The rejected endpoint
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Flintlock address is not a valid endpoint.
    #[error("invalid flintlock address {address}: {source}")]
    InvalidAddress {
        /// The rejected address
        address: String,
        /// Parse failure
        #[source]
        source: tonic::transport::Error,
    },

    /// Basic auth token cannot be sent as request metadata.
    #[error("invalid basic auth token: {0}")]
    Credentials(String),

    /// The gRPC connection could not be established.
    #[error("creating grpc connection: {0}")]
    Connection(#[source] tonic::transport::Error),

    /// The scope could not provide bootstrap data.
    #[error("getting user data for microvm: {0}")]
    BootstrapData(#[source] BoxError),

    /// A cloud-init document could not be serialized.
    #[error("marshalling {document}: {source}")]
    Serialization {
        /// Which metadata document failed
        document: &'static str,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// The randomness source failed while generating a MAC address.
    #[error("creating mac address: {0}")]
    MacAllocation(#[from] rand::Error),

    /// The remote API returned an error.
    #[error("{operation} {id}: {status}")]
    Rpc {
        /// What was being attempted (e.g. "creating microvm")
        operation: &'static str,
        /// MicroVM id or uid the call was about
        id: String,
        /// Status returned by the remote API
        #[source]
        status: tonic::Status,
    },

    /// The remote API reported success but returned no microvm.
    #[error("{0}: response contained no microvm")]
    EmptyResponse(&'static str),
}

impl Error {
    /// Wrap a remote status with the operation and id it relates to.
    pub(crate) fn rpc(operation: &'static str, id: impl Into<String>, status: tonic::Status) -> Self {
        Error::Rpc {
            operation,
            id: id.into(),
            status,
        }
    }

    /// The remote status, if this error came from the remote API.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Error::Rpc { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Check if this error was raised while building the client.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::TlsKeyPair(_)
                | Error::CaPool(_)
                | Error::ProxyUrl { .. }
                | Error::InvalidAddress { .. }
                | Error::Credentials(_)
        )
    }

    /// Check if the remote API reported the microvm as missing.
    pub fn is_not_found(&self) -> bool {
        self.status()
            .is_some_and(|status| status.code() == tonic::Code::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_display() {
        let err = Error::rpc("creating microvm", "ns/vm-1", tonic::Status::unavailable("host down"));
        let message = err.to_string();
        assert!(message.starts_with("creating microvm ns/vm-1: "));
        assert!(message.contains("host down"));
        assert_eq!(err.status().unwrap().code(), tonic::Code::Unavailable);
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::rpc("getting microvm", "uid", tonic::Status::not_found("gone")).is_not_found());
        assert!(!Error::rpc("getting microvm", "uid", tonic::Status::internal("boom")).is_not_found());
        assert!(!Error::CaPool("bad".to_string()).is_not_found());
    }

    #[test]
    fn test_is_configuration() {
        assert!(Error::CaPool("bad".to_string()).is_configuration());
        assert!(Error::ProxyUrl {
            url: "::".to_string(),
            reason: "relative URL without a base".to_string(),
        }
        .is_configuration());
        assert!(!Error::EmptyResponse("creating microvm").is_configuration());
    }
}
