//! Per-call basic auth credentials.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};

const AUTHORIZATION: &str = "authorization";

/// Interceptor attaching `authorization: Basic <token>` to every call.
///
/// Disabled when no token was configured, in which case requests pass
/// through untouched.
#[derive(Clone, Default)]
pub struct BasicAuth {
    header: Option<MetadataValue<Ascii>>,
    secure: bool,
}

impl BasicAuth {
    /// Credentials for `token`. `secure` records whether the transport uses TLS.
    pub fn new(token: &str, secure: bool) -> Result<Self> {
        let header = MetadataValue::try_from(format!("Basic {}", STANDARD.encode(token)))
            .map_err(|e| Error::Credentials(e.to_string()))?;

        Ok(Self {
            header: Some(header),
            secure,
        })
    }

    /// Interceptor that adds nothing.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.header.is_some()
    }

    /// Whether the credentials are only sent over TLS.
    pub fn requires_transport_security(&self) -> bool {
        self.secure
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("enabled", &self.is_enabled())
            .field("secure", &self.secure)
            .finish()
    }
}

impl Interceptor for BasicAuth {
    fn call(&mut self, mut request: Request<()>) -> std::result::Result<Request<()>, Status> {
        if let Some(header) = &self.header {
            request.metadata_mut().insert(AUTHORIZATION, header.clone());
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_added() {
        let mut auth = BasicAuth::new("s3cr3t", true).unwrap();
        let request = auth.call(Request::new(())).unwrap();

        let value = request.metadata().get(AUTHORIZATION).unwrap().to_str().unwrap();
        assert_eq!(value, format!("Basic {}", STANDARD.encode("s3cr3t")));
        assert!(auth.requires_transport_security());
    }

    #[test]
    fn test_disabled_passthrough() {
        let mut auth = BasicAuth::disabled();
        let request = auth.call(Request::new(())).unwrap();

        assert!(request.metadata().get(AUTHORIZATION).is_none());
        assert!(!auth.is_enabled());
        assert!(!auth.requires_transport_security());
    }

    #[test]
    fn test_insecure_flag() {
        let auth = BasicAuth::new("token", false).unwrap();
        assert!(auth.is_enabled());
        assert!(!auth.requires_transport_security());
    }
}
