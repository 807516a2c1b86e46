//! Composes TLS, proxy and basic auth options into one gRPC channel.

use super::auth::BasicAuth;
use super::connector::{FlintlockConnector, ProxyTunnel};
use crate::error::{Error, Result};
use mvmkit_common::{ClientOptions, TlsConfig};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ClientConfig, RootCertStore};
use std::sync::Arc;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, Endpoint};

/// Channel with basic auth applied to every call.
pub type AuthenticatedChannel = InterceptedService<Channel, BasicAuth>;

/// A fully validated transport, ready to dial.
///
/// Building one performs every configuration check, so no connection is
/// attempted when TLS material or the proxy URL is malformed.
#[derive(Debug, Clone)]
pub struct Transport {
    address: String,
    endpoint: Endpoint,
    connector: FlintlockConnector,
    auth: BasicAuth,
}

impl Transport {
    pub fn build(address: &str, options: &ClientOptions) -> Result<Self> {
        let mut connector = FlintlockConnector::new();

        let tls_config = options.tls.as_ref().map(tls_client_config).transpose()?;
        if let Some(config) = &tls_config {
            connector = connector.with_tls(Arc::new(config.clone()));
        }

        let auth = match options.basic_auth_token.as_deref() {
            Some(token) if !token.is_empty() => BasicAuth::new(token, options.tls.is_some())?,
            _ => BasicAuth::disabled(),
        };

        if let Some(proxy) = &options.proxy {
            let mut tunnel = ProxyTunnel::parse(&proxy.endpoint)?;
            if tunnel.is_secure() {
                let config = tls_config.as_ref().ok_or_else(|| Error::ProxyUrl {
                    url: proxy.endpoint.clone(),
                    reason: "https proxy requires TLS options to supply its CA certificate".to_string(),
                })?;
                tunnel = tunnel.with_tls(Arc::new(proxy_tls_config(config)));
            }
            connector = connector.with_proxy(tunnel);
        }

        let endpoint = endpoint(address)?;

        tracing::debug!(
            address = %address,
            tls = connector.is_secure(),
            basic_auth = auth.is_enabled(),
            proxy = connector.proxy().is_some(),
            "built flintlock transport"
        );

        Ok(Self {
            address: address.to_string(),
            endpoint,
            connector,
            auth,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_secure(&self) -> bool {
        self.connector.is_secure()
    }

    /// Dial now, failing if the host cannot be reached.
    pub async fn connect(self) -> Result<AuthenticatedChannel> {
        let channel = self
            .endpoint
            .connect_with_connector(self.connector)
            .await
            .map_err(Error::Connection)?;

        tracing::info!(address = %self.address, "connected to flintlock");
        Ok(InterceptedService::new(channel, self.auth))
    }

    /// Defer dialing until the first call.
    pub fn connect_lazy(self) -> AuthenticatedChannel {
        let channel = self.endpoint.connect_with_connector_lazy(self.connector);
        InterceptedService::new(channel, self.auth)
    }
}

/// Parse a Flintlock address into an endpoint.
///
/// Accepts `host:port` or a URL with an `http`/`https` scheme. TLS is
/// decided by the options, not the scheme.
pub fn endpoint(address: &str) -> Result<Endpoint> {
    let authority = address
        .strip_prefix("http://")
        .or_else(|| address.strip_prefix("https://"))
        .unwrap_or(address)
        .trim_end_matches('/');

    Endpoint::from_shared(format!("http://{authority}")).map_err(|source| Error::InvalidAddress {
        address: address.to_string(),
        source,
    })
}

/// Build a TLS 1.3 client configuration trusting only the supplied CA.
pub fn tls_client_config(tls: &TlsConfig) -> Result<ClientConfig> {
    let certs = rustls_pemfile::certs(&mut tls.cert.as_bytes())
        .collect::<std::result::Result<Vec<CertificateDer<'static>>, _>>()
        .map_err(|e| Error::TlsKeyPair(e.to_string()))?;
    if certs.is_empty() {
        return Err(Error::TlsKeyPair("no certificate found in PEM data".to_string()));
    }

    let key: PrivateKeyDer<'static> = rustls_pemfile::private_key(&mut tls.key.as_bytes())
        .map_err(|e| Error::TlsKeyPair(e.to_string()))?
        .ok_or_else(|| Error::TlsKeyPair("no private key found in PEM data".to_string()))?;

    let roots = ca_pool(&tls.ca_cert)?;

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let mut config = ClientConfig::builder_with_provider(provider)
        .with_protocol_versions(&[&rustls::version::TLS13])
        .map_err(|e| Error::TlsKeyPair(e.to_string()))?
        .with_root_certificates(roots)
        .with_client_auth_cert(certs, key)
        .map_err(|e| Error::TlsKeyPair(e.to_string()))?;

    config.alpn_protocols = vec![b"h2".to_vec()];

    Ok(config)
}

/// Derive the configuration for the TLS leg to an `https` proxy.
///
/// Trusts the same CA and presents the same client certificate, but
/// negotiates HTTP/1.1 since `CONNECT` is not spoken over h2.
pub fn proxy_tls_config(config: &ClientConfig) -> ClientConfig {
    let mut config = config.clone();
    config.alpn_protocols = vec![b"http/1.1".to_vec()];
    config
}

fn ca_pool(pem: &str) -> Result<RootCertStore> {
    let certs = rustls_pemfile::certs(&mut pem.as_bytes())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::CaPool(e.to_string()))?;
    if certs.is_empty() {
        return Err(Error::CaPool("no certificate found in CA PEM data".to_string()));
    }

    let mut roots = RootCertStore::empty();
    for cert in certs {
        roots.add(cert).map_err(|e| Error::CaPool(e.to_string()))?;
    }

    Ok(roots)
}
