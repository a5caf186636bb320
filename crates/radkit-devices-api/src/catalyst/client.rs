// Async HTTP client for the Catalyst Center Intent API.
//
// Auth: `POST /dna/system/api/v1/auth/token` with HTTP basic auth returns a
// token, sent afterwards as `X-Auth-Token` on every request.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use super::models::{CatalystDevice, CatalystResponse, TokenResponse};
use crate::error::Error;
use crate::transport::{self, TransportConfig};

const SERVICE: &str = "Catalyst Center";

/// Default controller URL (the public DevNet sandbox).
pub const DEFAULT_CATALYST_URL: &str = "https://sandboxdnac.cisco.com";

const TOKEN_PATH: &str = "dna/system/api/v1/auth/token";
const NETWORK_DEVICE_PATH: &str = "dna/intent/api/v1/network-device";

/// Async client for Catalyst Center.
///
/// Call [`login`](Self::login) before any inventory request.
pub struct CatalystClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl CatalystClient {
    /// Create a client; no request is made until [`login`](Self::login).
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        Self::from_reqwest(base_url, transport.build_client()?)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: transport::normalize_base_url(base_url)?,
            token: None,
        })
    }

    /// Whether a token has been obtained.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Exchange username/password for an API token.
    pub async fn login(&mut self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.base_url.join(TOKEN_PATH)?;
        debug!("requesting token at {url}");

        let resp = self
            .http
            .post(url)
            .basic_auth(username, Some(password.expose_secret()))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("token request failed (HTTP {status}): {body}"),
            });
        }

        let token: TokenResponse = transport::decode_json(resp.text().await?)?;
        self.token = Some(SecretString::from(token.token));
        debug!("token acquired");
        Ok(())
    }

    /// `GET /dna/intent/api/v1/network-device?softwareType=…`
    ///
    /// The software-type filter is applied server side.
    pub async fn list_devices(&self, software_type: &str) -> Result<Vec<CatalystDevice>, Error> {
        let token = self.token.as_ref().ok_or_else(|| Error::Authentication {
            message: "not logged in to Catalyst Center".into(),
        })?;

        let url = self.base_url.join(NETWORK_DEVICE_PATH)?;
        debug!("GET {url} softwareType={software_type}");

        let resp = self
            .http
            .get(url)
            .header("X-Auth-Token", token.expose_secret())
            .query(&[("softwareType", software_type)])
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "token rejected by Catalyst Center".into(),
            });
        }
        if !resp.status().is_success() {
            return Err(transport::api_error(SERVICE, resp).await);
        }

        let envelope: CatalystResponse<Vec<CatalystDevice>> =
            transport::decode_json(resp.text().await?)?;
        debug!(count = envelope.response.len(), "devices received");
        Ok(envelope.response)
    }
}
