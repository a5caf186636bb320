// Async HTTP client for the RADkit Service control API.
//
// Base path: https://localhost:8081/api/v1/
// Auth: `POST auth/login` with the admin name/password returns a bearer
// token; `POST auth/logout` revokes it.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::{self, TransportConfig};

const SERVICE: &str = "RADkit";

/// Default control API URL of a locally running RADkit Service.
pub const DEFAULT_CONTROL_API_URL: &str = "https://localhost:8081/api/v1/";

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Administrative session against the RADkit Service control API.
pub struct ControlApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl ControlApiClient {
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

    /// The control API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether an admin session is open.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn bearer(&self) -> Result<&SecretString, Error> {
        self.token.as_ref().ok_or_else(|| Error::Authentication {
            message: "no RADkit admin session".into(),
        })
    }

    /// Open an admin session.
    pub async fn login(&mut self, admin_name: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.base_url.join("auth/login")?;
        debug!("logging in at {url} as {admin_name}");

        let resp = self
            .http
            .post(url)
            .json(&LoginBody {
                username: admin_name,
                password: password.expose_secret(),
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        let login: LoginResponse = transport::decode_json(resp.text().await?)?;
        self.token = Some(SecretString::from(login.access_token));
        debug!("login successful");
        Ok(())
    }

    /// Create a batch of devices in one call.
    ///
    /// Returns `None` when the service answers with an empty body or `null`.
    pub async fn create_devices<B>(&self, devices: &B) -> Result<Option<serde_json::Value>, Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.base_url.join("devices")?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .bearer_auth(self.bearer()?.expose_secret())
            .json(devices)
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "RADkit admin session rejected".into(),
            });
        }
        if !resp.status().is_success() {
            return Err(transport::api_error(SERVICE, resp).await);
        }

        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        transport::decode_json::<Option<serde_json::Value>>(body)
    }

    /// Close the admin session. The token is dropped even if the call fails.
    pub async fn logout(&mut self) -> Result<(), Error> {
        let Some(token) = self.token.take() else {
            return Ok(());
        };

        let url = self.base_url.join("auth/logout")?;
        debug!("logging out at {url}");

        let resp = self
            .http
            .post(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(transport::api_error(SERVICE, resp).await);
        }

        debug!("logout complete");
        Ok(())
    }
}
