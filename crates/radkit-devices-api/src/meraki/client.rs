// Async HTTP client for the Meraki Dashboard API (v1).
//
// Base path: https://api.meraki.com/api/v1/
// Auth: `Authorization: Bearer <api key>`
// Pagination: RFC 5988 `Link` header with `rel=next`

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, LINK};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use super::models::{MerakiDevice, MerakiSwitchPorts, Network, Organization};
use crate::error::Error;
use crate::transport::{self, TransportConfig};

const SERVICE: &str = "Meraki";

/// Default Dashboard base URL.
pub const DEFAULT_MERAKI_URL: &str = "https://api.meraki.com/api/v1/";

/// Page size requested from paginated endpoints (the Dashboard maximum for
/// organization networks).
const NETWORKS_PER_PAGE: u32 = 1000;
/// Page size for the ports-by-switch endpoint.
const SWITCH_PORTS_PER_PAGE: u32 = 50;

/// Async client for the Meraki Dashboard API.
pub struct MerakiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MerakiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `Authorization: Bearer <key>` as a default header on every request.
    pub fn from_api_key(
        base_url: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        let http = transport.build_client_with_headers(headers)?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: transport::normalize_base_url(base_url)?,
        })
    }

    /// The Dashboard base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }
        transport::decode_json(resp.text().await?)
    }

    /// Fetch every page of a list endpoint, following `Link: <…>; rel=next`.
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, Error> {
        let mut all = Vec::new();
        let mut page = 0_usize;

        let first = self.url(path)?;
        debug!("GET {first} params={params:?} (paginated)");
        let mut resp = self.http.get(first).query(params).send().await?;

        loop {
            if !resp.status().is_success() {
                return Err(Self::error_for(resp).await);
            }

            let next = resp
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(next_link);

            let items: Vec<T> = transport::decode_json(resp.text().await?)?;
            trace!(page, received = items.len(), "page received");
            all.extend(items);
            page += 1;

            let Some(next) = next else { break };
            let next = Url::parse(&next)?;
            debug!("GET {next} (page {page})");
            resp = self.http.get(next).send().await?;
        }

        debug!(pages = page, total = all.len(), "pagination complete");
        Ok(all)
    }

    async fn error_for(resp: reqwest::Response) -> Error {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidApiKey;
        }
        transport::api_error(SERVICE, resp).await
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// `GET /organizations`
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, Error> {
        self.get_all_pages("organizations", &[]).await
    }

    /// `GET /organizations/{organizationId}/networks` (all pages)
    pub async fn list_organization_networks(&self, org_id: &str) -> Result<Vec<Network>, Error> {
        self.get_all_pages(
            &format!("organizations/{org_id}/networks"),
            &[("perPage", NETWORKS_PER_PAGE.to_string())],
        )
        .await
    }

    /// `GET /networks/{networkId}/devices`
    pub async fn list_network_devices(&self, network_id: &str) -> Result<Vec<MerakiDevice>, Error> {
        self.get(&format!("networks/{network_id}/devices")).await
    }

    /// `GET /organizations/{organizationId}/switch/ports/bySwitch?networkIds[]=…` (all pages)
    pub async fn list_switch_ports_by_switch(
        &self,
        org_id: &str,
        network_id: &str,
    ) -> Result<Vec<MerakiSwitchPorts>, Error> {
        self.get_all_pages(
            &format!("organizations/{org_id}/switch/ports/bySwitch"),
            &[
                ("networkIds[]", network_id.to_owned()),
                ("perPage", SWITCH_PORTS_PER_PAGE.to_string()),
            ],
        )
        .await
    }
}

/// Extract the `rel=next` target from a `Link` header value.
///
/// The Dashboard emits unquoted relations (`rel=next`); quoted ones are
/// accepted as well.
pub(crate) fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let mut pieces = part.split(';');
        let target = pieces.next()?.trim();
        let is_next = pieces.any(|param| {
            let param = param.trim();
            param
                .strip_prefix("rel=")
                .is_some_and(|rel| rel.trim_matches('"') == "next")
        });
        if is_next {
            target
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .map(str::to_owned)
        } else {
            None
        }
    })
}
