#![allow(clippy::unwrap_used)]
// Integration tests for `MerakiClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use radkit_devices_api::{Error, MerakiClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, MerakiClient) {
    let server = MockServer::start().await;
    let key = SecretString::from("test-key".to_string());
    let client = MerakiClient::from_api_key(
        &format!("{}/api/v1", server.uri()),
        &key,
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

// ── Organizations ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_organizations_sends_bearer_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "549236", "name": "DevNet Sandbox" },
            { "id": "1215", "name": "Branch Org", "url": "https://n1.meraki.com/o/x" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let orgs = client.list_organizations().await.unwrap();

    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0].id, "549236");
    assert_eq!(orgs[1].name, "Branch Org");
}

// ── Pagination ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_networks_follow_link_header_until_last_page() {
    let (server, client) = setup().await;

    let next = format!(
        "<{}/api/v1/organizations/549236/networks?perPage=1000&startingAfter=N_2>; rel=next",
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/549236/networks"))
        .and(query_param_is_missing("startingAfter"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next.as_str())
                .set_body_json(json!([
                    { "id": "N_1", "name": "HQ" },
                    { "id": "N_2", "name": "Lab" }
                ])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/549236/networks"))
        .and(query_param("startingAfter", "N_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "N_3", "name": "Branch" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let networks = client.list_organization_networks("549236").await.unwrap();

    let ids: Vec<_> = networks.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["N_1", "N_2", "N_3"]);
}

// ── Devices & ports ─────────────────────────────────────────────────

#[tokio::test]
async fn test_list_network_devices() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/networks/N_1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "serial": "Q2XX-AAAA", "name": "SW1", "model": "C9300-24", "lanIp": "10.0.0.1" },
            { "serial": "Q2XX-BBBB", "name": "RTR1", "model": "C8200", "lanIp": "10.0.0.2" }
        ])))
        .mount(&server)
        .await;

    let devices = client.list_network_devices("N_1").await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].model, "C9300-24");
    assert_eq!(devices[1].lan_ip.as_deref(), Some("10.0.0.2"));
}

#[tokio::test]
async fn test_switch_ports_filtered_by_network() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/549236/switch/ports/bySwitch"))
        .and(query_param("networkIds[]", "N_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "name": "SW1",
            "serial": "Q2XX-AAAA",
            "model": "C9300-24",
            "network": { "id": "N_1", "name": "HQ" },
            "ports": [
                { "portId": "1", "name": "Gi1/0/1 - uplink", "enabled": true, "type": "trunk",
                  "vlan": 1, "allowedVlans": "all", "voiceVlan": null },
                { "portId": "2", "name": "Gi1/0/2", "enabled": true, "type": "access",
                  "vlan": 10, "voiceVlan": 45 }
            ]
        }])))
        .mount(&server)
        .await;

    let switches = client
        .list_switch_ports_by_switch("549236", "N_1")
        .await
        .unwrap();

    assert_eq!(switches.len(), 1);
    assert_eq!(switches[0].ports.len(), 2);
    assert_eq!(switches[0].ports[1].voice_vlan, Some(45));
    assert_eq!(switches[0].ports[0].allowed_vlans.as_deref(), Some("all"));
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_maps_to_invalid_api_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": ["Invalid API key"]
        })))
        .mount(&server)
        .await;

    let result = client.list_organizations().await;

    assert!(
        matches!(result, Err(Error::InvalidApiKey)),
        "expected InvalidApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_reports_retry_after() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/networks/N_1/devices"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&server)
        .await;

    let result = client.list_network_devices("N_1").await;

    assert!(
        matches!(
            result,
            Err(Error::RateLimited {
                retry_after_secs: 7
            })
        ),
        "expected RateLimited, got: {result:?}"
    );
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/networks/N_404/devices"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": ["Network not found"]
        })))
        .mount(&server)
        .await;

    let err = client.list_network_devices("N_404").await.unwrap_err();

    match err {
        Error::Api {
            service,
            status,
            message,
        } => {
            assert_eq!(service, "Meraki");
            assert_eq!(status, 404);
            assert_eq!(message, "Network not found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
