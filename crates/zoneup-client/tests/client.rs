//! Integration tests for the hosted-zone API client against a mock server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoneup_client::ZoneupClient;
use zoneup_core::{Error, RecordKind, RecordSpec};

fn client_for(server: &MockServer) -> ZoneupClient {
    ZoneupClient::builder("test-token")
        .base_url(server.uri())
        .build()
}

#[tokio::test]
async fn list_by_name_returns_matching_zones() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("name", "internal.example.com."))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zones": [{ "id": "/hostedzone/Z123", "name": "internal.example.com." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let zones = client_for(&server)
        .zones()
        .list_by_name("internal.example.com.")
        .await
        .unwrap();

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].id, "/hostedzone/Z123");
    assert_eq!(zones[0].name, "internal.example.com.");
}

#[tokio::test]
async fn list_by_name_with_no_matches_is_empty_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "zones": [] })))
        .mount(&server)
        .await;

    let zones = client_for(&server)
        .zones()
        .list_by_name("missing.example.com.")
        .await
        .unwrap();

    assert!(zones.is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_dedicated_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .zones()
        .list_by_name("internal.example.com.")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unauthorized));
}

#[tokio::test]
async fn api_errors_carry_the_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "bad zone name" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .zones()
        .list_by_name("??")
        .await
        .unwrap_err();

    match err {
        Error::Api { code, message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "bad zone name");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn upsert_posts_one_weighted_record_set() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/zones/Z123/rrsets"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "changes": [{
                "action": "UPSERT",
                "record": {
                    "name": "svc1.internal.example.com.",
                    "type": "A",
                    "values": ["10.0.0.5"],
                    "ttl": 0,
                    "weight": 1,
                    "set_identifier": "svc1"
                }
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "C42", "status": "PENDING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spec = RecordSpec::new(
        "/hostedzone/Z123",
        "svc1",
        "internal.example.com.",
        RecordKind::A,
        "10.0.0.5",
    );

    let info = client_for(&server).records().upsert(&spec).await.unwrap();
    assert_eq!(info.id.as_deref(), Some("C42"));
}

#[tokio::test]
async fn upsert_strips_the_canonical_prefix_from_the_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/zones/ZABC/rrsets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let spec = RecordSpec::new(
        "/hostedzone/ZABC",
        "db",
        "internal.example.com.",
        RecordKind::Cname,
        "ec2-1-2-3-4.compute.example.com",
    );

    client_for(&server).records().upsert(&spec).await.unwrap();
}

#[tokio::test]
async fn upsert_failure_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/zones/Z123/rrsets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let spec = RecordSpec::new(
        "/hostedzone/Z123",
        "svc1",
        "internal.example.com.",
        RecordKind::A,
        "10.0.0.5",
    );

    let err = client_for(&server).records().upsert(&spec).await.unwrap_err();
    assert!(matches!(err, Error::Api { code: 500, .. }));
}
