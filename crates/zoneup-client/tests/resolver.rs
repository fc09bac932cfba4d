//! Resolver behavior against a mock hosted-zone API.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoneup_client::{resolve_zone, ZoneupClient};
use zoneup_core::{Error, RetryPolicy, ZoneRef};

/// Shrunk policy so retry tests finish in milliseconds.
fn fast_policy() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(1))
}

fn client_for(server: &MockServer) -> ZoneupClient {
    ZoneupClient::builder("test-token")
        .base_url(server.uri())
        .build()
}

#[tokio::test]
async fn name_resolves_to_canonical_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("name", "internal.example.com."))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zones": [{ "id": "/hostedzone/Z123", "name": "internal.example.com." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let zone = ZoneRef::Name("internal.example.com.".to_string());
    let id = resolve_zone(&client_for(&server), &zone, &fast_policy())
        .await
        .unwrap();
    assert_eq!(id, "/hostedzone/Z123");
}

#[tokio::test]
async fn first_of_many_matches_wins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zones": [
                { "id": "/hostedzone/ZFIRST", "name": "internal.example.com." },
                { "id": "/hostedzone/ZSECOND", "name": "internal.example.com." }
            ]
        })))
        .mount(&server)
        .await;

    let zone = ZoneRef::Name("internal.example.com.".to_string());
    let id = resolve_zone(&client_for(&server), &zone, &fast_policy())
        .await
        .unwrap();
    assert_eq!(id, "/hostedzone/ZFIRST");
}

#[tokio::test]
async fn explicit_id_skips_the_network_entirely() {
    let server = MockServer::start().await;

    // Any request hitting the server would fail the expectation.
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "zones": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let zone = ZoneRef::Id("Z123".to_string());
    let id = resolve_zone(&client_for(&server), &zone, &fast_policy())
        .await
        .unwrap();
    assert_eq!(id, "/hostedzone/Z123");
}

#[tokio::test]
async fn transient_failures_are_retried_until_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zones": [{ "id": "/hostedzone/Z123", "name": "internal.example.com." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let zone = ZoneRef::Name("internal.example.com.".to_string());
    let id = resolve_zone(&client_for(&server), &zone, &fast_policy())
        .await
        .unwrap();
    assert_eq!(id, "/hostedzone/Z123");
}

#[tokio::test]
async fn exhaustion_stops_after_the_attempt_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let zone = ZoneRef::Name("internal.example.com.".to_string());
    let err = resolve_zone(&client_for(&server), &zone, &fast_policy())
        .await
        .unwrap_err();

    match err {
        Error::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 3);
            assert!(matches!(*last, Error::Api { code: 503, .. }));
        }
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_result_aborts_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "zones": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let zone = ZoneRef::Name("missing.example.com.".to_string());
    let err = resolve_zone(&client_for(&server), &zone, &fast_policy())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ZoneNotFound { zone } if zone == "missing.example.com."));
}
