//! Integration tests for the resolve fallback policy.
//!
//! These tests verify the two-step fetch discipline end to end:
//! - Primary success never touches the fallback endpoint
//! - A usable fallback IP recovers from any primary failure
//! - A failing or blank fallback re-raises the original primary error
//! - Consecutive calls are independent (no caching, no shared state)

use ipcheck::initialization::init_client;
use ipcheck::{Config, IpInfo, IpResolver, ResolveError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_for(primary_url: String, fallback_url: String) -> IpResolver {
    let config = Config {
        primary_url,
        fallback_url,
        connect_timeout_ms: 2_000,
        read_timeout_ms: 2_000,
        ..Config::default()
    };
    let client = init_client(&config).expect("Failed to create HTTP client");
    IpResolver::new(client, &config).expect("Failed to create resolver")
}

#[tokio::test]
async fn primary_success_returns_full_record_without_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "81.2.69.142",
            "type": "IPv4",
            "continent": "Europe",
            "continent_code": "EU",
            "country": "United Kingdom",
            "region": "England",
            "city": "London",
            "timezone": {"id": "Europe/London", "abbr": "GMT"},
            "org": "Example Org",
            "isp": "Example ISP",
            "latitude": 51.5074,
            "longitude": -0.1278,
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Any request against the fallback path would be unmatched and fail
    // the expectation below
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": "9.9.9.9"})))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = resolver_for(format!("{}/geo", server.uri()), format!("{}/ip", server.uri()));
    let info = resolver.resolve().await.expect("resolve should succeed");

    assert_eq!(info.ip, "81.2.69.142");
    assert_eq!(info.ip_type, "IPv4");
    assert_eq!(info.continent, "Europe");
    assert_eq!(info.continent_code, "EU");
    assert_eq!(info.country, "United Kingdom");
    assert_eq!(info.region, "England");
    assert_eq!(info.city, "London");
    assert_eq!(info.timezone_id, "Europe/London");
    assert_eq!(info.timezone_abbr, "GMT");
    assert_eq!(info.org, "Example Org");
    assert_eq!(info.isp, "Example ISP");
    assert_eq!(info.latitude, Some(51.5074));
    assert_eq!(info.longitude, Some(-0.1278));
}

#[tokio::test]
async fn primary_transport_failure_recovers_via_fallback_ip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": "1.2.3.4"})))
        .expect(1)
        .mount(&server)
        .await;

    // Port 1 is closed, so the primary attempt fails at the transport level
    let resolver = resolver_for(
        "http://127.0.0.1:1/geo".to_string(),
        format!("{}/ip", server.uri()),
    );
    let info = resolver.resolve().await.expect("fallback should recover");

    let expected = IpInfo {
        ip: "1.2.3.4".to_string(),
        ..IpInfo::default()
    };
    assert_eq!(info, expected, "every field beyond ip must be empty/absent");
}

#[tokio::test]
async fn primary_500_with_failing_fallback_surfaces_original_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    // The fallback fails too (404); its error must never replace the primary's
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(format!("{}/geo", server.uri()), format!("{}/ip", server.uri()));
    let error = resolver.resolve().await.expect_err("resolve should fail");

    match error {
        ResolveError::HttpStatus { code } => assert_eq!(code, 500),
        other => panic!("Expected the primary HttpStatus error, got: {:?}", other),
    }
}

#[tokio::test]
async fn primary_500_with_blank_fallback_ip_surfaces_original_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": ""})))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(format!("{}/geo", server.uri()), format!("{}/ip", server.uri()));
    let error = resolver.resolve().await.expect_err("resolve should fail");

    assert!(
        matches!(error, ResolveError::HttpStatus { code: 500 }),
        "Expected HttpStatus 500, got: {:?}",
        error
    );
}

#[tokio::test]
async fn provider_reported_failure_with_blank_message_is_generic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": false, "message": ""})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(format!("{}/geo", server.uri()), format!("{}/ip", server.uri()));
    let error = resolver.resolve().await.expect_err("resolve should fail");

    match error {
        ResolveError::Provider { detail } => assert_eq!(detail, "Unknown error"),
        other => panic!("Expected Provider error, got: {:?}", other),
    }
}

#[tokio::test]
async fn provider_reported_failure_carries_message_over_usable_fallback_absence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "You've hit the monthly limit"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(format!("{}/geo", server.uri()), format!("{}/ip", server.uri()));
    let error = resolver.resolve().await.expect_err("resolve should fail");

    match error {
        ResolveError::Provider { detail } => {
            assert_eq!(detail, "You've hit the monthly limit")
        }
        other => panic!("Expected Provider error, got: {:?}", other),
    }
}

#[tokio::test]
async fn null_latitude_is_absent_while_longitude_survives() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "1.2.3.4",
            "latitude": null,
            "longitude": 12.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(format!("{}/geo", server.uri()), format!("{}/ip", server.uri()));
    let info = resolver.resolve().await.expect("resolve should succeed");

    assert_eq!(info.latitude, None);
    assert_eq!(info.longitude, Some(12.5));
}

#[tokio::test]
async fn consecutive_resolves_each_perform_their_own_fetches() {
    let server = MockServer::start().await;

    // Two calls must produce exactly two primary requests: no caching
    Mock::given(method("GET"))
        .and(path("/geo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": "1.2.3.4"})))
        .expect(2)
        .mount(&server)
        .await;

    let resolver = resolver_for(format!("{}/geo", server.uri()), format!("{}/ip", server.uri()));

    let first = resolver.resolve().await.expect("first resolve");
    let second = resolver.resolve().await.expect("second resolve");
    assert_eq!(first, second);
    assert_eq!(first.ip, "1.2.3.4");
}
