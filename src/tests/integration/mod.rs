//! Integration tests for the HTTP surface
//!
//! The full route table runs in-process through `warp::test` against fake
//! contract, token and verification adapters.

use bytes::Bytes;
use serde_json::{json, Value};
use std::sync::Arc;
use warp::http::{Response, StatusCode};
use warp::test::request;

use crate::application::ServiceContainer;
use crate::infrastructure::http::routes::RouteBuilder;
use crate::tests::common::{default_services, fixtures, services_with, FakeEscrowContract, FakeRewardToken};
use crate::tests::config;

fn body(res: &Response<Bytes>) -> Value {
    serde_json::from_slice(res.body()).unwrap()
}

async fn get(services: Arc<ServiceContainer>, path: &str) -> Response<Bytes> {
    request()
        .method("GET")
        .path(path)
        .reply(&RouteBuilder::build_routes(services))
        .await
}

async fn post(
    services: Arc<ServiceContainer>,
    path: &str,
    payload: Value,
) -> Response<Bytes> {
    request()
        .method("POST")
        .path(path)
        .json(&payload)
        .reply(&RouteBuilder::build_routes(services))
        .await
}

#[tokio::test]
async fn test_root_reports_online() {
    let res = get(default_services(), "/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body(&res)["status"], "online");
}

#[tokio::test]
async fn test_get_escrow() {
    let res = get(default_services(), "/escrow/1").await;
    assert_eq!(res.status(), StatusCode::OK);

    let escrow = body(&res);
    assert_eq!(escrow["id"], "1");
    assert_eq!(escrow["domainName"], "example.com");
    assert_eq!(escrow["price"], "1000000000000000000");
    assert_eq!(escrow["seller"], config::TEST_USER_ADDRESS);
}

#[tokio::test]
async fn test_get_missing_escrow_is_404() {
    let res = get(default_services(), "/escrow/999").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body(&res), json!({ "error": "Escrow not found" }));
}

#[tokio::test]
async fn test_non_numeric_escrow_id_is_404() {
    let res = get(default_services(), "/escrow/abc").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body(&res)["error"].is_string());
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let services = default_services();
    for (method, path) in [
        ("POST", "/escrow/1"),
        ("GET", "/escrow/create"),
        ("GET", "/escrow/verify/1"),
        ("PUT", "/listings"),
        ("DELETE", "/rewards/0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
        ("POST", "/"),
    ] {
        let res = request()
            .method(method)
            .path(path)
            .reply(&RouteBuilder::build_routes(services.clone()))
            .await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, path);
        assert_eq!(body(&res), json!({ "error": "Method not allowed" }));
    }
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let res = get(default_services(), "/domains").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rejected_requests_are_counted() {
    let services = default_services();
    get(services.clone(), "/domains").await;
    request()
        .method("POST")
        .path("/escrow/1")
        .reply(&RouteBuilder::build_routes(services.clone()))
        .await;

    assert_eq!(services.monitoring.request_count("rejected", 404), 1);
    assert_eq!(services.monitoring.request_count("rejected", 405), 1);

    let res = get(services, "/metrics").await;
    let text = String::from_utf8(res.body().to_vec()).unwrap();
    assert!(text.contains(r#"endpoint="rejected""#));
}

#[tokio::test]
async fn test_create_escrow() {
    let res = post(
        default_services(),
        "/escrow/create",
        json!({ "domainName": "example.com", "price": "2500000000000000000", "duration": 30 }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let created = body(&res);
    assert_eq!(created["escrowId"], "1");
    assert!(created["transactionHash"].as_str().unwrap().starts_with("0x"));
}

#[tokio::test]
async fn test_create_escrow_bad_input_is_400() {
    let res = post(default_services(), "/escrow/create", json!({ "domainName": "example.com" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(&res)["error"], "Missing required parameter: price");

    let res = request()
        .method("POST")
        .path("/escrow/create")
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&RouteBuilder::build_routes(default_services()))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_escrow_contract_failure_is_400() {
    let contract = FakeEscrowContract {
        failure: Some("insufficient funds for gas".to_string()),
        ..Default::default()
    };
    let services = services_with(contract, None, fixtures::all_valid_sources());

    let res = post(
        services,
        "/escrow/create",
        json!({ "domainName": "example.com", "price": "1", "duration": "30" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(&res)["error"], "insufficient funds for gas");
}

#[tokio::test]
async fn test_verify_all_sources_valid() {
    let res = post(
        default_services(),
        "/escrow/verify/1",
        json!({ "domainName": "example.com", "ownerAddress": config::TEST_USER_ADDRESS }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let verdict = body(&res);
    assert_eq!(verdict["isValid"], true);
    assert_eq!(verdict["score"], 100);
    assert_eq!(
        verdict["sources"],
        json!(["dns-root-servers", "registrar-apis", "blockchain-oracles"])
    );
}

#[tokio::test]
async fn test_verify_oracle_only() {
    let services = services_with(
        FakeEscrowContract::default(),
        None,
        fixtures::oracle_only_sources(),
    );

    let res = post(
        services,
        "/escrow/verify/1",
        json!({ "domainName": "example.com", "ownerAddress": config::TEST_USER_ADDRESS }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let verdict = body(&res);
    assert_eq!(verdict["isValid"], false);
    assert_eq!(verdict["score"], 33);
    assert_eq!(verdict["sources"], json!(["blockchain-oracles"]));
}

#[tokio::test]
async fn test_verify_missing_domain_is_400() {
    let res = post(default_services(), "/escrow/verify/1", json!({ "ownerAddress": "0x01" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(&res)["error"], "Missing required parameter: domainName");
}

#[tokio::test]
async fn test_empty_listings_serve_samples() {
    let res = get(default_services(), "/listings").await;
    assert_eq!(res.status(), StatusCode::OK);

    let listings = body(&res);
    let listings = listings.as_array().unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0]["domain"], "example.com");
    assert_eq!(listings[0]["price"], "2.5");
    assert_eq!(listings[0]["priceHistory"].as_array().unwrap().len(), 3);
    assert_eq!(listings[1]["domain"], "crypto.io");
    assert_eq!(listings[1]["verificationStatus"], "pending");
}

#[tokio::test]
async fn test_active_listings() {
    let mut contract = FakeEscrowContract::default();
    contract.listings = vec![fixtures::active_listing(5, "gamma.dev")];
    let services = services_with(contract, None, fixtures::all_valid_sources());

    let res = get(services, "/listings").await;
    let listings = body(&res);
    assert_eq!(listings.as_array().unwrap().len(), 1);
    assert_eq!(listings[0]["id"], "5");
    assert_eq!(listings[0]["createdAt"], "2024-01-01T00:00:00.000Z");
    assert_eq!(listings[0]["tld"], ".dev");
}

#[tokio::test]
async fn test_listings_failure_is_500() {
    let contract = FakeEscrowContract {
        failure: Some("node unavailable".to_string()),
        ..Default::default()
    };
    let services = services_with(contract, None, fixtures::all_valid_sources());

    let res = get(services, "/listings").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body(&res)["error"], "node unavailable");
}

#[tokio::test]
async fn test_get_rewards() {
    let path = format!("/rewards/{}", config::TEST_USER_ADDRESS);
    let res = get(default_services(), &path).await;

    assert_eq!(res.status(), StatusCode::OK);
    let rewards = body(&res);
    assert_eq!(rewards["success"], true);
    assert_eq!(rewards["data"]["tokenBalance"], "12.5");
    assert_eq!(rewards["data"]["totalTransactions"], 0);
}

#[tokio::test]
async fn test_get_rewards_invalid_address_is_400() {
    let res = get(default_services(), "/rewards/not-an-address").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(&res), json!({ "error": "Invalid address" }));
}

#[tokio::test]
async fn test_rewards_without_token_is_500() {
    let services = services_with(FakeEscrowContract::default(), None, fixtures::all_valid_sources());
    let path = format!("/rewards/{}", config::TEST_USER_ADDRESS);

    let res = get(services, &path).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body(&res)["error"], "Token contract not initialized");
}

#[tokio::test]
async fn test_transfer_tokens() {
    let services = services_with(
        FakeEscrowContract::default(),
        Some(FakeRewardToken::default()),
        fixtures::all_valid_sources(),
    );
    let path = format!("/rewards/{}", config::TEST_SIGNER_ADDRESS);

    let res = post(
        services,
        &path,
        json!({ "from": config::TEST_SIGNER_ADDRESS, "to": config::TEST_USER_ADDRESS, "amount": "1.5" }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let receipt = body(&res);
    assert_eq!(receipt["success"], true);
    assert!(receipt["transactionHash"].as_str().unwrap().starts_with("0x"));
}

#[tokio::test]
async fn test_transfer_missing_amount_is_400() {
    let path = format!("/rewards/{}", config::TEST_SIGNER_ADDRESS);
    let res = post(
        default_services(),
        &path,
        json!({ "from": config::TEST_SIGNER_ADDRESS, "to": config::TEST_USER_ADDRESS }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(&res)["error"], "Missing required parameters");
}

#[tokio::test]
async fn test_transfer_malformed_body_is_400() {
    let res = request()
        .method("POST")
        .path(&format!("/rewards/{}", config::TEST_SIGNER_ADDRESS))
        .header("content-type", "application/json")
        .body("{\"amount\": [1, 2]")
        .reply(&RouteBuilder::build_routes(default_services()))
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_metrics_count_requests() {
    let services = default_services();
    get(services.clone(), "/escrow/999").await;

    assert_eq!(services.monitoring.request_count("escrow.get", 404), 1);

    let res = get(services, "/metrics").await;
    assert_eq!(res.status(), StatusCode::OK);
    let text = String::from_utf8(res.body().to_vec()).unwrap();
    assert!(text.contains("domain_chain_requests_total"));
    assert!(text.contains(r#"endpoint="escrow.get""#));
}

#[tokio::test]
async fn test_health() {
    let res = get(default_services(), "/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body(&res)["status"], "healthy");
}
