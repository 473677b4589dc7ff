use axum::http::StatusCode;
use axum_test::TestServer;
use rstest::*;
use serde_json::{Value, json};
use smartload_axum::{config::AxumConfig, router};
use smartload_core::models::OptimizationResponse;
use std::time::Duration;

mod app;
use app::{SlowApp, TestApp};

const OPTIMIZE: &str = "/api/v1/load-optimizer/optimize";

#[fixture]
fn server() -> TestServer {
    let (router, _) = router(TestApp, AxumConfig::default());
    TestServer::new(router).unwrap()
}

fn order(id: &str, payout: u64, weight: u64, volume: u64) -> Value {
    json!({
        "id": id,
        "payout_cents": payout,
        "weight_lbs": weight,
        "volume_cuft": volume,
        "origin": "Los Angeles, CA",
        "destination": "Dallas, TX",
        "pickup_date": "2025-12-05",
        "delivery_date": "2025-12-09",
        "is_hazmat": false
    })
}

fn request(orders: Vec<Value>) -> Value {
    json!({
        "truck": { "id": "truck-123", "max_weight_lbs": 44000, "max_volume_cuft": 3000 },
        "orders": orders
    })
}

#[rstest]
#[case("/healthz")]
#[case("/actuator/health")]
#[test_log::test(tokio::test)]
async fn health(server: TestServer, #[case] path: &str) {
    let response = server.get(path).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "UP" }));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn optimizes_a_load(server: TestServer) {
    // ord-003 pays the most on its own but travels to a different city
    let mut elsewhere = order("ord-003", 320_000, 30_000, 1_800);
    elsewhere["destination"] = json!("Houston, TX");

    let response = server
        .post(OPTIMIZE)
        .json(&request(vec![
            order("ord-002", 180_000, 12_000, 900),
            order("ord-001", 250_000, 18_000, 1_200),
            elsewhere,
        ]))
        .await;

    response.assert_status_ok();
    let body = response.json::<OptimizationResponse>();
    assert_eq!(body.truck_id, "truck-123");
    assert_eq!(body.selected_order_ids, vec!["ord-001", "ord-002"]);
    assert_eq!(body.total_payout_cents, 430_000);
    assert_eq!(body.total_weight_lbs, 30_000);
    assert_eq!(body.total_volume_cuft, 2_100);
    assert_eq!(body.utilization_weight_percent, 68.18);
    assert_eq!(body.utilization_volume_percent, 70.0);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn response_uses_the_documented_field_names(server: TestServer) {
    let response = server.post(OPTIMIZE).json(&request(vec![])).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "truck_id": "truck-123",
            "selected_order_ids": [],
            "total_payout_cents": 0,
            "total_weight_lbs": 0,
            "total_volume_cuft": 0,
            "utilization_weight_percent": 0.0,
            "utilization_volume_percent": 0.0
        })
    );
}

#[rstest]
#[test_log::test(tokio::test)]
async fn null_orders_give_the_zero_result(server: TestServer) {
    let response = server
        .post(OPTIMIZE)
        .json(&json!({
            "truck": { "id": "truck-123", "max_weight_lbs": 44000, "max_volume_cuft": 3000 },
            "orders": null
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<OptimizationResponse>();
    assert!(body.selected_order_ids.is_empty());
    assert_eq!(body.total_payout_cents, 0);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn bad_orders_are_skipped_not_rejected(server: TestServer) {
    let mut bad_date = order("bad-date", 999_999, 1, 1);
    bad_date["pickup_date"] = json!("12/05/2025");
    let mut reversed = order("reversed", 999_999, 1, 1);
    reversed["pickup_date"] = json!("2025-12-10");

    let response = server
        .post(OPTIMIZE)
        .json(&request(vec![bad_date, reversed, order("fine", 10, 1, 1)]))
        .await;

    response.assert_status_ok();
    let body = response.json::<OptimizationResponse>();
    assert_eq!(body.selected_order_ids, vec!["fine"]);
    assert_eq!(body.total_payout_cents, 10);
}

#[rstest]
#[case::not_json("this is not json")]
#[case::wrong_type(r#"{ "truck": { "id": "t1", "max_weight_lbs": "heavy" } }"#)]
#[case::negative_payout(
    r#"{ "truck": { "id": "t1" }, "orders": [ { "id": "o1", "payout_cents": -5 } ] }"#
)]
#[case::truncated(r#"{ "truck": { "id": "t1" "#)]
#[test_log::test(tokio::test)]
async fn malformed_payloads_are_bad_requests(server: TestServer, #[case] body: &str) {
    let response = server
        .post(OPTIMIZE)
        .text(body)
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "invalid request payload");
}

#[rstest]
#[case::missing(json!({ "max_weight_lbs": 100, "max_volume_cuft": 100 }))]
#[case::empty(json!({ "id": "", "max_weight_lbs": 100, "max_volume_cuft": 100 }))]
#[test_log::test(tokio::test)]
async fn truck_id_is_required(server: TestServer, #[case] truck: Value) {
    let response = server
        .post(OPTIMIZE)
        .json(&json!({ "truck": truck, "orders": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "truck id is required");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn only_post_is_allowed(server: TestServer) {
    let response = server.get(OPTIMIZE).await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[test_log::test(tokio::test)]
async fn oversized_bodies_are_refused() {
    let config = AxumConfig {
        body_limit: 512,
        ..AxumConfig::default()
    };
    let server = TestServer::new(router(TestApp, config).0).unwrap();

    let orders = (0..20)
        .map(|i| order(&format!("ord-{i}"), 100, 1, 1))
        .collect();
    let response = server.post(OPTIMIZE).json(&request(orders)).await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.text(), "request body too large");
}

#[test_log::test(tokio::test)]
async fn order_count_is_bounded() {
    let config = AxumConfig {
        max_orders: 2,
        ..AxumConfig::default()
    };
    let server = TestServer::new(router(TestApp, config).0).unwrap();

    let two = vec![order("a", 1, 1, 1), order("b", 1, 1, 1)];
    server
        .post(OPTIMIZE)
        .json(&request(two))
        .await
        .assert_status_ok();

    let three = vec![order("a", 1, 1, 1), order("b", 1, 1, 1), order("c", 1, 1, 1)];
    server
        .post(OPTIMIZE)
        .json(&request(three))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_log::test(tokio::test)]
async fn slow_optimizations_time_out() {
    let config = AxumConfig {
        solve_timeout: Duration::from_millis(50),
        ..AxumConfig::default()
    };
    let app = SlowApp(Duration::from_millis(500));
    let server = TestServer::new(router(app, config).0).unwrap();

    let response = server
        .post(OPTIMIZE)
        .json(&request(vec![order("a", 1, 1, 1)]))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.text(), "optimization timed out");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn serves_the_openapi_document(server: TestServer) {
    let response = server.get("/docs/api.json").await;

    response.assert_status_ok();
    let api = response.json::<Value>();
    assert!(api["paths"][OPTIMIZE]["post"].is_object());
    assert!(api["paths"]["/healthz"]["get"].is_object());
}
