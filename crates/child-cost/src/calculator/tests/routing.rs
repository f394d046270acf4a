use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use super::common::*;

fn json_post(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn calculate_returns_result_and_percentages() {
    let body = serde_json::to_value(preschool_request()).expect("request serializes");
    let response = router()
        .oneshot(json_post("/api/v1/calculate", &body))
        .await
        .expect("router responds");

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["total_annual_cost"], 34_295);
    assert_eq!(json["result"]["age_band"], "4-6");
    assert_eq!(json["result"]["breakdown"]["vaccine_costs"]["paid"], 95);
    assert_eq!(json["result"]["user_input"]["location"], "tier2");
    assert_eq!(json["percentages"]["basic_living"], 52);
    assert!(json["result"]["timestamp"].is_string());
}

#[tokio::test]
async fn calculate_maps_errors_to_client_statuses() {
    let mut request = preschool_request();
    request.child_age = 19;
    let body = serde_json::to_value(&request).expect("request serializes");
    let response = router()
        .oneshot(json_post("/api/v1/calculate", &body))
        .await
        .expect("router responds");
    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"]
        .as_str()
        .is_some_and(|error| error.contains("child_age")));

    let mut request = preschool_request();
    request.location = "tier9".to_string();
    let body = serde_json::to_value(&request).expect("request serializes");
    let response = router()
        .oneshot(json_post("/api/v1/calculate", &body))
        .await
        .expect("router responds");
    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .is_some_and(|error| error.contains("tier9")));
}

#[tokio::test]
async fn projection_endpoint_returns_remaining_years() {
    let mut request = preschool_request();
    request.child_age = 15;
    let body = serde_json::to_value(&request).expect("request serializes");
    let response = router()
        .oneshot(json_post("/api/v1/calculate/projection", &body))
        .await
        .expect("router responds");

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["from_age"], 15);
    assert_eq!(json["years"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn export_endpoint_serves_csv() {
    let body = serde_json::to_value(preschool_request()).expect("request serializes");
    let response = router()
        .oneshot(json_post("/api/v1/calculate/export", &body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let csv = String::from_utf8(bytes.to_vec()).expect("utf-8");
    assert!(csv.ends_with("Total,34295,100\n"));
}

#[tokio::test]
async fn vaccine_endpoints_expose_the_schedule() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/vaccines/due?age_months=2")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_cost"], 120 + 698 + 320);
    assert_eq!(json["optional_vaccines"].as_array().map(Vec::len), Some(0));

    let response = router()
        .oneshot(
            Request::get("/api/v1/vaccines/schedule?include_optional=true")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["annual_breakdown"]["9"].as_u64().is_some_and(|cost| cost >= 1_318));
    assert!(json["vaccine_schedule"]["0"].is_array());
}
