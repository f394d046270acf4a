use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{CalculationError, CalculatorRequest, CostCategory};
use super::report::{cost_percentages, CalculationResult};
use super::service::CalculatorService;

/// Router builder exposing the calculator and vaccine schedule endpoints.
pub fn calculator_router(service: Arc<CalculatorService>) -> Router {
    Router::new()
        .route("/api/v1/calculate", post(calculate_handler))
        .route("/api/v1/calculate/projection", post(projection_handler))
        .route("/api/v1/calculate/export", post(export_handler))
        .route("/api/v1/vaccines/schedule", get(schedule_handler))
        .route("/api/v1/vaccines/due", get(due_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub result: CalculationResult,
    pub percentages: BTreeMap<CostCategory, u8>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleQuery {
    #[serde(default)]
    include_optional: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DueQuery {
    age_months: u16,
    #[serde(default)]
    include_optional: bool,
}

pub(crate) async fn calculate_handler(
    State(service): State<Arc<CalculatorService>>,
    Json(request): Json<CalculatorRequest>,
) -> Response {
    match service.calculate_request(&request) {
        Ok(result) => {
            let percentages = cost_percentages(&result.breakdown);
            let body = CalculationResponse {
                result,
                percentages,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => calculation_error_response(error),
    }
}

pub(crate) async fn projection_handler(
    State(service): State<Arc<CalculatorService>>,
    Json(request): Json<CalculatorRequest>,
) -> Response {
    let projection = service
        .validator()
        .validate(&request)
        .and_then(|input| service.project(&input));
    match projection {
        Ok(projection) => (StatusCode::OK, Json(projection)).into_response(),
        Err(error) => calculation_error_response(error),
    }
}

pub(crate) async fn export_handler(
    State(service): State<Arc<CalculatorService>>,
    Json(request): Json<CalculatorRequest>,
) -> Response {
    let result = match service.calculate_request(&request) {
        Ok(result) => result,
        Err(error) => return calculation_error_response(error),
    };

    match result.to_csv() {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            csv,
        )
            .into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn schedule_handler(
    State(service): State<Arc<CalculatorService>>,
    Query(query): Query<ScheduleQuery>,
) -> Response {
    let projection = service.vaccine_projection(query.include_optional);
    (StatusCode::OK, Json(projection)).into_response()
}

pub(crate) async fn due_handler(
    State(service): State<Arc<CalculatorService>>,
    Query(query): Query<DueQuery>,
) -> Response {
    let costs = service.vaccines_due(query.age_months, query.include_optional);
    (StatusCode::OK, Json(costs)).into_response()
}

fn calculation_error_response(error: CalculationError) -> Response {
    let status = match error {
        CalculationError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        CalculationError::Configuration { .. } => StatusCode::BAD_REQUEST,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
