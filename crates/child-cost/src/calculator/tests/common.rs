use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::calculator::domain::{
    CalculatorInput, CalculatorRequest, CityTier, EducationType, HealthcareLevel,
};
use crate::calculator::engine::CostEngine;
use crate::calculator::{calculator_router, CalculatorService};

/// Tier-2 public/basic five-year-old with activities, 20k monthly income.
pub(super) fn preschool_input() -> CalculatorInput {
    CalculatorInput {
        monthly_income: 20_000.0,
        child_age: 5,
        location: CityTier::Tier2,
        education_level: EducationType::Public,
        healthcare_level: HealthcareLevel::Basic,
        extracurricular: true,
    }
}

pub(super) fn input_with(
    monthly_income: f64,
    child_age: u8,
    location: CityTier,
    education_level: EducationType,
    healthcare_level: HealthcareLevel,
    extracurricular: bool,
) -> CalculatorInput {
    CalculatorInput {
        monthly_income,
        child_age,
        location,
        education_level,
        healthcare_level,
        extracurricular,
    }
}

pub(super) fn preschool_request() -> CalculatorRequest {
    CalculatorRequest {
        monthly_income: 20_000.0,
        child_age: 5,
        location: "tier2".to_string(),
        education_level: Some("public".to_string()),
        healthcare_level: Some("basic".to_string()),
        extracurricular: true,
    }
}

pub(super) fn engine() -> CostEngine {
    CostEngine::standard()
}

pub(super) fn router() -> axum::Router {
    calculator_router(Arc::new(CalculatorService::standard()))
}

pub(super) async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
