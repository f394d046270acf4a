mod export;
mod percentages;
mod projection;

pub use export::ExportError;
pub use percentages::cost_percentages;
pub use projection::{project_to_adulthood, AnnualProjection, CostProjection};

use super::domain::{AgeBand, CalculationError, CalculatorInput};
use super::engine::{CostBreakdown, CostEngine};
use super::recommendations::generate_recommendations;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Final output of one calculation. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub total_annual_cost: u64,
    pub monthly_average_cost: u64,
    pub age_band: AgeBand,
    pub breakdown: CostBreakdown,
    pub recommendations: Vec<String>,
    pub user_input: CalculatorInput,
    pub timestamp: DateTime<Utc>,
}

/// Runs the pipeline and stamps the result with the current time.
pub fn assemble(
    engine: &CostEngine,
    input: &CalculatorInput,
) -> Result<CalculationResult, CalculationError> {
    assemble_at(engine, input, Utc::now())
}

pub fn assemble_at(
    engine: &CostEngine,
    input: &CalculatorInput,
    timestamp: DateTime<Utc>,
) -> Result<CalculationResult, CalculationError> {
    input.ensure_computable()?;
    let age_band = AgeBand::resolve(input.child_age)?;
    let breakdown = engine.compose(input)?;
    let recommendations = generate_recommendations(input, age_band, &breakdown);

    let total_annual_cost = breakdown.basic_living
        + breakdown.education
        + breakdown.healthcare
        + breakdown.extracurricular
        + breakdown.others;
    let monthly_average_cost = (total_annual_cost as f64 / 12.0).round() as u64;

    Ok(CalculationResult {
        total_annual_cost,
        monthly_average_cost,
        age_band,
        breakdown,
        recommendations,
        user_input: *input,
        timestamp,
    })
}
