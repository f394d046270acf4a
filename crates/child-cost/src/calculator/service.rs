use std::sync::Arc;

use tracing::debug;

use super::domain::{CalculationError, CalculatorInput, CalculatorRequest};
use super::engine::CostEngine;
use super::report::{assemble, project_to_adulthood, CalculationResult, CostProjection};
use super::tables::CostTables;
use super::vaccination::{VaccinationCosts, VaccinationScheduler, VaccineProjection};
use super::validation::InputValidator;
use crate::config::CalculatorConfig;

/// Entry point for the presentation layer. Holds only read-only tables, so a
/// single instance can serve concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct CalculatorService {
    engine: Arc<CostEngine>,
    validator: InputValidator,
}

impl CalculatorService {
    pub fn new(engine: CostEngine, validator: InputValidator) -> Self {
        Self {
            engine: Arc::new(engine),
            validator,
        }
    }

    pub fn standard() -> Self {
        Self::new(CostEngine::standard(), InputValidator::default())
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        let engine = CostEngine::new(CostTables::standard(), VaccinationScheduler::standard())
            .with_optional_vaccine_threshold(config.optional_vaccine_income_threshold);
        Self::new(engine, InputValidator::new(config.income_bounds))
    }

    pub fn engine(&self) -> &CostEngine {
        &self.engine
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    /// Compute the full result for an already validated input.
    pub fn calculate(&self, input: &CalculatorInput) -> Result<CalculationResult, CalculationError> {
        let result = assemble(&self.engine, input)?;
        debug!(
            age_band = result.age_band.label(),
            location = input.location.key(),
            total_annual_cost = result.total_annual_cost,
            vaccine_cost = result.breakdown.vaccine_costs.total,
            "calculation assembled"
        );
        Ok(result)
    }

    /// Validate a raw form payload, then calculate.
    pub fn calculate_request(
        &self,
        request: &CalculatorRequest,
    ) -> Result<CalculationResult, CalculationError> {
        let input = self.validator.validate(request)?;
        self.calculate(&input)
    }

    pub fn project(&self, input: &CalculatorInput) -> Result<CostProjection, CalculationError> {
        project_to_adulthood(&self.engine, input)
    }

    pub fn vaccines_due(&self, age_months: u16, include_optional: bool) -> VaccinationCosts {
        self.engine.scheduler().costs_at(age_months, include_optional)
    }

    pub fn vaccine_projection(&self, include_optional: bool) -> VaccineProjection {
        self.engine.scheduler().total_projection(include_optional)
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::standard()
    }
}
