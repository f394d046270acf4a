//! Child-rearing cost calculator.
//!
//! Data flows one way: validated input, age band lookup, base-cost breakdown
//! merged with the vaccination cost for the current month of age, rule-based
//! recommendations, then result assembly. Every stage is a pure function of
//! its inputs and the read-only tables; only [`report::assemble`] reads the
//! clock.

pub mod domain;
pub mod engine;
mod recommendations;
pub mod report;
pub mod router;
pub mod service;
pub mod tables;
pub mod vaccination;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AgeBand, CalculationError, CalculatorInput, CalculatorRequest, CityTier, CostCategory,
    EducationType, HealthcareLevel, MAX_CHILD_AGE,
};
pub use engine::{CostBreakdown, CostEngine};
pub use report::{
    cost_percentages, AnnualProjection, CalculationResult, CostProjection, ExportError,
};
pub use router::{calculator_router, CalculationResponse};
pub use service::CalculatorService;
pub use tables::{BaseCostTable, CostTables};
pub use vaccination::{
    IncomeTier, VaccinationCosts, VaccinationScheduler, VaccineCatalogue, VaccineCategory,
    VaccineCostBreakdown, VaccineProjection, VaccineRecord, OPTIONAL_VACCINE_INCOME_THRESHOLD,
};
pub use validation::{IncomeBounds, InputValidator};

/// Calculate against the standard tables.
pub fn calculate(input: &CalculatorInput) -> Result<CalculationResult, CalculationError> {
    report::assemble(&CostEngine::standard(), input)
}
