use super::super::domain::{AgeBand, CalculationError, CalculatorInput, MAX_CHILD_AGE};
use super::super::engine::CostEngine;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualProjection {
    pub age: u8,
    pub age_band: AgeBand,
    pub total_annual_cost: u64,
    pub vaccine_cost: u64,
}

/// Remaining cost of raising the child to adulthood with today's choices held fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostProjection {
    pub from_age: u8,
    pub years: Vec<AnnualProjection>,
    pub cumulative_cost: u64,
}

pub fn project_to_adulthood(
    engine: &CostEngine,
    input: &CalculatorInput,
) -> Result<CostProjection, CalculationError> {
    input.ensure_computable()?;

    let mut years = Vec::new();
    for age in input.child_age..=MAX_CHILD_AGE {
        let yearly = CalculatorInput {
            child_age: age,
            ..*input
        };
        let breakdown = engine.compose(&yearly)?;
        years.push(AnnualProjection {
            age,
            age_band: AgeBand::resolve(age)?,
            total_annual_cost: breakdown.total(),
            vaccine_cost: breakdown.vaccine_costs.total,
        });
    }

    let cumulative_cost = years.iter().map(|year| year.total_annual_cost).sum();

    Ok(CostProjection {
        from_age: input.child_age,
        years,
        cumulative_cost,
    })
}
