use super::domain::{AgeBand, CalculationError, CalculatorInput, CostCategory};
use super::tables::CostTables;
use super::vaccination::{
    VaccinationScheduler, VaccineCostBreakdown, OPTIONAL_VACCINE_INCOME_THRESHOLD,
};
use serde::Serialize;

/// Annual cost split by category. `healthcare` already includes
/// `vaccine_costs.total`; the vaccine figures are itemized alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub basic_living: u64,
    pub education: u64,
    pub healthcare: u64,
    pub vaccine_costs: VaccineCostBreakdown,
    pub extracurricular: u64,
    pub others: u64,
}

impl CostBreakdown {
    pub fn amount(&self, category: CostCategory) -> u64 {
        match category {
            CostCategory::BasicLiving => self.basic_living,
            CostCategory::Education => self.education,
            CostCategory::Healthcare => self.healthcare,
            CostCategory::Extracurricular => self.extracurricular,
            CostCategory::Others => self.others,
        }
    }

    pub fn total(&self) -> u64 {
        CostCategory::ordered()
            .into_iter()
            .map(|category| self.amount(category))
            .sum()
    }
}

/// Stateless composer applying the multiplier tables to an input.
#[derive(Debug, Clone, PartialEq)]
pub struct CostEngine {
    tables: CostTables,
    scheduler: VaccinationScheduler,
    optional_vaccine_threshold: f64,
}

impl CostEngine {
    pub fn new(tables: CostTables, scheduler: VaccinationScheduler) -> Self {
        Self {
            tables,
            scheduler,
            optional_vaccine_threshold: OPTIONAL_VACCINE_INCOME_THRESHOLD,
        }
    }

    pub fn standard() -> Self {
        Self::new(CostTables::standard(), VaccinationScheduler::standard())
    }

    pub fn with_optional_vaccine_threshold(mut self, threshold: f64) -> Self {
        self.optional_vaccine_threshold = threshold;
        self
    }

    pub fn tables(&self) -> &CostTables {
        &self.tables
    }

    pub fn scheduler(&self) -> &VaccinationScheduler {
        &self.scheduler
    }

    pub fn includes_optional_vaccines(&self, monthly_income: f64) -> bool {
        monthly_income >= self.optional_vaccine_threshold
    }

    /// Every component is rounded on its own before it is summed anywhere.
    pub fn compose(&self, input: &CalculatorInput) -> Result<CostBreakdown, CalculationError> {
        input.ensure_computable()?;

        let city_multiplier = self.tables.city.get(input.location);
        let education_multiplier = self.tables.education.get(input.education_level);
        let healthcare_multiplier = self.tables.healthcare.get(input.healthcare_level);
        let band = AgeBand::resolve(input.child_age)?;
        let base = self.tables.base_costs_for(band);

        let basic_living = round_amount(f64::from(base.basic_living) * city_multiplier);

        let mut education = f64::from(base.education) * city_multiplier;
        // Both guards stay: the age floor is independent of the band data.
        if input.child_age > 1 && base.education > 0 {
            education *= education_multiplier;
        }
        let education = round_amount(education);

        let base_healthcare =
            f64::from(base.healthcare) * city_multiplier * healthcare_multiplier;
        let vaccines = self.scheduler.costs_at(
            input.age_months(),
            self.includes_optional_vaccines(input.monthly_income),
        );
        // Vaccine prices are not city-adjusted.
        let healthcare = round_amount(base_healthcare + vaccines.total_cost as f64);

        let extracurricular = if input.extracurricular && base.extracurricular > 0 {
            let mut amount = f64::from(base.extracurricular) * city_multiplier;
            if input.child_age >= self.tables.school_age_years {
                amount *= self.tables.school_age_extracurricular_uplift;
            }
            round_amount(amount)
        } else {
            0
        };

        let others = round_amount(f64::from(base.others) * city_multiplier);

        Ok(CostBreakdown {
            basic_living,
            education,
            healthcare,
            vaccine_costs: vaccines.breakdown,
            extracurricular,
            others,
        })
    }
}

fn round_amount(value: f64) -> u64 {
    value.round().max(0.0) as u64
}
