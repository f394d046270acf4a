use super::domain::{
    CalculationError, CalculatorInput, CalculatorRequest, CityTier, EducationType,
    HealthcareLevel, MAX_CHILD_AGE,
};
use serde::{Deserialize, Serialize};

/// Accepted monthly income range at the form boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for IncomeBounds {
    fn default() -> Self {
        Self {
            min: 1_000.0,
            max: 1_000_000.0,
        }
    }
}

/// Turns a raw form payload into a [`CalculatorInput`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputValidator {
    bounds: IncomeBounds,
}

impl InputValidator {
    pub fn new(bounds: IncomeBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> IncomeBounds {
        self.bounds
    }

    pub fn validate(&self, request: &CalculatorRequest) -> Result<CalculatorInput, CalculationError> {
        let income = request.monthly_income;
        if !income.is_finite() || income < self.bounds.min || income > self.bounds.max {
            return Err(CalculationError::invalid_input(
                "monthly_income",
                format!(
                    "{income} must be between {} and {}",
                    self.bounds.min, self.bounds.max
                ),
            ));
        }

        let child_age = u8::try_from(request.child_age)
            .ok()
            .filter(|age| *age <= MAX_CHILD_AGE)
            .ok_or_else(|| {
                CalculationError::invalid_input(
                    "child_age",
                    format!("{} is outside 0..={MAX_CHILD_AGE}", request.child_age),
                )
            })?;

        let location: CityTier = request.location.parse()?;
        let education_level = request
            .education_level
            .as_deref()
            .map(str::parse::<EducationType>)
            .transpose()?
            .unwrap_or_default();
        let healthcare_level = request
            .healthcare_level
            .as_deref()
            .map(str::parse::<HealthcareLevel>)
            .transpose()?
            .unwrap_or_default();

        Ok(CalculatorInput {
            monthly_income: income,
            child_age,
            location,
            education_level,
            healthcare_level,
            extracurricular: request.extracurricular,
        })
    }
}
