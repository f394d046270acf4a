use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Oldest age, in whole years, the calculator models.
pub const MAX_CHILD_AGE: u8 = 18;

/// City classification by cost of living.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityTier {
    Tier1,
    Tier2,
    Tier3,
}

impl CityTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Tier1, Self::Tier2, Self::Tier3]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Tier1 => "tier1",
            Self::Tier2 => "tier2",
            Self::Tier3 => "tier3",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tier1 => "Tier-1 city",
            Self::Tier2 => "Tier-2 city",
            Self::Tier3 => "Tier-3 city",
        }
    }
}

impl FromStr for CityTier {
    type Err = CalculationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|tier| tier.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| CalculationError::configuration("location", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationType {
    #[default]
    Public,
    Private,
    International,
}

impl EducationType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Public, Self::Private, Self::International]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::International => "international",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Public school",
            Self::Private => "Private school",
            Self::International => "International school",
        }
    }
}

impl FromStr for EducationType {
    type Err = CalculationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| CalculationError::configuration("education_level", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthcareLevel {
    #[default]
    Basic,
    Premium,
}

impl HealthcareLevel {
    pub const fn ordered() -> [Self; 2] {
        [Self::Basic, Self::Premium]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic healthcare",
            Self::Premium => "Premium healthcare",
        }
    }
}

impl FromStr for HealthcareLevel {
    type Err = CalculationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|level| level.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| CalculationError::configuration("healthcare_level", value))
    }
}

/// Age partition selecting a base annual cost table. Bounds are inclusive years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "0-1")]
    Infant,
    #[serde(rename = "2-3")]
    Toddler,
    #[serde(rename = "4-6")]
    Preschool,
    #[serde(rename = "7-12")]
    PrimarySchool,
    #[serde(rename = "13-15")]
    MiddleSchool,
    #[serde(rename = "16-18")]
    HighSchool,
}

impl AgeBand {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Infant,
            Self::Toddler,
            Self::Preschool,
            Self::PrimarySchool,
            Self::MiddleSchool,
            Self::HighSchool,
        ]
    }

    /// Maps an age in whole years to its band; first matching upper bound wins.
    pub fn resolve(age_years: u8) -> Result<Self, CalculationError> {
        if age_years > MAX_CHILD_AGE {
            return Err(CalculationError::invalid_input(
                "child_age",
                format!("{age_years} is outside 0..={MAX_CHILD_AGE}"),
            ));
        }

        let band = if age_years <= 1 {
            Self::Infant
        } else if age_years <= 3 {
            Self::Toddler
        } else if age_years <= 6 {
            Self::Preschool
        } else if age_years <= 12 {
            Self::PrimarySchool
        } else if age_years <= 15 {
            Self::MiddleSchool
        } else {
            Self::HighSchool
        };

        Ok(band)
    }

    pub const fn years(self) -> RangeInclusive<u8> {
        match self {
            Self::Infant => 0..=1,
            Self::Toddler => 2..=3,
            Self::Preschool => 4..=6,
            Self::PrimarySchool => 7..=12,
            Self::MiddleSchool => 13..=15,
            Self::HighSchool => 16..=18,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Infant => "0-1",
            Self::Toddler => "2-3",
            Self::Preschool => "4-6",
            Self::PrimarySchool => "7-12",
            Self::MiddleSchool => "13-15",
            Self::HighSchool => "16-18",
        }
    }
}

/// Validated calculator input echoed back in every result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub monthly_income: f64,
    pub child_age: u8,
    pub location: CityTier,
    #[serde(default)]
    pub education_level: EducationType,
    #[serde(default)]
    pub healthcare_level: HealthcareLevel,
    #[serde(default)]
    pub extracurricular: bool,
}

impl CalculatorInput {
    pub fn age_months(&self) -> u16 {
        u16::from(self.child_age) * 12
    }

    /// Rejects input the engine cannot compute against.
    pub fn ensure_computable(&self) -> Result<(), CalculationError> {
        if !self.monthly_income.is_finite() || self.monthly_income <= 0.0 {
            return Err(CalculationError::invalid_input(
                "monthly_income",
                format!("{} must be a positive amount", self.monthly_income),
            ));
        }
        AgeBand::resolve(self.child_age).map(|_| ())
    }
}

/// Raw form payload before enum keys and bounds are checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorRequest {
    pub monthly_income: f64,
    pub child_age: i64,
    pub location: String,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub healthcare_level: Option<String>,
    #[serde(default)]
    pub extracurricular: bool,
}

/// Summed cost categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    BasicLiving,
    Education,
    Healthcare,
    Extracurricular,
    Others,
}

impl CostCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::BasicLiving,
            Self::Education,
            Self::Healthcare,
            Self::Extracurricular,
            Self::Others,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BasicLiving => "Basic living",
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::Extracurricular => "Extracurricular",
            Self::Others => "Others",
        }
    }
}

/// Failures surfaced synchronously to the caller; none are retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("unknown {field} '{value}'")]
    Configuration { field: &'static str, value: String },
}

impl CalculationError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(field: &'static str, value: &str) -> Self {
        Self::Configuration {
            field,
            value: value.to_string(),
        }
    }
}
