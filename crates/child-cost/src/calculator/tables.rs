use super::domain::{AgeBand, CityTier, EducationType, HealthcareLevel};
use serde::Serialize;

/// Annual base amounts at the tier-3 / basic-healthcare baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseCostTable {
    pub basic_living: u32,
    pub education: u32,
    pub healthcare: u32,
    pub extracurricular: u32,
    pub others: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityMultipliers {
    pub tier1: f64,
    pub tier2: f64,
    pub tier3: f64,
}

impl CityMultipliers {
    pub fn get(&self, tier: CityTier) -> f64 {
        match tier {
            CityTier::Tier1 => self.tier1,
            CityTier::Tier2 => self.tier2,
            CityTier::Tier3 => self.tier3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EducationMultipliers {
    pub public: f64,
    pub private: f64,
    pub international: f64,
}

impl EducationMultipliers {
    pub fn get(&self, kind: EducationType) -> f64 {
        match kind {
            EducationType::Public => self.public,
            EducationType::Private => self.private,
            EducationType::International => self.international,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthcareMultipliers {
    pub basic: f64,
    pub premium: f64,
}

impl HealthcareMultipliers {
    pub fn get(&self, level: HealthcareLevel) -> f64 {
        match level {
            HealthcareLevel::Basic => self.basic,
            HealthcareLevel::Premium => self.premium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBandCosts {
    pub infant: BaseCostTable,
    pub toddler: BaseCostTable,
    pub preschool: BaseCostTable,
    pub primary_school: BaseCostTable,
    pub middle_school: BaseCostTable,
    pub high_school: BaseCostTable,
}

impl AgeBandCosts {
    pub fn get(&self, band: AgeBand) -> &BaseCostTable {
        match band {
            AgeBand::Infant => &self.infant,
            AgeBand::Toddler => &self.toddler,
            AgeBand::Preschool => &self.preschool,
            AgeBand::PrimarySchool => &self.primary_school,
            AgeBand::MiddleSchool => &self.middle_school,
            AgeBand::HighSchool => &self.high_school,
        }
    }
}

/// Read-only reference tables injected into the cost engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostTables {
    pub city: CityMultipliers,
    pub education: EducationMultipliers,
    pub healthcare: HealthcareMultipliers,
    pub base_costs: AgeBandCosts,
    /// Uplift applied to extracurricular spending from school age onwards.
    pub school_age_extracurricular_uplift: f64,
    pub school_age_years: u8,
}

impl CostTables {
    pub fn standard() -> Self {
        Self {
            city: CityMultipliers {
                tier1: 1.5,
                tier2: 1.2,
                tier3: 1.0,
            },
            education: EducationMultipliers {
                public: 1.0,
                private: 2.5,
                international: 4.0,
            },
            healthcare: HealthcareMultipliers {
                basic: 1.0,
                premium: 2.0,
            },
            base_costs: standard_base_costs(),
            school_age_extracurricular_uplift: 1.2,
            school_age_years: 7,
        }
    }

    pub fn base_costs_for(&self, band: AgeBand) -> &BaseCostTable {
        self.base_costs.get(band)
    }
}

fn standard_base_costs() -> AgeBandCosts {
    AgeBandCosts {
        infant: BaseCostTable {
            basic_living: 12_000,
            education: 0,
            healthcare: 3_000,
            extracurricular: 0,
            others: 2_000,
        },
        toddler: BaseCostTable {
            basic_living: 14_000,
            education: 3_000,
            healthcare: 2_500,
            extracurricular: 1_500,
            others: 2_000,
        },
        preschool: BaseCostTable {
            basic_living: 15_000,
            education: 6_000,
            healthcare: 2_000,
            extracurricular: 3_000,
            others: 2_500,
        },
        primary_school: BaseCostTable {
            basic_living: 18_000,
            education: 8_000,
            healthcare: 2_000,
            extracurricular: 5_000,
            others: 3_000,
        },
        middle_school: BaseCostTable {
            basic_living: 22_000,
            education: 12_000,
            healthcare: 2_500,
            extracurricular: 6_000,
            others: 3_500,
        },
        high_school: BaseCostTable {
            basic_living: 25_000,
            education: 15_000,
            healthcare: 3_000,
            extracurricular: 6_000,
            others: 4_000,
        },
    }
}
