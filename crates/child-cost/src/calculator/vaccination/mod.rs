//! Vaccination costs keyed by the child's age in months.
//!
//! A vaccine is due only at the exact months listed in its record. Free
//! vaccines are reported for display but never contribute to cost; the
//! optional tier is costed only when the caller opts in.

mod advice;
mod catalogue;

pub use advice::{vaccination_recommendations, IncomeTier};
pub use catalogue::{Necessity, VaccineCatalogue, VaccineCategory, VaccineRecord};

use serde::Serialize;
use std::collections::BTreeMap;

/// Household monthly income at or above which optional vaccines are costed.
pub const OPTIONAL_VACCINE_INCOME_THRESHOLD: f64 = 30_000.0;

/// Last month covered by the 0-18 year projection.
pub const PROJECTION_LAST_MONTH: u16 = 18 * 12;

/// Itemized vaccine spend; `free` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VaccineCostBreakdown {
    pub free: u64,
    pub paid: u64,
    pub optional: u64,
    pub total: u64,
}

/// Vaccines due at one month together with their cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccinationCosts {
    pub age_months: u16,
    pub free_vaccines: Vec<VaccineRecord>,
    pub paid_vaccines: Vec<VaccineRecord>,
    /// Empty unless optional vaccines were requested.
    pub optional_vaccines: Vec<VaccineRecord>,
    pub total_cost: u64,
    pub breakdown: VaccineCostBreakdown,
}

/// Aggregate over months 0 through 216, grouped by year of age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccineProjection {
    pub total_cost: u64,
    pub annual_breakdown: BTreeMap<u8, u64>,
    pub vaccine_schedule: BTreeMap<u8, Vec<VaccineRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccinationScheduler {
    catalogue: VaccineCatalogue,
}

impl VaccinationScheduler {
    pub fn new(catalogue: VaccineCatalogue) -> Self {
        Self { catalogue }
    }

    pub fn standard() -> Self {
        Self::new(VaccineCatalogue::standard())
    }

    pub fn catalogue(&self) -> &VaccineCatalogue {
        &self.catalogue
    }

    pub fn costs_at(&self, age_months: u16, include_optional: bool) -> VaccinationCosts {
        let free_vaccines = due_at(self.catalogue.free(), age_months);
        let paid_vaccines = due_at(self.catalogue.paid(), age_months);
        let optional_vaccines = if include_optional {
            due_at(self.catalogue.optional(), age_months)
        } else {
            Vec::new()
        };

        let paid = price_sum(&paid_vaccines);
        let optional = price_sum(&optional_vaccines);
        let total = paid + optional;

        VaccinationCosts {
            age_months,
            free_vaccines,
            paid_vaccines,
            optional_vaccines,
            total_cost: total,
            breakdown: VaccineCostBreakdown {
                free: 0,
                paid,
                optional,
                total,
            },
        }
    }

    pub fn total_projection(&self, include_optional: bool) -> VaccineProjection {
        let mut total_cost = 0;
        let mut annual_breakdown: BTreeMap<u8, u64> = BTreeMap::new();
        let mut vaccine_schedule: BTreeMap<u8, Vec<VaccineRecord>> = BTreeMap::new();

        for month in 0..=PROJECTION_LAST_MONTH {
            let costs = self.costs_at(month, include_optional);
            let due: Vec<VaccineRecord> = costs
                .free_vaccines
                .into_iter()
                .chain(costs.paid_vaccines)
                .chain(costs.optional_vaccines)
                .collect();
            if due.is_empty() {
                continue;
            }

            // PROJECTION_LAST_MONTH / 12 fits in u8
            let year = (month / 12) as u8;
            total_cost += costs.total_cost;
            *annual_breakdown.entry(year).or_default() += costs.total_cost;
            vaccine_schedule.entry(year).or_default().extend(due);
        }

        VaccineProjection {
            total_cost,
            annual_breakdown,
            vaccine_schedule,
        }
    }
}

fn due_at(records: &[VaccineRecord], age_months: u16) -> Vec<VaccineRecord> {
    records
        .iter()
        .filter(|record| record.is_due_at(age_months))
        .copied()
        .collect()
}

fn price_sum(records: &[VaccineRecord]) -> u64 {
    records.iter().map(|record| u64::from(record.price)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_month_lists_free_vaccines_at_no_cost() {
        let scheduler = VaccinationScheduler::standard();
        let costs = scheduler.costs_at(0, true);

        let names: Vec<_> = costs.free_vaccines.iter().map(|record| record.name).collect();
        assert_eq!(names, vec!["Hepatitis B vaccine", "BCG vaccine"]);
        assert!(costs.paid_vaccines.is_empty());
        assert_eq!(costs.total_cost, 0);
        assert_eq!(costs.breakdown, VaccineCostBreakdown::default());
    }

    #[test]
    fn due_months_match_exactly() {
        let scheduler = VaccinationScheduler::standard();

        let two_months = scheduler.costs_at(2, false);
        assert_eq!(two_months.breakdown.paid, 120 + 698 + 320);

        let between_doses = scheduler.costs_at(10, true);
        assert!(between_doses.free_vaccines.is_empty());
        assert!(between_doses.paid_vaccines.is_empty());
        assert_eq!(between_doses.total_cost, 0);
    }

    #[test]
    fn optional_tier_is_excluded_unless_requested() {
        let scheduler = VaccinationScheduler::standard();
        for month in 0..=PROJECTION_LAST_MONTH {
            let costs = scheduler.costs_at(month, false);
            assert!(costs.optional_vaccines.is_empty());
            assert_eq!(costs.breakdown.optional, 0);
            assert_eq!(costs.total_cost, costs.breakdown.paid);
        }

        let hpv = scheduler.costs_at(108, true);
        assert_eq!(hpv.breakdown.optional, 1318);
        assert_eq!(hpv.total_cost, 1318);
    }

    #[test]
    fn multi_dose_vaccines_are_costed_at_each_listed_month() {
        let scheduler = VaccinationScheduler::standard();
        let projection = scheduler.total_projection(false);

        let hib_doses = projection
            .vaccine_schedule
            .values()
            .flatten()
            .filter(|record| record.name == "Hib vaccine")
            .count();
        assert_eq!(hib_doses, 4);
        // Hib x3, PCV13 x3, rotavirus x3, EV71 x2, influenza x2 in the first year
        assert_eq!(
            projection.annual_breakdown.get(&0),
            Some(&(3 * 120 + 3 * 698 + 3 * 320 + 2 * 228 + 2 * 95))
        );
    }

    #[test]
    fn projection_is_repeatable_and_sums_its_years() {
        let scheduler = VaccinationScheduler::standard();
        let first = scheduler.total_projection(true);
        let second = scheduler.total_projection(true);
        assert_eq!(first, second);

        let summed: u64 = first.annual_breakdown.values().sum();
        assert_eq!(summed, first.total_cost);
        assert!(first.total_cost > scheduler.total_projection(false).total_cost);
    }
}
