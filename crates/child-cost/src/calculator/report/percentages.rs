use super::super::domain::CostCategory;
use super::super::engine::CostBreakdown;
use std::collections::BTreeMap;

/// Share of the total per category, each rounded on its own, so the values
/// need not add up to exactly 100.
pub fn cost_percentages(breakdown: &CostBreakdown) -> BTreeMap<CostCategory, u8> {
    let total = breakdown.total();

    CostCategory::ordered()
        .into_iter()
        .map(|category| {
            let percent = if total == 0 {
                0
            } else {
                let share = breakdown.amount(category) as f64 * 100.0 / total as f64;
                share.round().clamp(0.0, 100.0) as u8
            };
            (category, percent)
        })
        .collect()
}
