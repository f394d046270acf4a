use serde::Serialize;

const LOW_INCOME_CEILING: f64 = 15_000.0;
const MEDIUM_INCOME_CEILING: f64 = 30_000.0;

/// Household income classification used for vaccine advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeTier {
    Low,
    Medium,
    High,
}

impl IncomeTier {
    pub fn classify(monthly_income: f64) -> Self {
        if monthly_income < LOW_INCOME_CEILING {
            Self::Low
        } else if monthly_income < MEDIUM_INCOME_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Advice for the month the child is in: reminder, cost note when the month
/// has a cost, then the income-tier suggestion.
pub fn vaccination_recommendations(
    age_months: u16,
    tier: IncomeTier,
    month_cost: u64,
) -> Vec<String> {
    let mut advice = vec![
        "Follow the national immunisation schedule and keep the vaccination certificate up to date."
            .to_string(),
    ];

    if month_cost > 0 {
        advice.push(format!(
            "Self-funded vaccines due at {age_months} months cost about ¥{month_cost}."
        ));
    }

    let suggestion = match tier {
        IncomeTier::Low => {
            "Prioritise the free national programme vaccines and add paid vaccines such as Hib or EV71 as the budget allows."
        }
        IncomeTier::Medium => {
            "Consider the key paid vaccines (pneumococcal, Hib, EV71, influenza) for broader protection."
        }
        IncomeTier::High => {
            "Consider the full set of paid and optional vaccines after discussing them with a paediatrician."
        }
    };
    advice.push(suggestion.to_string());

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_half_open_bands() {
        assert_eq!(IncomeTier::classify(14_999.0), IncomeTier::Low);
        assert_eq!(IncomeTier::classify(15_000.0), IncomeTier::Medium);
        assert_eq!(IncomeTier::classify(29_999.99), IncomeTier::Medium);
        assert_eq!(IncomeTier::classify(30_000.0), IncomeTier::High);
    }

    #[test]
    fn cost_note_only_appears_for_costed_months() {
        let without_cost = vaccination_recommendations(10, IncomeTier::Medium, 0);
        assert_eq!(without_cost.len(), 2);

        let with_cost = vaccination_recommendations(2, IncomeTier::Low, 1138);
        assert_eq!(with_cost.len(), 3);
        assert!(with_cost[1].contains("2 months"));
        assert!(with_cost[1].contains("1138"));
        assert!(with_cost[2].contains("free national programme"));
    }
}
