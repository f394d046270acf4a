use super::domain::{AgeBand, CalculatorInput, CityTier, EducationType, HealthcareLevel};
use super::engine::CostBreakdown;
use super::vaccination::{vaccination_recommendations, IncomeTier};

const HEAVY_BURDEN_RATIO: f64 = 0.5;
const MODERATE_BURDEN_RATIO: f64 = 0.3;

/// Builds the advisory list. Rule groups append in a fixed order: burden,
/// city, education, activities, age band, vaccination, healthcare.
pub(crate) fn generate_recommendations(
    input: &CalculatorInput,
    band: AgeBand,
    breakdown: &CostBreakdown,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let annual_income = input.monthly_income * 12.0;
    let cost_ratio = breakdown.total() as f64 / annual_income;
    let share = (cost_ratio * 100.0).round();
    recommendations.push(if cost_ratio > HEAVY_BURDEN_RATIO {
        format!(
            "Child-rearing costs take {share:.0}% of annual household income, a heavy burden. Trim discretionary spending and build an emergency fund first."
        )
    } else if cost_ratio > MODERATE_BURDEN_RATIO {
        format!(
            "Child-rearing costs take {share:.0}% of annual household income. Plan the family budget carefully and set aside savings for education."
        )
    } else {
        format!(
            "Child-rearing costs take {share:.0}% of annual household income, a manageable share. Consider starting a long-term education savings plan."
        )
    });

    recommendations.push(
        match input.location {
            CityTier::Tier1 => {
                "Tier-1 cities carry high living costs; use community centres, public libraries and parks to offset spending."
            }
            CityTier::Tier2 => {
                "Tier-2 cities balance cost and resources; compare local schools and hospitals before committing."
            }
            CityTier::Tier3 => {
                "Tier-3 cities keep living costs low; budget for occasional trips to larger cities for specialist education or care."
            }
        }
        .to_string(),
    );

    recommendations.push(
        match input.education_level {
            EducationType::Public => {
                "Public schooling keeps tuition low; supplement it with reading and learning at home."
            }
            EducationType::Private => {
                "Private schooling costs about 2.5 times public tuition; confirm the fees fit the long-term budget."
            }
            EducationType::International => {
                "International schooling costs about 4 times public tuition; plan for yearly fee increases and overseas study."
            }
        }
        .to_string(),
    );

    recommendations.push(
        if input.extracurricular {
            "Pick extracurricular activities around the child's interests instead of stacking classes."
        } else {
            "Sports, libraries and museums support development without paid class fees."
        }
        .to_string(),
    );

    recommendations.push(
        match band {
            AgeBand::Infant => {
                "Ages 0-1: focus spending on nutrition, infant formula and routine check-ups."
            }
            AgeBand::Toddler => {
                "Ages 2-3: early-learning play and a choice of nursery or childcare dominate costs."
            }
            AgeBand::Preschool => {
                "Ages 4-6: kindergarten fees and school-readiness activities are the main outlays."
            }
            AgeBand::PrimarySchool => {
                "Ages 7-12: primary school is the time to build study habits; keep tutoring spending in check."
            }
            AgeBand::MiddleSchool => {
                "Ages 13-15: middle school brings exam preparation costs; watch the child's wellbeing too."
            }
            AgeBand::HighSchool => {
                "Ages 16-18: prepare for university entrance exams and start saving for tuition."
            }
        }
        .to_string(),
    );

    recommendations.extend(vaccination_recommendations(
        input.age_months(),
        IncomeTier::classify(input.monthly_income),
        breakdown.vaccine_costs.total,
    ));

    recommendations.push(
        match input.healthcare_level {
            HealthcareLevel::Basic => {
                "Basic medical insurance covers routine care; add commercial critical-illness cover for the child."
            }
            HealthcareLevel::Premium => {
                "Premium healthcare improves service; compare plans to make sure the coverage justifies the cost."
            }
        }
        .to_string(),
    );

    recommendations
}
