use super::common::*;
use crate::calculator::domain::{AgeBand, CalculatorInput, CityTier, EducationType, HealthcareLevel};
use crate::calculator::recommendations::generate_recommendations;

fn recommendations_for(input: &CalculatorInput) -> Vec<String> {
    let breakdown = engine().compose(input).expect("computable");
    let band = AgeBand::resolve(input.child_age).expect("age in range");
    generate_recommendations(input, band, &breakdown)
}

#[test]
fn groups_append_in_fixed_order() {
    let recommendations = recommendations_for(&preschool_input());

    assert_eq!(recommendations.len(), 9);
    assert!(recommendations[0].contains("14%"));
    assert!(recommendations[0].contains("manageable"));
    assert!(recommendations[1].starts_with("Tier-2"));
    assert!(recommendations[2].starts_with("Public schooling"));
    assert!(recommendations[3].contains("extracurricular"));
    assert!(recommendations[4].starts_with("Ages 4-6"));
    assert!(recommendations[5].contains("national immunisation schedule"));
    assert!(recommendations[6].contains("60 months"));
    assert!(recommendations[6].contains("95"));
    assert!(recommendations[7].contains("key paid vaccines"));
    assert!(recommendations[8].starts_with("Basic medical insurance"));
}

#[test]
fn burden_band_tracks_cost_to_income_ratio() {
    let mut input = preschool_input();
    input.monthly_income = 8_000.0;
    let moderate = recommendations_for(&input);
    assert!(moderate[0].contains("36%"));
    assert!(moderate[0].contains("Plan the family budget"));

    let heavy = recommendations_for(&input_with(
        10_000.0,
        9,
        CityTier::Tier3,
        EducationType::International,
        HealthcareLevel::Basic,
        true,
    ));
    assert!(heavy[0].contains("51%"));
    assert!(heavy[0].contains("heavy burden"));
}

#[test]
fn vaccine_cost_note_is_skipped_for_months_without_cost() {
    let input = input_with(
        50_000.0,
        0,
        CityTier::Tier1,
        EducationType::International,
        HealthcareLevel::Premium,
        false,
    );
    let recommendations = recommendations_for(&input);

    assert_eq!(recommendations.len(), 8);
    assert!(recommendations[4].starts_with("Ages 0-1"));
    assert!(recommendations[5].contains("national immunisation schedule"));
    assert!(recommendations[6].contains("optional vaccines"));
    assert!(recommendations[3].contains("without paid class fees"));
    assert!(recommendations
        .last()
        .is_some_and(|advice| advice.starts_with("Premium healthcare")));
}

#[test]
fn every_choice_selects_its_own_advice() {
    let base = preschool_input();
    let mut seen = std::collections::HashSet::new();
    for location in CityTier::ordered() {
        let input = CalculatorInput { location, ..base };
        assert!(seen.insert(recommendations_for(&input)[1].clone()));
    }

    let mut seen = std::collections::HashSet::new();
    for education_level in EducationType::ordered() {
        let input = CalculatorInput {
            education_level,
            ..base
        };
        assert!(seen.insert(recommendations_for(&input)[2].clone()));
    }

    let mut seen = std::collections::HashSet::new();
    for band in AgeBand::ordered() {
        let input = CalculatorInput {
            child_age: *band.years().start(),
            ..base
        };
        let recommendations = recommendations_for(&input);
        assert!(recommendations[4].starts_with(&format!("Ages {}", band.label())));
        assert!(seen.insert(recommendations[4].clone()));
    }
}
