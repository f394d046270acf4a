use child_cost::calculator::{
    calculate, cost_percentages, CalculationError, CalculatorInput, CalculatorRequest,
    CalculatorService, CityTier, EducationType, HealthcareLevel, IncomeBounds,
};
use child_cost::config::CalculatorConfig;

fn preschool_input() -> CalculatorInput {
    CalculatorInput {
        monthly_income: 20_000.0,
        child_age: 5,
        location: CityTier::Tier2,
        education_level: EducationType::Public,
        healthcare_level: HealthcareLevel::Basic,
        extracurricular: true,
    }
}

#[test]
fn calculate_matches_reference_scenario() {
    let result = calculate(&preschool_input()).expect("calculation succeeds");

    assert_eq!(result.breakdown.basic_living, 18_000);
    assert_eq!(result.breakdown.education, 7_200);
    assert_eq!(result.breakdown.extracurricular, 3_600);
    assert_eq!(result.total_annual_cost, 34_295);
    assert_eq!(result.monthly_average_cost, 2_858);
    assert_eq!(result.user_input, preschool_input());
}

#[test]
fn breakdown_is_consistent_for_every_valid_input() {
    let service = CalculatorService::standard();
    for income in [1_000.0, 15_000.0, 30_000.0, 250_000.0] {
        for age in 0..=18 {
            for location in CityTier::ordered() {
                for education_level in EducationType::ordered() {
                    for healthcare_level in HealthcareLevel::ordered() {
                        for extracurricular in [true, false] {
                            let input = CalculatorInput {
                                monthly_income: income,
                                child_age: age,
                                location,
                                education_level,
                                healthcare_level,
                                extracurricular,
                            };
                            let result = service.calculate(&input).expect("calculates");
                            let breakdown = &result.breakdown;
                            assert_eq!(
                                breakdown.basic_living
                                    + breakdown.education
                                    + breakdown.healthcare
                                    + breakdown.extracurricular
                                    + breakdown.others,
                                result.total_annual_cost
                            );
                            assert!(breakdown.healthcare >= breakdown.vaccine_costs.total);
                            assert_eq!(
                                breakdown.vaccine_costs.total,
                                breakdown.vaccine_costs.paid + breakdown.vaccine_costs.optional
                            );
                            assert_eq!(breakdown.vaccine_costs.free, 0);
                            assert!(cost_percentages(breakdown).values().all(|p| *p <= 100));
                            assert!((8..=9).contains(&result.recommendations.len()));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn service_validates_raw_requests_against_configured_bounds() {
    let config = CalculatorConfig {
        optional_vaccine_income_threshold: 20_000.0,
        income_bounds: IncomeBounds {
            min: 2_000.0,
            max: 50_000.0,
        },
    };
    let service = CalculatorService::from_config(&config);

    let request = CalculatorRequest {
        monthly_income: 25_000.0,
        child_age: 9,
        location: "tier3".to_string(),
        education_level: None,
        healthcare_level: None,
        extracurricular: false,
    };
    let result = service.calculate_request(&request).expect("valid request");
    assert_eq!(result.breakdown.vaccine_costs.optional, 1_318);

    let too_rich = CalculatorRequest {
        monthly_income: 60_000.0,
        ..request.clone()
    };
    assert!(matches!(
        service.calculate_request(&too_rich),
        Err(CalculationError::InvalidInput {
            field: "monthly_income",
            ..
        })
    ));

    let unknown_school = CalculatorRequest {
        education_level: Some("boarding".to_string()),
        ..request
    };
    assert_eq!(
        service.calculate_request(&unknown_school).unwrap_err(),
        CalculationError::Configuration {
            field: "education_level",
            value: "boarding".to_string(),
        }
    );
}

#[test]
fn vaccine_projection_is_exposed_through_the_service() {
    let service = CalculatorService::standard();
    let without_optional = service.vaccine_projection(false);
    let with_optional = service.vaccine_projection(true);

    assert_eq!(
        with_optional.total_cost - without_optional.total_cost,
        230 + 188 + 3 * 1_318 + 3 * 180
    );
    assert_eq!(service.vaccines_due(12, false).total_cost, 698 + 165);
}
