use crate::cli::{CalculateArgs, DueArgs, OutputFormat, ScheduleArgs};
use crate::infra::configured_service;
use child_cost::calculator::{
    cost_percentages, CalculationResponse, CalculationResult, CalculatorRequest, CostCategory,
    CostProjection, VaccinationCosts, VaccineRecord,
};
use child_cost::error::AppError;

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let CalculateArgs {
        income,
        age,
        location,
        education,
        healthcare,
        extracurricular,
        projection,
        format,
    } = args;

    let service = configured_service()?;
    let request = CalculatorRequest {
        monthly_income: income,
        child_age: age,
        location,
        education_level: education,
        healthcare_level: healthcare,
        extracurricular,
    };
    let input = service.validator().validate(&request)?;
    let result = service.calculate(&input)?;
    let projection = if projection {
        Some(service.project(&input)?)
    } else {
        None
    };

    match format {
        OutputFormat::Text => {
            render_result(&result);
            if let Some(projection) = &projection {
                render_projection(projection);
            }
        }
        OutputFormat::Json => {
            let percentages = cost_percentages(&result.breakdown);
            let response = CalculationResponse {
                result,
                percentages,
            };
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("Result payload unavailable: {err}"),
            }
            if let Some(projection) = &projection {
                match serde_json::to_string_pretty(projection) {
                    Ok(json) => println!("{json}"),
                    Err(err) => println!("Projection payload unavailable: {err}"),
                }
            }
        }
        OutputFormat::Csv => print!("{}", result.to_csv()?),
    }

    Ok(())
}

pub(crate) fn run_vaccine_schedule(args: ScheduleArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let projection = service.vaccine_projection(args.include_optional);

    println!(
        "Vaccination schedule, birth to 18 years ({})",
        if args.include_optional {
            "including optional vaccines"
        } else {
            "free and paid vaccines"
        }
    );
    for (year, vaccines) in &projection.vaccine_schedule {
        let cost = projection.annual_breakdown.get(year).copied().unwrap_or(0);
        println!("\nAge {year}: ¥{cost}");
        for vaccine in vaccines {
            println!("- {}", vaccine_line(vaccine));
        }
    }
    println!("\nTotal self-funded vaccine cost: ¥{}", projection.total_cost);

    Ok(())
}

pub(crate) fn run_vaccine_due(args: DueArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let costs = service.vaccines_due(args.age_months, args.include_optional);
    render_vaccines_due(&costs);
    Ok(())
}

fn render_result(result: &CalculationResult) {
    let input = &result.user_input;
    println!("Child cost estimate");
    println!(
        "Child age {} (band {}) | {} | {} | {} | extracurricular {}",
        input.child_age,
        result.age_band.label(),
        input.location.label(),
        input.education_level.label(),
        input.healthcare_level.label(),
        if input.extracurricular { "yes" } else { "no" }
    );
    println!(
        "Total annual cost ¥{} | monthly average ¥{}",
        result.total_annual_cost, result.monthly_average_cost
    );

    let percentages = cost_percentages(&result.breakdown);
    println!("\nBreakdown");
    for category in CostCategory::ordered() {
        println!(
            "- {}: ¥{} ({}%)",
            category.label(),
            result.breakdown.amount(category),
            percentages.get(&category).copied().unwrap_or(0)
        );
    }
    let vaccines = &result.breakdown.vaccine_costs;
    println!(
        "  of which vaccines: ¥{} (paid ¥{}, optional ¥{})",
        vaccines.total, vaccines.paid, vaccines.optional
    );

    println!("\nRecommendations");
    for recommendation in &result.recommendations {
        println!("- {recommendation}");
    }
    println!("\nCalculated at {}", result.timestamp.to_rfc3339());
}

fn render_projection(projection: &CostProjection) {
    println!("\nProjection to age 18");
    for year in &projection.years {
        println!(
            "- Age {} ({}): ¥{}",
            year.age,
            year.age_band.label(),
            year.total_annual_cost
        );
    }
    println!(
        "Cumulative cost from age {}: ¥{}",
        projection.from_age, projection.cumulative_cost
    );
}

fn render_vaccines_due(costs: &VaccinationCosts) {
    println!("Vaccines due at {} months", costs.age_months);
    let due = costs
        .free_vaccines
        .iter()
        .chain(&costs.paid_vaccines)
        .chain(&costs.optional_vaccines);
    let mut any = false;
    for vaccine in due {
        any = true;
        println!("- {}", vaccine_line(vaccine));
    }
    if !any {
        println!("- none");
    }
    println!(
        "Cost this month: ¥{} (paid ¥{}, optional ¥{})",
        costs.total_cost, costs.breakdown.paid, costs.breakdown.optional
    );
}

fn vaccine_line(vaccine: &VaccineRecord) -> String {
    format!(
        "{} [{}] ¥{}: {}",
        vaccine.name,
        vaccine.category.label(),
        vaccine.price,
        vaccine.description
    )
}
