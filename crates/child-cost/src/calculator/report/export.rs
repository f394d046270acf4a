use super::super::domain::CostCategory;
use super::{cost_percentages, CalculationResult};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV export: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl CalculationResult {
    /// One row per summed category, the itemized vaccine spend, then the total.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let percentages = cost_percentages(&self.breakdown);
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(["category", "amount", "percent"])?;
        for category in CostCategory::ordered() {
            let percent = percentages.get(&category).copied().unwrap_or_default();
            writer.write_record([
                category.label().to_string(),
                self.breakdown.amount(category).to_string(),
                percent.to_string(),
            ])?;
        }
        writer.write_record([
            "Vaccines (included in healthcare)".to_string(),
            self.breakdown.vaccine_costs.total.to_string(),
            String::new(),
        ])?;
        writer.write_record([
            "Total".to_string(),
            self.total_annual_cost.to_string(),
            "100".to_string(),
        ])?;

        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}
