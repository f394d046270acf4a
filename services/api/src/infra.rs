use child_cost::calculator::CalculatorService;
use child_cost::config::AppConfig;
use child_cost::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service wired with the calculator policy from the environment.
pub(crate) fn configured_service() -> Result<CalculatorService, AppError> {
    let config = AppConfig::load()?;
    Ok(CalculatorService::from_config(&config.calculator))
}
