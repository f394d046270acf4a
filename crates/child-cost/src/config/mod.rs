use crate::calculator::vaccination::OPTIONAL_VACCINE_INCOME_THRESHOLD;
use crate::calculator::validation::IncomeBounds;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub calculator: CalculatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            calculator: CalculatorConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Calculator policy overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    /// Monthly income from which optional vaccines are costed.
    pub optional_vaccine_income_threshold: f64,
    pub income_bounds: IncomeBounds,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            optional_vaccine_income_threshold: OPTIONAL_VACCINE_INCOME_THRESHOLD,
            income_bounds: IncomeBounds::default(),
        }
    }
}

impl CalculatorConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let optional_vaccine_income_threshold = amount_from_env(
            "CALC_OPTIONAL_VACCINE_THRESHOLD",
            defaults.optional_vaccine_income_threshold,
        )?;
        let min = amount_from_env("CALC_MIN_MONTHLY_INCOME", defaults.income_bounds.min)?;
        let max = amount_from_env("CALC_MAX_MONTHLY_INCOME", defaults.income_bounds.max)?;
        if min > max {
            return Err(ConfigError::InvalidIncomeBounds { min, max });
        }

        Ok(Self {
            optional_vaccine_income_threshold,
            income_bounds: IncomeBounds { min, max },
        })
    }
}

fn amount_from_env(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ConfigError::InvalidAmount { key, value: raw }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidAmount { key: &'static str, value: String },
    InvalidIncomeBounds { min: f64, max: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidAmount { key, value } => {
                write!(f, "{key} must be a non-negative number, got '{value}'")
            }
            ConfigError::InvalidIncomeBounds { min, max } => write!(
                f,
                "CALC_MIN_MONTHLY_INCOME ({min}) must not exceed CALC_MAX_MONTHLY_INCOME ({max})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidAmount { .. }
            | ConfigError::InvalidIncomeBounds { .. } => None,
        }
    }
}
