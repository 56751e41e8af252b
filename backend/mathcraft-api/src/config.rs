use serde::Deserialize;
use std::env;

use crate::models::Question;

const DEFAULT_METRICS_AUTH: &str = "admin:changeme";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_ttl_seconds: i64,
    pub sweep_interval_seconds: u64,
    /// `username:password` for the /metrics Basic auth guard.
    pub metrics_auth: String,
    /// Replaces the built-in question bank when set.
    pub questions: Option<Vec<Question>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            session_ttl_seconds: 3600,
            sweep_interval_seconds: 60,
            metrics_auth: DEFAULT_METRICS_AUTH.to_string(),
            questions: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Override with environment variables (prefix: APP__)
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_settings(&settings, &env)
    }

    /// Reads the typed config out of already merged sources.
    pub fn from_settings(
        settings: &config::Config,
        env: &str,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Config::default();

        let host = settings
            .get_string("server.host")
            .unwrap_or(defaults.host);

        let port = match settings.get_int("server.port") {
            Ok(port) => u16::try_from(port).map_err(|_| {
                config::ConfigError::Message(format!("server.port out of range: {}", port))
            })?,
            Err(config::ConfigError::NotFound(_)) => defaults.port,
            Err(e) => return Err(e),
        };

        let session_ttl_seconds = positive_int(settings, "session.ttl_seconds")?
            .unwrap_or(defaults.session_ttl_seconds);

        let sweep_interval_seconds = positive_int(settings, "session.sweep_interval_seconds")?
            .map(|v| v as u64)
            .unwrap_or(defaults.sweep_interval_seconds);

        let metrics_auth = match settings.get_string("metrics.auth") {
            Ok(auth) => auth,
            Err(_) if env == "prod" => {
                return Err(config::ConfigError::Message(
                    "metrics.auth must be set in production".to_string(),
                ));
            }
            Err(_) => {
                tracing::warn!("Using default metrics credentials (dev mode only!)");
                defaults.metrics_auth
            }
        };

        let questions = match settings.get::<Vec<Question>>("quiz.questions") {
            Ok(questions) => Some(questions),
            Err(config::ConfigError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Config {
            host,
            port,
            session_ttl_seconds,
            sweep_interval_seconds,
            metrics_auth,
            questions,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Missing keys fall back to defaults; present ones must parse and be positive.
fn positive_int(
    settings: &config::Config,
    key: &str,
) -> Result<Option<i64>, config::ConfigError> {
    match settings.get_int(key) {
        Ok(value) if value > 0 => Ok(Some(value)),
        Ok(value) => Err(config::ConfigError::Message(format!(
            "{} must be positive, got {}",
            key, value
        ))),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
