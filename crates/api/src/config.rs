//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use database::PoolSettings;
use gemini_provider::GeminiConfig;
use provider_core::ProviderError;

/// Which code provider to run with.
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    /// Google Gemini over HTTP.
    Gemini(GeminiConfig),
    /// Offline echo provider; needs no credentials.
    Mock,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLx SQLite database URL.
    pub database_url: String,
    /// Connection pool bounds.
    pub pool: PoolSettings,
    /// Insert the default languages at startup.
    pub seed_languages: bool,
    /// Provider selection and settings.
    pub provider: ProviderConfig,
    /// Allowed CORS origin; `*` allows any.
    pub cors_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `COPILOT_ADDR` | Server bind address | `127.0.0.1:5000` |
    /// | `DATABASE_URL` | SQLite database URL | `sqlite:copilot.db?mode=rwc` |
    /// | `DB_POOL_MAX` | Max pooled connections | `5` |
    /// | `DB_POOL_MIN` | Min pooled connections | `0` |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | Wait for a free connection | `30` |
    /// | `DB_IDLE_TIMEOUT_SECS` | Idle connection lifetime | `10` |
    /// | `COPILOT_SEED_LANGUAGES` | Seed default languages | `true` |
    /// | `COPILOT_PROVIDER` | `gemini` or `mock` | `gemini` |
    /// | `COPILOT_CORS_ORIGIN` | Allowed CORS origin | `*` |
    ///
    /// The Gemini provider reads its own `GEMINI_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("COPILOT_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:copilot.db?mode=rwc".to_string());

        let defaults = PoolSettings::default();
        let pool = PoolSettings {
            max_connections: parse_var("DB_POOL_MAX")?.unwrap_or(defaults.max_connections),
            min_connections: parse_var("DB_POOL_MIN")?.unwrap_or(defaults.min_connections),
            acquire_timeout: parse_var("DB_ACQUIRE_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.acquire_timeout),
            idle_timeout: parse_var("DB_IDLE_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .or(defaults.idle_timeout),
        };
        if pool.max_connections == 0 || pool.min_connections > pool.max_connections {
            return Err(ConfigError::InvalidPool);
        }

        let seed_languages = match env::var("COPILOT_SEED_LANGUAGES") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidValue {
                var: "COPILOT_SEED_LANGUAGES",
                value,
            })?,
            Err(_) => true,
        };

        let provider = match env::var("COPILOT_PROVIDER")
            .unwrap_or_else(|_| "gemini".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "gemini" => ProviderConfig::Gemini(GeminiConfig::from_env()?),
            "mock" => ProviderConfig::Mock,
            other => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        let cors_origin = env::var("COPILOT_CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            addr,
            database_url,
            pool,
            seed_languages,
            provider,
            cors_origin,
        })
    }
}

fn parse_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(None),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid COPILOT_ADDR format")]
    InvalidAddr,

    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("DB_POOL_MAX must be at least 1 and not below DB_POOL_MIN")]
    InvalidPool,

    #[error("Unknown COPILOT_PROVIDER: {0} (expected gemini or mock)")]
    UnknownProvider(String),

    #[error("Provider configuration: {0}")]
    Provider(#[from] ProviderError),
}
