use axum::http::HeaderValue;
use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: String,
    pub seed_mode: SeedMode,
    pub cors_origin: CorsOrigin,
    pub log_level: String,
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

/// What to load into a freshly initialised database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    None,
    Categories,
    Sample,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = env_map
            .get("HOST")
            .map(|s| s.as_str())
            .unwrap_or("127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue("HOST".to_string(), "must be an IP address".to_string())
            })?;

        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let seed_mode = match env_map
            .get("SEED_MODE")
            .map(|s| s.as_str())
            .unwrap_or("categories")
        {
            "none" => SeedMode::None,
            "categories" => SeedMode::Categories,
            "sample" => SeedMode::Sample,
            other => {
                return Err(ConfigError::InvalidValue(
                    "SEED_MODE".to_string(),
                    format!("must be none, categories, or sample, got {}", other),
                ))
            }
        };

        let cors_origin = match env_map
            .get("CORS_ALLOW_ORIGIN")
            .map(|s| s.trim())
            .unwrap_or("*")
        {
            "*" => CorsOrigin::Any,
            origin => HeaderValue::from_str(origin)
                .map(CorsOrigin::Exact)
                .map_err(|_| {
                    ConfigError::InvalidValue(
                        "CORS_ALLOW_ORIGIN".to_string(),
                        "must be * or a valid origin header value".to_string(),
                    )
                })?,
        };

        let log_level = env_map
            .get("LOG_LEVEL")
            .cloned()
            .unwrap_or_else(|| "info".to_string());

        Ok(Config {
            host,
            port,
            database_path,
            seed_mode,
            cors_origin,
            log_level,
        })
    }
}
