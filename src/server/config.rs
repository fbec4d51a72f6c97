use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Single origin allowed by the CORS layer. `None` allows any origin.
    pub cors_allowed_origin: Option<HeaderValue>,

    pub enable_api_docs: bool,

    /// Compare path id and body id on appointment updates.
    pub appointment_id_check: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| invalid("BIND_ADDRESS", &bind_address))?;

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|_| invalid("CORS_ALLOWED_ORIGIN", &origin))
            })
            .transpose()?;

        Ok(Self {
            database_url,
            bind_address,
            cors_allowed_origin,
            enable_api_docs: parse_flag(&lookup, "ENABLE_API_DOCS", true)?,
            appointment_id_check: parse_flag(&lookup, "APPOINTMENT_ID_CHECK", false)?,
        })
    }
}

fn parse_flag<F>(lookup: &F, name: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(invalid(name, &value)),
    }
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}
