use std::env;

use crate::error::AppError;

/// Process-level settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Fixed seed for random picks; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => 3001,
        };

        let rng_seed = match env::var("PICKER_RNG_SEED") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                AppError::config(format!("PICKER_RNG_SEED must be an unsigned integer, got '{raw}'"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            host,
            port,
            rng_seed,
        })
    }
}
