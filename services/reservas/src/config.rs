use std::time::Duration;

use escola_core::config::{env_or, env_string_or};

/// Reservation service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ReservationConfig {
    /// TCP port for the HTTP server (default 5002). Env var: `RESERVAS_PORT`.
    pub port: u16,
    /// Registry base URL including `/api`. Env var: `REGISTRY_URL`.
    pub registry_url: String,
    pub registry_timeout: Duration,
    pub registry_retries: u32,
}

impl ReservationConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_or("RESERVAS_PORT", 5002),
            registry_url: env_string_or("REGISTRY_URL", "http://gerenciamento:5001/api"),
            registry_timeout: Duration::from_millis(env_or("REGISTRY_TIMEOUT_MS", 3000)),
            registry_retries: env_or("REGISTRY_RETRIES", 1),
        }
    }
}
