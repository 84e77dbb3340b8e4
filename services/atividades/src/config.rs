use std::time::Duration;

use escola_core::config::{env_or, env_string_or};

/// Activity service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ActivityConfig {
    /// TCP port for the HTTP server (default 5003). Env var: `ATIVIDADES_PORT`.
    pub port: u16,
    /// Registry base URL including `/api`. Env var: `REGISTRY_URL`.
    pub registry_url: String,
    /// Per-request timeout for registry lookups. Env var: `REGISTRY_TIMEOUT_MS`.
    pub registry_timeout: Duration,
    /// Extra attempts after a transient lookup failure. Env var: `REGISTRY_RETRIES`.
    pub registry_retries: u32,
}

impl ActivityConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_or("ATIVIDADES_PORT", 5003),
            registry_url: env_string_or("REGISTRY_URL", "http://gerenciamento:5001/api"),
            registry_timeout: Duration::from_millis(env_or("REGISTRY_TIMEOUT_MS", 3000)),
            registry_retries: env_or("REGISTRY_RETRIES", 1),
        }
    }
}
