use escola_core::config::{env_flag_or, env_or, env_string_or};

/// Registry service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RegistryConfig {
    /// Database URL; SQLite or Postgres (default `sqlite://gerenciamento.db?mode=rwc`).
    /// Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 5001). Env var: `GERENCIAMENTO_PORT`.
    pub port: u16,
    /// Apply pending migrations at startup (default true). Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

impl RegistryConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env_string_or("DATABASE_URL", "sqlite://gerenciamento.db?mode=rwc"),
            port: env_or("GERENCIAMENTO_PORT", 5001),
            run_migrations: env_flag_or("RUN_MIGRATIONS", true),
        }
    }
}
