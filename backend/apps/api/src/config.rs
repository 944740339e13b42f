//! Server Configuration
//!
//! Process-level settings read once from the environment at startup.

use std::net::SocketAddr;

use platform::config::{ConfigError, env_opt, env_parse_or, split_list};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `None` runs on in-memory stores
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env_parse_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))?;

        let origins =
            env_opt("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());

        Ok(Self {
            bind_addr,
            database_url: env_opt("DATABASE_URL"),
            max_connections: env_parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            frontend_origins: split_list(&origins),
        })
    }
}
