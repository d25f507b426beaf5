use dotenv::dotenv;
use std::env;
use std::sync::OnceLock;

use crate::utils::errors::ApiError;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
}

impl AppConfig {

    /// Reads `SERVER_HOST` and `SERVER_PORT`, falling back to `127.0.0.1:8080`.
    pub fn from_env() -> Result<AppConfig, ApiError> {
        let server_host = env::var("SERVER_HOST")
            .ok()
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port.trim().parse::<u16>().map_err(|e| {
                ApiError::InternalServerError(format!("SERVER_PORT must be a valid port: {}", e))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(AppConfig { server_host, server_port })
    }

    /// Loads `.env` once and caches the result for the life of the process.
    pub fn global() -> Result<&'static AppConfig, ApiError> {
        if let Some(config) = CONFIG.get() {
            return Ok(config);
        }

        dotenv().ok();
        let config = Self::from_env()?;
        Ok(CONFIG.get_or_init(|| config))
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server_host.clone(), self.server_port)
    }
}
