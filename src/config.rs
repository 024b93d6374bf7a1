use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub fetch: FetchConfig,
}

/// Settings for the outbound page request.
#[derive(Clone, Debug)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let mut fetch = FetchConfig::default();
        if let Some(secs) = lookup("FETCH_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|e| AppError::ConfigError(format!("Invalid fetch timeout: {}", e)))?;
            if secs == 0 {
                return Err(AppError::ConfigError("Fetch timeout must be positive".to_string()));
            }
            fetch.timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = lookup("USER_AGENT").filter(|ua| !ua.trim().is_empty()) {
            fetch.user_agent = user_agent;
        }

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            fetch,
        })
    }
}
