//! Process-level settings for the HTTP server binary.

use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 10000;

/// Catalog directory used when `BAR_OPS_CONFIG_DIR` is not set.
pub const DEFAULT_CONFIG_DIR: &str = "./config/bar-ops";

/// Origins always accepted by CORS, in addition to `FRONTEND_URL`.
pub const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:4173"];

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// Directory holding the YAML catalog.
    pub config_dir: PathBuf,
    /// Deployed frontend origin, if any.
    pub frontend_url: Option<String>,
}

impl ServerConfig {
    /// Reads the server settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the server settings through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match read("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| EngineError::ConfigParseError {
                    path: "env:PORT".to_string(),
                    message: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            config_dir: read("BAR_OPS_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            frontend_url: read("FRONTEND_URL").map(|v| v.trim().trim_end_matches('/').to_string()),
        })
    }

    /// Returns true if a browser request from `origin` may call the API.
    ///
    /// Accepted: the configured frontend, the Vite dev/preview origins, any
    /// localhost port, and any `onrender.com` deployment.
    ///
    /// # Example
    ///
    /// ```
    /// use bar_ops_engine::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_lookup(|_| None).unwrap();
    /// assert!(config.allows_origin("http://localhost:3000"));
    /// assert!(config.allows_origin("https://bar-ops.onrender.com"));
    /// assert!(!config.allows_origin("https://example.com"));
    /// ```
    pub fn allows_origin(&self, origin: &str) -> bool {
        if self.frontend_url.as_deref() == Some(origin) || DEV_ORIGINS.contains(&origin) {
            return true;
        }
        origin.ends_with(".onrender.com") || origin.starts_with("http://localhost:")
    }
}
