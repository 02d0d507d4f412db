//! Server configuration parsed from environment variables.

use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Build server config from environment variables.
    ///
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `PUBLIC_DIR`: static asset root, default `public`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let public_dir = std::env::var("PUBLIC_DIR").map_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);
        Ok(Self { host, port, public_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load `.env` into the process environment: from `path` when given,
/// otherwise from the working directory or its ancestors. Variables already
/// set are not overridden. A missing file is not an error.
///
/// # Errors
///
/// Returns the `dotenvy` error when the file exists but cannot be read or
/// parsed.
pub fn load_dotenv(path: Option<&Path>) -> Result<(), dotenvy::Error> {
    let result = match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    match result {
        Err(e) if e.not_found() => Ok(()),
        other => other,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
