//! Server configuration parsed from environment variables.

use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but not a valid port number.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// The Markdown content directory does not exist.
    #[error("content directory not found: {}", .0.display())]
    MissingDocsDir(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served at `/markdown`.
    pub docs_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `DOCS_DIR`: default `content/` at the workspace root
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` does not parse or `DOCS_DIR` is not a directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let docs_dir = resolve_docs_dir(std::env::var("DOCS_DIR").ok().as_deref());
        ensure_dir(&docs_dir)?;
        Ok(Self { host, port, docs_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn resolve_docs_dir(raw: Option<&str>) -> PathBuf {
    raw.filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../content"))
}

fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    if path.is_dir() { Ok(()) } else { Err(ConfigError::MissingDocsDir(path.to_path_buf())) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
