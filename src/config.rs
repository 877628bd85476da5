//! Server configuration parsed from environment variables.
//!
//! Values are read through a lookup function so parsing can be tested
//! without touching the process environment. `main` loads `.env` first with
//! `dotenvy`, then calls [`ServerConfig::from_env`].

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MEDIA_DIR: &str = "public";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST `{0}`: expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT `{0}`: expected 1-65535")]
    InvalidPort(String),
    #[error("FOLIO_MEDIA_DIR is empty")]
    EmptyMediaDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Static media (profile photos, portfolio images and videos).
    pub media_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `FOLIO_MEDIA_DIR`: default `public`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_host(lookup("HOST").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        let media_dir = parse_media_dir(lookup("FOLIO_MEDIA_DIR").as_deref())?;
        Ok(Self { host, port, media_dir })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = raw.map_or(DEFAULT_HOST, str::trim);
    raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_owned())),
        Ok(port) => Ok(port),
    }
}

fn parse_media_dir(raw: Option<&str>) -> Result<PathBuf, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(PathBuf::from(DEFAULT_MEDIA_DIR)),
        Some("") => Err(ConfigError::EmptyMediaDir),
        Some(dir) => Ok(PathBuf::from(dir)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
