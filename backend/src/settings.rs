//! Application settings loaded via OrthoConfig.
//!
//! Every value may come from CLI flags, `ATELIER_*` environment variables
//! or a configuration file. Absent values fall back to development
//! defaults through the accessors below.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STORAGE_ROOT: &str = "media";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080/media/";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Invalid values in otherwise loadable settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid public storage url {value}: {source}")]
    PublicBaseUrl {
        value: String,
        source: url::ParseError,
    },
}

/// Process-wide settings for the HTTP server and its adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ATELIER")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// Directory uploaded objects are written under.
    pub storage_root: Option<PathBuf>,
    /// Base URL uploaded objects are served from.
    pub public_base_url: Option<String>,
    /// Largest accepted upload body, in bytes.
    pub max_upload_bytes: Option<usize>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// Parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Non-empty database URL, if configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn storage_root(&self) -> PathBuf {
        self.storage_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_ROOT))
    }

    /// Parsed public base URL for stored objects.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::PublicBaseUrl`] when the value is not an
    /// absolute URL.
    pub fn public_base_url(&self) -> Result<Url, SettingsError> {
        let value = self
            .public_base_url
            .as_deref()
            .unwrap_or(DEFAULT_PUBLIC_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::PublicBaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// Pool settings for the configured database, if any.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let max_size = self
            .db_max_connections
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
        self.database_url()
            .map(|url| PoolConfig::new(url).with_max_size(max_size))
    }
}
