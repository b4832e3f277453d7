use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ledger: LedgerSettings,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

/// Where the trade ledger lives.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    pub backend: LedgerBackend,
    /// The CSV file backing the ledger. Ignored by the memory backend.
    pub path: PathBuf,
}

/// Which `LedgerStore` implementation to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LedgerBackend {
    /// A flat CSV file, rewritten on every append.
    #[default]
    Csv,
    /// Held in memory and lost on exit.
    Memory,
}

impl fmt::Display for LedgerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerBackend::Csv => f.write_str("csv"),
            LedgerBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Contains parameters for the JSON web API.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Contains parameters for log output.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Filter used when `RUST_LOG` is not set (e.g. "info", "ledger=debug").
    pub level: String,
    /// When set, logs are also written to daily-rotated files in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Rejects settings that would only fail later, at first use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger.backend == LedgerBackend::Csv && self.ledger.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "ledger.path",
                reason: "the csv backend needs a file path".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                field: "server.port",
                reason: "port 0 is not a fixed address".to_string(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
