//! Service configuration via `roster.toml`
//!
//! Every field is optional; an empty or missing file yields the defaults.
//! Command-line flags override what the file says.

use roster_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Service configuration loaded from `roster.toml`.
///
/// # Example
///
/// ```toml
/// host = "0.0.0.0"
/// port = 8080
/// first_id = 1
/// log_filter = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
    /// First id handed out to students submitted without one.
    #[serde(default = "default_first_id")]
    pub first_id: i64,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_first_id() -> i64 {
    1
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            first_id: default_first_id(),
            log_filter: default_log_filter(),
        }
    }
}

impl RosterConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if `first_id` is below 1.
    pub fn validate(&self) -> Result<()> {
        if self.first_id < 1 {
            return Err(Error::config(format!(
                "first_id must be at least 1, got {}",
                self.first_id
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Roster service configuration
#
# Interface and port to listen on.
host = "0.0.0.0"
port = 8080

# First id assigned to students submitted with a null id.
first_id = 1

# Log filter used when RUST_LOG is not set (e.g. "debug", "roster_engine=debug").
log_filter = "info"
"#
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML for this shape or
    /// fails validation.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
