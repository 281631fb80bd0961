//! Configuration location
//!
//! Resolves where the client keeps its configuration. The directory lives
//! under the user's home directory: `~/.mc` on Unix-like systems and
//! `%USERPROFILE%\mc` on Windows, with the configuration file at
//! `config.json` inside it.
//!
//! Nothing here touches the filesystem beyond the home directory lookup.
//! Creating the directory and reading the file belong to the caller.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the client directory under the home directory
#[cfg(not(windows))]
pub const CONFIG_DIR_NAME: &str = ".mc";

/// Name of the client directory under the home directory
#[cfg(windows)]
pub const CONFIG_DIR_NAME: &str = "mc";

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

const SESSION_DIR_NAME: &str = "session";
const CERTS_DIR_NAME: &str = "certs";
const CAS_DIR_NAME: &str = "CAs";

/// Resolved configuration location
///
/// Resolve once at startup and pass it to whatever needs a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocator {
    config_dir: PathBuf,
}

impl ConfigLocator {
    /// Create a locator under the current user's home directory
    pub fn new() -> Result<Self> {
        Self::resolve(home_dir)
    }

    /// Create a locator under the given home directory
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: home.into().join(CONFIG_DIR_NAME),
        }
    }

    /// Create a locator that uses `dir` as the config directory as-is
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: dir.into(),
        }
    }

    fn resolve(lookup: impl FnOnce() -> Result<PathBuf>) -> Result<Self> {
        let home = lookup()?;
        let locator = Self::with_home(home);
        tracing::debug!(config_dir = %locator.config_dir.display(), "resolved config directory");
        Ok(locator)
    }

    /// Get the configuration directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Get the directory holding saved sessions
    pub fn session_dir(&self) -> PathBuf {
        self.config_dir.join(SESSION_DIR_NAME)
    }

    /// Get the directory holding TLS certificates
    pub fn certs_dir(&self) -> PathBuf {
        self.config_dir.join(CERTS_DIR_NAME)
    }

    /// Get the directory holding trusted CA certificates
    pub fn cas_dir(&self) -> PathBuf {
        self.certs_dir().join(CAS_DIR_NAME)
    }
}

/// Resolve the current user's home directory
///
/// This is the only place the platform lookup happens.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::HomeResolution)
}

/// Resolve the configuration directory
pub fn config_dir() -> Result<PathBuf> {
    Ok(ConfigLocator::new()?.config_dir)
}

/// Resolve the configuration file path
pub fn config_path() -> Result<PathBuf> {
    Ok(ConfigLocator::new()?.config_path())
}

/// Resolve the configuration directory, exiting the process on failure
pub fn must_config_dir() -> PathBuf {
    must(config_dir())
}

/// Resolve the configuration file path, exiting the process on failure
pub fn must_config_path() -> PathBuf {
    must(config_path())
}

fn must<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "unable to resolve configuration location");
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
