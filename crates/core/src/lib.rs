//! mc-core: Validation and resolution core for the mc storage client
//!
//! This crate provides the pieces the client checks before talking to
//! any server:
//! - Access permission validation
//! - Configuration directory and file location
//! - Alias name validation
//! - Human-readable elapsed durations
//!
//! Everything here is a pure function or a read-only home directory
//! lookup, safe to call from any thread.

pub mod access;
pub mod alias;
pub mod config;
pub mod duration;
pub mod error;

pub use access::{is_valid_access_permission, AccessLevel, AccessPerms};
pub use alias::{is_valid_alias, AliasName};
pub use config::{
    config_dir, config_path, home_dir, must_config_dir, must_config_path, ConfigLocator,
};
pub use duration::{humanize, humanize_signed, HumanizedDuration};
pub use error::{Error, Result};
