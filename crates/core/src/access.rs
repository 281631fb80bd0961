//! Access permissions
//!
//! Buckets and object prefixes carry a coarse anonymous-access setting:
//! `none`, `public`, `download` or `upload`. Any string can be held as an
//! [`AccessPerms`]; whether it is one of the recognized values is a
//! separate query, so callers can report invalid input in their own way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Check whether `value` is exactly one of the recognized access permissions
///
/// Matching is case-sensitive and the input is not trimmed.
pub fn is_valid_access_permission(value: &str) -> bool {
    AccessLevel::from_str(value).is_ok()
}

/// A recognized anonymous access level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// No anonymous access
    None,
    /// Anonymous read and write
    Public,
    /// Anonymous read only
    Download,
    /// Anonymous write only
    Upload,
}

impl AccessLevel {
    /// All recognized access levels
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::None,
        AccessLevel::Public,
        AccessLevel::Download,
        AccessLevel::Upload,
    ];

    /// Get the canonical string form
    pub const fn as_str(self) -> &'static str {
        match self {
            AccessLevel::None => "none",
            AccessLevel::Public => "public",
            AccessLevel::Download => "download",
            AccessLevel::Upload => "upload",
        }
    }

    /// Whether anonymous users may read objects
    pub const fn allows_read(self) -> bool {
        matches!(self, AccessLevel::Public | AccessLevel::Download)
    }

    /// Whether anonymous users may write objects
    pub const fn allows_write(self) -> bool {
        matches!(self, AccessLevel::Public | AccessLevel::Upload)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(AccessLevel::None),
            "public" => Ok(AccessLevel::Public),
            "download" => Ok(AccessLevel::Download),
            "upload" => Ok(AccessLevel::Upload),
            _ => Err(Error::InvalidPermission(s.to_string())),
        }
    }
}

/// An access permission token as supplied by the user
///
/// Construction never fails. Use [`AccessPerms::is_valid`] or
/// [`AccessPerms::level`] to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessPerms(String);

impl AccessPerms {
    /// Wrap a raw permission token
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the token is a recognized access permission
    pub fn is_valid(&self) -> bool {
        is_valid_access_permission(&self.0)
    }

    /// Get the recognized access level, if any
    pub fn level(&self) -> Option<AccessLevel> {
        self.0.parse().ok()
    }
}

impl From<&str> for AccessPerms {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccessPerms {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<AccessLevel> for AccessPerms {
    fn from(level: AccessLevel) -> Self {
        Self::new(level.as_str())
    }
}

impl fmt::Display for AccessPerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_perms() {
        for value in ["none", "public", "download", "upload"] {
            let perms = AccessPerms::from(value);
            assert!(perms.is_valid(), "{value} should be valid");
            assert_eq!(perms.as_str(), value);
        }
    }

    #[test]
    fn test_invalid_perms() {
        let perms = AccessPerms::from("invalid");
        assert!(!perms.is_valid());
        assert_eq!(perms.level(), None);
    }

    #[test]
    fn test_perms_are_exact_match() {
        assert!(!is_valid_access_permission(""));
        assert!(!is_valid_access_permission("None"));
        assert!(!is_valid_access_permission("PUBLIC"));
        assert!(!is_valid_access_permission(" download"));
        assert!(!is_valid_access_permission("upload\n"));
        assert!(!is_valid_access_permission("readonly"));
    }

    #[test]
    fn test_level_round_trip_through_str() {
        for level in AccessLevel::ALL {
            assert_eq!(level.as_str().parse::<AccessLevel>().unwrap(), level);
            assert_eq!(AccessPerms::from(level).level(), Some(level));
        }
    }

    #[test]
    fn test_level_parse_error() {
        let err = "private".parse::<AccessLevel>().unwrap_err();
        assert_eq!(err, Error::InvalidPermission("private".into()));
    }

    #[test]
    fn test_level_capabilities() {
        assert!(!AccessLevel::None.allows_read());
        assert!(!AccessLevel::None.allows_write());
        assert!(AccessLevel::Public.allows_read());
        assert!(AccessLevel::Public.allows_write());
        assert!(AccessLevel::Download.allows_read());
        assert!(!AccessLevel::Download.allows_write());
        assert!(!AccessLevel::Upload.allows_read());
        assert!(AccessLevel::Upload.allows_write());
    }

    #[test]
    fn test_serde_forms() {
        assert_eq!(
            serde_json::to_string(&AccessLevel::Download).unwrap(),
            "\"download\""
        );
        let perms: AccessPerms = serde_json::from_str("\"whatever\"").unwrap();
        assert!(!perms.is_valid());
        assert_eq!(perms.to_string(), "whatever");
    }
}
