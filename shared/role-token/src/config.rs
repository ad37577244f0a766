//! Codec Configuration
//!
//! Loads configuration from environment variables or from a host config file
//! through serde.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, RoleTokenError};

/// Environment variable selecting the [`MalformedRecordPolicy`].
pub const MALFORMED_RECORDS_ENV: &str = "ROLE_TOKEN_MALFORMED_RECORDS";

/// What the decoder does with a record it cannot parse.
///
/// Records with well-formed but unassigned codes are always skipped; this
/// policy only covers records that fail to parse at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRecordPolicy {
    /// Abort the whole decode with [`RoleTokenError::MalformedRecord`].
    #[default]
    Reject,
    /// Drop the record and keep decoding the rest of the claim.
    Skip,
}

impl MalformedRecordPolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for MalformedRecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MalformedRecordPolicy {
    type Err = RoleTokenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            other => Err(RoleTokenError::Config(format!(
                "{MALFORMED_RECORDS_ENV} must be 'reject' or 'skip', got '{other}'"
            ))),
        }
    }
}

/// Codec configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Handling of records that cannot be parsed (default: reject).
    pub malformed_records: MalformedRecordPolicy,
}

impl CodecConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let malformed_records = match env::var(MALFORMED_RECORDS_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => MalformedRecordPolicy::default(),
        };

        Ok(Self { malformed_records })
    }

    /// Configuration that skips malformed records.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            malformed_records: MalformedRecordPolicy::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_default_rejects_malformed_records() {
        assert_eq!(
            CodecConfig::default().malformed_records,
            MalformedRecordPolicy::Reject
        );
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("skip".parse::<MalformedRecordPolicy>(), Ok(MalformedRecordPolicy::Skip));
        assert_eq!(" Reject ".parse::<MalformedRecordPolicy>(), Ok(MalformedRecordPolicy::Reject));
        assert!(matches!(
            "ignore".parse::<MalformedRecordPolicy>(),
            Err(RoleTokenError::Config(_))
        ));
    }

    #[test]
    fn test_deserialize_config() {
        let config: CodecConfig =
            serde_json::from_str(r#"{ "malformed_records": "skip" }"#).unwrap();
        assert_eq!(config, CodecConfig::lenient());

        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        env::remove_var(MALFORMED_RECORDS_ENV);
        assert_eq!(CodecConfig::from_env().unwrap(), CodecConfig::default());

        env::set_var(MALFORMED_RECORDS_ENV, "SKIP");
        assert_eq!(CodecConfig::from_env().unwrap(), CodecConfig::lenient());

        env::set_var(MALFORMED_RECORDS_ENV, "sometimes");
        assert!(CodecConfig::from_env().is_err());

        env::remove_var(MALFORMED_RECORDS_ENV);
    }
}
