//! Lexer configuration.
//!
//! Settings are plain data with serde derives so a driver can keep them in
//! a TOML file next to the rest of its configuration:
//!
//! ```toml
//! unknown_chars = "report"
//! initial_capacity = 64
//! ```

use std::path::Path;

use arixc_util::INITIAL_CAP;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What the lexer does with a byte that starts no token.
///
/// ASCII whitespace (space, tab, carriage return, newline) is always skipped
/// silently; the policy applies to every other unrecognised byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCharPolicy {
    /// Drop the byte and continue.
    #[default]
    Skip,
    /// Drop the byte, record an error diagnostic, and continue.
    Report,
    /// Stop the scan with [`LexError::UnexpectedChar`](crate::LexError::UnexpectedChar).
    Reject,
}

/// Lexer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexConfig {
    /// Handling of unrecognised bytes.
    #[serde(default)]
    pub unknown_chars: UnknownCharPolicy,

    /// Capacity the token buffer starts with. Values below the buffer's
    /// minimum capacity are raised to it.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

/// Largest accepted `initial_capacity`.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

fn default_initial_capacity() -> usize {
    INITIAL_CAP
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            unknown_chars: UnknownCharPolicy::default(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl LexConfig {
    /// Parses a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid {
                key: "initial_capacity",
                reason: format!(
                    "is {}, the maximum is {}",
                    self.initial_capacity, MAX_INITIAL_CAPACITY
                ),
            });
        }
        Ok(())
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns a copy with the given unknown-byte policy.
    pub fn with_unknown_chars(mut self, policy: UnknownCharPolicy) -> Self {
        self.unknown_chars = policy;
        self
    }
}
