//! Error types for arixc-lex.

use std::fmt;
use std::path::PathBuf;

use arixc_util::Span;
use thiserror::Error;

/// Lexer features that are reserved but not implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Double-quoted string literals.
    StringLiteral,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::StringLiteral => write!(f, "string literals"),
        }
    }
}

/// Conditions that stop a scan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The input needs a lexer feature that does not exist yet.
    #[error("{} are not implemented (at {}:{})", .feature, .span.line, .span.column)]
    Unsupported {
        /// The missing feature.
        feature: Feature,
        /// The lexeme that needed it.
        span: Span,
    },

    /// A byte that starts no token, under [`UnknownCharPolicy::Reject`].
    ///
    /// [`UnknownCharPolicy::Reject`]: crate::config::UnknownCharPolicy::Reject
    #[error("unexpected character {:?} (at {}:{})", .ch, .span.line, .span.column)]
    UnexpectedChar {
        /// The rejected byte, as a character.
        ch: char,
        /// Where it was found.
        span: Span,
    },
}

impl LexError {
    /// Location of the offending input.
    pub fn span(&self) -> Span {
        match self {
            LexError::Unsupported { span, .. } | LexError::UnexpectedChar { span, .. } => *span,
        }
    }
}

/// Errors raised while loading a [`LexConfig`](crate::config::LexConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`LexConfig`](crate::config::LexConfig).
    #[error("invalid lexer config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting parsed but holds a value the lexer cannot use.
    #[error("invalid lexer config: `{key}` {reason}")]
    Invalid {
        /// The offending key.
        key: &'static str,
        /// What is wrong with its value.
        reason: String,
    },
}

/// Result type alias for scanning.
pub type LexResult<T> = std::result::Result<T, LexError>;
