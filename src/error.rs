//! Error types for the `plume` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.
//!
//! Per-line failures (malformed JSON, missing record fields, unparseable
//! timestamps) are deliberately *not* represented here: the line contract
//! degrades them to pass-through or clause omission instead of raising.

use thiserror::Error;

/// Errors that can occur in `plume`.
///
/// Maps to exit codes: [`Config`](Self::Config) → exit 1,
/// [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum PlumeError {
    /// Configuration error (unreadable config file, bad option value).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Stream lifecycle misuse: `attach` called twice, or `write`/`end`
    /// called in a state that does not accept them.
    #[error("invalid stream state: {0}")]
    State(&'static str),
}
