//! Severity levels with parsing, display, and per-severity color styles.
//!
//! A record's `level` field must be a JSON string for the line to format at
//! all; this module turns that string into one of the six canonical
//! severities. Unrecognized level strings are not an error — they render
//! uppercased without decoration.

use std::fmt;

use owo_colors::OwoColorize;

/// Canonical severity enumeration, ordered ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// All six severities, ascending.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Uppercased display token (e.g. `"INFO"`).
    pub const fn token(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Parse a level string, case-insensitive.
    ///
    /// Only the six canonical names are recognized; anything else is `None`
    /// and the caller falls back to undecorated rendering.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "fatal" => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Decorate `text` with this severity's color.
    ///
    /// Fatal is background-highlighted; the rest are conventional foreground
    /// colors (error red, warn yellow, info green, debug blue, trace grey).
    /// Each decoration closes with the per-attribute sequence (`\x1b[39m`
    /// for foreground, `\x1b[49m` for background), not the full reset.
    pub fn paint(self, text: &str) -> String {
        match self {
            Self::Trace => text.bright_black().to_string(),
            Self::Debug => text.blue().to_string(),
            Self::Info => text.green().to_string(),
            Self::Warn => text.yellow().to_string(),
            Self::Error => text.red().to_string(),
            Self::Fatal => text.on_red().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
