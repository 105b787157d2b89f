//! Color context: the one-shot resolved decoration map for a stream.
//!
//! TTY-ness belongs to the output destination, not the input, so the context
//! is resolved exactly once when a stream attaches to its destination and is
//! immutable afterward. When disabled, every decoration is the identity.

use owo_colors::OwoColorize;

use crate::level::Severity;

/// Resolved severity-to-decoration mapping for one stream.
#[derive(Debug, Clone, Copy)]
pub struct ColorContext {
    enabled: bool,
}

impl ColorContext {
    /// Resolve the context from a precomputed enabled flag.
    ///
    /// Callers compute `enabled` as
    /// `(supports_color() && destination_is_tty) || force_color`.
    pub const fn resolve(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether decorations are active.
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Decorate a severity token with that severity's color.
    ///
    /// `None` (unrecognized level string) renders undecorated even when
    /// colors are enabled.
    pub fn level(&self, severity: Option<Severity>, text: &str) -> String {
        match severity {
            Some(sev) if self.enabled => sev.paint(text),
            _ => text.to_string(),
        }
    }

    /// Decorate message text with the fixed cyan highlight.
    pub fn message(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Whether the environment permits color at all.
///
/// Honors the `NO_COLOR` convention and `TERM=dumb`. A force flag bypasses
/// this check entirely.
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    true
}
