//! `plume` — Prettify newline-delimited JSON log lines from stdin.
//!
//! This library provides the line-transform pipeline behind the `plume` CLI
//! tool: incremental line splitting, per-line JSON decoding with graceful
//! pass-through for anything that is not a well-formed log record, and
//! composition of human-readable, optionally color-coded output lines.
//!
//! # Example
//!
//! ```
//! use plume::{ColorContext, FormatOptions, format_line};
//!
//! let options = FormatOptions::default();
//! let colors = ColorContext::resolve(false);
//! let mut out = String::new();
//!
//! let line = r#"{"level":"info","time":1768473000123,"msg":"hello"}"#;
//! format_line(line, &options, &colors, &mut out);
//! assert!(out.contains("INFO"));
//! assert!(out.contains("hello"));
//!
//! out.clear();
//! format_line("not a record", &options, &colors, &mut out);
//! assert_eq!(out, "not a record\n");
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod formatter;
pub mod level;
pub mod record;
pub mod splitter;
pub mod stream;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use color::ColorContext;
pub use config::{FormatOptions, LineFormatter};
pub use error::PlumeError;
pub use formatter::{format_line, format_record};
pub use level::Severity;
pub use record::{LineKind, Record, STANDARD_KEYS, classify, decode};
pub use splitter::LineSplitter;
pub use stream::{Destination, PrettyStream};
pub use timestamp::Timestamp;
