//! Field formatter: composes the human-readable line for a record.
//!
//! Clause order for the full pretty mode:
//! ```text
//! [2026-01-15T10:30:00.123Z] INFO (name/pid on hostname): message
//!     extra_key: "value"
//! ```
//! `--level-first` swaps the timestamp and level clauses. Error-typed
//! records render their indented stack trace instead of the extra-fields
//! dump. Every failure path degrades to omission or pass-through; nothing
//! here raises.

use serde_json::Value;

use crate::color::ColorContext;
use crate::config::FormatOptions;
use crate::level::Severity;
use crate::record::{self, LineKind, Record, STANDARD_KEYS};
use crate::timestamp::Timestamp;

/// Format a single input line for output, including the trailing newline.
///
/// Lines that do not classify as records pass through byte-for-byte plus
/// `\n`. The result is appended to `out`.
pub fn format_line(line: &str, options: &FormatOptions, colors: &ColorContext, out: &mut String) {
    match record::classify(line) {
        LineKind::Record(rec) => format_record(&rec, options, colors, out),
        LineKind::PassThrough => {
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// Format a well-formed [`Record`], selecting the mode from `options`.
///
/// Mode priority: delegated formatter, then `time_only`, then full pretty.
pub fn format_record(
    record: &Record,
    options: &FormatOptions,
    colors: &ColorContext,
    out: &mut String,
) {
    // Delegated mode: the external formatter owns the whole line. Unguarded
    // on purpose; its failures are the caller's problem.
    if let Some(formatter) = &options.formatter {
        let value = Value::Object(record.fields.clone());
        out.push_str(&formatter(&value));
        out.push('\n');
        return;
    }

    if options.time_only {
        format_time_only(record, out);
        return;
    }

    format_pretty(record, options, colors, out);
}

/// `time_only` mode: rewrite `time` to ISO-8601 in place, re-serialize.
///
/// An unparseable `time` value is left untouched rather than dropped.
fn format_time_only(record: &Record, out: &mut String) {
    let mut fields = record.fields.clone();
    if let Some(ts) = Timestamp::from_json_value(record.time()) {
        fields.insert("time".to_string(), Value::String(ts.format_iso()));
    }
    out.push_str(&serde_json::to_string(&Value::Object(fields)).unwrap_or_default());
    out.push('\n');
}

/// Full pretty mode: timestamp, level, identity, message, then body.
fn format_pretty(record: &Record, options: &FormatOptions, colors: &ColorContext, out: &mut String) {
    // Timestamp clause: empty on parse failure, never an error.
    let time_clause = Timestamp::from_json_value(record.time())
        .map(|ts| format!("[{}]", ts.format_iso()))
        .unwrap_or_default();

    let severity = Severity::from_str_loose(record.level_str());
    let level_clause = colors.level(severity, &record.level_str().to_uppercase());

    if options.level_first {
        out.push_str(&level_clause);
        if !time_clause.is_empty() {
            out.push(' ');
            out.push_str(&time_clause);
        }
    } else {
        if !time_clause.is_empty() {
            out.push_str(&time_clause);
            out.push(' ');
        }
        out.push_str(&level_clause);
    }

    // Identity clause: "(name/pid on hostname): "
    out.push_str(" (");
    if let Some(name) = record.name() {
        out.push_str(name);
        out.push('/');
    }
    if let Some(pid) = record.fields.get("pid") {
        out.push_str(&scalar_text(pid));
    }
    out.push_str(" on ");
    if let Some(hostname) = record.fields.get("hostname") {
        out.push_str(&scalar_text(hostname));
    }
    out.push_str("): ");

    if let Some(message) = record.message() {
        out.push_str(&colors.message(&scalar_text(message)));
    }
    out.push('\n');

    // Body: Error stack, then err.stack, then extra-fields dump.
    if record.fields.get("type").and_then(Value::as_str) == Some("Error")
        && let Some(stack) = record.fields.get("stack").and_then(Value::as_str)
    {
        push_stack(stack, out);
    } else if let Some(stack) = record
        .fields
        .get("err")
        .and_then(|err| err.get("stack"))
        .and_then(Value::as_str)
    {
        push_stack(stack, out);
    } else {
        dump_extra_fields(record, out);
    }
}

/// Append an indented stack trace block, one trailing newline.
fn push_stack(stack: &str, out: &mut String) {
    out.push_str("    ");
    out.push_str(&with_spaces(stack));
    out.push('\n');
}

/// Dump every non-standard field as `    <key>: <pretty JSON>`.
///
/// Keys iterate in the record's insertion order. Multi-line pretty-printed
/// values get their continuation lines indented 4 further spaces.
fn dump_extra_fields(record: &Record, out: &mut String) {
    for (key, value) in &record.fields {
        if STANDARD_KEYS.contains(&key.as_str()) {
            continue;
        }
        let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
        out.push_str("    ");
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&with_spaces(&pretty));
        out.push('\n');
    }
}

/// Indent every line after the first by 4 spaces.
fn with_spaces(value: &str) -> String {
    value.replace('\n', "\n    ")
}

/// Render a scalar JSON value as bare text: strings unquoted, everything
/// else compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
