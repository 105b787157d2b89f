//! Record decoder: per-line JSON decoding and record classification.
//!
//! A line only formats as a record when it decodes to a JSON object that
//! carries a `time` field and a string `level`. Everything else — malformed
//! JSON, bare scalars, arrays, structurally incomplete objects — classifies
//! as pass-through and is emitted byte-for-byte, never partially formatted.

use serde_json::Value;

/// Fields belonging to the record's fixed schema, excluded from the
/// extra-fields dump. Exact string match.
pub const STANDARD_KEYS: &[&str] = &[
    "pid", "hostname", "name", "level", "msg", "message", "time", "v",
];

/// The classification of one input line.
#[derive(Debug)]
pub enum LineKind {
    /// A well-formed record eligible for full formatting.
    Record(Record),
    /// Anything else — passed through unmodified.
    PassThrough,
}

/// A well-formed log record.
///
/// Holds the decoded object with its original key insertion order
/// (`serde_json` with `preserve_order`), which the extra-fields dump
/// depends on.
#[derive(Debug)]
pub struct Record {
    pub fields: serde_json::Map<String, Value>,
}

impl Record {
    /// The record's `level` string. Guaranteed present by [`classify`].
    pub fn level_str(&self) -> &str {
        self.fields
            .get("level")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The record's raw `time` value. Guaranteed present by [`classify`].
    pub fn time(&self) -> &Value {
        self.fields.get("time").unwrap_or(&Value::Null)
    }

    /// `name` field, when present as a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// `msg` field, falling back to `message`.
    ///
    /// Null and empty-string values count as absent; the message clause is
    /// omitted entirely rather than decorated emptiness.
    pub fn message(&self) -> Option<&Value> {
        self.fields
            .get("msg")
            .filter(|v| message_present(v))
            .or_else(|| self.fields.get("message").filter(|v| message_present(v)))
    }
}

fn message_present(value: &Value) -> bool {
    !value.is_null() && value.as_str() != Some("")
}

/// Decode one line as JSON. Never panics; malformed input is an `Err`.
pub fn decode(line: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(line)
}

/// Classify one line.
///
/// Structural gate: the decoded value must be an object, must have a
/// non-null `time` field, and its `level` must be a JSON string. Scalars
/// like `null`, `true`, or bare numbers decode fine but are not records.
pub fn classify(line: &str) -> LineKind {
    let Ok(value) = decode(line) else {
        return LineKind::PassThrough;
    };

    let Value::Object(fields) = value else {
        return LineKind::PassThrough;
    };

    if !fields.get("time").is_some_and(|t| !t.is_null()) {
        return LineKind::PassThrough;
    }
    if !fields.get("level").is_some_and(Value::is_string) {
        return LineKind::PassThrough;
    }

    LineKind::Record(Record { fields })
}
