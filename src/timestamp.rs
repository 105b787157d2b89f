//! Best-effort timestamp parsing and ISO-8601 rendering.
//!
//! A record's `time` field may be an ISO 8601 / RFC 3339 string, a
//! `YYYY-MM-DD HH:MM:SS` string, or a numeric Unix epoch (seconds,
//! milliseconds, or nanoseconds, disambiguated by magnitude). Parse failure
//! is never an error at this layer — callers omit the timestamp clause or
//! leave the field untouched.

use std::fmt;

/// Parsed and normalized timestamp wrapping a [`jiff::Timestamp`].
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    value: jiff::Timestamp,
}

impl Timestamp {
    /// Render as an ISO-8601 instant in UTC with millisecond precision,
    /// e.g. `2026-01-15T10:30:00.123Z`.
    pub fn format_iso(&self) -> String {
        let zdt = self.value.to_zoned(jiff::tz::TimeZone::UTC);
        zdt.strftime("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    /// Parse a timestamp from a record's `time` value.
    ///
    /// Supports:
    /// - ISO 8601 / RFC 3339 strings
    /// - `YYYY-MM-DD HH:MM:SS[.fff]` strings (assumed UTC)
    /// - Unix epoch seconds (integer or float)
    /// - Unix epoch milliseconds (integer)
    /// - Unix epoch nanoseconds (integer)
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Self::parse_string(s),
            serde_json::Value::Number(n) => Self::parse_number(n),
            _ => None,
        }
    }

    fn parse_string(s: &str) -> Option<Self> {
        // ISO 8601 / RFC 3339; jiff handles these natively
        if let Ok(ts) = s.parse::<jiff::Timestamp>() {
            return Some(Self { value: ts });
        }

        // YYYY-MM-DD HH:MM:SS (no timezone → assume UTC)
        if let Ok(dt) = jiff::civil::DateTime::strptime("%Y-%m-%d %H:%M:%S", s)
            && let Ok(zdt) = dt.to_zoned(jiff::tz::TimeZone::UTC)
        {
            return Some(Self {
                value: zdt.timestamp(),
            });
        }

        // YYYY-MM-DD HH:MM:SS.fff
        if let Ok(dt) = jiff::civil::DateTime::strptime("%Y-%m-%d %H:%M:%S%.f", s)
            && let Ok(zdt) = dt.to_zoned(jiff::tz::TimeZone::UTC)
        {
            return Some(Self {
                value: zdt.timestamp(),
            });
        }

        None
    }

    /// Parse a numeric epoch using the magnitude heuristic:
    /// - value < 1e12 → seconds
    /// - value < 1e15 → milliseconds
    /// - value ≥ 1e15 → nanoseconds
    fn parse_number(n: &serde_json::Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            Self::from_epoch_integer(i)
        } else if let Some(f) = n.as_f64() {
            Self::from_epoch_float(f)
        } else {
            None
        }
    }

    fn from_epoch_integer(value: i64) -> Option<Self> {
        let ts = if value < 1_000_000_000_000 {
            // seconds
            jiff::Timestamp::from_second(value).ok()?
        } else if value < 1_000_000_000_000_000 {
            // milliseconds
            jiff::Timestamp::from_millisecond(value).ok()?
        } else {
            // nanoseconds
            jiff::Timestamp::from_nanosecond(i128::from(value)).ok()?
        };
        Some(Self { value: ts })
    }

    fn from_epoch_float(value: f64) -> Option<Self> {
        if value < 1e12 {
            // seconds with fractional part
            #[allow(clippy::cast_possible_truncation)]
            let secs = value.trunc() as i64;
            #[allow(clippy::cast_possible_truncation)]
            let nanos = ((value.fract()) * 1_000_000_000.0) as i32;
            let ts = jiff::Timestamp::new(secs, nanos).ok()?;
            Some(Self { value: ts })
        } else {
            // milliseconds as float
            #[allow(clippy::cast_possible_truncation)]
            let ms = value as i64;
            let ts = jiff::Timestamp::from_millisecond(ms).ok()?;
            Some(Self { value: ts })
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_iso())
    }
}
