// crates/domain/src/timestamp.rs
//! Per-handle modification time.
//!
//! Hosts report `lastModified` as epoch milliseconds. Older engines only
//! expose `lastModifiedDate`, which arrives as a date string. Millisecond
//! values are split into whole seconds and a sub-second remainder; the
//! remainder is scaled to the configured [`SubsecondUnit`] before it is stored
//! in `Mtime::nsecs`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use filelist_source_shared_kernel::Mtime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::presence::is_present;

pub const LAST_MODIFIED: &str = "lastModified";
pub const LAST_MODIFIED_DATE: &str = "lastModifiedDate";

/// Largest magnitude a host date can hold (±100,000,000 days).
const MAX_TIME_MS: f64 = 8.64e15;

/// Unit of the sub-second remainder written to `Mtime::nsecs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubsecondUnit {
    /// Raw milliseconds within the second (`0..1000`).
    Milliseconds,
    Microseconds,
    /// True nanoseconds; millisecond resolution scaled by 1,000,000.
    #[default]
    Nanoseconds,
}

impl SubsecondUnit {
    /// Factor applied to the millisecond remainder.
    #[must_use]
    pub const fn scale(self) -> u32 {
        match self {
            Self::Milliseconds => 1,
            Self::Microseconds => 1_000,
            Self::Nanoseconds => 1_000_000,
        }
    }
}

/// Which property a timestamp was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    LastModified,
    LastModifiedDate,
}

impl TimestampSource {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LastModified => LAST_MODIFIED,
            Self::LastModifiedDate => LAST_MODIFIED_DATE,
        }
    }
}

/// Split epoch milliseconds into seconds and a scaled remainder.
///
/// Euclidean division keeps the remainder non-negative, so
/// `millis == secs * 1000 + nsecs / unit.scale()` holds for pre-epoch values too.
pub fn split_millis(millis: i64, unit: SubsecondUnit) -> Mtime {
    Mtime::new(millis.div_euclid(1000), (millis.rem_euclid(1000) as u32) * unit.scale())
}

/// Read an epoch-millisecond timestamp from a handle.
///
/// A set numeric `lastModified` wins, even when it floors to zero. Absent,
/// `0`, NaN and non-numeric values fall through to `lastModifiedDate`, whose
/// result only counts when it is non-zero.
pub fn derive_millis<F>(mut lookup: F) -> Option<(TimestampSource, i64)>
where
    F: FnMut(&str) -> Option<Value>,
{
    let primary = lookup(LAST_MODIFIED)
        .filter(|value| is_present(Some(value)))
        .as_ref()
        .and_then(Value::as_f64)
        .and_then(millis_from_f64)
        .map(|ms| (TimestampSource::LastModified, ms));

    primary.or_else(|| {
        lookup(LAST_MODIFIED_DATE)
            .as_ref()
            .and_then(millis_from_value)
            .filter(|ms| *ms != 0)
            .map(|ms| (TimestampSource::LastModifiedDate, ms))
    })
}

/// Derive the entry's mtime along with the property it came from, or `None`
/// when the handle carries no usable timestamp.
pub fn derive_mtime<F>(lookup: F, unit: SubsecondUnit) -> Option<(TimestampSource, Mtime)>
where
    F: FnMut(&str) -> Option<Value>,
{
    derive_millis(lookup).map(|(source, ms)| (source, split_millis(ms, unit)))
}

fn millis_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_f64().and_then(millis_from_f64),
        Value::String(s) => parse_date_millis(s),
        _ => None,
    }
}

fn millis_from_f64(ms: f64) -> Option<i64> {
    if !ms.is_finite() || ms.abs() > MAX_TIME_MS {
        return None;
    }
    Some(ms.floor() as i64)
}

/// Parse the date-string shapes hosts emit for `lastModifiedDate`.
///
/// Accepts RFC 3339, RFC 2822, the engine `toString` form
/// (`Tue Oct 19 2026 10:00:00 GMT+0200 (Central European Summer Time)`) and a
/// bare `YYYY-MM-DD`. Strings without an offset are read as UTC.
#[must_use]
pub fn parse_date_millis(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }

    let head = s.split(" (").next().unwrap_or(s);
    if let Ok(dt) = DateTime::parse_from_str(head, "%a %b %d %Y %H:%M:%S GMT%z") {
        return Some(dt.timestamp_millis());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}
