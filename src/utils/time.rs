//! Time utilities: parsing the 12-hour clock format, spans in hours, serde helpers.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

/// Time-of-day format used in the log file and accepted on input.
pub const TIME_FORMAT: &str = "%I:%M:%S %p";

/// Placeholder shown for a missing end time.
pub const OPEN_END: &str = "--:--:-- --";

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2]):[0-5][0-9]:[0-5][0-9] [AaPp][Mm]$").expect("valid time regex")
});

/// Parse `HH:MM:SS AM/PM`. Two-digit fields are mandatory.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if !TIME_RE.is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, TIME_FORMAT).ok()
}

pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_time_arg(s)).transpose()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

pub fn format_optional_time(t: Option<NaiveTime>) -> String {
    t.map(format_time).unwrap_or_else(|| OPEN_END.to_string())
}

/// Signed span from `start` to `end` in hours (seconds precision).
/// An end before the start gives a negative span.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Serde adapter for a required time-of-day field.
pub mod clock12 {
    use super::{format_time, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_time(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_time(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{raw}'")))
    }
}

/// Serde adapter for an optional (nullable) time-of-day field.
pub mod clock12_opt {
    use super::{format_time, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&format_time(*t)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) => parse_time(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid time '{raw}'"))),
            None => Ok(None),
        }
    }
}
