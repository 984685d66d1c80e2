use crate::errors::{AppError, AppResult};
use chrono::{Datelike, IsoWeek, Local, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format accepted by the hidden `--now` override.
pub const NOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_now(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), NOW_FORMAT)
        .map_err(|_| AppError::InvalidDate(format!("{s} (expected YYYY-MM-DD HH:MM:SS)")))
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn iso_week(now: &NaiveDateTime) -> IsoWeek {
    now.date().iso_week()
}
