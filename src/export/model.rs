// src/export/model.rs

use crate::models::work_log::WorkLog;
use crate::utils::date::format_date;
use crate::utils::time::format_time;
use serde::Serialize;

/// Flat row used by CSV and JSON exports: one per interval.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IntervalExport {
    pub date: String,
    pub index: usize,
    pub start: String,
    pub end: Option<String>,
    pub hours: Option<f64>,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "index", "start", "end", "hours"]
}

pub(crate) fn interval_to_row(e: &IntervalExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.index.to_string(),
        e.start.clone(),
        e.end.clone().unwrap_or_default(),
        e.hours.map(|h| format!("{h:.2}")).unwrap_or_default(),
    ]
}

/// Flatten the log, dates ascending and intervals in stored order.
pub(crate) fn flatten(log: &WorkLog) -> Vec<IntervalExport> {
    log.entries
        .iter()
        .flat_map(|(date, intervals)| {
            intervals.iter().enumerate().map(move |(i, iv)| IntervalExport {
                date: format_date(date),
                index: i + 1,
                start: format_time(iv.start),
                end: iv.end.map(format_time),
                hours: iv.hours(),
            })
        })
        .collect()
}
