use super::interval::Interval;
use chrono::NaiveDate;

/// Closed intervals of one day together with their spans.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub lines: Vec<(Interval, f64)>,
    pub subtotal_hours: f64,
}
