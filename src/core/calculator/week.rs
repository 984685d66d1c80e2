use crate::models::day_summary::DaySummary;
use crate::models::interval::Interval;
use crate::models::week_summary::WeekSummary;
use crate::models::work_log::WorkLog;
use crate::utils::date::iso_week;
use chrono::{NaiveDate, NaiveDateTime};

/// Sum of closed spans of one day. Open intervals count as zero.
pub fn day_total(intervals: &[Interval]) -> f64 {
    intervals.iter().filter_map(Interval::hours).sum()
}

pub fn summarize_day(date: NaiveDate, intervals: &[Interval]) -> DaySummary {
    let lines: Vec<(Interval, f64)> = intervals
        .iter()
        .filter_map(|i| i.hours().map(|h| (*i, h)))
        .collect();
    let subtotal_hours = lines.iter().map(|(_, h)| h).sum();

    DaySummary {
        date,
        lines,
        subtotal_hours,
    }
}

/// Build the summary of the ISO week containing `now`.
///
/// Days are ascending, intervals keep their stored order. Days of other
/// weeks are skipped even when adjacent.
pub fn build_week_summary(log: &WorkLog, now: NaiveDateTime) -> WeekSummary {
    let week = iso_week(&now);

    let days: Vec<DaySummary> = log
        .days_in_week(week)
        .map(|(date, intervals)| summarize_day(*date, intervals))
        .collect();
    let total_hours = days.iter().map(|d| d.subtotal_hours).sum();

    WeekSummary {
        week,
        days,
        total_hours,
    }
}

pub fn weekly_total(log: &WorkLog, now: NaiveDateTime) -> f64 {
    build_week_summary(log, now).total_hours
}
