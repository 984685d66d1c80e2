use crate::errors::{AppError, AppResult};
use crate::models::interval::Interval;
use crate::models::work_log::WorkLog;
use crate::utils::date::format_date;
use chrono::NaiveDate;

pub struct DeleteLogic;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deleted {
    pub interval: Interval,
    /// The day became empty and was removed from the log.
    pub day_removed: bool,
}

impl DeleteLogic {
    /// Remove interval `index` (1-based) of `date`. A day left without
    /// intervals is dropped from the log.
    pub fn apply(log: &mut WorkLog, date: NaiveDate, index: usize) -> AppResult<Deleted> {
        let date_str = format_date(&date);
        let day = log
            .day_mut(&date)
            .ok_or_else(|| AppError::NoEntriesForDate(date_str.clone()))?;

        if index == 0 || index > day.len() {
            return Err(AppError::InvalidIndex {
                date: date_str,
                index,
            });
        }

        let interval = day.remove(index - 1);
        let day_removed = day.is_empty();
        if day_removed {
            log.entries.remove(&date);
        }

        tracing::info!(%date, index, day_removed, "interval deleted");
        Ok(Deleted {
            interval,
            day_removed,
        })
    }
}
