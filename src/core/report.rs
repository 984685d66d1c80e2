use crate::core::calculator::week::build_week_summary;
use crate::errors::AppResult;
use crate::models::week_summary::WeekSummary;
use crate::models::work_log::WorkLog;
use crate::utils::date::format_date;
use crate::utils::format_hours;
use crate::utils::time::format_time;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ReportLogic;

impl ReportLogic {
    pub fn file_name(week_number: u32) -> String {
        format!("weekly_report_week_{week_number}.txt")
    }

    /// Plain-text weekly report: header, one line per closed interval,
    /// a subtotal per day and the grand total.
    pub fn render(summary: &WeekSummary) -> String {
        let mut report = format!("Weekly Work Report (Week {})\n", summary.week_number());
        report.push_str(&"=".repeat(30));
        report.push('\n');

        for day in &summary.days {
            let date = format_date(&day.date);
            for (interval, hours) in &day.lines {
                let end = interval.end.map(format_time).unwrap_or_default();
                report.push_str(&format!(
                    "{date}: {} - {end} ({} hours)\n",
                    format_time(interval.start),
                    format_hours(*hours)
                ));
            }
            report.push_str(&format!(
                "{date} subtotal: {} hours\n",
                format_hours(day.subtotal_hours)
            ));
        }

        report.push_str(&format!(
            "\nTotal Hours: {}\n",
            format_hours(summary.total_hours)
        ));
        report
    }

    /// Render the report of the current week and write it into `dir`.
    /// An existing report of the same week is overwritten.
    pub fn generate(log: &WorkLog, now: NaiveDateTime, dir: &Path) -> AppResult<(PathBuf, WeekSummary)> {
        let summary = build_week_summary(log, now);
        let text = Self::render(&summary);

        fs::create_dir_all(dir)?;
        let path = dir.join(Self::file_name(summary.week_number()));
        fs::write(&path, text)?;

        tracing::info!(path = %path.display(), total = summary.total_hours, "weekly report written");
        Ok((path, summary))
    }
}
