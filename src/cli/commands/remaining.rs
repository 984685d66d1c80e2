use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::remaining::calculate_remaining;
use crate::core::calculator::week::build_week_summary;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::info;
use crate::utils::colors::colorize_remaining;
use crate::utils::format_hours;
use crate::utils::formatting::hours2readable;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Remaining { target } = cmd {
        let target = target.unwrap_or(cfg.weekly_target_hours);
        let log = LogStore::new(cfg.log_path()).load()?;

        let summary = build_week_summary(&log, now);
        let remaining = calculate_remaining(summary.total_hours, target);

        info(format!(
            "Worked this week: {} hours",
            format_hours(summary.total_hours)
        ));
        info(format!(
            "Remaining time for week {} is {} hours ({})",
            summary.week_number(),
            colorize_remaining(remaining, &format_hours(remaining)),
            hours2readable(remaining)
        ));
    }

    Ok(())
}
