use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::week::day_total;
use crate::errors::AppResult;
use crate::models::work_log::WorkLog;
use crate::store::LogStore;
use crate::ui::messages::{error, header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date::{format_date, iso_week};
use crate::utils::format_hours;
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use crate::utils::time::{format_optional_time, format_time};
use chrono::{Datelike, NaiveDateTime};

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::List { week } = cmd {
        // A broken log only aborts this rendering.
        let log = match LogStore::new(cfg.log_path()).load() {
            Ok(log) => log,
            Err(e) => {
                error(format!("Cannot render work log: {e}"));
                return Ok(());
            }
        };

        let table = build_table(&log, week.then(|| iso_week(&now)));
        match table {
            Some(t) => {
                header(format!("Work log ({})", cfg.log_path().display()));
                print!("{}", t.render());
            }
            None => info("Work log is empty."),
        }
    }

    Ok(())
}

/// One header row per day (date, interval count, day total) followed by one
/// row per interval.
fn build_table(log: &WorkLog, week: Option<chrono::IsoWeek>) -> Option<Table> {
    let mut table = Table::new(vec!["Date / #", "Start", "End", "Hours"]);

    for (date, intervals) in &log.entries {
        if week.is_some_and(|w| date.iso_week() != w) {
            continue;
        }

        table.add_row(vec![
            bold(&format_date(date)),
            format!("{} interval(s)", intervals.len()),
            String::new(),
            bold(&format_hours(day_total(intervals))),
        ]);

        for (i, iv) in intervals.iter().enumerate() {
            table.add_row(vec![
                format!("  {}", i + 1),
                format_time(iv.start),
                colorize_optional(&format_optional_time(iv.end)),
                iv.hours().map(format_hours).unwrap_or_default(),
            ]);
        }
    }

    (!table.rows.is_empty()).then_some(table)
}
