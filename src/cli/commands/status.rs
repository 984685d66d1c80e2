use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::utils::colors::colorize_state;
use crate::utils::date::format_date;
use crate::utils::format_hours;
use crate::utils::time::format_time;
use chrono::NaiveDateTime;

pub fn handle(cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    let log = LogStore::new(cfg.log_path()).load()?;
    let status = StatusLogic::today(&log, now);

    println!("State     : {}", colorize_state(status.state));
    println!("Today     : {}", format_date(&status.date));
    println!("Intervals : {}", status.intervals);
    if let Some(running) = status.running {
        println!("Running   : since {}", format_time(running.start));
    }
    println!("Worked    : {} hours", format_hours(status.closed_hours));

    Ok(())
}
