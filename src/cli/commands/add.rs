use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;
use crate::utils::time::{format_time, parse_time_arg};

/// Add a closed interval to a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        // Validate input before touching the log
        let d = parse_date_arg(date)?;
        let start = parse_time_arg(start)?;
        let end = parse_time_arg(end)?;

        let store = LogStore::new(cfg.log_path());
        let mut log = store.load()?;

        let position = AddLogic::apply(&mut log, d, start, end);
        store.save(&log)?;

        success(format!(
            "Added interval #{position} for {d}: {} - {}",
            format_time(start),
            format_time(end)
        ));
    }

    Ok(())
}
