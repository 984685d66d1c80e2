use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;
use crate::utils::time::{format_optional_time, format_time, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date,
        index,
        start,
        end,
    } = cmd
    {
        let d = parse_date_arg(date)?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let store = LogStore::new(cfg.log_path());
        let mut log = store.load()?;

        let updated = EditLogic::apply(&mut log, d, *index, start, end)?;
        store.save(&log)?;

        success(format!(
            "Interval #{index} for {d} is now {} - {}",
            format_time(updated.start),
            format_optional_time(updated.end)
        ));
    }

    Ok(())
}
