use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date_arg;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, index, yes } = cmd {
        let d = parse_date_arg(date)?;

        let prompt = format!("Delete interval #{index} for {d}? This action is irreversible.");
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = LogStore::new(cfg.log_path());
        let mut log = store.load()?;

        let deleted = DeleteLogic::apply(&mut log, d, *index)?;
        store.save(&log)?;

        success(format!("Interval #{index} for {d} has been deleted."));
        if deleted.day_removed {
            info(format!("{d} has no intervals left and was removed from the log."));
        }
    }

    Ok(())
}
