use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Report { dir, print } = cmd {
        let dir = dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.report_path());

        let log = LogStore::new(cfg.log_path()).load()?;
        let (path, summary) = ReportLogic::generate(&log, now, &dir)?;

        if *print {
            println!("{}", ReportLogic::render(&summary));
        }
        success(format!("Report generated: {}", path.display()));
    }

    Ok(())
}
