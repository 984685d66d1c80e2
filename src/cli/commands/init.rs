use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::work_log::WorkLog;
use crate::store::LogStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty work log, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.log.clone(), cli.test)?;

    info("Initializing worklog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Work log    : {}", cfg.log_path().display());

    let store = LogStore::new(cfg.log_path());
    if store.exists() {
        info(format!(
            "Existing work log kept: {}",
            store.path().display()
        ));
    } else {
        store.save(&WorkLog::default())?;
        success(format!("Work log created at {}", store.path().display()));
    }

    success("worklog initialization completed!");
    Ok(())
}
