use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::LogStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let log = LogStore::new(cfg.log_path()).load()?;
        ExportLogic::export(&log, *format, file, *force)?;
    }

    Ok(())
}
