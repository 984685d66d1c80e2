use super::print_transition;
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::store::LogStore;
use chrono::NaiveDateTime;

pub fn handle(cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    let store = LogStore::new(cfg.log_path());
    let mut log = store.load()?;

    let outcome = Tracker::end(&mut log, now);
    if outcome.mutated() {
        store.save(&log)?;
    }

    print_transition(&outcome);
    Ok(())
}
