pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod end;
pub mod export;
pub mod init;
pub mod list;
pub mod remaining;
pub mod report;
pub mod start;
pub mod status;

use crate::core::tracker::Transition;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_time;

/// Print the outcome of a start/end action.
pub(crate) fn print_transition(t: &Transition) {
    match t {
        Transition::Started { at, .. } => success(format!("Work started at {}", format_time(*at))),
        Transition::Ended { at, .. } => success(format!("Work ended at {}", format_time(*at))),
        Transition::AlreadyStarted => warning("Work already started today!"),
        Transition::NotStarted => warning("Work has not started yet"),
        Transition::AlreadyEnded => warning("Work has already ended. Start again"),
        Transition::DayRollover { date } => warning(format!(
            "No entries for {date}: work surpassed an entire day. Tracker reset to idle, end time not recorded."
        )),
    }
}
