//! ANSI color helpers for terminal output.

use crate::models::tracker_state::TrackerState;
use ansi_term::Colour;

/// Grey out placeholders such as an open end time.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == crate::utils::time::OPEN_END {
        Colour::Fixed(8).paint(value).to_string()
    } else {
        value.to_string()
    }
}

/// Remaining hours:
/// \>0 → yellow (still to work)
/// \<=0 → green (target reached)
pub fn colorize_remaining(hours: f64, text: &str) -> String {
    if hours > 0.0 {
        Colour::Yellow.paint(text).to_string()
    } else {
        Colour::Green.paint(text).to_string()
    }
}

pub fn colorize_state(state: TrackerState) -> String {
    let colour = match state {
        TrackerState::Idle => Colour::White,
        TrackerState::Started => Colour::Green,
        TrackerState::Ended => Colour::Blue,
    };
    colour.bold().paint(state.as_str()).to_string()
}
