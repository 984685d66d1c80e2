use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether work is currently running for the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawState")]
pub enum TrackerState {
    #[default]
    Idle,
    Started,
    Ended,
}

/// Accepts both the textual form and the numeric codes (0, 1, 2).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawState {
    Code(u8),
    Name(String),
}

impl TryFrom<RawState> for TrackerState {
    type Error = String;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        match raw {
            RawState::Code(0) => Ok(Self::Idle),
            RawState::Code(1) => Ok(Self::Started),
            RawState::Code(2) => Ok(Self::Ended),
            RawState::Code(other) => Err(format!("unknown tracker state code {other}")),
            RawState::Name(name) => {
                Self::from_str_opt(&name).ok_or_else(|| format!("unknown tracker state '{name}'"))
            }
        }
    }
}

impl TrackerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerState::Idle => "idle",
            TrackerState::Started => "started",
            TrackerState::Ended => "ended",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(Self::Idle),
            "started" => Some(Self::Started),
            "ended" => Some(Self::Ended),
            _ => None,
        }
    }

    pub fn can_start(&self) -> bool {
        matches!(self, TrackerState::Idle | TrackerState::Ended)
    }
}

impl fmt::Display for TrackerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
