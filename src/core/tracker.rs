//! Start/end state machine.
//!
//! `Idle → Started → Ended → Started → …`. Illegal transitions leave the log
//! untouched and are reported back as a [`Transition`] rather than an error.

use crate::models::interval::Interval;
use crate::models::tracker_state::TrackerState;
use crate::models::work_log::WorkLog;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A new open interval was appended.
    Started { date: NaiveDate, at: NaiveTime },
    /// The last interval of the day was closed.
    Ended { date: NaiveDate, at: NaiveTime },
    AlreadyStarted,
    NotStarted,
    AlreadyEnded,
    /// Today has no entries while work is running (it began before midnight).
    /// Nothing is closed and the state is forced back to idle.
    DayRollover { date: NaiveDate },
}

impl Transition {
    /// Whether the log changed and has to be written back.
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            Transition::Started { .. } | Transition::Ended { .. } | Transition::DayRollover { .. }
        )
    }
}

pub struct Tracker;

impl Tracker {
    pub fn start(log: &mut WorkLog, now: NaiveDateTime) -> Transition {
        if !log.state.can_start() {
            return Transition::AlreadyStarted;
        }

        let date = now.date();
        let at = truncate_to_seconds(now.time());
        log.push(date, Interval::open(at));
        log.state = TrackerState::Started;

        tracing::info!(%date, %at, "work started");
        Transition::Started { date, at }
    }

    pub fn end(log: &mut WorkLog, now: NaiveDateTime) -> Transition {
        match log.state {
            TrackerState::Idle => return Transition::NotStarted,
            TrackerState::Ended => return Transition::AlreadyEnded,
            TrackerState::Started => {}
        }

        let date = now.date();
        let at = truncate_to_seconds(now.time());

        let Some(last) = log.day_mut(&date).and_then(|day| day.last_mut()) else {
            log.state = TrackerState::Idle;
            tracing::warn!(%date, "no entries for today while ending, resetting to idle");
            return Transition::DayRollover { date };
        };

        last.end = Some(at);
        log.state = TrackerState::Ended;

        tracing::info!(%date, %at, "work ended");
        Transition::Ended { date, at }
    }
}

/// The log stores whole seconds only.
fn truncate_to_seconds(t: NaiveTime) -> NaiveTime {
    use chrono::Timelike;
    t.with_nanosecond(0).unwrap_or(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn day(log: &WorkLog, d: &str) -> Vec<Interval> {
        let d = NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap();
        log.day(&d).map(<[Interval]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn start_from_idle_appends_open_interval() {
        let mut log = WorkLog::default();
        let t = Tracker::start(&mut log, at("2024-01-01", "09:00:00"));

        assert!(matches!(t, Transition::Started { .. }));
        assert_eq!(log.state, TrackerState::Started);
        let intervals = day(&log, "2024-01-01");
        assert_eq!(intervals.len(), 1);
        assert!(intervals[0].is_open());
    }

    #[test]
    fn double_start_is_a_no_op() {
        let mut log = WorkLog::default();
        Tracker::start(&mut log, at("2024-01-01", "09:00:00"));
        let before = log.clone();

        let t = Tracker::start(&mut log, at("2024-01-01", "09:05:00"));
        assert_eq!(t, Transition::AlreadyStarted);
        assert!(!t.mutated());
        assert_eq!(log, before);
    }

    #[test]
    fn end_closes_last_interval() {
        let mut log = WorkLog::default();
        Tracker::start(&mut log, at("2024-01-01", "09:00:00"));
        Tracker::end(&mut log, at("2024-01-01", "12:00:00"));
        Tracker::start(&mut log, at("2024-01-01", "13:00:00"));
        let t = Tracker::end(&mut log, at("2024-01-01", "17:30:00"));

        assert!(matches!(t, Transition::Ended { .. }));
        assert_eq!(log.state, TrackerState::Ended);
        let intervals = day(&log, "2024-01-01");
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].hours(), Some(3.0));
        assert_eq!(intervals[1].hours(), Some(4.5));
    }

    #[test]
    fn end_while_idle_or_ended_is_a_no_op() {
        let mut log = WorkLog::default();
        assert_eq!(
            Tracker::end(&mut log, at("2024-01-01", "10:00:00")),
            Transition::NotStarted
        );
        assert_eq!(log, WorkLog::default());

        Tracker::start(&mut log, at("2024-01-01", "09:00:00"));
        Tracker::end(&mut log, at("2024-01-01", "10:00:00"));
        let before = log.clone();
        assert_eq!(
            Tracker::end(&mut log, at("2024-01-01", "11:00:00")),
            Transition::AlreadyEnded
        );
        assert_eq!(log, before);
    }

    #[test]
    fn end_after_midnight_resets_to_idle() {
        let mut log = WorkLog::default();
        Tracker::start(&mut log, at("2024-01-01", "22:00:00"));

        let t = Tracker::end(&mut log, at("2024-01-02", "01:00:00"));
        assert!(matches!(t, Transition::DayRollover { .. }));
        assert!(t.mutated());
        assert_eq!(log.state, TrackerState::Idle);
        assert!(day(&log, "2024-01-01")[0].is_open());
        assert!(day(&log, "2024-01-02").is_empty());
    }

    #[test]
    fn restart_after_end() {
        let mut log = WorkLog::default();
        Tracker::start(&mut log, at("2024-01-01", "09:00:00"));
        Tracker::end(&mut log, at("2024-01-01", "10:00:00"));
        let t = Tracker::start(&mut log, at("2024-01-01", "11:00:00"));
        assert!(matches!(t, Transition::Started { .. }));
        assert_eq!(day(&log, "2024-01-01").len(), 2);
    }
}
