pub mod day_summary;
pub mod interval;
pub mod tracker_state;
pub mod week_summary;
pub mod work_log;
