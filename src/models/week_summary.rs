use super::day_summary::DaySummary;
use chrono::IsoWeek;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub week: IsoWeek,
    pub days: Vec<DaySummary>,
    pub total_hours: f64,
}

impl WeekSummary {
    pub fn week_number(&self) -> u32 {
        self.week.week()
    }
}
