use super::ServiceWindow;
use chrono::Weekday;

/// a parsed opening hours clause such as `Mo-Fr 06:00-22:00` or
/// `Sa 07:00-20:00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceClause {
    /// the day range as written, shared by every route with the same range.
    pub service_id: String,
    pub first_day: Weekday,
    pub last_day: Weekday,
    pub start_time: String,
    pub end_time: String,
}

impl ServiceClause {
    /// true if `day` falls in the inclusive range `first_day..=last_day`.
    /// ranges do not wrap past Sunday.
    pub fn runs_on(&self, day: Weekday) -> bool {
        let idx = day.num_days_from_monday();
        self.first_day.num_days_from_monday() <= idx && idx <= self.last_day.num_days_from_monday()
    }

    pub fn wraps_week(&self) -> bool {
        self.first_day.num_days_from_monday() > self.last_day.num_days_from_monday()
    }

    pub fn window(&self) -> ServiceWindow {
        ServiceWindow {
            service_id: self.service_id.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}
