use super::ServiceClause;
use crate::schedule::date_codec;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// a row of `calendar.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRow {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    #[serde(with = "date_codec::gtfs")]
    pub start_date: NaiveDate,
    #[serde(with = "date_codec::gtfs")]
    pub end_date: NaiveDate,
}

impl CalendarRow {
    /// weekly calendar of a clause, valid over the broadest date window.
    pub fn from_clause(clause: &ServiceClause) -> CalendarRow {
        let flag = |day: Weekday| u8::from(clause.runs_on(day));
        CalendarRow {
            service_id: clause.service_id.clone(),
            monday: flag(Weekday::Mon),
            tuesday: flag(Weekday::Tue),
            wednesday: flag(Weekday::Wed),
            thursday: flag(Weekday::Thu),
            friday: flag(Weekday::Fri),
            saturday: flag(Weekday::Sat),
            sunday: flag(Weekday::Sun),
            start_date: date_codec::gtfs::earliest_date(),
            end_date: date_codec::gtfs::latest_date(),
        }
    }
}
