use super::ServiceClause;
use crate::{schedule::time::compile_pattern, GtfsBuildError};
use chrono::Weekday;
use regex::Regex;

const DAY: &str = "(Mo|Tu|We|Th|Fr|Sa|Su)";
const CLOCK: &str = "(([01][0-9]|2[0-4]):([0-5][0-9]))";

/// matches normalized clauses against the day range form `DD-DD HH:MM-HH:MM`
/// and the single day form `DD HH:MM-HH:MM`. the first window found in a
/// clause is used; text around it, such as a second comma separated time
/// range, is ignored.
#[derive(Debug, Clone)]
pub struct ServiceClauseParser {
    day_range: Regex,
    single_day: Regex,
}

impl ServiceClauseParser {
    pub fn new() -> Result<ServiceClauseParser, GtfsBuildError> {
        let day_range = format!("({DAY}-{DAY}) {CLOCK}-{CLOCK}");
        let single_day = format!("{DAY} {CLOCK}-{CLOCK}");
        Ok(ServiceClauseParser {
            day_range: compile_pattern(&day_range)?,
            single_day: compile_pattern(&single_day)?,
        })
    }

    /// parses one normalized clause, `None` if it matches neither form.
    pub fn parse(&self, clause: &str) -> Option<ServiceClause> {
        if let Some(caps) = self.day_range.captures(clause) {
            log_ignored_text(clause, &caps[0]);
            return Some(ServiceClause {
                service_id: String::from(&caps[1]),
                first_day: weekday_from_code(&caps[2])?,
                last_day: weekday_from_code(&caps[3])?,
                start_time: String::from(&caps[4]),
                end_time: String::from(&caps[7]),
            });
        }
        let caps = self.single_day.captures(clause)?;
        log_ignored_text(clause, &caps[0]);
        let day = weekday_from_code(&caps[1])?;
        Some(ServiceClause {
            service_id: String::from(&caps[1]),
            first_day: day,
            last_day: day,
            start_time: String::from(&caps[2]),
            end_time: String::from(&caps[5]),
        })
    }
}

fn log_ignored_text(clause: &str, matched: &str) {
    if clause.len() != matched.len() {
        log::debug!("opening hours clause '{clause}': using '{matched}', ignoring the rest");
    }
}

/// two letter OSM weekday code.
pub fn weekday_from_code(code: &str) -> Option<Weekday> {
    match code {
        "Mo" => Some(Weekday::Mon),
        "Tu" => Some(Weekday::Tue),
        "We" => Some(Weekday::Wed),
        "Th" => Some(Weekday::Thu),
        "Fr" => Some(Weekday::Fri),
        "Sa" => Some(Weekday::Sat),
        "Su" => Some(Weekday::Sun),
        _ => None,
    }
}
