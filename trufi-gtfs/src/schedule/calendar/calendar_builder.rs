use super::{CalendarRow, ServiceClauseParser, ServiceWindow};
use crate::{config::RouteHooks, schedule::time::ClauseNormalizer, GtfsBuildError};
use std::collections::HashSet;
use trufi_osm::model::route::{RouteError, RouteFeature};

/// derives weekly calendars from route opening hours. calendars are shared
/// across routes: each distinct service id is recorded once, in first-seen
/// order.
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    normalizer: ClauseNormalizer,
    parser: ServiceClauseParser,
    rows: Vec<CalendarRow>,
    service_ids: HashSet<String>,
}

impl CalendarBuilder {
    pub fn new() -> Result<CalendarBuilder, GtfsBuildError> {
        Ok(CalendarBuilder {
            normalizer: ClauseNormalizer::new()?,
            parser: ServiceClauseParser::new()?,
            rows: vec![],
            service_ids: HashSet::new(),
        })
    }

    /// service windows of a route, one per clause of its `opening_hours` tag
    /// (or the default calendar when the tag is missing). a clause that does
    /// not parse rejects the route, and none of its calendars are recorded.
    pub fn services_for_route(
        &mut self,
        route: &RouteFeature,
        hooks: &dyn RouteHooks,
    ) -> Result<Vec<ServiceWindow>, RouteError> {
        let opening_hours = match route.opening_hours().filter(|oh| !oh.trim().is_empty()) {
            Some(oh) => oh.to_string(),
            None => hooks.default_calendar(route),
        };
        let clauses = self
            .normalizer
            .clauses(&opening_hours)
            .into_iter()
            .map(|clause| {
                self.parser
                    .parse(&clause)
                    .ok_or(RouteError::InvalidOpeningHours { clause })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut windows = Vec::with_capacity(clauses.len());
        for clause in clauses.iter() {
            if clause.wraps_week() {
                log::warn!(
                    "route {}: day range {} wraps past Sunday, its calendar will not cover every day",
                    route.id,
                    clause.service_id
                );
            }
            if self.service_ids.insert(clause.service_id.clone()) {
                self.rows.push(CalendarRow::from_clause(clause));
            }
            windows.push(clause.window());
        }
        Ok(windows)
    }

    pub fn rows(&self) -> &[CalendarRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<CalendarRow> {
        self.rows
    }
}
