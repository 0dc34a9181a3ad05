mod calendar_builder;
mod calendar_row;
mod service_clause;
mod service_clause_parser;
mod service_window;

pub use calendar_builder::CalendarBuilder;
pub use calendar_row::CalendarRow;
pub use service_clause::ServiceClause;
pub use service_clause_parser::ServiceClauseParser;
pub use service_window::ServiceWindow;
