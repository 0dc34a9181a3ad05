use serde::{Deserialize, Serialize};

/// one clause of a route's opening hours: the calendar it runs on and the
/// clock range of its fixed headway service, as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceWindow {
    pub service_id: String,
    pub start_time: String,
    pub end_time: String,
}
