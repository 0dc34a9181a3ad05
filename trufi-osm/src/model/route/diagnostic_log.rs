use super::{RouteError, RouteErrorRecord};
use crate::{
    model::osm::element::{OsmRelationId, OsmTags},
    util::ref_ordering,
};
use serde::{Deserialize, Serialize};

/// outcome of one route in a run. accepted routes carry no error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: OsmRelationId,
    pub tags: OsmTags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RouteErrorRecord>,
}

impl LogEntry {
    pub fn reference(&self) -> Option<&str> {
        self.tags.get("ref").map(String::as_str)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// audit trail of every route that reached classification. routes removed by
/// the ignore list or the include hook never appear here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticLog {
    entries: Vec<LogEntry>,
}

impl DiagnosticLog {
    pub fn new() -> DiagnosticLog {
        DiagnosticLog::default()
    }

    pub fn accept(&mut self, id: OsmRelationId, tags: &OsmTags) {
        self.entries.push(LogEntry {
            id,
            tags: tags.clone(),
            error: None,
        });
    }

    /// records a route-fatal error. an earlier entry for the same route is
    /// replaced, so a route accepted during classification can be downgraded
    /// by a later stage.
    pub fn reject(&mut self, id: OsmRelationId, tags: &OsmTags, error: &RouteError) {
        log::debug!("route {id} rejected: {error}");
        let entry = LogEntry {
            id,
            tags: tags.clone(),
            error: Some(error.to_record(id)),
        };
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// stable sort by route ref, numeric refs first.
    pub fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| ref_ordering::compare_refs(a.reference(), b.reference()));
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_error()).count()
    }
}
