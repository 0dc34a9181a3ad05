use crate::model::osm::element::OsmNodeId;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// name candidates per stop node, observed across every accepted route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopNameTable(BTreeMap<OsmNodeId, Vec<String>>);

impl StopNameTable {
    pub fn new() -> StopNameTable {
        StopNameTable::default()
    }

    /// appends the observations of one route.
    pub fn merge(&mut self, observations: &BTreeMap<OsmNodeId, Vec<String>>) {
        for (node_id, names) in observations.iter() {
            self.0
                .entry(*node_id)
                .or_default()
                .extend(names.iter().cloned());
        }
    }

    /// dedupes each candidate list keeping the first occurrence, then drops
    /// empty names.
    pub fn finalize(&mut self) {
        for names in self.0.values_mut() {
            *names = names
                .iter()
                .unique()
                .filter(|n| !n.is_empty())
                .cloned()
                .collect();
        }
    }

    /// candidate names for a node. `None` if no route observed the node.
    pub fn names(&self, node_id: &OsmNodeId) -> Option<&[String]> {
        self.0.get(node_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsmNodeId, &Vec<String>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
