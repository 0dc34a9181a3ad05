use super::{OsmRelationId, OsmTags};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmMemberType {
    Node,
    Way,
    Relation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmRelationMember {
    #[serde(rename = "type")]
    pub member_type: OsmMemberType,
    #[serde(rename = "ref")]
    pub member_ref: i64,
    #[serde(default)]
    pub role: String,
}

impl OsmRelationMember {
    /// roles that attach a node to the route as a boarding point.
    pub fn is_stop_role(&self) -> bool {
        self.role == "stop" || self.role.starts_with("stop_") || self.is_platform_role()
    }

    pub fn is_platform_role(&self) -> bool {
        self.role.starts_with("platform")
    }
}

/// an OSM relation tagged `type=route`, one logical transit route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmRelation {
    pub id: OsmRelationId,
    #[serde(default)]
    pub tags: OsmTags,
    #[serde(default)]
    pub members: Vec<OsmRelationMember>,
}

impl OsmRelation {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// the `ref` tag, treated as missing when blank.
    pub fn reference(&self) -> Option<&str> {
        self.tag("ref").filter(|r| !r.trim().is_empty())
    }

    /// true if this relation is a route whose `route` tag is one of the
    /// accepted transport modes. an empty list accepts every mode.
    pub fn is_route_of_type(&self, transform_types: &[String]) -> bool {
        if self.tag("type") != Some("route") {
            return false;
        }
        if transform_types.is_empty() {
            return true;
        }
        match self.tag("route") {
            Some(mode) => transform_types.iter().any(|t| t == mode),
            None => false,
        }
    }
}
