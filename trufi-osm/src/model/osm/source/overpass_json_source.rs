use crate::model::osm::{
    element::{
        OsmNode, OsmNodeId, OsmNodes, OsmRelation, OsmRelationId, OsmRelationMember, OsmRoutes,
        OsmTags, OsmWay, OsmWayId, OsmWays,
    },
    source::OsmDataSource,
    OsmError,
};
use geo::Coord;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// reads a saved Overpass API response (`[out:json]`, ways queried with
/// `out geom`) containing the route relations along with their member ways
/// and nodes.
#[derive(Debug, Clone)]
pub struct OverpassJsonSource {
    filepath: PathBuf,
}

#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OverpassElement {
    Node {
        id: i64,
        lat: f64,
        lon: f64,
        #[serde(default)]
        tags: OsmTags,
    },
    Way {
        id: i64,
        #[serde(default)]
        nodes: Vec<i64>,
        #[serde(default)]
        geometry: Option<Vec<Option<OverpassLatLon>>>,
        #[serde(default)]
        tags: OsmTags,
    },
    Relation {
        id: i64,
        #[serde(default)]
        members: Vec<OsmRelationMember>,
        #[serde(default)]
        tags: OsmTags,
    },
}

#[derive(Deserialize, Clone, Copy)]
struct OverpassLatLon {
    lat: f64,
    lon: f64,
}

impl OverpassJsonSource {
    pub fn new<P: AsRef<Path>>(filepath: P) -> OverpassJsonSource {
        OverpassJsonSource {
            filepath: filepath.as_ref().to_path_buf(),
        }
    }

    fn read_elements(&self) -> Result<Vec<OverpassElement>, OsmError> {
        let filepath = self.filepath.to_string_lossy().to_string();
        let contents =
            std::fs::read_to_string(&self.filepath).map_err(|source| OsmError::SourceReadError {
                filepath: filepath.clone(),
                source,
            })?;
        let response: OverpassResponse = serde_json::from_str(&contents)
            .map_err(|source| OsmError::OverpassDecodeError { filepath, source })?;
        Ok(response.elements)
    }
}

impl OsmDataSource for OverpassJsonSource {
    fn routes(&self, transform_types: &[String]) -> Result<OsmRoutes, OsmError> {
        let routes = self
            .read_elements()?
            .into_iter()
            .filter_map(|e| match e {
                OverpassElement::Relation { id, members, tags } => Some(OsmRelation {
                    id: OsmRelationId(id),
                    tags,
                    members,
                }),
                _ => None,
            })
            .filter(|r| r.is_route_of_type(transform_types))
            .map(|r| (r.id, r))
            .collect();
        Ok(routes)
    }

    fn ways(&self) -> Result<OsmWays, OsmError> {
        let ways = self
            .read_elements()?
            .into_iter()
            .filter_map(|e| match e {
                OverpassElement::Way {
                    id,
                    nodes,
                    geometry,
                    tags,
                } => Some(way_from_overpass(id, nodes, geometry, tags)),
                _ => None,
            })
            .map(|w| (w.id, w))
            .collect();
        Ok(ways)
    }

    fn stops(&self) -> Result<OsmNodes, OsmError> {
        let stops = self
            .read_elements()?
            .into_iter()
            .filter_map(|e| match e {
                OverpassElement::Node { id, lat, lon, tags } => {
                    Some(OsmNode::new(OsmNodeId(id), lat, lon, tags))
                }
                _ => None,
            })
            .map(|n| (n.id, n))
            .collect();
        Ok(stops)
    }
}

/// overpass emits `null` geometry entries for nodes it could not place; any
/// gap leaves the way without geometry.
fn way_from_overpass(
    id: i64,
    nodes: Vec<i64>,
    geometry: Option<Vec<Option<OverpassLatLon>>>,
    tags: OsmTags,
) -> OsmWay {
    let geometry = geometry.and_then(|points| {
        points
            .into_iter()
            .map(|p| p.map(|ll| Coord { x: ll.lon, y: ll.lat }))
            .collect::<Option<Vec<_>>>()
            .filter(|coords| coords.len() == nodes.len())
    });
    OsmWay {
        id: OsmWayId(id),
        tags,
        nodes: nodes.into_iter().map(OsmNodeId).collect(),
        geometry,
    }
}
