use crate::model::osm::{
    element::{
        OsmMemberType, OsmNode, OsmNodeId, OsmNodes, OsmRelation, OsmRelationId,
        OsmRelationMember, OsmRoutes, OsmTags, OsmWay, OsmWayId, OsmWays,
    },
    source::OsmDataSource,
    OsmError,
};
use geo::Coord;
use osmpbf::{Element, ElementReader, RelMemberType};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// reads route relations, ways and stop nodes from an `.osm.pbf` extract.
///
/// way geometry is not stored in PBF, so reading ways requires a full pass
/// over every node to resolve coordinates. ways with any unresolved node
/// reference are returned without geometry.
#[derive(Debug, Clone)]
pub struct PbfSource {
    filepath: PathBuf,
}

impl PbfSource {
    pub fn new<P: AsRef<Path>>(filepath: P) -> PbfSource {
        PbfSource {
            filepath: filepath.as_ref().to_path_buf(),
        }
    }

    fn reader(&self) -> Result<ElementReader<std::io::BufReader<std::fs::File>>, OsmError> {
        ElementReader::from_path(&self.filepath).map_err(|e| OsmError::PbfLibError { source: e })
    }
}

impl OsmDataSource for PbfSource {
    fn routes(&self, transform_types: &[String]) -> Result<OsmRoutes, OsmError> {
        let mut routes = OsmRoutes::new();
        self.reader()?
            .for_each(|element| {
                if let Element::Relation(relation) = element {
                    let tags = collect_tags(relation.tags());
                    let members = relation
                        .members()
                        .map(|m| OsmRelationMember {
                            member_type: match m.member_type {
                                RelMemberType::Node => OsmMemberType::Node,
                                RelMemberType::Way => OsmMemberType::Way,
                                RelMemberType::Relation => OsmMemberType::Relation,
                            },
                            member_ref: m.member_id,
                            role: m.role().map(String::from).unwrap_or_default(),
                        })
                        .collect();
                    let route = OsmRelation {
                        id: OsmRelationId(relation.id()),
                        tags,
                        members,
                    };
                    if route.is_route_of_type(transform_types) {
                        routes.insert(route.id, route);
                    }
                }
            })
            .map_err(|e| OsmError::PbfLibError { source: e })?;
        Ok(routes)
    }

    fn ways(&self) -> Result<OsmWays, OsmError> {
        let mut coords: HashMap<OsmNodeId, Coord<f64>> = HashMap::new();
        let mut raw_ways: Vec<(OsmWayId, Vec<OsmNodeId>, OsmTags)> = vec![];
        self.reader()?
            .for_each(|element| match element {
                Element::Node(node) => {
                    coords.insert(
                        OsmNodeId(node.id()),
                        Coord {
                            x: node.lon(),
                            y: node.lat(),
                        },
                    );
                }
                Element::DenseNode(node) => {
                    coords.insert(
                        OsmNodeId(node.id()),
                        Coord {
                            x: node.lon(),
                            y: node.lat(),
                        },
                    );
                }
                Element::Way(way) => {
                    let nodes = way.refs().map(OsmNodeId).collect();
                    raw_ways.push((OsmWayId(way.id()), nodes, collect_tags(way.tags())));
                }
                Element::Relation(_) => {}
            })
            .map_err(|e| OsmError::PbfLibError { source: e })?;

        let mut missing_geometry = 0;
        let ways: OsmWays = raw_ways
            .into_iter()
            .map(|(id, nodes, tags)| {
                let geometry = nodes
                    .iter()
                    .map(|n| coords.get(n).copied())
                    .collect::<Option<Vec<_>>>();
                if geometry.is_none() {
                    missing_geometry += 1;
                }
                let way = OsmWay {
                    id,
                    tags,
                    nodes,
                    geometry,
                };
                (id, way)
            })
            .collect();
        if missing_geometry > 0 {
            log::warn!("{missing_geometry} ways reference nodes missing from the extract");
        }
        Ok(ways)
    }

    fn stops(&self) -> Result<OsmNodes, OsmError> {
        let mut stops = OsmNodes::new();
        let mut keep = |id: i64, lat: f64, lon: f64, tags: OsmTags| {
            if tags.contains_key("public_transport") {
                let node = OsmNode::new(OsmNodeId(id), lat, lon, tags);
                stops.insert(node.id, node);
            }
        };
        self.reader()?
            .for_each(|element| match element {
                Element::Node(node) => {
                    keep(node.id(), node.lat(), node.lon(), collect_tags(node.tags()))
                }
                Element::DenseNode(node) => {
                    keep(node.id(), node.lat(), node.lon(), collect_tags(node.tags()))
                }
                _ => {}
            })
            .map_err(|e| OsmError::PbfLibError { source: e })?;
        Ok(stops)
    }
}

fn collect_tags<'a>(tags: impl Iterator<Item = (&'a str, &'a str)>) -> OsmTags {
    tags.map(|(k, v)| (String::from(k), String::from(v)))
        .collect()
}
