use super::{ExtractionError, RouteExtraction, RouteExtractor};
use crate::{
    model::osm::element::{
        OsmMemberType, OsmNode, OsmNodeId, OsmNodes, OsmRelation, OsmWayId, OsmWays,
    },
    util::geo_ops,
};
use geo::Coord;
use std::collections::{BTreeMap, HashMap};

/// stitches the way members of a relation end to end.
///
/// ways are taken in relation order, skipping platform ways. the first way is
/// oriented so that its last node touches the second way; every following way
/// is appended forward when its first node continues the path and reversed
/// when its last node does. the junction node is not repeated.
#[derive(Debug, Clone, Copy, Default)]
pub struct WayStitcher;

struct Segment {
    id: OsmWayId,
    nodes: Vec<OsmNodeId>,
    points: Vec<Coord<f64>>,
}

impl Segment {
    fn head(&self) -> Option<OsmNodeId> {
        self.nodes.first().copied()
    }

    fn tail(&self) -> Option<OsmNodeId> {
        self.nodes.last().copied()
    }

    fn touches(&self, node: Option<OsmNodeId>) -> bool {
        node.is_some() && (self.head() == node || self.tail() == node)
    }

    fn reverse(&mut self) {
        self.nodes.reverse();
        self.points.reverse();
    }
}

impl RouteExtractor for WayStitcher {
    fn extract(
        &self,
        relation: &OsmRelation,
        ways: &OsmWays,
        stops: &OsmNodes,
    ) -> Result<RouteExtraction, ExtractionError> {
        let mut segments = collect_segments(relation, ways)?.into_iter();
        let mut first = segments.next().ok_or(ExtractionError::NoWays)?;
        let mut rest = segments.peekable();
        if let Some(second) = rest.peek() {
            if second.touches(first.head()) && !second.touches(first.tail()) {
                first.reverse();
            }
        }

        let mut nodes = first.nodes;
        let mut points = first.points;
        for mut segment in rest {
            let tail = nodes.last().copied();
            if segment.head() != tail {
                if segment.tail() != tail {
                    return Err(ExtractionError::Disconnected {
                        relation: relation.id,
                        way: segment.id,
                    });
                }
                segment.reverse();
            }
            nodes.extend(segment.nodes.into_iter().skip(1));
            points.extend(segment.points.into_iter().skip(1));
        }

        let route_stops = collect_stops(relation, stops);
        let stop_names = attach_stop_names(&route_stops, &nodes, &points);
        Ok(RouteExtraction {
            nodes,
            points,
            route_stops,
            stop_names,
        })
    }
}

fn collect_segments(
    relation: &OsmRelation,
    ways: &OsmWays,
) -> Result<Vec<Segment>, ExtractionError> {
    relation
        .members
        .iter()
        .filter(|m| m.member_type == OsmMemberType::Way && !m.is_stop_role())
        .map(|m| {
            let way_id = OsmWayId(m.member_ref);
            let way = ways
                .get(&way_id)
                .ok_or(ExtractionError::MissingWay(way_id))?;
            let geometry = way
                .geometry
                .as_ref()
                .ok_or(ExtractionError::MissingGeometry(way_id))?;
            if geometry.len() != way.nodes.len() || way.nodes.is_empty() {
                return Err(ExtractionError::MisalignedGeometry(
                    way_id,
                    way.nodes.len(),
                    geometry.len(),
                ));
            }
            Ok(Segment {
                id: way_id,
                nodes: way.nodes.clone(),
                points: geometry.clone(),
            })
        })
        .collect()
}

fn collect_stops(relation: &OsmRelation, stops: &OsmNodes) -> Vec<OsmNode> {
    relation
        .members
        .iter()
        .filter(|m| m.member_type == OsmMemberType::Node && m.is_stop_role())
        .filter_map(|m| {
            let stop = stops.get(&OsmNodeId(m.member_ref));
            if stop.is_none() {
                log::debug!(
                    "relation {}: stop node {} not found in stop lookup",
                    relation.id,
                    m.member_ref
                );
            }
            stop.cloned()
        })
        .collect()
}

/// files each stop's name under the path node it sits on, or the nearest
/// path node when the stop is off the path.
fn attach_stop_names(
    route_stops: &[OsmNode],
    nodes: &[OsmNodeId],
    points: &[Coord<f64>],
) -> BTreeMap<OsmNodeId, Vec<String>> {
    let on_path: HashMap<OsmNodeId, usize> =
        nodes.iter().enumerate().map(|(i, n)| (*n, i)).collect();
    let mut names: BTreeMap<OsmNodeId, Vec<String>> = BTreeMap::new();
    for stop in route_stops.iter() {
        let idx = match on_path.get(&stop.id) {
            Some(idx) => Some(*idx),
            None => geo_ops::nearest_index(points, stop.coord()),
        };
        if let Some(node_id) = idx.and_then(|i| nodes.get(i)) {
            names
                .entry(*node_id)
                .or_default()
                .push(String::from(stop.name().unwrap_or_default()));
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::osm::element::{
        OsmRelationId, OsmRelationMember, OsmTags, OsmWay,
    };

    fn way(id: i64, nodes: &[i64]) -> OsmWay {
        OsmWay {
            id: OsmWayId(id),
            tags: OsmTags::new(),
            nodes: nodes.iter().map(|n| OsmNodeId(*n)).collect(),
            geometry: Some(
                nodes
                    .iter()
                    .map(|n| Coord {
                        x: *n as f64 * 0.001,
                        y: 0.0,
                    })
                    .collect(),
            ),
        }
    }

    fn member(member_type: OsmMemberType, member_ref: i64, role: &str) -> OsmRelationMember {
        OsmRelationMember {
            member_type,
            member_ref,
            role: String::from(role),
        }
    }

    fn relation(members: Vec<OsmRelationMember>) -> OsmRelation {
        OsmRelation {
            id: OsmRelationId(100),
            tags: OsmTags::new(),
            members,
        }
    }

    fn lookup(ways: Vec<OsmWay>) -> OsmWays {
        ways.into_iter().map(|w| (w.id, w)).collect()
    }

    fn ids(nodes: &[OsmNodeId]) -> Vec<i64> {
        nodes.iter().map(|n| n.0).collect()
    }

    #[test]
    fn test_reversed_ways_are_stitched() {
        // first way drawn backwards, third way drawn backwards
        let ways = lookup(vec![way(1, &[3, 2, 1]), way(2, &[3, 4]), way(3, &[6, 5, 4])]);
        let rel = relation(vec![
            member(OsmMemberType::Way, 1, ""),
            member(OsmMemberType::Way, 2, ""),
            member(OsmMemberType::Way, 3, "forward"),
        ]);
        let result = match WayStitcher.extract(&rel, &ways, &OsmNodes::new()) {
            Ok(r) => r,
            Err(e) => panic!("unexpected extraction failure {e}"),
        };
        assert_eq!(ids(&result.nodes), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(result.points.len(), result.nodes.len());
    }

    #[test]
    fn test_disconnected_way_fails() {
        let ways = lookup(vec![way(1, &[1, 2]), way(2, &[8, 9])]);
        let rel = relation(vec![
            member(OsmMemberType::Way, 1, ""),
            member(OsmMemberType::Way, 2, ""),
        ]);
        let result = WayStitcher.extract(&rel, &ways, &OsmNodes::new());
        assert_eq!(
            result,
            Err(ExtractionError::Disconnected {
                relation: OsmRelationId(100),
                way: OsmWayId(2)
            })
        );
    }

    #[test]
    fn test_missing_way_fails() {
        let rel = relation(vec![member(OsmMemberType::Way, 1, "")]);
        let result = WayStitcher.extract(&rel, &OsmWays::new(), &OsmNodes::new());
        assert_eq!(result, Err(ExtractionError::MissingWay(OsmWayId(1))));
    }

    #[test]
    fn test_no_ways_fails() {
        let rel = relation(vec![member(OsmMemberType::Node, 1, "stop")]);
        let result = WayStitcher.extract(&rel, &OsmWays::new(), &OsmNodes::new());
        assert_eq!(result, Err(ExtractionError::NoWays));
    }

    #[test]
    fn test_stops_and_names() {
        let ways = lookup(vec![way(1, &[1, 2, 3])]);
        let on_path = OsmNode::new(
            OsmNodeId(2),
            0.0,
            0.002,
            OsmTags::from([(String::from("name"), String::from("Centro"))]),
        );
        // platform beside the path, closest to node 3
        let platform = OsmNode::new(
            OsmNodeId(50),
            0.0001,
            0.0029,
            OsmTags::from([(String::from("name"), String::from("Terminal"))]),
        );
        let stops: OsmNodes = vec![on_path, platform]
            .into_iter()
            .map(|n| (n.id, n))
            .collect();
        let rel = relation(vec![
            member(OsmMemberType::Node, 2, "stop"),
            member(OsmMemberType::Node, 50, "platform"),
            member(OsmMemberType::Node, 99, "stop"),
            member(OsmMemberType::Way, 1, ""),
        ]);
        let result = match WayStitcher.extract(&rel, &ways, &stops) {
            Ok(r) => r,
            Err(e) => panic!("unexpected extraction failure {e}"),
        };
        let stop_ids: Vec<OsmNodeId> = result.route_stops.iter().map(|s| s.id).collect();
        assert_eq!(ids(&stop_ids), vec![2, 50]);
        assert_eq!(
            result.stop_names.get(&OsmNodeId(2)),
            Some(&vec![String::from("Centro")])
        );
        assert_eq!(
            result.stop_names.get(&OsmNodeId(3)),
            Some(&vec![String::from("Terminal")])
        );
    }
}
