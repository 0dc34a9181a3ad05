use crate::model::osm::element::{OsmNode, OsmNodeId, OsmRelationId, OsmTags};
use geo::Coord;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::{Deserialize, Serialize};

/// one accepted transit route: the relation's tags plus its stitched,
/// deduplicated path.
///
/// `coordinates` and `nodes` are index-aligned and no two adjacent
/// coordinates are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteFeature {
    pub id: OsmRelationId,
    pub tags: OsmTags,
    pub coordinates: Vec<Coord<f64>>,
    pub nodes: Vec<OsmNodeId>,
    /// stop nodes attached to the relation, in relation order.
    pub stops: Vec<OsmNode>,
}

impl RouteFeature {
    /// builds a feature from a stitched path, dropping any point exactly
    /// equal to its predecessor along with its node id.
    pub fn new(
        id: OsmRelationId,
        tags: OsmTags,
        coordinates: Vec<Coord<f64>>,
        nodes: Vec<OsmNodeId>,
        stops: Vec<OsmNode>,
    ) -> RouteFeature {
        let mut dedup_coords: Vec<Coord<f64>> = Vec::with_capacity(coordinates.len());
        let mut dedup_nodes: Vec<OsmNodeId> = Vec::with_capacity(nodes.len());
        for (coord, node) in coordinates.into_iter().zip(nodes) {
            if dedup_coords.last() == Some(&coord) {
                continue;
            }
            dedup_coords.push(coord);
            dedup_nodes.push(node);
        }
        RouteFeature {
            id,
            tags,
            coordinates: dedup_coords,
            nodes: dedup_nodes,
            stops,
        }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn reference(&self) -> Option<&str> {
        self.tag("ref")
    }

    pub fn name(&self) -> Option<&str> {
        self.tag("name")
    }

    pub fn operator(&self) -> Option<&str> {
        self.tag("operator")
    }

    /// the transport mode, from the `route` tag.
    pub fn mode(&self) -> Option<&str> {
        self.tag("route")
    }

    pub fn colour(&self) -> Option<&str> {
        self.tag("colour")
    }

    pub fn opening_hours(&self) -> Option<&str> {
        self.tag("opening_hours")
    }

    /// the route as a feature collection: a LineString carrying the node
    /// ids as a foreign member, followed by one Point per attached stop.
    pub fn to_geojson(&self) -> FeatureCollection {
        let line = Value::LineString(self.coordinates.iter().map(|c| vec![c.x, c.y]).collect());
        let mut line_members = JsonObject::new();
        line_members.insert(
            String::from("nodes"),
            JsonValue::Array(self.nodes.iter().map(|n| JsonValue::from(n.0)).collect()),
        );
        let route_feature = Feature {
            bbox: None,
            geometry: Some(Geometry {
                bbox: None,
                value: line,
                foreign_members: Some(line_members),
            }),
            id: None,
            properties: Some(properties(&self.tags, self.id.0)),
            foreign_members: None,
        };

        let stop_features = self.stops.iter().map(|stop| Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![stop.lon, stop.lat]))),
            id: None,
            properties: Some(properties(&stop.tags, stop.id.0)),
            foreign_members: None,
        });

        FeatureCollection {
            bbox: None,
            features: std::iter::once(route_feature).chain(stop_features).collect(),
            foreign_members: None,
        }
    }
}

fn properties(tags: &OsmTags, id: i64) -> JsonObject {
    let mut props: JsonObject = tags
        .iter()
        .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
        .collect();
    props.insert(String::from("id"), JsonValue::from(id));
    props
}
