use geo::Coord;
use trufi_osm::model::osm::element::OsmNodeId;

/// the boarding stops of one route in travel order, used for timing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThinnedStops {
    pub nodes: Vec<OsmNodeId>,
    pub coordinates: Vec<Coord<f64>>,
}

impl ThinnedStops {
    pub fn push(&mut self, node: OsmNodeId, coord: Coord<f64>) {
        self.nodes.push(node);
        self.coordinates.push(coord);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsmNodeId, &Coord<f64>)> {
        self.nodes.iter().zip(self.coordinates.iter())
    }
}
