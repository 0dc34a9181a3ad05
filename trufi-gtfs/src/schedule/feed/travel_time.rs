use super::StopTimeRow;
use crate::schedule::{stops::ThinnedStops, time::gtfs_time};
use trufi_osm::util::geo_ops;
use uom::si::{
    f64::Velocity,
    velocity::{kilometer_per_hour, meter_per_second},
};

/// stop times of one trip under a constant speed model: each hop between
/// consecutive stops takes `ceil(distance_m / speed_m_s)` seconds, and a
/// vehicle departs as soon as it arrives. times count from the trip start.
/// a speed that is not positive makes every hop saturate at the largest
/// representable time.
pub fn stop_times_for_trip(trip_id: u32, stops: &ThinnedStops, speed_kmh: f64) -> Vec<StopTimeRow> {
    let speed = Velocity::new::<kilometer_per_hour>(speed_kmh).get::<meter_per_second>();
    let mut rows = Vec::with_capacity(stops.len());
    let mut elapsed: u32 = 0;
    let mut previous = None;
    for (stop_sequence, (node, coord)) in stops.iter().enumerate() {
        if let Some(prev) = previous {
            let meters = geo_ops::haversine_meters(prev, *coord);
            elapsed = elapsed.saturating_add(hop_seconds(meters, speed));
        }
        previous = Some(*coord);
        let time = gtfs_time::seconds_to_time(elapsed);
        rows.push(StopTimeRow {
            trip_id,
            arrival_time: time.clone(),
            departure_time: time,
            stop_id: *node,
            stop_sequence,
            timepoint: 0,
        });
    }
    rows
}

fn hop_seconds(meters: f64, speed_m_s: f64) -> u32 {
    if speed_m_s.is_finite() && speed_m_s > 0.0 {
        (meters / speed_m_s).ceil() as u32
    } else {
        u32::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use trufi_osm::model::osm::element::OsmNodeId;

    #[test]
    fn test_constant_speed_model() {
        let mut stops = ThinnedStops::default();
        stops.push(OsmNodeId(1), Coord { x: 0.0, y: 0.0 });
        // ~1111.95m north
        stops.push(OsmNodeId(2), Coord { x: 0.0, y: 0.01 });
        stops.push(OsmNodeId(3), Coord { x: 0.0, y: 0.02 });
        let rows = stop_times_for_trip(7, &stops, 36.0);
        let times: Vec<&str> = rows.iter().map(|r| r.arrival_time.as_str()).collect();
        // 10 m/s, each hop rounds 111.2s up to 112s
        assert_eq!(times, vec!["00:00:00", "00:01:52", "00:03:44"]);
        assert!(rows.iter().all(|r| r.arrival_time == r.departure_time));
        assert!(rows.iter().all(|r| r.trip_id == 7 && r.timepoint == 0));
        let seqs: Vec<usize> = rows.iter().map(|r| r.stop_sequence).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[test]
    fn test_stopped_vehicle_saturates() {
        let mut stops = ThinnedStops::default();
        stops.push(OsmNodeId(1), Coord { x: 0.0, y: 0.0 });
        stops.push(OsmNodeId(2), Coord { x: 0.0, y: 0.01 });
        stops.push(OsmNodeId(3), Coord { x: 0.0, y: 0.02 });
        for speed in [0.0, -10.0, f64::NAN] {
            let rows = stop_times_for_trip(1, &stops, speed);
            let last = gtfs_time::seconds_to_time(u32::MAX);
            let times: Vec<&str> = rows.iter().map(|r| r.arrival_time.as_str()).collect();
            assert_eq!(times, vec!["00:00:00", last.as_str(), last.as_str()]);
        }
    }
}
