use geo::{line_string, Coord, Haversine, Length, LineString};
use uom::si::f64::Length as UomLength;

/// great-circle distance between two x=lon, y=lat coordinates.
pub fn haversine_distance(src: Coord<f64>, dst: Coord<f64>) -> UomLength {
    let line: LineString<f64> = line_string![src, dst];
    UomLength::new::<uom::si::length::meter>(Haversine.length(&line))
}

/// great-circle distance in meters.
pub fn haversine_meters(src: Coord<f64>, dst: Coord<f64>) -> f64 {
    haversine_distance(src, dst).get::<uom::si::length::meter>()
}

/// index of the coordinate in `path` closest to `target`, if `path` is not empty.
/// ties resolve to the earliest index.
pub fn nearest_index(path: &[Coord<f64>], target: Coord<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, coord) in path.iter().enumerate() {
        let d = haversine_meters(*coord, target);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_meters(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 });
        // ~111.2km on the mean earth radius used by geo
        assert!((d - 111_195.0).abs() < 100.0, "unexpected distance {d}");
    }

    #[test]
    fn test_zero_distance() {
        let c = Coord {
            x: -66.15,
            y: -17.39,
        };
        assert_eq!(haversine_meters(c, c), 0.0);
    }

    #[test]
    fn test_nearest_index() {
        let path = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 0.001, y: 0.0 },
            Coord { x: 0.002, y: 0.0 },
        ];
        let target = Coord {
            x: 0.0011,
            y: 0.0001,
        };
        assert_eq!(nearest_index(&path, target), Some(1));
        assert_eq!(nearest_index(&[], target), None);
    }
}
