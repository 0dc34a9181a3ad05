use serde::{Deserialize, Serialize};
use std::fmt::Display;
use trufi_osm::model::route::RouteError;

/// GTFS `route_type` values for the OSM transport modes that have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GtfsRouteType {
    Tram,
    Subway,
    Rail,
    Bus,
    Ferry,
    Gondola,
}

impl GtfsRouteType {
    /// maps the `route` tag of a relation. modes without a mapping reject
    /// the route.
    pub fn from_mode(mode: Option<&str>) -> Result<GtfsRouteType, RouteError> {
        match mode {
            Some("tram") | Some("light_rail") => Ok(GtfsRouteType::Tram),
            Some("subway") => Ok(GtfsRouteType::Subway),
            Some("train") => Ok(GtfsRouteType::Rail),
            Some("bus") | Some("share_taxi") => Ok(GtfsRouteType::Bus),
            Some("ferry") => Ok(GtfsRouteType::Ferry),
            Some("aerialway") => Ok(GtfsRouteType::Gondola),
            other => Err(RouteError::UnsupportedRouteType {
                mode: String::from(other.unwrap_or_default()),
            }),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            GtfsRouteType::Tram => 0,
            GtfsRouteType::Subway => 1,
            GtfsRouteType::Rail => 2,
            GtfsRouteType::Bus => 3,
            GtfsRouteType::Ferry => 4,
            GtfsRouteType::Gondola => 6,
        }
    }
}

impl From<GtfsRouteType> for u8 {
    fn from(value: GtfsRouteType) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for GtfsRouteType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GtfsRouteType::Tram),
            1 => Ok(GtfsRouteType::Subway),
            2 => Ok(GtfsRouteType::Rail),
            3 => Ok(GtfsRouteType::Bus),
            4 => Ok(GtfsRouteType::Ferry),
            6 => Ok(GtfsRouteType::Gondola),
            _ => Err(format!("unsupported route_type {value}")),
        }
    }
}

impl Display for GtfsRouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_mapping() {
        let codes: Vec<Option<u8>> = [
            "tram",
            "light_rail",
            "subway",
            "train",
            "bus",
            "share_taxi",
            "ferry",
            "aerialway",
        ]
        .iter()
        .map(|m| GtfsRouteType::from_mode(Some(m)).ok().map(|t| t.code()))
        .collect();
        assert_eq!(
            codes,
            vec![
                Some(0),
                Some(0),
                Some(1),
                Some(2),
                Some(3),
                Some(3),
                Some(4),
                Some(6)
            ]
        );
    }

    #[test]
    fn test_unmapped_modes_fail() {
        for mode in [Some("monorail"), Some("trolleybus"), None] {
            match GtfsRouteType::from_mode(mode) {
                Err(e) => assert_eq!(e.kind(), "unsupported_route_type"),
                Ok(t) => panic!("mode {mode:?} should not map, found {t}"),
            }
        }
    }
}
