use super::FeedMetadata;
use crate::GtfsBuildError;
use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use trufi_osm::model::osm::element::OsmRelationId;

/// data part of a build configuration. every field has a default, so a
/// configuration file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// vehicle speed used by the travel time model.
    pub speed_kmh: f64,
    /// distance travelled along a route before the next stop is placed.
    pub stop_thinning_distance_meters: f64,
    pub headway_secs: u32,
    /// opening hours used for routes without an `opening_hours` tag.
    pub default_calendar: String,
    /// routes whose stops come from their stop members instead of thinning.
    pub fake_stop_route_ids: HashSet<OsmRelationId>,
    pub ignored_route_ids: HashSet<OsmRelationId>,
    pub unnamed_stop_name: String,
    pub stop_name_separator: String,
    pub default_fare_currency: String,
    pub agency_timezone: String,
    pub agency_url: String,
    /// values of the `route` tag that are imported.
    pub transform_types: Vec<String>,
    pub city_name: String,
    pub feed: FeedMetadata,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            speed_kmh: 50.0,
            stop_thinning_distance_meters: 100.0,
            headway_secs: 300,
            default_calendar: String::from("Mo-Su 06:00-23:00"),
            fake_stop_route_ids: HashSet::new(),
            ignored_route_ids: HashSet::new(),
            unnamed_stop_name: String::from("unnamed"),
            stop_name_separator: String::from(" and "),
            default_fare_currency: String::from("USD"),
            agency_timezone: String::from("America/La_Paz"),
            agency_url: String::from("https://www.example.com/"),
            transform_types: [
                "bus",
                "share_taxi",
                "aerialway",
                "train",
                "subway",
                "monorail",
                "tram",
                "trolleybus",
                "ferry",
                "light_rail",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            city_name: String::from("city"),
            feed: FeedMetadata::default(),
        }
    }
}

impl BuilderConfig {
    /// rejects values the travel time model cannot work with.
    pub fn validate(&self) -> Result<(), GtfsBuildError> {
        if self.speed_kmh.is_nan() || self.speed_kmh <= 0.0 {
            return Err(GtfsBuildError::ConfigurationError(format!(
                "speed_kmh must be positive, found {}",
                self.speed_kmh
            )));
        }
        if self.stop_thinning_distance_meters < 0.0 {
            return Err(GtfsBuildError::ConfigurationError(format!(
                "stop_thinning_distance_meters must not be negative, found {}",
                self.stop_thinning_distance_meters
            )));
        }
        if self.headway_secs == 0 {
            return Err(GtfsBuildError::ConfigurationError(String::from(
                "headway_secs must be positive",
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for BuilderConfig {
    type Error = GtfsBuildError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let format = if f.ends_with(".toml") {
            FileFormat::Toml
        } else if f.ends_with(".json") {
            FileFormat::Json
        } else {
            return Err(GtfsBuildError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        let config = Config::builder()
            .add_source(config::File::new(f, format))
            .build()
            .map_err(|e| GtfsBuildError::ConfigReadError {
                msg: format!("failed reading '{f}'"),
                source: e,
            })?;
        let builder_config = config
            .try_deserialize::<BuilderConfig>()
            .map_err(|e| GtfsBuildError::ConfigReadError {
                msg: format!("failed decoding '{f}'"),
                source: e,
            })?;
        builder_config.validate()?;
        Ok(builder_config)
    }
}
