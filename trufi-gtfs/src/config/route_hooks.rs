use super::BuilderConfig;
use trufi_osm::model::{osm::element::OsmRelation, route::RouteFeature};

/// per-route decisions of a build. the default methods read a
/// [`BuilderConfig`]; implement the trait to apply custom rules, such as
/// a speed that depends on the transport mode.
pub trait RouteHooks: Sync {
    fn config(&self) -> &BuilderConfig;

    /// `false` skips the route without a log entry.
    fn include_route(&self, _relation: &OsmRelation) -> bool {
        true
    }

    /// opening hours for a route without an `opening_hours` tag.
    fn default_calendar(&self, _route: &RouteFeature) -> String {
        self.config().default_calendar.clone()
    }

    /// when true, the route's stop members become its boarding stops
    /// instead of thinned points along its path.
    fn fake_stops(&self, route: &RouteFeature) -> bool {
        self.config().fake_stop_route_ids.contains(&route.id)
    }

    /// display name of a thinned stop from its name candidates.
    fn stop_name(&self, candidates: Option<&[String]>) -> String {
        match candidates {
            Some(names) if !names.is_empty() => names.join(&self.config().stop_name_separator),
            _ => self.config().unnamed_stop_name.clone(),
        }
    }

    fn vehicle_speed_kmh(&self, _route: &RouteFeature) -> f64 {
        self.config().speed_kmh
    }

    fn headway_secs(&self, _route: &RouteFeature) -> u32 {
        self.config().headway_secs
    }
}

/// hooks driven entirely by configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredHooks {
    config: BuilderConfig,
}

impl ConfiguredHooks {
    pub fn new(config: BuilderConfig) -> ConfiguredHooks {
        ConfiguredHooks { config }
    }
}

impl RouteHooks for ConfiguredHooks {
    fn config(&self) -> &BuilderConfig {
        &self.config
    }
}
