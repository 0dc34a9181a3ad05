use super::{
    stop_times_for_trip, AgencyRow, FareAttributeRow, FarePricer, FareRuleRow, FeedInfoRow,
    FrequencyRow, GtfsFeed, GtfsRouteType, RoutePlan, RouteRow, SequenceCounter, ShapeRow,
    TripRow,
};
use crate::{
    config::{FeedMetadata, RouteHooks},
    schedule::{calendar::CalendarBuilder, stops::StopPlacement},
    GtfsBuildError,
};
use std::collections::HashMap;
use trufi_osm::model::route::{DiagnosticLog, RouteFeature, StopNameTable};

const DEFAULT_AGENCY: &str = "default";

/// derives every GTFS table from the accepted routes of a run.
///
/// a route whose transport mode has no GTFS route type, or whose opening
/// hours do not parse, is rejected in `log` and contributes to no table.
/// ids for agencies, fares and trips are sequential in route order.
pub fn build_gtfs(
    features: &[RouteFeature],
    stop_names: &StopNameTable,
    hooks: &dyn RouteHooks,
    log: &mut DiagnosticLog,
) -> Result<GtfsFeed, GtfsBuildError> {
    let config = hooks.config();
    let mut calendars = CalendarBuilder::new()?;
    let pricer = FarePricer::new()?;
    let mut stops = StopPlacement::new();
    let mut agency_ids: HashMap<String, u32> = HashMap::new();
    let mut agency_seq = SequenceCounter::new();
    let mut fare_seq = SequenceCounter::new();
    let mut trip_seq = SequenceCounter::new();
    let mut feed = GtfsFeed::default();

    for route in features.iter() {
        let validated = GtfsRouteType::from_mode(route.mode())
            .and_then(|rt| calendars.services_for_route(route, hooks).map(|s| (rt, s)));
        let (route_type, services) = match validated {
            Ok(v) => v,
            Err(e) => {
                log.reject(route.id, &route.tags, &e);
                continue;
            }
        };

        let agency_name = route.operator().unwrap_or(DEFAULT_AGENCY).to_string();
        let agency_id = match agency_ids.get(&agency_name) {
            Some(id) => *id,
            None => {
                let id = agency_seq.next_id();
                agency_ids.insert(agency_name.clone(), id);
                feed.agency.push(AgencyRow {
                    agency_id: id,
                    agency_name,
                    agency_url: config.agency_url.clone(),
                    agency_timezone: config.agency_timezone.clone(),
                });
                id
            }
        };

        feed.routes.push(RouteRow {
            route_id: route.id,
            agency_id,
            route_short_name: route
                .reference()
                .or_else(|| route.name())
                .unwrap_or_default()
                .to_string(),
            route_long_name: route.name().unwrap_or_default().to_string(),
            route_color: route.colour().unwrap_or_default().replace('#', ""),
            route_type,
        });

        let fare_id = fare_seq.next_id();
        feed.fare_attributes.push(FareAttributeRow {
            fare_id,
            price: pricer.price(route),
            currency_type: config.default_fare_currency.clone(),
            payment_method: pricer.payment_method(route),
            transfers: None,
            agency_id,
        });
        feed.fare_rules.push(FareRuleRow {
            fare_id,
            route_id: route.id,
        });

        let thinned_stops = stops.place(
            route,
            stop_names,
            hooks,
            config.stop_thinning_distance_meters,
        );
        let headway_secs = hooks.headway_secs(route);
        let speed_kmh = route_speed_kmh(route, hooks);
        let mut trip_ids = Vec::with_capacity(services.len());
        for service in services.iter() {
            let trip_id = trip_seq.next_id();
            trip_ids.push(trip_id);
            feed.trips.push(TripRow {
                route_id: route.id,
                service_id: service.service_id.clone(),
                trip_id,
                shape_id: route.id,
            });
            feed.frequencies.push(FrequencyRow {
                trip_id,
                start_time: format!("{}:00", service.start_time),
                end_time: format!("{}:00", service.end_time),
                headway_secs,
                exact_times: 1,
            });
            feed.stop_times
                .extend(stop_times_for_trip(trip_id, &thinned_stops, speed_kmh));
        }

        feed.shapes
            .extend(route.coordinates.iter().enumerate().map(|(idx, coord)| ShapeRow {
                shape_id: route.id,
                shape_pt_lat: coord.y,
                shape_pt_lon: coord.x,
                shape_pt_sequence: idx,
            }));

        feed.plans.push(RoutePlan {
            route_id: route.id,
            agency_id,
            services,
            trip_ids,
            thinned_stops,
        });
    }

    feed.calendar = calendars.into_rows();
    feed.stops = stops.into_stops();
    feed.feed_info = vec![feed_info_row(&config.feed)];
    log.sort();
    log::info!(
        "built GTFS feed: {} agencies, {} routes, {} trips, {} stops, {} calendars",
        feed.agency.len(),
        feed.routes.len(),
        feed.trips.len(),
        feed.stops.len(),
        feed.calendar.len()
    );
    Ok(feed)
}

/// the hook's speed for `route`, or the configured speed when the hook
/// returns one that cannot move a vehicle.
fn route_speed_kmh(route: &RouteFeature, hooks: &dyn RouteHooks) -> f64 {
    let speed_kmh = hooks.vehicle_speed_kmh(route);
    if speed_kmh.is_finite() && speed_kmh > 0.0 {
        speed_kmh
    } else {
        let fallback = hooks.config().speed_kmh;
        log::warn!(
            "route {}: vehicle speed {speed_kmh} km/h is not positive, using {fallback} km/h",
            route.id
        );
        fallback
    }
}

fn feed_info_row(feed: &FeedMetadata) -> FeedInfoRow {
    FeedInfoRow {
        feed_publisher_name: feed.publisher_name.clone(),
        feed_publisher_url: feed.publisher_url.clone(),
        feed_lang: feed.lang.clone(),
        feed_version: feed.version.clone(),
        feed_contact_email: feed.contact_email.clone(),
        feed_contact_url: feed.contact_url.clone(),
        feed_start_date: feed.start_date,
        feed_end_date: feed.end_date,
        feed_id: feed.id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuilderConfig, ConfiguredHooks};
    use geo::Coord;
    use trufi_osm::model::osm::element::{OsmNodeId, OsmRelationId, OsmTags};

    fn route(id: i64, tags: &[(&str, &str)]) -> RouteFeature {
        let tags: OsmTags = tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let nodes = (0..4).map(|i| OsmNodeId(id * 100 + i)).collect();
        let coords = (0..4)
            .map(|i| Coord {
                x: -66.15 + i as f64 * 0.001,
                y: -17.39,
            })
            .collect();
        RouteFeature::new(OsmRelationId(id), tags, coords, nodes, vec![])
    }

    fn build(features: &[RouteFeature], log: &mut DiagnosticLog) -> GtfsFeed {
        let hooks = ConfiguredHooks::new(BuilderConfig::default());
        match build_gtfs(features, &StopNameTable::new(), &hooks, log) {
            Ok(f) => f,
            Err(e) => panic!("{e}"),
        }
    }

    fn accepted_log(features: &[RouteFeature]) -> DiagnosticLog {
        let mut log = DiagnosticLog::new();
        for f in features.iter() {
            log.accept(f.id, &f.tags);
        }
        log
    }

    #[test]
    fn test_tables_for_two_routes() {
        let features = vec![
            route(
                1,
                &[
                    ("ref", "10"),
                    ("name", "Linea 10"),
                    ("route", "bus"),
                    ("operator", "Sindicato A"),
                    ("colour", "#FF0000"),
                    ("opening_hours", "Mo-Fr 06:00-22:00; Sa 07:00-20:00"),
                    ("fee", "yes"),
                    ("charge", "2.50"),
                ],
            ),
            route(2, &[("ref", "11"), ("route", "share_taxi")]),
        ];
        let mut log = accepted_log(&features);
        let feed = build(&features, &mut log);

        // agencies deduped by operator, "default" when missing
        let agencies: Vec<(u32, &str)> = feed
            .agency
            .iter()
            .map(|a| (a.agency_id, a.agency_name.as_str()))
            .collect();
        assert_eq!(agencies, vec![(0, "Sindicato A"), (1, "default")]);

        assert_eq!(feed.routes[0].route_color, "FF0000");
        assert_eq!(feed.routes[0].route_short_name, "10");
        assert_eq!(feed.routes[0].route_type, GtfsRouteType::Bus);

        // one trip and frequency per service clause
        let trips: Vec<(u32, &str)> = feed
            .trips
            .iter()
            .map(|t| (t.trip_id, t.service_id.as_str()))
            .collect();
        assert_eq!(trips, vec![(0, "Mo-Fr"), (1, "Sa"), (2, "Mo-Su")]);
        assert_eq!(feed.frequencies[1].start_time, "07:00:00");
        assert_eq!(feed.frequencies[1].end_time, "20:00:00");
        assert_eq!(feed.frequencies[1].headway_secs, 300);

        let prices: Vec<&str> = feed
            .fare_attributes
            .iter()
            .map(|f| f.price.as_str())
            .collect();
        assert_eq!(prices, vec!["2.50", "0"]);
        assert_eq!(feed.fare_rules.len(), 2);

        assert_eq!(feed.shapes.len(), 8);
        assert_eq!(feed.calendar.len(), 3);
        assert_eq!(feed.feed_info.len(), 1);
        assert_eq!(feed.plans.len(), 2);
        assert!(!log.entries().iter().any(|e| e.is_error()));
    }

    #[test]
    fn test_rejected_routes_contribute_nothing() {
        let features = vec![
            route(1, &[("ref", "1"), ("route", "monorail")]),
            route(2, &[("ref", "2"), ("route", "bus"), ("opening_hours", "24/7")]),
            route(3, &[("ref", "3"), ("route", "bus")]),
        ];
        let mut log = accepted_log(&features);
        let feed = build(&features, &mut log);

        let route_ids: Vec<i64> = feed.routes.iter().map(|r| r.route_id.0).collect();
        assert_eq!(route_ids, vec![3]);
        assert!(feed.trips.iter().all(|t| t.route_id == OsmRelationId(3)));
        assert!(feed.shapes.iter().all(|s| s.shape_id == OsmRelationId(3)));
        assert!(feed.stops.iter().all(|s| s.stop_id.0 >= 300));
        assert_eq!(feed.fare_attributes[0].fare_id, 0);

        let kinds: Vec<Option<&str>> = log
            .entries()
            .iter()
            .map(|e| e.error.as_ref().map(|err| err.kind.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                Some("unsupported_route_type"),
                Some("invalid_opening_hours"),
                None
            ]
        );
    }

    struct StoppedVehicleHooks {
        config: BuilderConfig,
    }

    impl RouteHooks for StoppedVehicleHooks {
        fn config(&self) -> &BuilderConfig {
            &self.config
        }

        fn vehicle_speed_kmh(&self, _route: &RouteFeature) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_unusable_hook_speed_falls_back_to_config() {
        let features = vec![route(1, &[("ref", "1"), ("route", "bus")])];
        let default_times = build(&features, &mut accepted_log(&features)).stop_times;

        let hooks = StoppedVehicleHooks {
            config: BuilderConfig::default(),
        };
        let mut log = accepted_log(&features);
        let feed = match build_gtfs(&features, &StopNameTable::new(), &hooks, &mut log) {
            Ok(f) => f,
            Err(e) => panic!("{e}"),
        };
        let times: Vec<&str> = feed
            .stop_times
            .iter()
            .map(|st| st.arrival_time.as_str())
            .collect();
        let expected: Vec<&str> = default_times
            .iter()
            .map(|st| st.arrival_time.as_str())
            .collect();
        assert_eq!(times, expected);
    }

    #[test]
    fn test_payment_method_from_route_tag() {
        let features = vec![
            route(1, &[("ref", "1"), ("route", "bus"), ("paymentMethod", "1")]),
            route(2, &[("ref", "2"), ("route", "bus")]),
        ];
        let mut log = accepted_log(&features);
        let feed = build(&features, &mut log);
        let methods: Vec<u8> = feed
            .fare_attributes
            .iter()
            .map(|f| f.payment_method)
            .collect();
        assert_eq!(methods, vec![1, 0]);
    }

    #[test]
    fn test_stop_times_follow_thinned_stops() {
        let features = vec![route(1, &[("ref", "1"), ("route", "bus")])];
        let mut log = accepted_log(&features);
        let feed = build(&features, &mut log);
        let thinned = &feed.plans[0].thinned_stops;
        assert_eq!(feed.stop_times.len(), thinned.len());
        let stop_ids: Vec<OsmNodeId> = feed.stop_times.iter().map(|st| st.stop_id).collect();
        assert_eq!(stop_ids, thinned.nodes);
        assert_eq!(feed.stop_times[0].arrival_time, "00:00:00");
    }
}
