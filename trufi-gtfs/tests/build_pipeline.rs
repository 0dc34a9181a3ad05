use geo::Coord;
use gtfs_structures::RawGtfs;
use std::collections::HashSet;
use trufi_gtfs::{
    app::{build, write_outputs, BuildResult},
    config::{BuilderConfig, ConfiguredHooks, OutputFiles},
};
use trufi_osm::{
    algorithm::extraction::WayStitcher,
    model::osm::{
        element::{
            OsmMemberType, OsmNode, OsmNodeId, OsmNodes, OsmRelation, OsmRelationId,
            OsmRelationMember, OsmRoutes, OsmTags, OsmWay, OsmWayId, OsmWays,
        },
        source::OsmDataSource,
        OsmError,
    },
};

/// an in-memory extract: routes 1 and 2 share node 500, route 3 has no ref,
/// route 4 has opening hours that do not parse.
struct FixtureSource;

fn tags(pairs: &[(&str, &str)]) -> OsmTags {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn way(id: i64, nodes: &[i64]) -> OsmWay {
    OsmWay {
        id: OsmWayId(id),
        tags: OsmTags::new(),
        nodes: nodes.iter().map(|n| OsmNodeId(*n)).collect(),
        geometry: Some(nodes.iter().map(|n| node_coord(*n)).collect()),
    }
}

/// nodes 1xx run east-west, nodes 2xx north-south, crossing at node 500.
fn node_coord(node: i64) -> Coord<f64> {
    match node {
        500 => Coord {
            x: -66.157,
            y: -17.393,
        },
        n if n < 200 => Coord {
            x: -66.16 + (n - 100) as f64 * 0.001,
            y: -17.393,
        },
        n => Coord {
            x: -66.157,
            y: -17.39 - (n - 200) as f64 * 0.001,
        },
    }
}

fn member(member_type: OsmMemberType, member_ref: i64, role: &str) -> OsmRelationMember {
    OsmRelationMember {
        member_type,
        member_ref,
        role: String::from(role),
    }
}

fn relation(id: i64, tag_pairs: &[(&str, &str)], members: Vec<OsmRelationMember>) -> OsmRelation {
    let mut t = tags(&[("type", "route"), ("route", "bus")]);
    t.extend(tags(tag_pairs));
    OsmRelation {
        id: OsmRelationId(id),
        tags: t,
        members,
    }
}

impl OsmDataSource for FixtureSource {
    fn routes(&self, transform_types: &[String]) -> Result<OsmRoutes, OsmError> {
        let routes = vec![
            relation(
                1,
                &[
                    ("ref", "2"),
                    ("name", "Linea 2"),
                    ("from", "Oeste"),
                    ("to", "Este"),
                    ("operator", "Sindicato A"),
                    ("fee", "yes"),
                    ("charge", "2.50"),
                    ("colour", "#0000FF"),
                ],
                vec![
                    member(OsmMemberType::Node, 100, "stop"),
                    member(OsmMemberType::Way, 10, ""),
                    member(OsmMemberType::Way, 11, ""),
                ],
            ),
            relation(
                2,
                &[
                    ("ref", "1"),
                    ("name", "Linea 1"),
                    ("opening_hours", "Mo-Fr 06:00-22:00; Sa 7:00-20:00"),
                    ("colour", "#00FF00"),
                ],
                vec![
                    member(OsmMemberType::Way, 20, ""),
                    member(OsmMemberType::Way, 21, ""),
                ],
            ),
            relation(3, &[("name", "sin ref")], vec![member(OsmMemberType::Way, 10, "")]),
            relation(
                4,
                &[("ref", "4"), ("opening_hours", "sunrise-sunset")],
                vec![member(OsmMemberType::Way, 10, "")],
            ),
        ];
        Ok(routes
            .into_iter()
            .filter(|r| r.is_route_of_type(transform_types))
            .map(|r| (r.id, r))
            .collect())
    }

    fn ways(&self) -> Result<OsmWays, OsmError> {
        Ok(vec![
            way(10, &[100, 101, 102, 500]),
            way(11, &[500, 104, 105]),
            way(20, &[200, 201, 202, 500]),
            way(21, &[205, 204, 500]),
        ]
        .into_iter()
        .map(|w| (w.id, w))
        .collect())
    }

    fn stops(&self) -> Result<OsmNodes, OsmError> {
        let c = node_coord(100);
        let stop = OsmNode::new(
            OsmNodeId(100),
            c.y,
            c.x,
            tags(&[("public_transport", "stop_position"), ("name", "Terminal")]),
        );
        Ok(OsmNodes::from([(stop.id, stop)]))
    }
}

fn run_fixture(conf: BuilderConfig) -> BuildResult {
    let hooks = ConfiguredHooks::new(conf);
    match build(Some(&FixtureSource), &WayStitcher, &hooks, true, true) {
        Ok(r) => r,
        Err(e) => panic!("build failed: {e}"),
    }
}

#[test]
fn test_pipeline_outcomes() {
    let result = run_fixture(BuilderConfig::default());

    let accepted: Vec<i64> = result
        .classified
        .features
        .iter()
        .map(|f| f.id.0)
        .collect();
    assert_eq!(accepted, vec![1, 2, 4]);

    let outcomes: Vec<(i64, Option<String>)> = result
        .classified
        .log
        .entries()
        .iter()
        .map(|e| (e.id.0, e.error.as_ref().map(|err| err.kind.clone())))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            (2, None),
            (1, None),
            (4, Some(String::from("invalid_opening_hours"))),
            (3, Some(String::from("no_ref_defined"))),
        ]
    );

    let feed = match &result.gtfs {
        Some(f) => f,
        None => panic!("gtfs was requested"),
    };
    let route_ids: Vec<i64> = feed.routes.iter().map(|r| r.route_id.0).collect();
    assert_eq!(route_ids, vec![1, 2]);
    let services: Vec<&str> = feed.trips.iter().map(|t| t.service_id.as_str()).collect();
    assert_eq!(services, vec!["Mo-Su", "Mo-Fr", "Sa"]);
    assert_eq!(feed.fare_attributes[0].price, "2.50");
    assert_eq!(feed.fare_attributes[1].price, "0");

    // the shared node is a single stop
    let stop_ids: Vec<i64> = feed.stops.iter().map(|s| s.stop_id.0).collect();
    let unique: HashSet<i64> = stop_ids.iter().copied().collect();
    assert_eq!(stop_ids.len(), unique.len());
    let terminal = feed.stops.iter().find(|s| s.stop_id == OsmNodeId(100));
    assert_eq!(terminal.map(|s| s.stop_name.as_str()), Some("Terminal"));
}

#[test]
fn test_planner_connects_routes_at_shared_node() {
    let result = run_fixture(BuilderConfig::default());
    let planner = match &result.planner {
        Some(p) => p,
        None => panic!("planner data was requested"),
    };
    let names: Vec<&str> = planner.routes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["1", "2", "4"]);

    let route_2 = &planner.routes[1];
    assert_eq!(route_2.id, OsmRelationId(1));
    assert_eq!(route_2.from.as_deref(), Some("Oeste"));
    let shared_index = route_2.stops.iter().position(|n| *n == OsmNodeId(500));
    assert_eq!(shared_index, Some(3));
    let to_route_1 = route_2
        .connections
        .iter()
        .find(|c| c.other_route == OsmRelationId(2));
    assert_eq!(to_route_1.map(|c| (c.my_stop_index, c.other_stop_index)), Some((3, 3)));
}

#[test]
fn test_ignored_and_excluded_routes_are_silent() {
    let conf = BuilderConfig {
        ignored_route_ids: HashSet::from([OsmRelationId(3), OsmRelationId(4)]),
        ..Default::default()
    };
    let result = run_fixture(conf);
    let logged: Vec<i64> = result
        .classified
        .log
        .entries()
        .iter()
        .map(|e| e.id.0)
        .collect();
    assert_eq!(logged, vec![2, 1]);
}

#[test]
fn test_missing_source_is_run_fatal() {
    let hooks = ConfiguredHooks::default();
    assert!(build(None, &WayStitcher, &hooks, true, false).is_err());
}

#[test]
fn test_written_feed_reads_back() {
    let result = run_fixture(BuilderConfig::default());
    let out_dir = std::env::temp_dir().join("trufi_gtfs_pipeline_test");
    let outputs = OutputFiles {
        output_directory: out_dir.clone(),
        gtfs: true,
        zip: true,
        routes: true,
        log: true,
        stops: true,
        trip_planner: true,
        readme: true,
    };
    if let Err(e) = write_outputs(&result, &outputs, "cochabamba") {
        panic!("failed writing outputs: {e}");
    }
    for file in [
        "gtfs/agency.txt",
        "gtfs/calendar.txt",
        "gtfs/feed_info.txt",
        "cochabamba.gtfs.zip",
        "routes/1.geojson",
        "log.json",
        "stops.json",
        "trufiTPData/routes.json",
        "trufiTPData/stops.json",
        "trufiTPData/search.json",
        "README.md",
    ] {
        assert!(out_dir.join(file).exists(), "missing output {file}");
    }
    assert!(!out_dir.join("routes/3.geojson").exists());

    let readme = std::fs::read_to_string(out_dir.join("README.md")).unwrap_or_default();
    assert!(readme.contains("- routes with errors: 2\n"));
    let rejected: Vec<&str> = readme
        .lines()
        .filter(|l| l.starts_with("| 3 |") || l.starts_with("| 4 |"))
        .collect();
    assert_eq!(rejected.len(), 2);

    let raw = match RawGtfs::new(&out_dir.join("gtfs").to_string_lossy()) {
        Ok(r) => r,
        Err(e) => panic!("failed reading written feed: {e}"),
    };
    let feed = match &result.gtfs {
        Some(f) => f,
        None => panic!("gtfs was requested"),
    };
    assert_eq!(raw.routes.as_ref().map(|r| r.len()).ok(), Some(feed.routes.len()));
    assert_eq!(raw.trips.as_ref().map(|t| t.len()).ok(), Some(feed.trips.len()));
    assert_eq!(raw.stops.as_ref().map(|s| s.len()).ok(), Some(feed.stops.len()));
    assert_eq!(
        raw.stop_times.as_ref().map(|s| s.len()).ok(),
        Some(feed.stop_times.len())
    );
}
