use crate::{schedule::feed::GtfsFeed, GtfsBuildError};
use std::path::Path;
use trufi_osm::model::route::DiagnosticLog;

/// markdown overview of a run: route outcomes, feed sizes, and every
/// rejected route with a link to inspect it.
pub fn render_readme(city_name: &str, log: &DiagnosticLog, feed: Option<&GtfsFeed>) -> String {
    let mut readme = format!("# {city_name} public transport\n\n");
    readme.push_str(&format!(
        "- routes evaluated: {}\n- routes accepted: {}\n- routes with errors: {}\n",
        log.len(),
        log.len() - log.error_count(),
        log.error_count()
    ));
    if let Some(feed) = feed {
        readme.push_str(&format!(
            "- GTFS: {} agencies, {} routes, {} trips, {} stops\n",
            feed.agency.len(),
            feed.routes.len(),
            feed.trips.len(),
            feed.stops.len()
        ));
    }

    let rejected: Vec<_> = log.entries().iter().filter(|e| e.is_error()).collect();
    if rejected.is_empty() {
        return readme;
    }
    readme.push_str("\n## routes with errors\n\n");
    readme.push_str("| id | ref | name | error | inspect |\n| --- | --- | --- | --- | --- |\n");
    for entry in rejected.iter() {
        if let Some(error) = &entry.error {
            readme.push_str(&format!(
                "| {} | {} | {} | {} | [overpass turbo]({}) |\n",
                entry.id,
                entry.reference().unwrap_or_default(),
                entry.tags.get("name").map(String::as_str).unwrap_or_default(),
                error.message,
                error.uri
            ));
        }
    }
    readme
}

pub fn write_readme(
    filepath: &Path,
    city_name: &str,
    log: &DiagnosticLog,
    feed: Option<&GtfsFeed>,
) -> Result<(), GtfsBuildError> {
    std::fs::write(filepath, render_readme(city_name, log, feed)).map_err(|e| {
        GtfsBuildError::IoError {
            filepath: filepath.to_string_lossy().to_string(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use trufi_osm::model::{
        osm::element::{OsmRelationId, OsmTags},
        route::RouteError,
    };

    fn tags(pairs: &[(&str, &str)]) -> OsmTags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_readme_lists_rejected_routes() {
        let mut log = DiagnosticLog::new();
        log.accept(OsmRelationId(1), &tags(&[("ref", "1"), ("name", "Linea 1")]));
        log.reject(
            OsmRelationId(2),
            &tags(&[("name", "sin ref")]),
            &RouteError::NoRefDefined,
        );
        let readme = render_readme("cochabamba", &log, None);
        assert!(readme.starts_with("# cochabamba public transport\n"));
        assert!(readme.contains("- routes evaluated: 2\n"));
        assert!(readme.contains("- routes with errors: 1\n"));
        assert!(!readme.contains("GTFS:"));
        let rows: Vec<&str> = readme.lines().filter(|l| l.starts_with("| 2 |")).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("| sin ref |"));
        assert!(rows[0].contains("rel(2)"));
        assert!(!readme.contains("| 1 |"));
    }

    #[test]
    fn test_readme_without_errors_has_no_table() {
        let mut log = DiagnosticLog::new();
        log.accept(OsmRelationId(1), &tags(&[("ref", "1")]));
        let readme = render_readme("city", &log, Some(&GtfsFeed::default()));
        assert!(readme.contains("- GTFS: 0 agencies, 0 routes, 0 trips, 0 stops\n"));
        assert!(!readme.contains("## routes with errors"));
    }
}
