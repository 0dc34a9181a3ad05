use crate::{schedule::feed::GtfsFeed, GtfsBuildError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// writes a [`GtfsFeed`] as one `<table>.txt` CSV file per non-empty table.
pub struct GtfsWriter<'a> {
    directory: &'a Path,
}

impl<'a> GtfsWriter<'a> {
    pub fn new(directory: &'a Path) -> GtfsWriter<'a> {
        GtfsWriter { directory }
    }

    /// writes every table, returning the paths written.
    pub fn write_feed(&self, feed: &GtfsFeed) -> Result<Vec<PathBuf>, GtfsBuildError> {
        let written = [
            self.write_table("agency", &feed.agency)?,
            self.write_table("calendar", &feed.calendar)?,
            self.write_table("routes", &feed.routes)?,
            self.write_table("trips", &feed.trips)?,
            self.write_table("frequencies", &feed.frequencies)?,
            self.write_table("stops", &feed.stops)?,
            self.write_table("stop_times", &feed.stop_times)?,
            self.write_table("shapes", &feed.shapes)?,
            self.write_table("fare_attributes", &feed.fare_attributes)?,
            self.write_table("fare_rules", &feed.fare_rules)?,
            self.write_table("feed_info", &feed.feed_info)?,
        ];
        Ok(written.into_iter().flatten().collect())
    }

    /// writes `<name>.txt` with a header row. empty tables are skipped.
    pub fn write_table<T: Serialize>(
        &self,
        name: &str,
        rows: &[T],
    ) -> Result<Option<PathBuf>, GtfsBuildError> {
        if rows.is_empty() {
            log::debug!("skipping empty GTFS table {name}");
            return Ok(None);
        }
        let filepath = self.directory.join(format!("{name}.txt"));
        let csv_error = |e: csv::Error| GtfsBuildError::CsvError {
            filepath: filepath.to_string_lossy().to_string(),
            source: e,
        };
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_path(&filepath)
            .map_err(csv_error)?;
        for row in rows.iter() {
            writer.serialize(row).map_err(csv_error)?;
        }
        writer.flush().map_err(|e| GtfsBuildError::IoError {
            filepath: filepath.to_string_lossy().to_string(),
            source: e,
        })?;
        log::info!("wrote {} rows to {}", rows.len(), filepath.display());
        Ok(Some(filepath))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::feed::FareRuleRow;
    use trufi_osm::model::osm::element::OsmRelationId;

    #[test]
    fn test_write_and_skip_empty() {
        let dir = std::env::temp_dir().join("trufi_gtfs_writer_test");
        let _ = std::fs::remove_dir_all(&dir);
        if let Err(e) = std::fs::create_dir_all(&dir) {
            panic!("{e}");
        }
        let writer = GtfsWriter::new(&dir);
        let rows = vec![FareRuleRow {
            fare_id: 0,
            route_id: OsmRelationId(42),
        }];
        let written = writer.write_table("fare_rules", &rows);
        assert!(matches!(written, Ok(Some(_))));
        let contents = std::fs::read_to_string(dir.join("fare_rules.txt")).unwrap_or_default();
        assert_eq!(contents, "fare_id,route_id\n0,42\n");

        let empty: Vec<FareRuleRow> = vec![];
        assert!(matches!(writer.write_table("empty", &empty), Ok(None)));
        assert!(!dir.join("empty.txt").exists());
    }
}
