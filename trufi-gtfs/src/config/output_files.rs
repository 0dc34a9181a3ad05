use crate::GtfsBuildError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// which artifacts a build writes, and where.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputFiles {
    /// recreated on every build. its parent directory must exist.
    pub output_directory: PathBuf,
    /// `gtfs/<table>.txt`
    pub gtfs: bool,
    /// `<city_name>.gtfs.zip`, requires `gtfs`.
    pub zip: bool,
    /// `routes/<id>.geojson`
    pub routes: bool,
    /// `log.json`
    pub log: bool,
    /// `stops.json`
    pub stops: bool,
    /// `trufiTPData/{routes,stops,search}.json`
    pub trip_planner: bool,
    /// `README.md` summarizing the run
    pub readme: bool,
}

impl OutputFiles {
    pub fn new(output_directory: PathBuf) -> OutputFiles {
        OutputFiles {
            output_directory,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), GtfsBuildError> {
        if self.zip && !self.gtfs {
            return Err(GtfsBuildError::ConfigurationError(String::from(
                "zip output requires gtfs output",
            )));
        }
        let parent = match self.output_directory.parent() {
            Some(p) if p.as_os_str().is_empty() => PathBuf::from("."),
            Some(p) => p.to_path_buf(),
            None => PathBuf::from("."),
        };
        if !parent.is_dir() {
            return Err(GtfsBuildError::ConfigurationError(format!(
                "parent of output directory '{}' does not exist",
                self.output_directory.display()
            )));
        }
        Ok(())
    }

    pub fn requires_gtfs(&self) -> bool {
        self.gtfs || self.zip
    }
}
