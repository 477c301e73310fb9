//! Record Store
//!
//! Load/save entry points over the three record files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::car::CarRecord;
use crate::config::Config;
use crate::error::Result;

use super::{RecordPaths, RecordReader, RecordWriter};

/// The persisted car collection
///
/// The store keeps no records in memory between calls. Callers load the
/// whole collection, change it, and hand the full result back to
/// `save_all`. File handles live only for the duration of one call.
pub struct RecordStore {
    config: Config,
    paths: RecordPaths,
}

impl RecordStore {
    /// Open a store rooted at `config.data_dir`
    ///
    /// Creates the directory if needed; the record files themselves are
    /// only created by the first save.
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        let paths = RecordPaths::in_dir(&config.data_dir);
        Ok(Self { config, paths })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Read every car, in file order
    ///
    /// Returns an empty collection when any of the three files is missing.
    pub fn load_all(&self) -> Result<Vec<CarRecord>> {
        let reader = match RecordReader::open(&self.paths, &self.config)? {
            Some(reader) => reader,
            None => return Ok(Vec::new()),
        };

        let cars = reader.collect::<Result<Vec<_>>>()?;
        debug!(count = cars.len(), dir = %self.config.data_dir.display(), "Loaded cars");
        Ok(cars)
    }

    /// Replace the contents of all three files with `cars`, in order
    ///
    /// Returns the number of cars written.
    pub fn save_all(&self, cars: &[CarRecord]) -> Result<usize> {
        let mut writer = RecordWriter::create(&self.paths, self.config.sync_on_save)?;
        for car in cars {
            writer.append(car)?;
        }
        let written = writer.finish()?;

        debug!(count = written, dir = %self.config.data_dir.display(), "Saved cars");
        Ok(written)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the record file paths
    pub fn paths(&self) -> &RecordPaths {
        &self.paths
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
