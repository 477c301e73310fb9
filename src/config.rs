//! Configuration for carlot
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a record store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the three record files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── cars_basic.dat   (56-byte records)
    ///     ├── cars_status.dat  (16-byte records)
    ///     └── cars_sale.dat    (61-byte records)
    pub data_dir: PathBuf,

    /// fsync each record file after a save
    pub sync_on_save: bool,

    // -------------------------------------------------------------------------
    // Load Consistency
    // -------------------------------------------------------------------------
    /// Fail the load when the ids at one position disagree across files
    pub verify_ids: bool,

    /// What to do when one file runs out before the others
    pub trailing_data: TrailingData,
}

/// Policy for a short read on one stream while the others still have bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingData {
    /// Treat as end of data and log a warning (lenient, historical behaviour)
    Ignore,

    /// Fail the load with `CarlotError::Misaligned`
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            sync_on_save: true,
            verify_ids: true,
            trailing_data: TrailingData::Ignore,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Enable or disable fsync after save
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    /// Enable or disable the cross-file id check on load
    pub fn verify_ids(mut self, verify: bool) -> Self {
        self.config.verify_ids = verify;
        self
    }

    /// Set the short-read policy
    pub fn trailing_data(mut self, policy: TrailingData) -> Self {
        self.config.trailing_data = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
