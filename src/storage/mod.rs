//! Storage Module
//!
//! Persists the car collection as three parallel fixed-record files.
//!
//! ## Responsibilities
//! - Split each logical car into Basic, Status and Sale records on save
//! - Rejoin them by ordinal position on load
//! - Full rewrite of all three files on every save (no append, no patching)
//!
//! ## Layout
//! ```text
//! position:        0          1          2
//! cars_basic.dat  [56 bytes] [56 bytes] [56 bytes] ...
//! cars_status.dat [16 bytes] [16 bytes] [16 bytes] ...
//! cars_sale.dat   [61 bytes] [61 bytes] [61 bytes] ...
//!                     └── one logical car per column ──┘
//! ```
//!
//! There is no index: the Nth record of each file belongs to the Nth car.
//! Every record also embeds the numeric car id, which the reader checks
//! across the three files unless `Config::verify_ids` is off.
//!
//! Nothing here locks the files. One process, one writer.

mod reader;
mod store;
mod writer;

use std::path::{Path, PathBuf};

pub use reader::RecordReader;
pub use store::RecordStore;
pub use writer::RecordWriter;

/// File holding Basic records
pub const BASIC_FILE: &str = "cars_basic.dat";

/// File holding Status records
pub const STATUS_FILE: &str = "cars_status.dat";

/// File holding Sale records
pub const SALE_FILE: &str = "cars_sale.dat";

/// Locations of the three record files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPaths {
    pub basic: PathBuf,
    pub status: PathBuf,
    pub sale: PathBuf,
}

impl RecordPaths {
    /// The fixed file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            basic: dir.join(BASIC_FILE),
            status: dir.join(STATUS_FILE),
            sale: dir.join(SALE_FILE),
        }
    }
}
