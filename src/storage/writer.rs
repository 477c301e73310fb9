//! Record Writer
//!
//! Truncates the three record files and streams one triple per car.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::car::CarRecord;
use crate::codec::{BasicRecord, SaleRecord, StatusRecord};
use crate::error::{CarlotError, Result};

use super::RecordPaths;

/// Writes a full snapshot of the collection
///
/// Records are streamed per file, not staged. If a write fails partway the
/// three files can be left with different record counts.
pub struct RecordWriter {
    basic: BufWriter<File>,
    status: BufWriter<File>,
    sale: BufWriter<File>,
    /// Number of triples written
    count: usize,
    /// fsync each file in `finish()`
    sync: bool,
}

impl RecordWriter {
    /// Create or truncate all three files
    pub fn create(paths: &RecordPaths, sync: bool) -> Result<Self> {
        Ok(Self {
            basic: BufWriter::new(create_truncated(&paths.basic)?),
            status: BufWriter::new(create_truncated(&paths.status)?),
            sale: BufWriter::new(create_truncated(&paths.sale)?),
            count: 0,
            sync,
        })
    }

    /// Append one car as a Basic/Status/Sale triple
    pub fn append(&mut self, car: &CarRecord) -> Result<()> {
        self.basic.write_all(&BasicRecord::from_car(car).encode())?;
        self.status.write_all(&StatusRecord::from_car(car).encode())?;
        self.sale.write_all(&SaleRecord::from_car(car).encode())?;
        self.count += 1;
        Ok(())
    }

    /// Number of triples appended so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush (and optionally fsync) all three files
    pub fn finish(self) -> Result<usize> {
        for writer in [self.basic, self.status, self.sale] {
            let file = writer
                .into_inner()
                .map_err(|e| CarlotError::Io(e.into_error()))?;
            if self.sync {
                file.sync_all()?;
            }
        }
        Ok(self.count)
    }
}

fn create_truncated(path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    Ok(file)
}
