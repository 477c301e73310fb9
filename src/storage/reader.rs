//! Record Reader
//!
//! Walks the three record files in lockstep and rebuilds logical cars.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::car::{CarId, CarRecord};
use crate::codec::{BasicRecord, SaleRecord, StatusRecord};
use crate::config::{Config, TrailingData};
use crate::error::{CarlotError, Result};

use super::RecordPaths;

/// Iterator over the logical cars stored in one set of record files
pub struct RecordReader {
    basic: BufReader<File>,
    status: BufReader<File>,
    sale: BufReader<File>,
    /// Ordinal of the next triple
    position: usize,
    verify_ids: bool,
    trailing_data: TrailingData,
    /// Set once the end (or an error) has been reached
    finished: bool,
}

impl RecordReader {
    /// Open all three files for reading
    ///
    /// Returns `Ok(None)` when any of them does not exist yet.
    pub fn open(paths: &RecordPaths, config: &Config) -> Result<Option<Self>> {
        let basic = match open_existing(&paths.basic)? {
            Some(f) => f,
            None => return Ok(None),
        };
        let status = match open_existing(&paths.status)? {
            Some(f) => f,
            None => return Ok(None),
        };
        let sale = match open_existing(&paths.sale)? {
            Some(f) => f,
            None => return Ok(None),
        };

        Ok(Some(Self {
            basic: BufReader::new(basic),
            status: BufReader::new(status),
            sale: BufReader::new(sale),
            position: 0,
            verify_ids: config.verify_ids,
            trailing_data: config.trailing_data,
            finished: false,
        }))
    }

    /// Number of complete triples read so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Read one record from each stream and assemble a car
    ///
    /// A short read on any stream ends the data for all three.
    fn next_car(&mut self) -> Result<Option<CarRecord>> {
        let mut basic_buf = [0u8; BasicRecord::SIZE];
        let mut status_buf = [0u8; StatusRecord::SIZE];
        let mut sale_buf = [0u8; SaleRecord::SIZE];

        let basic_read = read_full(&mut self.basic, &mut basic_buf)?;
        let status_read = read_full(&mut self.status, &mut status_buf)?;
        let sale_read = read_full(&mut self.sale, &mut sale_buf)?;

        let complete = basic_read == BasicRecord::SIZE
            && status_read == StatusRecord::SIZE
            && sale_read == SaleRecord::SIZE;

        if !complete {
            if basic_read == 0 && status_read == 0 && sale_read == 0 {
                return Ok(None);
            }
            return self.handle_short_read(basic_read, status_read, sale_read);
        }

        let basic = BasicRecord::decode(&basic_buf)?;
        let status = StatusRecord::decode(&status_buf)?;
        let sale = SaleRecord::decode(&sale_buf)?;

        if self.verify_ids && (basic.car_id != status.car_id || basic.car_id != sale.car_id) {
            return Err(CarlotError::IdMismatch {
                position: self.position,
                basic: basic.car_id,
                status: status.car_id,
                sale: sale.car_id,
            });
        }

        self.position += 1;
        Ok(Some(assemble(basic, status, sale)))
    }

    fn handle_short_read(
        &self,
        basic: usize,
        status: usize,
        sale: usize,
    ) -> Result<Option<CarRecord>> {
        match self.trailing_data {
            TrailingData::Ignore => {
                warn!(
                    position = self.position,
                    basic, status, sale, "Record files disagree in length, ignoring trailing bytes"
                );
                Ok(None)
            }
            TrailingData::Reject => Err(CarlotError::Misaligned {
                position: self.position,
                basic,
                status,
                sale,
            }),
        }
    }
}

impl Iterator for RecordReader {
    type Item = Result<CarRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_car() {
            Ok(Some(car)) => Some(Ok(car)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

/// Join one positional triple into a logical car
///
/// `buy_price` comes from the Basic record; the Sale copy is not read back.
fn assemble(basic: BasicRecord, status: StatusRecord, sale: SaleRecord) -> CarRecord {
    CarRecord {
        car_id: CarId::from_raw(basic.car_id),
        year: basic.year,
        brand: basic.brand,
        model: basic.model,
        odometer: basic.odometer,
        buy_price: basic.buy_price,
        active: status.active,
        is_sold: status.is_sold,
        sell_price: status.sell_price,
        final_price: sale.final_price,
        customer_name: sale.customer_name,
        customer_phone: sale.customer_phone,
    }
}

fn open_existing(path: &Path) -> Result<Option<File>> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Record file missing, treating store as empty");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Fill `buf` as far as the stream allows; returns the number of bytes read
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
