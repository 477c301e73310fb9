//! Codec Module
//!
//! Fixed-width binary layouts for the three record files.
//!
//! ## Record Formats (little-endian, no header, no padding)
//! ```text
//! Basic (56 bytes) — cars_basic.dat
//! ┌────────┬────────┬────────────┬────────────┬──────────┬───────────┐
//! │ id i32 │year i32│ brand (20) │ model (20) │ odo i32  │ buy i32   │
//! └────────┴────────┴────────────┴────────────┴──────────┴───────────┘
//!
//! Status (16 bytes) — cars_status.dat
//! ┌────────┬────────────┬─────────────┬──────────────┐
//! │ id i32 │ active i32 │ is_sold i32 │ sell f32     │
//! └────────┴────────────┴─────────────┴──────────────┘
//!
//! Sale (61 bytes) — cars_sale.dat
//! ┌────────┬─────────┬──────────┬───────────┬───────────┬────────────┐
//! │ id i32 │ buy f32 │ sell f32 │ final f32 │ name (30) │ phone (15) │
//! └────────┴─────────┴──────────┴───────────┴───────────┴────────────┘
//! ```
//!
//! Text fields are UTF-8, truncated at a char boundary and zero padded.
//! `buy_price` is stored twice (i32 in Basic, f32 in Sale); both copies are
//! written from the same value on every save.

mod basic;
mod sale;
mod status;
mod text;

pub use basic::BasicRecord;
pub use sale::SaleRecord;
pub use status::StatusRecord;
pub use text::{decode_text, encode_text};

use crate::error::{CarlotError, Result};

// =============================================================================
// Shared Constants
// =============================================================================

/// Width of the brand field in a Basic record
pub const BRAND_WIDTH: usize = 20;

/// Width of the model field in a Basic record
pub const MODEL_WIDTH: usize = 20;

/// Width of the customer name field in a Sale record
pub const CUSTOMER_NAME_WIDTH: usize = 30;

/// Width of the customer phone field in a Sale record
pub const CUSTOMER_PHONE_WIDTH: usize = 15;

/// Reject a buffer that is not exactly one record long
pub(crate) fn check_len(kind: &str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(CarlotError::Corruption(format!(
            "{} record: expected {} bytes, got {}",
            kind,
            expected,
            bytes.len()
        )));
    }
    Ok(())
}

/// Take a fixed-width text field off the front of `buf`
pub(crate) fn take_text(buf: &mut &[u8], width: usize) -> Result<String> {
    let (field, rest) = buf.split_at(width);
    *buf = rest;
    decode_text(field)
}
