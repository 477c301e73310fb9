//! Car identifiers
//!
//! `C` followed by three decimal digits. Only the numeric suffix is written
//! to disk.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{CarlotError, Result};

/// Identifier of one car, e.g. `C007`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CarId(i32);

impl CarId {
    /// Number of digits in the textual form
    pub const DIGITS: usize = 3;

    /// Parse the textual form (`C007`, `c007`, surrounding whitespace allowed)
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('C')
            .or_else(|| trimmed.strip_prefix('c'))
            .ok_or_else(|| CarlotError::InvalidCarId(text.to_string()))?;

        if digits.len() != Self::DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CarlotError::InvalidCarId(text.to_string()));
        }

        digits
            .parse()
            .map(CarId)
            .map_err(|_| CarlotError::InvalidCarId(text.to_string()))
    }

    /// Wrap a numeric id as read from a record file
    pub fn from_raw(raw: i32) -> Self {
        CarId(raw)
    }

    /// The numeric join key written to every record file
    pub fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{:03}", self.0)
    }
}

impl FromStr for CarId {
    type Err = CarlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for CarId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
