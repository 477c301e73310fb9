//! Field validation for inventory edits
//!
//! The store writes whatever it is given; these checks run before any
//! collection reaches `save_all`.

use crate::error::{CarlotError, Result};

/// Earliest accepted production year
pub const MIN_YEAR: i32 = 1900;

/// Latest accepted production year
pub const MAX_YEAR: i32 = 2100;

/// Shortest accepted customer phone number
pub const MIN_PHONE_DIGITS: usize = 8;

/// Longest accepted customer phone number
pub const MAX_PHONE_DIGITS: usize = 15;

pub fn non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CarlotError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

pub fn year(value: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        return Err(CarlotError::Validation(format!(
            "Year {} out of range ({}-{})",
            value, MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(())
}

pub fn non_negative_int(field: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(CarlotError::Validation(format!(
            "{} cannot be negative",
            field
        )));
    }
    Ok(())
}

/// Rejects negative values and NaN
pub fn price(field: &str, value: f32) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(CarlotError::Validation(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(())
}

/// Digits only, 8 to 15 of them
pub fn phone(value: &str) -> Result<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CarlotError::Validation(
            "Phone must contain digits only".to_string(),
        ));
    }
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&value.len()) {
        return Err(CarlotError::Validation(format!(
            "Phone length must be {}-{} digits",
            MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
        )));
    }
    Ok(())
}
