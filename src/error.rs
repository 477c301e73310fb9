//! Error types for carlot
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CarlotError
pub type Result<T> = std::result::Result<T, CarlotError>;

/// Unified error type for carlot operations
#[derive(Debug, Error)]
pub enum CarlotError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record File Errors
    // -------------------------------------------------------------------------
    #[error("Record corruption detected: {0}")]
    Corruption(String),

    /// The three records at one position carry different car ids
    #[error("Record files out of sync at position {position}: basic id {basic}, status id {status}, sale id {sale}")]
    IdMismatch {
        position: usize,
        basic: i32,
        status: i32,
        sale: i32,
    },

    /// One stream ran short while another still had data
    #[error("Record files misaligned at position {position}: read {basic}/{status}/{sale} bytes (basic/status/sale)")]
    Misaligned {
        position: usize,
        basic: usize,
        status: usize,
        sale: usize,
    },

    // -------------------------------------------------------------------------
    // Inventory Errors
    // -------------------------------------------------------------------------
    #[error("Invalid car id: {0:?} (expected Cxxx, e.g. C001)")]
    InvalidCarId(String),

    #[error("Car already exists: {0}")]
    DuplicateCarId(String),

    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CarlotError {
    fn from(err: serde_json::Error) -> Self {
        CarlotError::Serialization(err.to_string())
    }
}
