//! # carlot
//!
//! Used-car inventory persisted without a database engine:
//! - Three parallel fixed-record binary files per data directory
//! - Positional join of the files back into one logical record per car
//! - Full rewrite of every file on each save
//! - Plain-text reports over the loaded collection
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI (carlot binary)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Inventory  /  Reports                        │
//! │        (validate, mutate in memory, render text)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ load_all / save_all
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Record Store                             │
//! │            (lockstep reader, truncating writer)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┐
//!          ▼            ▼            ▼
//!   ┌────────────┐┌────────────┐┌────────────┐
//!   │ basic.dat  ││ status.dat ││  sale.dat  │
//!   │ (56 bytes) ││ (16 bytes) ││ (61 bytes) │
//!   └────────────┘└────────────┘└────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod car;
pub mod codec;
pub mod storage;
pub mod inventory;
pub mod report;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CarlotError, Result};
pub use config::{Config, TrailingData};
pub use car::{CarId, CarRecord};
pub use storage::RecordStore;
pub use inventory::Inventory;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of carlot
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
