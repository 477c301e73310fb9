//! Car Module
//!
//! The logical car record callers work with.
//!
//! ## Responsibilities
//! - One in-memory type carrying every field of a car
//! - Textual car ids (`C007`) mapped to the numeric on-disk join key
//! - Derived values (profit, status label) computed on access, never stored
//!
//! The split of a record across three physical files is a storage concern
//! and never shows up here.

mod id;
mod record;

pub use id::CarId;
pub use record::CarRecord;
