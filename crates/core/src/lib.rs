//! # stimlist Core
//!
//! Domain types and error definitions for the stimlist experiment list
//! builder. This crate has **zero framework dependencies** — it defines the
//! data model that the parsing and sequencing crates operate on.
//!
//! The pipeline owns its data sequentially: an [`ItemCatalog`] is built once
//! from an item source, its buckets are assigned, shuffled, and drained in
//! turn, and the resulting [`ExperimentList`] is handed to the presentation
//! layer read-only.

pub mod catalog;
pub mod error;
pub mod list;
pub mod record;

// Re-export key types at crate root for ergonomics
pub use catalog::{Bucket, FILLER_LABEL, ItemCatalog};
pub use error::{AssignmentError, Error, FormatError, Result};
pub use list::ExperimentList;
pub use record::StimulusRecord;
