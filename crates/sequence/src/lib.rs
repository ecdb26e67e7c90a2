//! Sequencing pipeline for stimlist: Latin-square condition assignment,
//! per-bucket shuffling, and constrained interleaving.
//!
//! The stages run strictly in order and pass exclusive ownership of the
//! catalog between them:
//!
//! ```text
//! ItemCatalog -> assign_conditions -> shuffle_buckets -> interleave
//! ```
//!
//! [`build_experiment_list`] composes the three stages into the single
//! entry point the presentation layer calls once per run. All randomness
//! flows through a caller-supplied [`rand::Rng`], so a fixed seed yields a
//! fully reproducible list.

pub mod builder;
pub mod interleave;
pub mod latin;
pub mod shuffle;

pub use builder::build_experiment_list;
pub use interleave::interleave;
pub use latin::assign_conditions;
pub use shuffle::shuffle_buckets;
