//! # atomtab-table
//!
//! Dense symmetric tables keyed by pairs of interned strings.
//!
//! This crate provides:
//! - `DenseSymmetricTable`, a square row-major table with one row per atom
//! - Automatic growth as new strings are atomized, preserving stored values
//! - A generic square-buffer growth routine usable for other element types
//! - Plain-state snapshots for external encoders
//!
//! ## Growth
//!
//! Capacity doubles (from zero straight to the required size) so that the
//! reallocation cost is amortized O(1) per atom. A batch of new atoms
//! triggers at most one reallocation, sized for the whole batch. Rows of
//! large tables are copied in parallel via rayon.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod grow;
pub mod table;

pub use config::TableConfig;
pub use error::TableError;
pub use grow::{expand_square, grown_capacity};
pub use table::{DenseSymmetricTable, TableState};

#[cfg(test)]
mod proptests;
