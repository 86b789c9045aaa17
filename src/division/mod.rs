//! Weight division table and classification
//!
//! This module holds the single canonical division table (the commission's
//! enforcement table with overage tolerances) and the classifier that maps
//! a nominal weight in pounds to its division.

mod classifier;
mod table;

#[cfg(test)]
mod property_tests;

pub use classifier::*;
pub use table::*;
