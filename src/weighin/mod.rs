//! Weigh-in validation
//!
//! Parses contracted-weight text, derives the enforcement limit and
//! tolerance from the division table, and produces the tri-state-plus-
//! pending compliance verdict shown next to each official scale reading.

pub mod parser;
mod rules;
mod validator;


pub use rules::*;
pub use validator::*;
