//! Fight-card weigh-in evaluation
//!
//! Evaluates every fight on a card (both corners against the fight's
//! contracted weight), tallies the verdicts, and decides whether saving
//! the sheet needs an out-of-tolerance confirmation.

mod evaluator;
pub mod extract;
mod fight;
mod sheet;


pub use evaluator::*;
pub use fight::*;
pub use sheet::*;
