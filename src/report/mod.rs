//! Weigh-in report rendering
//!
//! Pre-renders the printable weigh-in report lines. Corner display names
//! are resolved through an explicit memoizing directory supplied by the
//! caller; the core holds no module-level name caches.

mod directory;
mod summary;

pub use directory::*;
pub use summary::*;
