//! `respeq-engine` — tolerance-bounded JSON response equivalence.
//!
//! Pure engine crate: flattens two JSON documents into key-grouped value
//! sets, then compares them allowing a bounded number of extra or missing
//! fields (over-fetching tolerance). No CLI or terminal output.

pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod model;

pub use config::{CompareConfig, ScanMode};
pub use engine::{are_equivalent, run};
pub use error::EquivError;
pub use model::{EquivResult, Grouping, Mismatch};
