// exported modules
pub mod error;
pub mod model;
pub mod sanitize;
pub mod verdict;

// client impls
pub mod aoc;

// re-exports
pub use aoc::{AocClient, PuzzleUrls, SessionToken};
pub use error::*;
pub use model::*;
pub use sanitize::Sanitizer;
pub use verdict::Verdict;

// internal modules
mod http;
mod util;
