//! Query side: lookup, paragraph resolution and excerpt rendering

pub mod engine;
pub mod excerpt;

pub use engine::{Searcher, SearcherStats};
pub use excerpt::Excerpt;
