//! Corpus loading
//!
//! The corpus is read once into three immutable structures that share the
//! same byte offsets:
//!
//! - `text`: the original bytes, used to render excerpts
//! - `lowered`: the ASCII case-folded copy, used to build the index
//! - `paragraphs`: offsets where each paragraph starts
//!
//! ## Modules
//!
//! - `fold`: ASCII-only case folding
//! - `scanner`: paragraph break state machine
//! - `paragraphs`: boundary list and position-to-paragraph resolution
//! - `loader`: the single-pass streaming loader

pub mod fold;
pub mod loader;
pub mod paragraphs;
pub mod scanner;

pub use fold::{fold, fold_byte, is_folded};
pub use loader::Corpus;
pub use paragraphs::{Paragraph, ParagraphBoundaries};
pub use scanner::{BreakScanner, BreakState};
