//! # shakesearch - Paragraph Search over a Single Corpus
//!
//! shakesearch loads one text corpus at startup, indexes it with a suffix
//! array, and answers case-insensitive substring queries with one excerpt
//! per match: the enclosing paragraph with the match highlighted.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`corpus`] - Single-pass loader: original bytes, folded copy, paragraph boundaries
//! - [`index`] - Suffix array construction and lookup
//! - [`search`] - Query folding, paragraph resolution, excerpt rendering
//! - [`server`] - HTTP service (`/search` + static files)
//! - [`output`] - Terminal formatting of excerpts
//! - [`utils`] - Progress spinner and size formatting
//!
//! ## Quick Start
//!
//! ```no_run
//! use shakesearch::search::Searcher;
//! use std::path::Path;
//!
//! let searcher = Searcher::load(Path::new("completeworks.txt")).unwrap();
//!
//! for excerpt in searcher.search("to be, or not") {
//!     println!("{}", excerpt);
//! }
//! ```
//!
//! ## Concurrency
//!
//! Construction happens once, before any query. A built [`search::Searcher`]
//! is immutable and `Send + Sync`; the server shares it through an `Arc` and
//! runs queries concurrently without locks.

pub mod corpus;
pub mod index;
pub mod output;
pub mod search;
pub mod server;
pub mod utils;
