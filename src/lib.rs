//! Near-optimal Wordle decision-tree search.
//!
//! [`engine::Engine`] owns the validated word lists and match matrix;
//! [`engine::Engine::solve`] runs the memoized, depth-bounded, parallel
//! beam search described in the design notes and returns a
//! [`engine::SolveResult`] that [`render`] turns into the tree-dump format
//! and summary statistics.

pub mod cli;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod node;
pub mod ranker;
pub mod render;
pub mod wordlist;

pub use engine::{Engine, SolveResult};
pub use error::{Result, WordleError};
