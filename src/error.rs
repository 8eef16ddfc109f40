use thiserror::Error;

/// Errors surfaced by word-list loading and engine construction.
///
/// A depth-budget elision during search is not an error: it is reported as
/// a statistic instead (see [`crate::render`]).
#[derive(Error, Debug)]
pub enum WordleError {
    #[error("word list is empty")]
    EmptyInput,

    #[error("word '{word}' has length {len}, expected {expected}")]
    InvalidWord {
        word: String,
        len: usize,
        expected: usize,
    },

    #[error("solution '{0}' is not present among the valid guesses")]
    SolutionNotGuessable(String),

    #[error("'{0}' is not one of the loaded solutions")]
    UnknownTargetSolution(String),

    #[error("failed to read word list from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WordleError>;
