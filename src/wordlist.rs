use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Result, WordleError};

/// Reads a newline-delimited word list, one word per line.
///
/// Blank lines and lines starting with `#` are skipped. Words are lowercased.
/// Does not validate length or guessability; [`crate::engine::Engine::new`]
/// does that once both lists are loaded, since `SolutionNotGuessable` needs
/// both.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| WordleError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
