//! Match Encoder: computes the Wordle feedback pattern for every
//! (guess, solution) pair and the dense matrix the rest of the engine
//! indexes by word position.

use rayon::prelude::*;

/// Compile-time word length. Wordle is 5; the engine does not support
/// variable word lengths at runtime.
pub const WORD_LEN: usize = 5;

/// `3^WORD_LEN`, the number of distinct feedback patterns.
pub const NUM_PATTERNS: usize = 243;

/// A packed base-3 feedback pattern. `ALL_GREEN` denotes "solved".
pub type Pattern = u8;

pub const ALL_GREEN: Pattern = (NUM_PATTERNS - 1) as Pattern;

/// Scores a single guess against a single solution, producing the base-3
/// pattern value described in the data model: 0 = grey, 1 = yellow,
/// 2 = green, position `i` contributing `verdict_i * 3^i`.
///
/// First pass marks exact matches green and consumes that solution
/// position. Second pass looks, left to right, for an unconsumed
/// occurrence of each remaining guess letter elsewhere in the solution.
pub fn score_word_pair(guess: &[u8], solution: &[u8]) -> Pattern {
    debug_assert_eq!(guess.len(), WORD_LEN);
    debug_assert_eq!(solution.len(), WORD_LEN);

    let mut consumed = [false; WORD_LEN];
    let mut verdict = [0u8; WORD_LEN];

    for i in 0..WORD_LEN {
        if guess[i] == solution[i] {
            verdict[i] = 2;
            consumed[i] = true;
        }
    }

    for i in 0..WORD_LEN {
        if verdict[i] == 2 {
            continue;
        }
        let g = guess[i];
        for j in 0..WORD_LEN {
            if consumed[j] {
                continue;
            }
            if solution[j] == g {
                verdict[i] = 1;
                consumed[j] = true;
                break;
            }
        }
    }

    let mut mult: u16 = 1;
    let mut result: u16 = 0;
    for &v in &verdict {
        result += v as u16 * mult;
        mult *= 3;
    }
    result as Pattern
}

/// Renders a pattern value as a five-character string over `{'.', 'y', 'G'}`.
pub fn pattern_to_string(mut pattern: Pattern) -> String {
    let mut out = String::with_capacity(WORD_LEN);
    for _ in 0..WORD_LEN {
        out.push(match pattern % 3 {
            0 => '.',
            1 => 'y',
            2 => 'G',
            _ => unreachable!(),
        });
        pattern /= 3;
    }
    out
}

/// The dense `[guess][solution]` match matrix and the pattern-string table,
/// both immutable after construction and freely shared across search
/// threads.
#[derive(Debug)]
pub struct MatchTable {
    num_guesses: usize,
    num_solutions: usize,
    matrix: Vec<Pattern>,
    pattern_strings: Vec<String>,
}

impl MatchTable {
    /// Builds the match matrix for `guesses x solutions`, parallelizing
    /// across guess rows since this is the one `O(G*S)` pass the rest of
    /// the engine depends on.
    pub fn build(guesses: &[Vec<u8>], solutions: &[Vec<u8>]) -> Self {
        let num_guesses = guesses.len();
        let num_solutions = solutions.len();

        let mut matrix = vec![0u8; num_guesses * num_solutions];
        matrix
            .par_chunks_mut(num_solutions)
            .enumerate()
            .for_each(|(g, row)| {
                let guess = &guesses[g];
                for (s, solution) in solutions.iter().enumerate() {
                    row[s] = score_word_pair(guess, solution);
                }
            });

        let mut pattern_strings = vec![String::new(); NUM_PATTERNS];
        for &pattern in &matrix {
            let slot = &mut pattern_strings[pattern as usize];
            if slot.is_empty() {
                *slot = pattern_to_string(pattern);
            }
        }
        // A pattern that never occurs in this matrix (possible for tiny test
        // fixtures) still needs a renderable string.
        for (pattern, slot) in pattern_strings.iter_mut().enumerate() {
            if slot.is_empty() {
                *slot = pattern_to_string(pattern as Pattern);
            }
        }

        Self {
            num_guesses,
            num_solutions,
            matrix,
            pattern_strings,
        }
    }

    #[inline]
    pub fn get(&self, guess: usize, solution: usize) -> Pattern {
        debug_assert!(guess < self.num_guesses);
        debug_assert!(solution < self.num_solutions);
        self.matrix[guess * self.num_solutions + solution]
    }

    #[inline]
    pub fn pattern_string(&self, pattern: Pattern) -> &str {
        &self.pattern_strings[pattern as usize]
    }

    pub fn num_guesses(&self) -> usize {
        self.num_guesses
    }

    pub fn num_solutions(&self) -> usize {
        self.num_solutions
    }
}
