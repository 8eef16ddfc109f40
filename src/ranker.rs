//! Guess Ranker: scores every valid guess against a feasible-solutions set
//! by average feasible solutions per distinct feedback pattern, and returns
//! the top-K candidates.

use rayon::prelude::*;

use crate::matcher::{MatchTable, ALL_GREEN, NUM_PATTERNS};

/// A candidate guess paired with its ranker score (lower is better).
pub type RankedGuess = (f64, usize);

/// Ranks every guess in `0..table.num_guesses()` against the feasible set
/// `feasible` and returns at most `prune_limit` of the best (lowest-score)
/// candidates, sorted ascending by score then by guess index.
///
/// `feasible` must be nonempty. If any guess discriminates every feasible
/// solution into its own singleton pattern bucket (`avg(g) < 1`), that
/// guess is returned alone: one more guess suffices down every branch.
pub fn rank(table: &MatchTable, feasible: &[u32], prune_limit: usize) -> Vec<RankedGuess> {
    debug_assert!(!feasible.is_empty());

    let mut scored: Vec<RankedGuess> = (0..table.num_guesses())
        .into_par_iter()
        .map(|g| (score_guess(table, g, feasible), g))
        .collect();

    if let Some(&early) = scored.iter().find(|&&(avg, _)| avg < 1.0) {
        return vec![early];
    }

    scored.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let k = prune_limit.min(table.num_guesses().saturating_sub(1)).max(1);
    scored.truncate(k);
    scored
}

fn score_guess(table: &MatchTable, guess: usize, feasible: &[u32]) -> f64 {
    let mut seen = [false; NUM_PATTERNS];
    let mut distinct = 0u32;
    let mut ends_game = false;

    for &s in feasible {
        let pattern = table.get(guess, s as usize);
        if pattern == ALL_GREEN {
            ends_game = true;
        }
        if !seen[pattern as usize] {
            seen[pattern as usize] = true;
            distinct += 1;
        }
    }

    let delta = if ends_game { 1 } else { 0 };
    (feasible.len() as f64 - delta as f64) / distinct as f64
}
