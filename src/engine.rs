//! Search Engine and Worker Pool: the recursive, memoized, depth-bounded
//! beam search that builds the decision tree, fanned out across a
//! process-wide capped pool of OS threads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use log::{debug, trace};

use crate::error::{Result, WordleError};
use crate::matcher::{MatchTable, Pattern, ALL_GREEN, NUM_PATTERNS, WORD_LEN};
use crate::node::{Arena, Node, NodeId};
use crate::ranker::rank;

/// Wordle only ever takes six guesses.
pub const MAX_GUESSES: u8 = 6;

/// Owns the validated word lists and the precomputed match table. One
/// `Engine` drives at most one `solve` call at a time; construct a second
/// `Engine` to run concurrently.
#[derive(Debug)]
pub struct Engine {
    valid_guesses: Vec<String>,
    solutions: Vec<String>,
    table: MatchTable,
}

impl Engine {
    /// Validates and indexes the two word lists and builds the match
    /// matrix. Fails with `EmptyInput`, `InvalidWord`, or
    /// `SolutionNotGuessable` per the data model.
    pub fn new(valid_guesses: Vec<String>, solutions: Vec<String>) -> Result<Self> {
        if valid_guesses.is_empty() || solutions.is_empty() {
            return Err(WordleError::EmptyInput);
        }

        for word in valid_guesses.iter().chain(solutions.iter()) {
            if word.len() != WORD_LEN {
                return Err(WordleError::InvalidWord {
                    word: word.clone(),
                    len: word.len(),
                    expected: WORD_LEN,
                });
            }
        }

        let guess_set: std::collections::HashSet<&str> =
            valid_guesses.iter().map(String::as_str).collect();
        for solution in &solutions {
            if !guess_set.contains(solution.as_str()) {
                return Err(WordleError::SolutionNotGuessable(solution.clone()));
            }
        }

        let guess_bytes: Vec<Vec<u8>> = valid_guesses.iter().map(|w| w.as_bytes().to_vec()).collect();
        let solution_bytes: Vec<Vec<u8>> = solutions.iter().map(|w| w.as_bytes().to_vec()).collect();
        let table = MatchTable::build(&guess_bytes, &solution_bytes);

        log::info!(
            "engine ready: {} valid guesses, {} solutions, {}x{} match matrix",
            valid_guesses.len(),
            solutions.len(),
            valid_guesses.len(),
            solutions.len()
        );

        Ok(Self {
            valid_guesses,
            solutions,
            table,
        })
    }

    pub fn valid_guesses(&self) -> &[String] {
        &self.valid_guesses
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    pub fn table(&self) -> &MatchTable {
        &self.table
    }

    pub fn solution_index(&self, word: &str) -> Option<u32> {
        self.solutions.iter().position(|w| w == word).map(|i| i as u32)
    }

    /// Builds the decision tree. `prune_limit` is clamped to at least 1 and
    /// at most `num_guesses - 1`.
    pub fn solve(&self, prune_limit: usize) -> SolveResult {
        let prune_limit = prune_limit.max(1).min(self.table.num_guesses().saturating_sub(1).max(1));
        let max_workers = 2 * std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        let state = SearchState {
            engine: self,
            memo: Mutex::new(HashMap::new()),
            arena: Arena::new(),
            active_workers: AtomicUsize::new(0),
            max_workers,
            prune_limit,
        };

        let feasible: Vec<u32> = (0..self.table.num_solutions() as u32).collect();
        let root = search(&state, &feasible, 0);

        SolveResult {
            nodes: state.arena.into_inner(),
            root,
        }
    }
}

/// The result of a `solve` call: an arena of nodes and the root's id.
pub struct SolveResult {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SolveResult {
    /// Assembles a result from an already-built node list and root id,
    /// for tests that need to exercise rendering against a hand-built
    /// tree rather than a live search.
    #[cfg(test)]
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn solved_count(&self) -> u32 {
        self.nodes[self.root].solved_count
    }
}

struct SearchState<'e> {
    engine: &'e Engine,
    memo: Mutex<HashMap<Vec<u32>, NodeId>>,
    arena: Arena,
    active_workers: AtomicUsize,
    max_workers: usize,
    prune_limit: usize,
}

fn try_acquire_worker(counter: &AtomicUsize, max: usize) -> bool {
    let mut current = counter.load(Ordering::Relaxed);
    loop {
        if current >= max {
            return false;
        }
        match counter.compare_exchange_weak(current, current + 1, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return true,
            Err(observed) => current = observed,
        }
    }
}

fn release_worker(counter: &AtomicUsize) {
    counter.fetch_sub(1, Ordering::AcqRel);
}

/// Recursive, memoized search over the feasible set `feasible` at `depth`.
/// Returns the id of the chosen node for this feasible set.
fn search(state: &SearchState, feasible: &[u32], depth: u8) -> NodeId {
    let key: Vec<u32> = feasible.to_vec();

    {
        let memo = state.memo.lock().unwrap();
        if let Some(&id) = memo.get(&key) {
            let node = state.arena.get(id);
            if node.fits_depth_budget(depth, MAX_GUESSES) {
                return id;
            }
        }
    }

    let candidates = rank(&state.engine.table, feasible, state.prune_limit);
    let k = candidates.len();
    debug!("search: |F|={} depth={} candidates={}", feasible.len(), depth, k);

    let mut locals: Vec<Option<Node>> = (0..k).map(|_| None).collect();

    std::thread::scope(|scope| {
        let mut handles: Vec<(usize, std::thread::ScopedJoinHandle<Node>)> = Vec::new();

        for (i, &(_, g)) in candidates.iter().enumerate() {
            if i + 1 == k {
                // The last candidate always runs on the current worker.
                continue;
            }
            if try_acquire_worker(&state.active_workers, state.max_workers) {
                handles.push((
                    i,
                    scope.spawn(move || {
                        let node = traverse_matches(state, g, feasible, depth);
                        release_worker(&state.active_workers);
                        node
                    }),
                ));
            } else {
                locals[i] = Some(traverse_matches(state, g, feasible, depth));
            }
        }

        if k > 0 {
            let last = k - 1;
            let (_, g) = candidates[last];
            locals[last] = Some(traverse_matches(state, g, feasible, depth));
        }

        for (i, handle) in handles {
            locals[i] = Some(handle.join().expect("search worker panicked"));
        }
    });

    let mut best_idx = 0usize;
    let mut best_set = false;
    for (i, node) in locals.iter().enumerate() {
        let node = node.as_ref().expect("every candidate slot is filled");
        trace!(
            "  candidate g={} fits_budget={} avg_depth={}",
            node.guess_index,
            node.fits_depth_budget(depth, MAX_GUESSES),
            if node.solved_count > 0 { node.average_depth() } else { f64::INFINITY }
        );
        if !node.fits_depth_budget(depth, MAX_GUESSES) {
            continue;
        }
        if !best_set {
            best_idx = i;
            best_set = true;
            continue;
        }
        let best_node = locals[best_idx].as_ref().unwrap();
        if node.average_depth() < best_node.average_depth() {
            best_idx = i;
        }
    }

    let winner = locals[best_idx].take().expect("winner slot is filled");
    let id = state.arena.push(winner);

    {
        let mut memo = state.memo.lock().unwrap();
        memo.insert(key, id);
    }

    id
}

/// Builds the full local node for guess `g` against `feasible`: partitions
/// by feedback pattern in ascending order and recurses into each
/// non-trivial partition, stopping early once the depth budget is blown.
fn traverse_matches(state: &SearchState, g: usize, feasible: &[u32], depth: u8) -> Node {
    let mut node = Node::new(g);
    let table = &state.engine.table;
    // `is_leaf` only ever applies to a node whose own feasible set was a
    // single solution; a multi-solution node that happens to resolve one
    // member immediately is not itself a leaf.
    let is_singleton_node = feasible.len() == 1;

    let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); NUM_PATTERNS];
    for &s in feasible {
        let pattern = table.get(g, s as usize);
        buckets[pattern as usize].push(s);
    }

    for (pattern, bucket) in buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        if !traverse_match(state, &mut node, g, depth, pattern as Pattern, bucket, is_singleton_node) {
            break;
        }
    }

    node
}

fn traverse_match(
    state: &SearchState,
    node: &mut Node,
    g: usize,
    depth: u8,
    pattern: Pattern,
    bucket: &[u32],
    is_singleton_node: bool,
) -> bool {
    if bucket.is_empty() {
        return true;
    }
    if bucket.len() == 1 {
        mark_solved(node, g, bucket[0], &state.engine.table, is_singleton_node);
        return true;
    }

    let child_id = search(state, bucket, depth + 1);
    let child = state.arena.get(child_id);

    node.children.push((pattern, child_id));
    node.solved_count += child.solved_count;
    node.total_depth += child.solved_count as u64 + child.total_depth;
    node.min_depth = match (node.min_depth, child.min_depth) {
        (None, Some(m)) => Some(m.saturating_add(1)),
        (Some(a), Some(m)) => Some(a.min(m.saturating_add(1))),
        (a, None) => a,
    };

    node.fits_depth_budget(depth, MAX_GUESSES)
}

fn mark_solved(node: &mut Node, g: usize, solution: u32, table: &MatchTable, is_singleton_node: bool) {
    node.solved_count += 1;
    node.total_depth += 1;

    if table.get(g, solution as usize) == ALL_GREEN {
        if is_singleton_node {
            node.is_leaf = true;
        }
        node.min_depth = Some(node.min_depth.unwrap_or(0).max(1));
    } else {
        node.leaves.push(solution);
        node.total_depth += 1;
        node.min_depth = Some(node.min_depth.unwrap_or(0).max(2));
    }
}
