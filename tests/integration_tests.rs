// Integration tests exercising word-list loading, engine construction,
// search, and rendering together end to end.

use std::io::Write;

use wordle_tree::engine::Engine;
use wordle_tree::error::WordleError;
use wordle_tree::render::{render_all, render_one, Statistics};
use wordle_tree::wordlist::load_word_list;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

const SOLUTIONS: &[&str] = &[
    "crate", "trace", "slate", "later", "alert", "stare", "tears", "rates", "reals", "cater",
    "irate", "allee", "apple", "mange", "forge", "saute",
];

fn build_engine() -> Engine {
    // Valid guesses is a superset of solutions; add a handful of
    // non-answer discriminators that show up in real guess lists.
    let mut guesses: Vec<&str> = SOLUTIONS.to_vec();
    guesses.extend(["adieu", "roate", "soare", "crwth"]);
    Engine::new(words(&guesses), words(SOLUTIONS)).unwrap()
}

#[test]
fn every_solution_solved_within_six_guesses() {
    let engine = build_engine();
    let result = engine.solve(8);
    let lines = render_all(&engine, &result);

    assert_eq!(lines.len(), SOLUTIONS.len());
    let stats = Statistics::compute(&engine, &lines);
    assert_eq!(stats.unsolved, 0, "every solution should be reachable on a small word set");
    assert!(
        stats.average_guesses <= 6.0,
        "average guesses {} exceeds the hard cap",
        stats.average_guesses
    );
}

#[test]
fn rendered_lines_terminate_with_the_solution_word() {
    let engine = build_engine();
    let result = engine.solve(8);
    for line in render_all(&engine, &result) {
        let last_word = line.text.split(' ').next_back().unwrap();
        assert!(SOLUTIONS.contains(&last_word));
    }
}

#[test]
fn render_one_matches_the_corresponding_line_in_render_all() {
    let engine = build_engine();
    let result = engine.solve(8);
    let all_lines = render_all(&engine, &result);
    let target = "later";
    let single = render_one(&engine, &result, target).unwrap();
    assert!(all_lines.iter().any(|l| l.text == single.text));
}

#[test]
fn loading_word_lists_from_files_round_trips() {
    let guesses_path = write_temp_file("# comment line\ncrate\ntrace\n\nslate\n");
    let solutions_path = write_temp_file("CRATE\nTRACE\n");

    let guesses = load_word_list(&guesses_path).unwrap();
    let solutions = load_word_list(&solutions_path).unwrap();

    assert_eq!(guesses, vec!["crate", "trace", "slate"]);
    assert_eq!(solutions, vec!["crate", "trace"]);

    let engine = Engine::new(guesses, solutions).unwrap();
    let result = engine.solve(8);
    assert_eq!(result.solved_count(), 2);

    let _ = std::fs::remove_file(guesses_path);
    let _ = std::fs::remove_file(solutions_path);
}

#[test]
fn missing_word_list_file_is_an_io_error_not_a_panic() {
    let err = load_word_list("/nonexistent/path/to/words.txt").unwrap_err();
    assert!(matches!(err, WordleError::Io { .. }));
}

static NEXT: std::sync::atomic::AtomicU32 = std::sync::atomic::AtomicU32::new(0);

fn write_temp_file(contents: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "wordle_tree_test_{}_{}.txt",
        std::process::id(),
        NEXT.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
    ));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}
