use std::time::Instant;

use clap::Parser;

use wordle_tree::cli::CmdArgs;
use wordle_tree::render::{render_all, render_one, Statistics};
use wordle_tree::{Engine, WordleError};

fn run(args: CmdArgs) -> Result<(), WordleError> {
    let valid_guesses = wordle_tree::wordlist::load_word_list(&args.valid_guesses_path)?;
    let solutions = wordle_tree::wordlist::load_word_list(&args.solutions_path)?;

    let engine = Engine::new(valid_guesses, solutions)?;

    let started = Instant::now();
    let result = engine.solve(args.prune_limit);
    let elapsed = started.elapsed();
    log::info!("solved in {:?}", elapsed);

    match args.target_solution {
        Some(target) => {
            let line = render_one(&engine, &result, &target)?;
            println!("{}", line.text);
        }
        None => {
            let lines = render_all(&engine, &result);
            for line in &lines {
                println!("{}", line.text);
            }
            let stats = Statistics::compute(&engine, &lines);
            print!("{}", stats.render());
            println!("solved in {:?}", elapsed);
        }
    }

    Ok(())
}

fn main() {
    let args = CmdArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
