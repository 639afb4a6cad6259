//! Headless walkthrough of a full game session.
//!
//! This example stands in for the excluded rendering and storage layers: it
//! picks one of a few embedded fixture puzzles by level name and number,
//! then drives the engine through a mistake, a failed check, a hint-powered
//! rollback, and hints to the end of the game, printing the board as text
//! after each step.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example headless -- --level n00b --number 1
//! ```
//!
//! Seed the hint selection for a reproducible session:
//!
//! ```sh
//! cargo run --example headless -- --level l33t --number 1 --seed 42
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use nanpure_core::{Digit, Grid, Position};
use nanpure_game::{BoardState, Game};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    N00b,
    L33t,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level of the embedded puzzle set.
    #[arg(long, value_name = "LEVEL", default_value = "n00b")]
    level: Level,

    /// Puzzle number within the level, starting at 1.
    #[arg(long, value_name = "N", default_value_t = 1)]
    number: usize,

    /// Seed for the hint PRNG; omit for a different session every run.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

const N00B_BOARDS: &[&str] = &[
    "\
53..7....\
6..195...\
.98....6.\
8...6...3\
4..8.3..1\
7...2...6\
.6....28.\
...419..5\
....8..79\
",
    "\
.34678912\
672195348\
198342567\
8597.1423\
42685379.\
713924856\
961537284\
287419635\
34528617.\
",
];

const L33T_BOARDS: &[&str] = &[
    "\
5.46789.2\
67..95.48\
.983...67\
8.97.14.3\
4..853..1\
71.9.48.6\
96.5372.4\
28.4.96.5\
3452861.9\
",
];

fn main() {
    env_logger::init();
    let args = Args::parse();

    let boards = match args.level {
        Level::N00b => N00B_BOARDS,
        Level::L33t => L33T_BOARDS,
    };
    let Some(text) = args.number.checked_sub(1).and_then(|i| boards.get(i)) else {
        eprintln!("That board # does not exist!");
        process::exit(4);
    };
    let given: Grid = text.parse().expect("embedded boards are well formed");

    let game = match args.seed {
        Some(seed) => Game::with_rng(given, Pcg64::seed_from_u64(seed)),
        None => Game::new(given),
    };
    let Ok(mut game) = game else {
        eprintln!("Embedded board is unsolvable; this is a packaging bug.");
        process::exit(1);
    };

    println!("Starting board:");
    print_board(&game);

    // Make a deliberate mistake: fill the first empty cell with anything
    // that disagrees with the solution.
    let target = game
        .current()
        .empty_positions()
        .next()
        .expect("fixture puzzles have empty cells");
    let correct = game.solution().get(target).expect("solution is complete");
    let wrong = Digit::ALL
        .into_iter()
        .find(|digit| *digit != correct)
        .expect("some digit differs");

    let state = game.place(target, wrong);
    println!(
        "Placed {wrong} at ({}, {}): {}",
        target.x(),
        target.y(),
        describe(state)
    );

    let state = game.check();
    println!("Check: {}", describe(state));

    let (state, fixed) = game.hint();
    match fixed {
        Some(pos) => println!(
            "Hint rolled back to ({}, {}): {}",
            pos.x(),
            pos.y(),
            describe(state)
        ),
        None => println!("Hint: {}", describe(state)),
    }

    // Let hints finish the game.
    let mut revealed = 0;
    while !game.state().is_won() {
        let (state, pos) = game.hint();
        let Some(pos) = pos else {
            eprintln!("Hint made no progress; state: {}", describe(state));
            process::exit(1);
        };
        revealed += 1;
        if state.is_won() {
            println!(
                "Final hint at ({}, {}) after {revealed} reveals.",
                pos.x(),
                pos.y()
            );
        }
    }

    println!();
    println!("Finished board:");
    print_board(&game);
    println!("{}", describe(game.state()));
}

fn describe(state: BoardState) -> &'static str {
    match state {
        BoardState::Ok => "so far, so good",
        BoardState::InvalidPlacement => "that number can't go there",
        BoardState::InvalidBoard => "there's still a problem somewhere",
        BoardState::Won => "congratulations, puzzle solved!",
        BoardState::Checked => "all filled cells are correct (and locked in)",
        BoardState::CheckFailed => "you've made a mistake somewhere",
        BoardState::HintGiven => "hope that helps!",
        BoardState::HintFixed => "any mistakes are now fixed",
    }
}

fn print_board(game: &Game) {
    for y in 0..9 {
        if y % 3 == 0 {
            println!("+-------+-------+-------+");
        }
        for x in 0..9 {
            if x % 3 == 0 {
                print!("| ");
            }
            match game.value(Position::new(x, y)) {
                Some(digit) => print!("{digit} "),
                None => print!(". "),
            }
        }
        println!("|");
    }
    println!("+-------+-------+-------+");
}
