//! Eight-tile Puzzle Solver
//!
//! Solves the 3x3 sliding tile puzzle: given a start board read from a text
//! file, finds the shortest sequence of slides reaching the solved
//! arrangement via breadth-first search, prints the path, and can play it
//! back as a terminal animation.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::thread_rng;

use eighttile::board::Board;
use eighttile::solver::Solution;
use eighttile::{animation, input, solver};

/// Solves 3x3 sliding tile puzzles and animates the solution path.
#[derive(Parser)]
#[command(name = "eighttile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board file and print the shortest path.
    Solve {
        /// Board file: three rows of digits, blank as space, `0`, or `.`.
        file: PathBuf,
    },
    /// Solve a board file and play the path in the terminal.
    Animate {
        file: PathBuf,
        /// Delay between animation frames in milliseconds.
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,
    },
    /// Generate a random solvable board and solve it.
    Shuffle {
        /// Play the path in the terminal after printing it.
        #[arg(long)]
        animate: bool,
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Solve { file } => run_solve(&file),
        Command::Animate { file, delay_ms } => run_animate(&file, delay_ms),
        Command::Shuffle { animate, delay_ms } => run_shuffle(animate, delay_ms),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("eighttile: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves the board in `file` and prints the result.
fn run_solve(file: &Path) -> Result<(), Box<dyn Error>> {
    let board = input::load_board(file)?;
    let solution = solver::solve(board)?;
    report(&solution);
    Ok(())
}

/// Solves the board in `file`, prints the move count, and plays the path.
fn run_animate(file: &Path, delay_ms: u64) -> Result<(), Box<dyn Error>> {
    let board = input::load_board(file)?;
    let solution = solver::solve(board)?;
    animation::animate(&solution.path, Duration::from_millis(delay_ms))?;
    report(&solution);
    Ok(())
}

/// Generates a random solvable board, solves it, and optionally animates.
fn run_shuffle(animate: bool, delay_ms: u64) -> Result<(), Box<dyn Error>> {
    let board = Board::shuffled(&mut thread_rng());
    println!("Shuffled board:\n{board}");

    let solution = solver::solve(board)?;
    if animate {
        animation::animate(&solution.path, Duration::from_millis(delay_ms))?;
    }
    report(&solution);
    Ok(())
}

/// Prints the move count, the full path, and the search statistics.
fn report(solution: &Solution) {
    println!("Solved in {} moves", solution.moves);
    println!();
    print!("{}", solution.render_path());
    println!();
    println!(
        "Visited {} boards (generated {} in total).",
        solution.stats.visited, solution.stats.generated
    );
}
