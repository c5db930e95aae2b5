//! A small command line frontend for the generator. `generate` prints a
//! fresh puzzle, `encode` converts a text file of puzzle lines into the
//! binary dataset format.

use clap::{Parser, Subcommand};

use sudoku_gen::Puzzle;
use sudoku_gen::dataset;
use sudoku_gen::generator::Generator;

use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "sudokugen", version,
    about = "Generates uniquely solvable Sudoku puzzles.")]
struct Cli {
    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand)]
enum Command {

    /// Generates a puzzle and prints it to standard output.
    Generate {

        /// The width of the grid. Must be a square number.
        #[arg(long, default_value_t = 9)]
        width: usize,

        /// The difficulty level (Easy, Medium, Hard, or Extreme).
        #[arg(long, default_value = "Easy")]
        level: String,

        /// Prints the puzzle as JSON instead of pretty-printed grids.
        #[arg(long)]
        json: bool,

        /// Also prints the solution.
        #[arg(long)]
        solution: bool
    },

    /// Encodes a text file with one puzzle line per row (one digit per
    /// cell, 0 for empty) into the binary dataset format and appends the
    /// records to the output file.
    Encode {

        /// The text file to read puzzle lines from.
        input: PathBuf,

        /// The dataset file to append the records to.
        output: PathBuf
    }
}

fn fail(message: String) -> ! {
    eprintln!("{}", message);
    process::exit(1)
}

fn print_puzzle(puzzle: &Puzzle, json: bool, solution: bool) {
    if json {
        match serde_json::to_string_pretty(puzzle) {
            Ok(text) => println!("{}", text),
            Err(e) => fail(format!("could not serialize puzzle: {}", e))
        }

        return;
    }

    println!("{} puzzle with {} givens:",
        puzzle.level().name(), puzzle.actual_initial());

    // grids wider than 9 have no pretty representation
    if puzzle.width() > 9 {
        println!("{}", puzzle.problem().to_parseable_string());

        if solution {
            println!("{}", puzzle.answer().to_parseable_string());
        }
    }
    else {
        println!("{}", puzzle.problem());

        if solution {
            println!("Solution:");
            println!("{}", puzzle.answer());
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { width, level, json, solution } => {
            let mut generator = Generator::new_default();

            match generator.generate_named(width, &level) {
                Ok(puzzle) => print_puzzle(&puzzle, json, solution),
                Err(e) =>
                    fail(format!("could not generate puzzle: {:?}", e))
            }
        },
        Command::Encode { input, output } => {
            match dataset::encode_file(&input, &output) {
                Ok(written) => println!("Encoded {} puzzle(s) into {}.",
                    written, output.display()),
                Err(e) => fail(format!("could not encode {}: {}",
                    input.display(), e))
            }
        }
    }
}
