//! Word Search Puzzle Generator
//!
//! Hides a list of words in a square letter grid (reading right, down, or
//! down-right), fills the rest of the grid with random letters, and saves the
//! result for later display alongside its answer key.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordgrid::{generator, persistence};

/// Generates word-search puzzles and prints them with their answer keys.
#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle from the given words and save it to disk.
    Generate {
        /// Words to hide in the grid.
        words: Vec<String>,
        /// Read additional words from a file, one per line.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Grid dimension.
        #[arg(long, default_value_t = generator::DEFAULT_GRID_SIZE)]
        size: usize,
        /// Seed to reproduce a puzzle exactly.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display the saved puzzle.
    Show,
    /// Display the saved puzzle's answer key.
    Key,
    /// Show the number of words hidden in the saved puzzle.
    Count,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Generate {
            words,
            file,
            size,
            seed,
        }) => run_generate(words, file, size, seed),
        Some(Command::Show) => run_show(),
        Some(Command::Key) => run_key(),
        Some(Command::Count) => run_count(),
        None => {
            // default: generate a demo puzzle and print it
            run_generate(demo_words(), None, generator::DEFAULT_GRID_SIZE, None);
        }
    }
}

/// Words for the default demo puzzle.
fn demo_words() -> Vec<String> {
    ["PUZZLE", "SEARCH", "LETTER", "HIDDEN", "RANDOM", "ANSWER"]
        .iter()
        .map(|word| word.to_string())
        .collect()
}

/// Generates a puzzle, saves it to disk, and prints it.
fn run_generate(mut words: Vec<String>, file: Option<PathBuf>, size: usize, seed: Option<u64>) {
    if let Some(path) = file {
        match read_word_file(&path) {
            Ok(mut from_file) => words.append(&mut from_file),
            Err(e) => {
                eprintln!("Failed to read {}: {}", path.display(), e);
                return;
            }
        }
    }

    if words.is_empty() {
        eprintln!("No words given. Pass words as arguments or use --file.");
        return;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let puzzle = generator::generate(&words, size, &mut rng);

    if let Err(e) = persistence::save(&puzzle) {
        eprintln!("Failed to save puzzle: {}", e);
    } else {
        println!("Wrote puzzle.txt and puzzle.bin");
    }

    print_puzzle(&puzzle);

    // the library drops unplaceable words silently; report them here
    let dropped = words.len() - puzzle.placements.len();
    if dropped > 0 {
        eprintln!("{} of {} words could not be placed", dropped, words.len());
    }
}

/// Loads and prints the saved puzzle.
fn run_show() {
    match persistence::load() {
        Some(puzzle) => print_puzzle(&puzzle),
        None => eprintln!("No puzzle.bin found. Run 'wordgrid generate' first."),
    }
}

/// Loads the saved puzzle and prints its answer key.
fn run_key() {
    match persistence::load() {
        Some(puzzle) => {
            print!("{}", puzzle.format_answer_key());
            println!();
            for placed in &puzzle.placements {
                println!(
                    "{}: (row {}, col {}, {})",
                    placed.word,
                    placed.row + 1,
                    placed.col + 1,
                    placed.direction
                );
            }
        }
        None => eprintln!("No puzzle.bin found. Run 'wordgrid generate' first."),
    }
}

/// Prints the count of hidden words in the saved puzzle.
fn run_count() {
    match persistence::count() {
        Some(count) => println!("{} hidden words", count),
        None => eprintln!("No puzzle.bin found. Run 'wordgrid generate' first."),
    }
}

/// Prints the puzzle grid and its word list.
fn print_puzzle(puzzle: &generator::Puzzle) {
    print!("{}", puzzle.format_grid());
    println!();
    println!("Find {} words:", puzzle.placements.len());
    for word in puzzle.words() {
        println!("  {}", word);
    }
}

/// Reads a word list file, one word per line, skipping blank lines.
fn read_word_file(path: &Path) -> std::io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use wordgrid::grid::{format_answer_key, Grid};
    use wordgrid::placement::{self, Direction};

    use super::*;

    #[test]
    fn test_answer_key_snapshot() {
        let mut grid = Grid::new(5);
        placement::place(&mut grid, "CROW", 0, 0, Direction::Vertical, 0);
        placement::place(&mut grid, "CAT", 0, 0, Direction::Horizontal, 1);
        placement::place(&mut grid, "TEA", 0, 2, Direction::Diagonal, 2);

        let output = format_answer_key(&grid);

        insta::assert_snapshot!("answer_key", output);
    }

    #[test]
    fn test_demo_puzzle_places_every_word() {
        let words = demo_words();
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle = generator::generate(&words, generator::DEFAULT_GRID_SIZE, &mut rng);

        assert_eq!(puzzle.placements.len(), words.len());
    }
}
