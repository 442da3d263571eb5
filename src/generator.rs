//! Randomized puzzle generation.
//!
//! Words are attempted in input order. Each word gets a bounded number of
//! random trials (direction plus start cell); the first feasible trial is
//! committed. A word that never fits is dropped from the placement registry
//! without an error, so callers that need every word placed must compare the
//! registry length against their input. Once every word has been attempted,
//! the remaining cells are filled with random letters.

use rand::Rng;

use crate::grid::{self, Grid};
use crate::placement::{self, Direction, PlacedWord};

/// Grid dimension used when the caller does not specify one.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Random placement trials per word before it is dropped.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// A generated puzzle: the filled letter grid plus the registry of words that
/// were actually embedded, in input order.
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// The completed letter grid.
    pub grid: Grid,
    /// Where each successfully placed word sits. May be shorter than the
    /// input word list.
    pub placements: Vec<PlacedWord>,
}

impl Puzzle {
    /// Formats the puzzle grid for display.
    pub fn format_grid(&self) -> String {
        grid::format_grid(&self.grid)
    }

    /// Formats the answer key: word letters only, filler as '.'.
    pub fn format_answer_key(&self) -> String {
        grid::format_answer_key(&self.grid)
    }

    /// The embedded words, in input order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|placed| placed.word.as_str())
    }
}

/// Generates a word-search puzzle embedding `words` in a `size` x `size` grid.
///
/// Words are uppercased before placement; empty entries are skipped. The RNG
/// drives both placement trials and filler letters: pass an entropy-seeded
/// generator for real puzzles or a fixed-seed one to reproduce a grid
/// exactly.
pub fn generate(words: &[String], size: usize, rng: &mut impl Rng) -> Puzzle {
    let mut grid = Grid::new(size);
    let mut placements = Vec::with_capacity(words.len());

    if size == 0 {
        // no cells to try, and no trial coordinates to draw
        return Puzzle { grid, placements };
    }

    for (word_index, word) in words.iter().enumerate() {
        let word = word.to_ascii_uppercase();
        if word.is_empty() {
            continue;
        }

        if let Some(placed) = try_place(&mut grid, word, word_index, rng) {
            placements.push(placed);
        }
        // a word that found no spot is dropped; the registry just skips it
    }

    fill_empty_cells(&mut grid, rng);

    Puzzle { grid, placements }
}

/// Attempts up to [`MAX_PLACEMENT_ATTEMPTS`] random placements for one word.
///
/// Each trial draws a direction and a start cell uniformly; the first trial
/// that passes the feasibility check is committed to the grid.
fn try_place(
    grid: &mut Grid,
    word: String,
    word_index: usize,
    rng: &mut impl Rng,
) -> Option<PlacedWord> {
    let size = grid.size();

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let direction = Direction::random(rng);
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);

        if placement::can_place(grid, &word, row, col, direction) {
            placement::place(grid, &word, row, col, direction, word_index);
            return Some(PlacedWord {
                word,
                row,
                col,
                direction,
            });
        }
    }

    None
}

/// Fills every still-unwritten cell with a uniform random letter.
fn fill_empty_cells(grid: &mut Grid, rng: &mut impl Rng) {
    for cell in grid.cells_mut() {
        if cell.letter.is_none() {
            cell.letter = Some(random_letter(rng));
        }
    }
}

fn random_letter(rng: &mut impl Rng) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}
