//! File I/O for saving and loading generated puzzles.
//!
//! Binary format for `puzzle.bin` (little endian):
//! - u32: grid size
//! - size * size bytes: grid letters, row-major ASCII
//! - u32: placement count
//! - repeat per placement:
//!   - u32: word length in bytes
//!   - word bytes (uppercase ASCII)
//!   - u32: start row
//!   - u32: start col
//!   - u8: direction (0 horizontal, 1 vertical, 2 diagonal)

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use crate::generator::Puzzle;
use crate::grid::Grid;
use crate::placement::{Direction, PlacedWord};

const PUZZLE_BIN: &str = "puzzle.bin";
const PUZZLE_TXT: &str = "puzzle.txt";

/// Saves the puzzle to both text and binary files.
pub fn save(puzzle: &Puzzle) -> std::io::Result<()> {
    save_text(puzzle)?;
    save_binary(puzzle)?;
    Ok(())
}

/// Saves the puzzle in human-readable form: the grid plus the word list.
fn save_text(puzzle: &Puzzle) -> std::io::Result<()> {
    let mut file = File::create(PUZZLE_TXT)?;
    write!(file, "{}", puzzle.format_grid())?;
    writeln!(file)?;
    writeln!(file, "Find {} words:", puzzle.placements.len())?;
    for word in puzzle.words() {
        writeln!(file, "  {}", word)?;
    }
    Ok(())
}

/// Saves the puzzle in compact binary form for fast loading.
fn save_binary(puzzle: &Puzzle) -> std::io::Result<()> {
    let mut file = File::create(PUZZLE_BIN)?;
    let grid = &puzzle.grid;

    file.write_all(&(grid.size() as u32).to_le_bytes())?;

    let letters: Vec<u8> = grid
        .rows()
        .flatten()
        .map(|cell| cell.letter.unwrap_or('.') as u8)
        .collect();
    file.write_all(&letters)?;

    file.write_all(&(puzzle.placements.len() as u32).to_le_bytes())?;
    for placed in &puzzle.placements {
        file.write_all(&(placed.word.len() as u32).to_le_bytes())?;
        file.write_all(placed.word.as_bytes())?;
        file.write_all(&(placed.row as u32).to_le_bytes())?;
        file.write_all(&(placed.col as u32).to_le_bytes())?;
        file.write_all(&[direction_tag(placed.direction)])?;
    }

    Ok(())
}

/// Loads the saved puzzle from the binary file.
///
/// Cell word-membership is rebuilt by replaying the placement list, so each
/// covered cell ends up stamped with its word's registry position.
pub fn load() -> Option<Puzzle> {
    let mut file = File::open(PUZZLE_BIN).ok()?;
    let mut u32_buffer = [0u8; 4];

    file.read_exact(&mut u32_buffer).ok()?;
    let size = u32::from_le_bytes(u32_buffer) as usize;

    let mut letters = vec![0u8; size * size];
    file.read_exact(&mut letters).ok()?;

    let mut grid = Grid::new(size);
    for (cell, &byte) in grid.cells_mut().zip(letters.iter()) {
        cell.letter = Some(char::from(byte));
    }

    file.read_exact(&mut u32_buffer).ok()?;
    let placement_count = u32::from_le_bytes(u32_buffer) as usize;

    let mut placements = Vec::with_capacity(placement_count);
    for _ in 0..placement_count {
        file.read_exact(&mut u32_buffer).ok()?;
        let word_len = u32::from_le_bytes(u32_buffer) as usize;

        let mut word_bytes = vec![0u8; word_len];
        file.read_exact(&mut word_bytes).ok()?;
        let word = String::from_utf8(word_bytes).ok()?;

        file.read_exact(&mut u32_buffer).ok()?;
        let row = u32::from_le_bytes(u32_buffer) as usize;
        file.read_exact(&mut u32_buffer).ok()?;
        let col = u32::from_le_bytes(u32_buffer) as usize;

        let mut tag = [0u8; 1];
        file.read_exact(&mut tag).ok()?;
        let direction = direction_from_tag(tag[0])?;

        placements.push(PlacedWord {
            word,
            row,
            col,
            direction,
        });
    }

    for (index, placed) in placements.iter().enumerate() {
        // reject placements that fall outside the stored grid
        let (end_row, end_col) = placed.end();
        if end_row >= size || end_col >= size {
            return None;
        }
        for (row, col) in placed.cells() {
            grid.cell_mut(row, col).word_index = Some(index);
        }
    }

    Some(Puzzle { grid, placements })
}

/// Returns the number of hidden words without loading the whole puzzle.
pub fn count() -> Option<usize> {
    let mut file = File::open(PUZZLE_BIN).ok()?;
    let mut u32_buffer = [0u8; 4];

    file.read_exact(&mut u32_buffer).ok()?;
    let size = i64::from(u32::from_le_bytes(u32_buffer));

    // skip the letter block; the placement count sits right after it
    file.seek(SeekFrom::Current(size.checked_mul(size)?)).ok()?;

    file.read_exact(&mut u32_buffer).ok()?;
    Some(u32::from_le_bytes(u32_buffer) as usize)
}

fn direction_tag(direction: Direction) -> u8 {
    match direction {
        Direction::Horizontal => 0,
        Direction::Vertical => 1,
        Direction::Diagonal => 2,
    }
}

fn direction_from_tag(tag: u8) -> Option<Direction> {
    match tag {
        0 => Some(Direction::Horizontal),
        1 => Some(Direction::Vertical),
        2 => Some(Direction::Diagonal),
        _ => None,
    }
}
