//! Word Search Puzzle Library
//!
//! Builds word-search puzzles: every target word is embedded in a square
//! letter grid along one of three directions (reading right, down, or
//! down-right), the leftover cells are filled with random letters, and the
//! placement registry needed to score a player's selections is returned
//! alongside the grid.

pub mod generator;
pub mod grid;
pub mod persistence;
pub mod placement;
pub mod selection;

pub use generator::{generate, Puzzle, DEFAULT_GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
pub use placement::{Direction, PlacedWord};
