//! Matching player selections against the target word list.
//!
//! A selection is an ordered path of grid coordinates. The letters along the
//! path are matched case-insensitively against the words the puzzle was asked
//! to hide, not against the placement registry: a target the generator failed
//! to place still counts when filler letters happen to spell it.

use rustc_hash::FxHashSet;

use crate::grid::Grid;

/// Tracks which target words a player has found.
pub struct SelectionChecker {
    targets: FxHashSet<String>,
    found: FxHashSet<String>,
}

impl SelectionChecker {
    /// Creates a checker for the given target words. Empty entries are
    /// ignored so a stray blank line can never be "found".
    pub fn new<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        let targets = words
            .into_iter()
            .map(|word| word.as_ref().to_ascii_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            targets,
            found: FxHashSet::default(),
        }
    }

    /// Checks the letters along `path` against the remaining target words.
    ///
    /// Returns the matched word on a fresh find. Paths that leave the grid,
    /// spell nothing in the target list, or re-find an already-found word
    /// yield `None`.
    pub fn check(&mut self, grid: &Grid, path: &[(usize, usize)]) -> Option<String> {
        let mut selected = String::with_capacity(path.len());
        for &(row, col) in path {
            selected.push(grid.letter(row, col)?.to_ascii_uppercase());
        }

        if self.targets.contains(&selected) && !self.found.contains(&selected) {
            self.found.insert(selected.clone());
            Some(selected)
        } else {
            None
        }
    }

    /// The number of target words not yet found.
    pub fn remaining(&self) -> usize {
        self.targets.len() - self.found.len()
    }

    /// Whether every target word has been found.
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.targets.len()
    }
}
