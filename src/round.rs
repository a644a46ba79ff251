//! Per-puzzle round bookkeeping.
//!
//! A [`Round`] ties the engine together the way a game screen uses it: it
//! normalizes a set of catalog words, generates the grid that hides them,
//! previews the word under an in-flight drag, and on drag release records a
//! match together with the line to render over it. The engine components
//! themselves stay stateless; all session state lives here, owned by the
//! caller.

use rand::Rng;

use crate::catalog::{simplify_for_grid, Word};
use crate::grid::Grid;
use crate::selection::{resolve_path, resolve_terminal, DragLine};
use crate::Error;

struct Entry<'a> {
    word: &'a Word,
    /// The normalized form actually hidden in the grid.
    text: String,
    found: bool,
}

/// One puzzle round: a set of target words, the grid hiding them, and the
/// matches found so far.
pub struct Round<'a> {
    entries: Vec<Entry<'a>>,
    grid: Grid,
    lines: Vec<DragLine>,
}

impl<'a> Round<'a> {
    /// Starts a round over the given words: normalizes each word with
    /// [`simplify_for_grid`] and generates a fresh `size` x `size` grid
    /// hiding them.
    ///
    /// # Errors
    ///
    /// Returns an error when the grid configuration is invalid; see
    /// [`Grid::generate`].
    pub fn new(words: &[&'a Word], size: usize, rng: &mut impl Rng) -> Result<Round<'a>, Error> {
        let entries: Vec<Entry> = words
            .iter()
            .map(|word| Entry {
                word,
                text: simplify_for_grid(word.german),
                found: false,
            })
            .collect();

        let texts: Vec<String> = entries.iter().map(|entry| entry.text.clone()).collect();
        let grid = Grid::generate(&texts, size, rng)?;

        Ok(Round {
            entries,
            grid,
            lines: Vec::new(),
        })
    }

    /// The letters the drag currently covers, for live preview.
    pub fn preview(&self, pixel_dims: (f64, f64), start: (f64, f64), end: (f64, f64)) -> String {
        resolve_path(&self.grid, pixel_dims, start, end).text
    }

    /// Resolves a finished drag against the round's words.
    ///
    /// When the drag spells a not-yet-found target word, the word is
    /// recorded as found, the line over its cells is kept for permanent
    /// rendering, and the matched word is returned. Anything else (a
    /// non-word, an already-found word, an empty selection) returns
    /// [`Option::None`] and changes nothing.
    pub fn release(
        &mut self,
        pixel_dims: (f64, f64),
        start: (f64, f64),
        end: (f64, f64),
    ) -> Option<&'a Word> {
        let selection = resolve_path(&self.grid, pixel_dims, start, end);

        if selection.is_empty() {
            return None;
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|entry| !entry.found && entry.text == selection.text)?;

        entry.found = true;
        self.lines
            .push(resolve_terminal(self.grid.size(), pixel_dims, start, end));

        Some(entry.word)
    }

    /// The grid hiding this round's words.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All target words of the round, in the order they were given.
    pub fn words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.entries.iter().map(|entry| entry.word)
    }

    /// The target words found so far, in the order they were given.
    pub fn found_words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.found)
            .map(|entry| entry.word)
    }

    /// Whether the word with the given id has been found in this round.
    pub fn is_found(&self, id: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.found && entry.word.id == id)
    }

    /// The permanent lines to render, one per found word, oldest first.
    pub fn lines(&self) -> &[DragLine] {
        &self.lines
    }

    /// Whether every target word has been found.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|entry| entry.found)
    }
}
