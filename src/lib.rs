#![warn(missing_docs)]

//! # Wordquest
//!
//! A word-search puzzle engine. Given a small set of target words, it
//! generates a fixed-size letter grid that hides each word along a straight
//! horizontal or vertical line, and resolves a linear drag gesture over that
//! grid into the sequence of cells it covers and the word those cells spell.
//!
//! The engine knows nothing about rendering or storage: it takes words and
//! geometry, and returns grids, selections, and line endpoints. See
//! [`grid::Grid::generate`] and [`selection::resolve_path`] for the two
//! entry points, and [`round::Round`] for the bookkeeping that ties them
//! together into a playable puzzle round.

use std::fmt::Display;

pub mod catalog;
pub mod grid;
pub mod progress;
pub mod round;
pub mod selection;

/// An error caused by invalid configuration of the puzzle engine.
///
/// These indicate a broken normalization step upstream and are reported
/// eagerly; expected runtime outcomes such as a word not fitting into the
/// grid are not errors and degrade gracefully instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The grid dimension was zero. Grids must have at least one cell.
    ZeroDimension,

    /// A word contains a character outside the uppercase A-Z alphabet.
    /// Words must be normalized (uppercased, diacritics folded) before
    /// they are handed to the engine; see [`catalog::simplify_for_grid`].
    InvalidLetter {
        /// The offending word.
        word: String,
        /// The first character of the word that is not in A-Z.
        letter: char,
    },

    /// A grid was parsed from rows whose count and length disagree.
    NotSquare {
        /// The number of rows supplied.
        rows: usize,
        /// The length of the first row that did not match.
        columns: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroDimension => {
                write!(f, "Grid dimension must be at least 1")
            }
            Error::InvalidLetter { word, letter } => {
                write!(
                    f,
                    "Word {:?} contains {:?}, which is outside A-Z; words must be normalized before generation",
                    word, letter
                )
            }
            Error::NotSquare { rows, columns } => {
                write!(
                    f,
                    "Grid rows do not form a square: {} rows but a row of {} columns",
                    rows, columns
                )
            }
        }
    }
}

impl std::error::Error for Error {}
