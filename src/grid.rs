//! Letter grid generation.
//!
//! [`Grid::generate`] hides each input word along a straight horizontal or
//! vertical run of cells, retrying random placements under a fixed budget,
//! then fills the remaining cells with random letters. The finished grid is
//! a flat, row-major, immutable sequence of uppercase letters.

use std::fmt::Display;
use std::ops::Index;
use std::str::FromStr;

use array2d::Array2D;
use rand::Rng;

use crate::Error;

/// The grid dimension of the standard 10x10 puzzle board.
pub const DEFAULT_SIZE: usize = 10;

/// The maximum number of random placement attempts per word before the word
/// is dropped from the grid.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// The direction a word is laid out in inside the grid.
///
/// Generation never places words diagonally or reversed; diagonal is a valid
/// *selection* shape only (see [`crate::selection`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The word reads left to right along a row.
    Horizontal,

    /// The word reads top to bottom along a column.
    Vertical,
}

impl Orientation {
    /// Returns a uniformly random orientation.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..2) {
            0 => Orientation::Horizontal,
            _ => Orientation::Vertical,
        }
    }
}

/// A candidate assignment of a word to a straight run of cells. Exists only
/// while the grid is being generated.
struct Placement {
    begin: (usize, usize),
    len: usize,
    orientation: Orientation,
}

impl Placement {
    /// Whether the word fits within the grid bounds along its orientation.
    fn fits(&self, size: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.begin.1 + self.len <= size,
            Orientation::Vertical => self.begin.0 + self.len <= size,
        }
    }

    /// The (row, column) cells the word would occupy, in reading order.
    fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = self.begin;

        (0..self.len).map(move |i| match self.orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }
}

/// A square word-search grid of uppercase letters, stored row-major.
///
/// Created once per puzzle round by [`Grid::generate`] and read-only
/// afterward; selection resolution and rendering consume it without
/// mutating it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Generates a grid of the given dimension that hides each word along a
    /// straight horizontal or vertical line.
    ///
    /// Words are seated longest-first, since longer words have fewer valid
    /// placements and the grid is emptiest at the start. Each word gets up
    /// to [`PLACEMENT_ATTEMPTS`] uniformly random placements; a placement is
    /// valid when the word stays in bounds and every covered cell is either
    /// still empty or already holds the exact letter the word needs there,
    /// so crossing words may share a letter. A word whose budget runs out is
    /// silently omitted from the grid; callers must not assume every input
    /// word was placed. Cells left empty after all words are processed are
    /// filled with independent uniform letters A-Z.
    ///
    /// Generation draws all randomness from `rng`, so a seeded generator
    /// reproduces the exact same grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDimension`] if `size` is zero, and
    /// [`Error::InvalidLetter`] if any word contains a character outside
    /// A-Z. Both indicate a broken normalization step in the caller.
    pub fn generate(words: &[String], size: usize, rng: &mut impl Rng) -> Result<Grid, Error> {
        if size == 0 {
            return Err(Error::ZeroDimension);
        }

        for word in words {
            if let Some(letter) = word.chars().find(|ch| !ch.is_ascii_uppercase()) {
                return Err(Error::InvalidLetter {
                    word: word.clone(),
                    letter,
                });
            }
        }

        // Place longer words first to avoid collisions.
        let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut cells: Array2D<Option<char>> = Array2D::filled_with(None, size, size);

        for word in sorted {
            place_word(&mut cells, word, size, rng);
        }

        let letters = cells
            .elements_row_major_iter()
            .map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
            .collect();

        Ok(Grid { size, letters })
    }

    /// The grid dimension; the grid holds `size * size` letters.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The letters of the grid in row-major order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The letter at the given flat index, or [`Option::None`] if the index
    /// is out of range.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = char;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.size && col < self.size);
        &self.letters[row * self.size + col]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.letters.chunks(self.size) {
            for (i, ch) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", ch)?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses a grid from newline-separated rows of A-Z letters. The number
    /// of rows must equal the length of every row. Useful for fixed puzzles
    /// and tests; generated grids come from [`Grid::generate`].
    fn from_str(s: &str) -> Result<Grid, Error> {
        let rows: Vec<&str> = s.lines().collect();

        if rows.is_empty() {
            return Err(Error::ZeroDimension);
        }

        let size = rows.len();
        let mut letters = Vec::with_capacity(size * size);

        for row in rows {
            if row.chars().count() != size {
                return Err(Error::NotSquare {
                    rows: size,
                    columns: row.chars().count(),
                });
            }

            for ch in row.chars() {
                if !ch.is_ascii_uppercase() {
                    return Err(Error::InvalidLetter {
                        word: row.to_string(),
                        letter: ch,
                    });
                }

                letters.push(ch);
            }
        }

        Ok(Grid { size, letters })
    }
}

/// Attempts to seat one word, committing its letters on the first valid
/// placement. Returns whether the word was placed.
fn place_word(
    cells: &mut Array2D<Option<char>>,
    word: &str,
    size: usize,
    rng: &mut impl Rng,
) -> bool {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let placement = Placement {
            orientation: Orientation::random(rng),
            begin: (rng.gen_range(0..size), rng.gen_range(0..size)),
            len: word.len(),
        };

        if can_place(cells, word, &placement, size) {
            for (ch, coord) in word.chars().zip(placement.cells()) {
                cells[coord] = Some(ch);
            }

            return true;
        }
    }

    false
}

/// A placement is valid when it stays in bounds and every covered cell is
/// unassigned or already holds the letter the word needs there.
fn can_place(
    cells: &Array2D<Option<char>>,
    word: &str,
    placement: &Placement,
    size: usize,
) -> bool {
    if !placement.fits(size) {
        return false;
    }

    word.chars()
        .zip(placement.cells())
        .all(|(ch, coord)| match cells[coord] {
            None => true,
            Some(existing) => existing == ch,
        })
}

fn random_letter(rng: &mut impl Rng) -> char {
    (b'A' + rng.gen_range(0..26)) as char
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    /// Whether the word appears along some left-to-right or top-to-bottom
    /// run of the grid.
    fn contains_word(grid: &Grid, word: &str) -> bool {
        let size = grid.size();

        for i in 0..size {
            let row: String = (0..size).map(|j| grid[(i, j)]).collect();
            let col: String = (0..size).map(|j| grid[(j, i)]).collect();

            if row.contains(word) || col.contains(word) {
                return true;
            }
        }

        false
    }

    #[test]
    fn dimensions_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);

        let grid = Grid::generate(&words(&["KATZE", "HUND"]), 10, &mut rng).unwrap();

        assert_eq!(grid.size(), 10);
        assert_eq!(grid.letters().len(), 100);
        assert!(grid.letters().iter().all(|ch| ch.is_ascii_uppercase()));
    }

    #[test]
    fn empty_word_list_is_all_random() {
        let mut rng = StdRng::seed_from_u64(2);

        let grid = Grid::generate(&[], 10, &mut rng).unwrap();

        assert_eq!(grid.letters().len(), 100);
        assert!(grid.letters().iter().all(|ch| ch.is_ascii_uppercase()));
    }

    #[test]
    fn places_every_word_in_most_trials() {
        let list = words(&["WASSER", "KATZE", "SONNE", "HUND", "BROT"]);
        let mut successes = 0;

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::generate(&list, 10, &mut rng).unwrap();

            if list.iter().all(|word| contains_word(&grid, word)) {
                successes += 1;
            }
        }

        assert!(successes >= 99, "only {} of 100 trials placed all words", successes);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let list = words(&["PFERD", "MILCH", "BAUM"]);

        let grid_a = Grid::generate(&list, 10, &mut StdRng::seed_from_u64(7)).unwrap();
        let grid_b = Grid::generate(&list, 10, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn full_length_word_is_placed() {
        // A word as long as the grid has exactly one valid start per
        // orientation, but the retry budget makes placement near-certain.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::generate(&words(&["ABCDE"]), 5, &mut rng).unwrap();

            assert!(contains_word(&grid, "ABCDE"), "seed {} failed", seed);
        }
    }

    #[test]
    fn overlong_word_is_dropped() {
        let mut rng = StdRng::seed_from_u64(3);

        let grid = Grid::generate(&words(&["SCHWESTER"]), 5, &mut rng).unwrap();

        assert_eq!(grid.letters().len(), 25);
    }

    #[test]
    fn duplicate_words_are_attempted_independently() {
        // Each occurrence gets its own placement attempts; the second may
        // land on fresh cells or collide-reuse the first's, but the grid
        // stays well-formed and the word readable either way.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::generate(&words(&["HUND", "HUND"]), 10, &mut rng).unwrap();

            assert_eq!(grid.letters().len(), 100);
            assert!(grid.letters().iter().all(|ch| ch.is_ascii_uppercase()));
            assert!(contains_word(&grid, "HUND"), "seed {} failed", seed);
        }
    }

    #[test]
    fn crossing_words_may_share_a_letter() {
        // Seat HAUS at row 0, columns 0..4.
        let mut cells: Array2D<Option<char>> = Array2D::filled_with(None, 5, 5);
        let haus = Placement {
            begin: (0, 0),
            len: 4,
            orientation: Orientation::Horizontal,
        };
        for (ch, coord) in "HAUS".chars().zip(haus.cells()) {
            cells[coord] = Some(ch);
        }

        // HUND down from (0, 0) shares the H with HAUS.
        let crossing = Placement {
            begin: (0, 0),
            len: 4,
            orientation: Orientation::Vertical,
        };
        assert!(can_place(&cells, "HUND", &crossing, 5));

        // HUND down from (0, 1) would need H where HAUS already has A.
        let conflicting = Placement {
            begin: (0, 1),
            len: 4,
            orientation: Orientation::Vertical,
        };
        assert!(!can_place(&cells, "HUND", &conflicting, 5));

        // Committing the crossing word corrupts neither spelling.
        for (ch, coord) in "HUND".chars().zip(crossing.cells()) {
            cells[coord] = Some(ch);
        }
        let row: String = (0..4).map(|j| cells[(0, j)].unwrap()).collect();
        let col: String = (0..4).map(|i| cells[(i, 0)].unwrap()).collect();
        assert_eq!(row, "HAUS");
        assert_eq!(col, "HUND");
    }

    #[test]
    fn out_of_bounds_placement_is_rejected() {
        let cells: Array2D<Option<char>> = Array2D::filled_with(None, 5, 5);

        let placement = Placement {
            begin: (0, 3),
            len: 4,
            orientation: Orientation::Horizontal,
        };

        assert!(!can_place(&cells, "HUND", &placement, 5));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(
            Grid::generate(&words(&["HUND"]), 0, &mut rng),
            Err(Error::ZeroDimension),
        );
    }

    #[test]
    fn unnormalized_word_is_rejected() {
        let mut rng = StdRng::seed_from_u64(6);

        assert_eq!(
            Grid::generate(&words(&["TÜR"]), 10, &mut rng),
            Err(Error::InvalidLetter {
                word: String::from("TÜR"),
                letter: 'Ü',
            }),
        );

        assert_eq!(
            Grid::generate(&words(&["hund"]), 10, &mut rng),
            Err(Error::InvalidLetter {
                word: String::from("hund"),
                letter: 'h',
            }),
        );
    }

    #[test]
    fn parse_fixed_grid() {
        let grid = "HUND\nABCD\nEFGH\nIJKL".parse::<Grid>().unwrap();

        assert_eq!(grid.size(), 4);
        assert_eq!(grid[(0, 0)], 'H');
        assert_eq!(grid[(3, 3)], 'L');
        assert_eq!(grid.to_string(), "H U N D\nA B C D\nE F G H\nI J K L\n");
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            "ABC\nDE\nFGH".parse::<Grid>(),
            Err(Error::NotSquare { rows: 3, columns: 2 }),
        );
    }

    #[test]
    fn parse_rejects_lowercase() {
        assert!(matches!(
            "Ab\nCD".parse::<Grid>(),
            Err(Error::InvalidLetter { .. }),
        ));
    }
}
