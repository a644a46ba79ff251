//! Drag gesture resolution.
//!
//! Maps a pair of pixel points over a rendered grid onto the straight line
//! of cells between them. [`resolve_path`] returns every covered cell and
//! the string those cells spell, used both for live drag preview and for
//! match detection on release; [`resolve_terminal`] returns only the two
//! endpoint cells, used to render a persistent marker line over a matched
//! word.
//!
//! Both functions are pure: they hold no state, run in O(grid dimension)
//! per call, and may be invoked from any thread at drag-event frequency.
//!
//! Points are plain `(x, y)` pixel pairs and grid extents plain
//! `(width, height)` pairs, so the geometry stays testable without any UI
//! runtime. Interpolated cell coordinates round to the nearest integer with
//! ties away from zero ([`f64::round`]); this is the tie rule that decides
//! which cells a near-diagonal drag passes through.

use crate::grid::Grid;

/// The ordered cells a drag gesture covers and the string they spell.
///
/// Empty when the gesture starts and ends on the same cell; that is the
/// canonical "no selection" result, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// The letters at the covered cells, concatenated in traversal order.
    pub text: String,

    /// The flat row-major grid indices of the covered cells, in traversal
    /// order from drag start to drag end.
    pub indices: Vec<usize>,
}

impl Selection {
    fn empty() -> Selection {
        Selection::default()
    }

    /// Whether the selection covers no cells.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// The two terminal cells of a matched drag, as flat grid indices.
///
/// Rendering a permanent line only needs endpoints; callers convert an
/// index to a cell center via `(index % size, index / size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragLine {
    /// The cell the drag started on.
    pub start: usize,

    /// The cell the drag ended on.
    pub end: usize,
}

/// Maps a pixel coordinate to a row or column index, clamped to the grid.
///
/// Points outside the rendered grid snap to the nearest edge cell rather
/// than failing. A degenerate cell extent (zero or negative, e.g. before
/// the view has been laid out) resolves to 0.
fn clamp_axis(coord: f64, cell_extent: f64, size: usize) -> usize {
    if cell_extent <= 0.0 {
        return 0;
    }

    let index = (coord / cell_extent).floor() as isize;
    index.clamp(0, size as isize - 1) as usize
}

fn endpoint_cell(size: usize, (width, height): (f64, f64), (x, y): (f64, f64)) -> (usize, usize) {
    let cell_width = width / size as f64;
    let cell_height = height / size as f64;

    (
        clamp_axis(y, cell_height, size),
        clamp_axis(x, cell_width, size),
    )
}

/// Resolves a drag gesture into the straight line of cells between its two
/// endpoints and the string those cells spell.
///
/// Each endpoint maps to the cell under it (snapping to the nearest edge
/// cell when the point lies outside the grid's `pixel_dims` bounds). The
/// path then steps `max(|row delta|, |col delta|)` times from the start
/// cell to the end cell, rounding each interpolated coordinate to the
/// nearest cell. A gesture that starts and ends on the same cell yields an
/// empty selection.
///
/// The resolver is deliberately more general than generation: it follows
/// any straight line, including diagonals, even though words are only ever
/// hidden horizontally or vertically. A diagonal drag simply never spells a
/// hidden word.
pub fn resolve_path(
    grid: &Grid,
    pixel_dims: (f64, f64),
    start: (f64, f64),
    end: (f64, f64),
) -> Selection {
    let size = grid.size();

    let (start_row, start_col) = endpoint_cell(size, pixel_dims, start);
    let (end_row, end_col) = endpoint_cell(size, pixel_dims, end);

    let row_delta = end_row as isize - start_row as isize;
    let col_delta = end_col as isize - start_col as isize;
    let steps = row_delta.abs().max(col_delta.abs());

    if steps == 0 {
        return Selection::empty();
    }

    let row_step = row_delta as f64 / steps as f64;
    let col_step = col_delta as f64 / steps as f64;

    let mut selection = Selection::empty();

    for i in 0..=steps {
        let row = (start_row as f64 + i as f64 * row_step).round() as isize;
        let col = (start_col as f64 + i as f64 * col_step).round() as isize;

        let index = row * size as isize + col;

        // Guards against rounding drift at the lattice boundary; the
        // clamped endpoints keep interpolants in range in practice.
        if (0..(size * size) as isize).contains(&index) {
            let index = index as usize;

            if let Some(letter) = grid.letter(index) {
                selection.text.push(letter);
                selection.indices.push(index);
            }
        }
    }

    selection
}

/// Resolves only the two terminal cells of a drag, for rendering a
/// persistent line over a matched word.
///
/// Uses the same clamping as [`resolve_path`], so the rendered endpoints
/// always coincide with the first and last cells of the resolved path.
/// A zero grid dimension has no cells to land on and resolves both
/// endpoints to cell 0, like a degenerate pixel extent does.
pub fn resolve_terminal(
    size: usize,
    pixel_dims: (f64, f64),
    start: (f64, f64),
    end: (f64, f64),
) -> DragLine {
    if size == 0 {
        return DragLine { start: 0, end: 0 };
    }

    let (start_row, start_col) = endpoint_cell(size, pixel_dims, start);
    let (end_row, end_col) = endpoint_cell(size, pixel_dims, end);

    DragLine {
        start: start_row * size + start_col,
        end: end_row * size + end_col,
    }
}
