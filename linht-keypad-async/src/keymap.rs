//! The (row, column) to keycode lookup table.

use crate::event::KeyCode;
use crate::event::KeyCode::*;

/// An immutable mapping from matrix positions to symbolic keys.
///
/// Built once at configuration time. `None` marks a position that exists
/// electrically in the matrix but is not wired to any logical key; such
/// positions never produce events even when their contact closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap<const ROWS: usize, const COLS: usize> {
    codes: [[Option<KeyCode>; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Keymap<ROWS, COLS> {
    /// Creates a keymap from a row-major table of optional keycodes.
    pub const fn new(codes: [[Option<KeyCode>; COLS]; ROWS]) -> Self {
        Self { codes }
    }

    /// Flat bit position of a matrix coordinate in the scan state word.
    ///
    /// This mapping keeps the keymap and the scan bitmask aligned; both
    /// sides of the driver rely on it.
    pub const fn bit_index(row: usize, col: usize) -> usize {
        row * COLS + col
    }

    /// Looks up the key at a matrix position.
    ///
    /// Panics if `row` or `col` is outside the configured geometry. Callers
    /// own the loop bounds, so an out-of-range lookup is a bug in the
    /// caller, not a runtime condition.
    pub fn code_at(&self, row: usize, col: usize) -> Option<KeyCode> {
        self.codes[row][col]
    }

    /// All mapped keycodes in row-major order.
    pub fn codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.codes.iter().flatten().filter_map(|code| *code)
    }
}

/// The reference front-panel layout: 5 rows by 4 columns, with the two
/// rightmost positions of the bottom row left unconnected.
pub const DEFAULT_5X4: Keymap<5, 4> = Keymap::new([
    [Some(Enter), Some(Up), Some(Down), Some(Esc)],
    [Some(Left), Some(Right), Some(Num1), Some(Num2)],
    [Some(Num3), Some(Num4), Some(Num5), Some(Num6)],
    [Some(Num7), Some(Num8), Some(Num9), Some(Asterisk)],
    [Some(Num0), Some(Backslash), None, None],
]);
