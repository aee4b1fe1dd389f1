//! The fixed 4x4 key layout of the keypad.

use crate::shared_constants::{COL_COUNT, ROW_COUNT};

/// Printed characters of the keypad, row-major.
pub const KEY_MAP: [[char; COL_COUNT]; ROW_COUNT] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'P'],
    ['7', '8', '9', 'M'],
    ['*', '0', '#', 'D'],
];

/// Look up the printed character at a matrix coordinate.
///
/// Coordinates come from the scanner loop and are always in range.
#[inline]
#[must_use]
#[expect(clippy::indexing_slicing, reason = "scanner coordinates are 0..4")]
pub fn key_at(row: u8, col: u8) -> char {
    debug_assert!((row as usize) < ROW_COUNT && (col as usize) < COL_COUNT);
    KEY_MAP[row as usize][col as usize]
}
