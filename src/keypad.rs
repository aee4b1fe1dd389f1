//! The electrical half of the keypad scanner: strobe one row at a time,
//! sample the columns, and run the hit through the debounce policy.

use defmt::debug;
use embassy_time::{Instant, Timer};
use embedded_hal::digital::PinState;

use crate::debounce::Debounce;
use crate::pin_array::{InputArray, OutputArray};
use crate::shared_constants::{COL_COUNT, ROW_COUNT, SETTLE_DELAY};

/// A 4x4 matrix keypad with per-call debounce.
///
/// Rows idle high; a row is strobed by driving it low, which lets a pressed
/// key pull its (pulled-up) column low.
pub struct Keypad<'a> {
    rows: OutputArray<'a, ROW_COUNT>,
    cols: InputArray<'a, COL_COUNT>,
    debounce: Debounce,
}

impl<'a> Keypad<'a> {
    /// Build a keypad over configured row and column lines.
    #[must_use]
    pub fn new(rows: OutputArray<'a, ROW_COUNT>, cols: InputArray<'a, COL_COUNT>) -> Self {
        Self {
            rows,
            cols,
            debounce: Debounce::new(),
        }
    }

    /// One full scan pass: at most one settled key event.
    ///
    /// Every call transiently drives and restores all row lines. The settle
    /// sleeps are bounded and unconditional; they are the loop's only
    /// suspension points.
    pub async fn scan(&mut self) -> Option<char> {
        let hit = self.strobe_rows().await;
        let key = self.debounce.filter(hit, Instant::now());
        if let Some(key) = key {
            debug!("keypad: accepted '{}'", key);
        }
        key
    }

    #[expect(clippy::cast_possible_truncation, reason = "ROW_COUNT is 4")]
    async fn strobe_rows(&mut self) -> Option<(u8, u8)> {
        let mut hit = None;
        for row in 0..ROW_COUNT {
            let _ = self.rows.set_state_at(row, PinState::Low);
            Timer::after(SETTLE_DELAY).await;
            let col = self.cols.first_active();
            Timer::after(SETTLE_DELAY).await;
            let _ = self.rows.set_state_at(row, PinState::High);

            if let Some(col) = col {
                hit = Some((row as u8, col));
                break;
            }
        }
        hit
    }
}
