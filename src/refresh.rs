//! Display scheduler: decides, once per loop pass, whether and what to
//! render.
//!
//! Three firing conditions, checked in order and mutually exclusive per
//! pass: the Normal-mode periodic tick, the Set/Error dirty redraw, and the
//! error-dwell expiry. Like the rest of the core this is time-fed; the
//! firmware passes `Instant::now()`.

use embassy_time::{Duration, Instant};

use crate::shared_constants::{ERROR_DWELL, NORMAL_REFRESH};
use crate::time_entry::{EntryField, OperatingMode, TimeEntry};

/// What the display step should paint this pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderAction {
    /// Re-sample temperature and time and paint the full clock line.
    Clock,
    /// Paint the prompt for the field being typed.
    Prompt {
        /// Field whose prompt is shown.
        field: EntryField,
        /// Entry slots, blanks as [`crate::shared_constants::BLANK_SLOT`].
        slots: [char; 2],
    },
    /// Paint the error banner.
    ErrorBanner,
}

/// Periodic and dwell timers plus the dirty flag.
#[derive(Debug)]
pub struct RefreshSchedule {
    last_clock_render: Instant,
    error_since: Option<Instant>,
    dirty: bool,
}

impl RefreshSchedule {
    /// Timers start at `now`; the first clock line appears one period later,
    /// and nothing is dirty yet.
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self {
            last_clock_render: now,
            error_since: None,
            dirty: false,
        }
    }

    /// Request a redraw outside the periodic cadence.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Evaluate the firing conditions for this pass.
    ///
    /// At most one condition acts per call. The error-dwell expiry steps the
    /// state machine down from `Error` to `Set` (same field, cursor reset,
    /// slots blank) and schedules the prompt redraw for the next pass.
    pub fn poll(&mut self, entry: &mut TimeEntry, now: Instant) -> Option<RenderAction> {
        // Dwell bookkeeping: the timer starts when Error mode is first seen
        // and is dropped as soon as the mode leaves Error.
        if entry.mode() == OperatingMode::Error {
            self.error_since.get_or_insert(now);
        } else {
            self.error_since = None;
        }

        if entry.mode() == OperatingMode::Normal
            && elapsed(self.last_clock_render, now) >= NORMAL_REFRESH
        {
            self.last_clock_render = now;
            return Some(RenderAction::Clock);
        }

        if entry.mode() != OperatingMode::Normal && self.dirty {
            self.dirty = false;
            return Some(match entry.mode() {
                OperatingMode::Error => RenderAction::ErrorBanner,
                _ => RenderAction::Prompt {
                    field: entry.field(),
                    slots: entry.pending().slots(),
                },
            });
        }

        if entry.mode() == OperatingMode::Error {
            let expired = self
                .error_since
                .is_some_and(|since| elapsed(since, now) >= ERROR_DWELL);
            if expired {
                self.error_since = None;
                entry.clear_error();
                self.dirty = true;
            }
        }
        None
    }
}

fn elapsed(since: Instant, now: Instant) -> Duration {
    now.checked_duration_since(since)
        .unwrap_or(Duration::from_ticks(0))
}
