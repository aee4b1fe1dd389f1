//! Accept/swallow policy for settled keypad hits.
//!
//! The electrical strobe loop lives in [`crate::keypad`]; this is the pure
//! half, fed explicit instants so it can run on the host.

use embassy_time::Instant;

use crate::key_map::key_at;
use crate::shared_constants::DEBOUNCE_WINDOW;

/// Suppresses re-acceptance of a key coordinate while the key is still being
/// held or bouncing.
///
/// The policy is keyed on coordinate equality, not on press/release edges: a
/// key released and pressed again inside the window is indistinguishable
/// from a held key and is swallowed too. That matches the hardware this was
/// built for and is relied on by the state machine's one-event-per-call
/// contract.
#[derive(Debug, Default)]
pub struct Debounce {
    last_accepted: Option<(u8, u8)>,
    accepted_at: Option<Instant>,
}

impl Debounce {
    /// Create a policy with empty coordinate memory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_accepted: None,
            accepted_at: None,
        }
    }

    /// Feed one scan result; returns the mapped character if the hit is
    /// accepted.
    ///
    /// A scan with no hit clears the coordinate memory, so the next press of
    /// the same key is treated as fresh. A hit on the previously accepted
    /// coordinate inside [`DEBOUNCE_WINDOW`] is swallowed; any other hit is
    /// accepted immediately and restarts the window.
    pub fn filter(&mut self, hit: Option<(u8, u8)>, now: Instant) -> Option<char> {
        let Some((row, col)) = hit else {
            self.last_accepted = None;
            return None;
        };

        if self.last_accepted == Some((row, col)) {
            let within_window = self
                .accepted_at
                .and_then(|at| now.checked_duration_since(at))
                .is_some_and(|elapsed| elapsed < DEBOUNCE_WINDOW);
            if within_window {
                return None;
            }
        }

        self.last_accepted = Some((row, col));
        self.accepted_at = Some(now);
        Some(key_at(row, col))
    }
}
