//! The authoritative clock source: seconds-of-day derived from a base
//! instant plus the last committed time.
//!
//! No validation happens here; the state machine only commits values that
//! already passed its field checks. Methods take the current `Instant` so
//! the clock runs on the host in tests.

use embassy_time::Instant;

use crate::shared_constants::SECONDS_PER_DAY;

/// A wall-clock reading, 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// 0-23.
    pub hour: u8,
    /// 0-59.
    pub minute: u8,
    /// 0-59.
    pub second: u8,
}

/// Local time kept as an offset from a base instant.
#[derive(Debug)]
pub struct WallClock {
    base: Instant,
    seconds_at_base: u32,
}

impl WallClock {
    /// The clock boots at midnight until a time is committed.
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self {
            base: now,
            seconds_at_base: 0,
        }
    }

    /// Read the current time, wrapping at the day boundary.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "reduced modulo seconds-per-day before the narrowing casts"
    )]
    pub fn now(&self, at: Instant) -> TimeOfDay {
        let elapsed_seconds = at
            .checked_duration_since(self.base)
            .map_or(0, |elapsed| elapsed.as_secs());
        let seconds_of_day =
            ((u64::from(self.seconds_at_base) + elapsed_seconds) % u64::from(SECONDS_PER_DAY)) as u32;

        TimeOfDay {
            hour: (seconds_of_day / 3600) as u8,
            minute: ((seconds_of_day % 3600) / 60) as u8,
            second: (seconds_of_day % 60) as u8,
        }
    }

    /// Commit a new time. The caller passes validated components; seconds
    /// are forced to zero by the time-entry commit path.
    pub fn commit(&mut self, hour: u8, minute: u8, second: u8, at: Instant) {
        self.base = at;
        self.seconds_at_base =
            u32::from(hour) * 3600 + u32::from(minute) * 60 + u32::from(second);
    }
}
