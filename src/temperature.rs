//! Temperature conversion and the asynchronously toggled display unit.

use core::sync::atomic::{AtomicBool, Ordering};

/// Unit the Normal-mode line shows temperature in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TempUnit {
    /// Suffix character on the clock line.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }
}

/// Convert a normalized sensor reading (0.0 to 1.0) to whole degrees.
///
/// The sensor maps full scale to 3.3 V and 10 mV per degree Celsius, so
/// Celsius is `raw * 330`. Fahrenheit truncates the scaled value before
/// adding 32.
#[must_use]
#[expect(clippy::cast_possible_truncation, reason = "whole degrees fit in i32")]
pub fn degrees(raw: f32, unit: TempUnit) -> i32 {
    let celsius = raw * 330.0;
    match unit {
        TempUnit::Celsius => celsius as i32,
        TempUnit::Fahrenheit => (celsius * (9.0 / 5.0)) as i32 + 32,
    }
}

/// The unit-toggle flag flipped by the toggle-button task and read by the
/// display step.
///
/// A single bit with no compound invariant: relaxed ordering is enough, the
/// toggle takes effect on whichever render observes it next.
#[derive(Debug, Default)]
pub struct TempUnitFlag(AtomicBool);

impl TempUnitFlag {
    /// Starts in Celsius.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Flip the unit. Called from the toggle-button event path.
    pub fn toggle(&self) {
        self.0.fetch_xor(true, Ordering::Relaxed);
    }

    /// The unit to render with.
    #[must_use]
    pub fn unit(&self) -> TempUnit {
        if self.0.load(Ordering::Relaxed) {
            TempUnit::Fahrenheit
        } else {
            TempUnit::Celsius
        }
    }
}
