//! Fixed-size wrappers over the keypad's GPIO lines.

use core::convert::Infallible;

use embassy_rp::gpio;
use embedded_hal::digital::{OutputPin, PinState};

/// The driven row lines of the key matrix.
pub struct OutputArray<'a, const N: usize>([gpio::Output<'a>; N]);

impl<'a, const N: usize> OutputArray<'a, N> {
    /// Wrap already-configured output lines.
    pub const fn new(outputs: [gpio::Output<'a>; N]) -> Self {
        Self(outputs)
    }

    /// Drive one line to the given state.
    #[inline]
    #[must_use = "Possible error result should not be ignored"]
    // on some hardware (but not here), setting a pin can fail, so we return a Result
    #[expect(clippy::indexing_slicing, reason = "row index is bounded by the scan loop")]
    pub fn set_state_at(&mut self, index: usize, state: PinState) -> Result<(), Infallible> {
        self.0[index].set_state(state)
    }
}

/// The sensed column lines of the key matrix, pulled up and read active-low.
pub struct InputArray<'a, const N: usize>([gpio::Input<'a>; N]);

impl<'a, const N: usize> InputArray<'a, N> {
    /// Wrap already-configured input lines.
    pub const fn new(inputs: [gpio::Input<'a>; N]) -> Self {
        Self(inputs)
    }

    /// Index of the first line reading active (low), if any.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "N is small")]
    pub fn first_active(&self) -> Option<u8> {
        self.0
            .iter()
            .position(|input| input.is_low())
            .map(|index| index as u8)
    }
}
