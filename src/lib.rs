//! An LCD clock with 4x4 keypad time entry and a temperature readout.
//!
//! The input state machine (debounced keypad scan, mode/entry transitions,
//! display scheduling) is pure and builds on any target; the RP2040 device
//! layer sits behind the `pico1` feature.
#![no_std]

mod debounce;
mod error;
mod key_map;
mod never;
mod refresh;
pub mod screen;
mod shared_constants;
mod temperature;
mod time_entry;
mod wall_clock;

#[cfg(feature = "pico1")]
mod char_lcd_i2c;
#[cfg(feature = "pico1")]
mod hardware;
#[cfg(feature = "pico1")]
mod keypad;
#[cfg(feature = "pico1")]
mod pin_array;
#[cfg(feature = "pico1")]
mod temp_sensor;
#[cfg(feature = "pico1")]
mod unit_button;

// Re-export commonly used items
pub use debounce::Debounce;
pub use error::{Error, Result};
pub use key_map::{KEY_MAP, key_at};
pub use never::Never;
pub use refresh::{RefreshSchedule, RenderAction};
pub use shared_constants::*;
pub use temperature::{TempUnit, TempUnitFlag, degrees};
pub use time_entry::{
    CandidateTime, CommitRequest, EntryField, OperatingMode, PendingEntry, TimeEntry,
};
pub use wall_clock::{TimeOfDay, WallClock};

#[cfg(feature = "pico1")]
pub use char_lcd_i2c::CharLcdI2c;
#[cfg(feature = "pico1")]
pub use hardware::Hardware;
#[cfg(feature = "pico1")]
pub use keypad::Keypad;
#[cfg(feature = "pico1")]
pub use pin_array::{InputArray, OutputArray};
#[cfg(feature = "pico1")]
pub use temp_sensor::TempSensor;
#[cfg(feature = "pico1")]
pub use unit_button::unit_button_task;
