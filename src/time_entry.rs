//! The mode/entry state machine that turns key presses into a validated
//! 12-hour time and hands it off for commit.
//!
//! One key event is consumed per call. Timing (the error dwell, the display
//! cadence) lives in [`crate::refresh`]; this machine is time-free and runs
//! on the host unchanged.

use crate::shared_constants::BLANK_SLOT;

/// Governs which key presses are accepted and how the display renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Free-running clock display.
    #[default]
    Normal,
    /// Interactive time entry.
    Set,
    /// A field failed validation; input is ignored until the dwell expires.
    Error,
}

/// Which component of the time-to-be-set is currently being typed.
///
/// Only meaningful while [`OperatingMode::Set`] (or while recovering from
/// `Error`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryField {
    /// Two digits, 1-12.
    #[default]
    Hour,
    /// Two digits, 00-59.
    Minute,
    /// `AM` or `PM`.
    AmPm,
    /// All fields validated; the caller commits and resets.
    Commit,
}

impl EntryField {
    const fn next(self) -> Self {
        match self {
            Self::Hour => Self::Minute,
            Self::Minute => Self::AmPm,
            Self::AmPm | Self::Commit => Self::Commit,
        }
    }
}

/// The two characters typed so far for the current field.
///
/// Unfilled slots hold [`BLANK_SLOT`], never garbage. The cursor flips
/// between the two slots on every stored character, so a third keystroke
/// overwrites the first slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingEntry {
    slots: [char; 2],
    cursor: usize,
}

impl Default for PendingEntry {
    fn default() -> Self {
        Self {
            slots: [BLANK_SLOT; 2],
            cursor: 0,
        }
    }
}

impl PendingEntry {
    /// Both slots, blanks included, for prompt rendering.
    #[must_use]
    pub const fn slots(&self) -> [char; 2] {
        self.slots
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    #[expect(clippy::indexing_slicing, reason = "cursor is always 0 or 1")]
    fn store(&mut self, key: char) {
        self.slots[self.cursor] = key;
        self.cursor = 1 - self.cursor;
    }

    /// Parse both slots as a two-digit decimal number. Blank or non-digit
    /// slots fail the parse, which the caller reports as a validation error.
    fn as_two_digits(&self) -> Option<u8> {
        let [tens_slot, ones_slot] = self.slots;
        let tens = tens_slot.to_digit(10)?;
        let ones = ones_slot.to_digit(10)?;
        #[expect(clippy::cast_possible_truncation, reason = "at most 99")]
        Some((tens * 10 + ones) as u8)
    }
}

/// Hour and minute accumulated so far during Set mode.
///
/// Holds only values that passed validation at the moment they were
/// accepted. After the `AmPm` field commits, `hour` is the resolved 24-hour
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CandidateTime {
    hour: u8,
    minute: u8,
}

/// A fully validated time ready to be written to the clock source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommitRequest {
    /// Resolved 24-hour value, 0-23.
    pub hour: u8,
    /// 0-59.
    pub minute: u8,
}

/// The two-level mode/entry state machine.
#[derive(Debug, Default)]
pub struct TimeEntry {
    mode: OperatingMode,
    field: EntryField,
    pending: PendingEntry,
    candidate: CandidateTime,
}

impl TimeEntry {
    /// Start in Normal mode with an empty entry buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current operating mode.
    #[must_use]
    pub const fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Current entry field.
    #[must_use]
    pub const fn field(&self) -> EntryField {
        self.field
    }

    /// The entry buffer, for prompt rendering.
    #[must_use]
    pub const fn pending(&self) -> &PendingEntry {
        &self.pending
    }

    /// Consume one key event. Returns `true` if user-visible state changed
    /// and the display needs a redraw outside the periodic cadence.
    ///
    /// In `Error` mode every key is ignored; only the dwell expiry (via
    /// [`Self::clear_error`]) or nothing at all changes the machine.
    pub fn handle_key(&mut self, key: char) -> bool {
        if self.mode == OperatingMode::Error {
            return false;
        }
        match key {
            // Override: (re)enter Set mode, discarding any entry in progress.
            '*' => {
                self.mode = OperatingMode::Set;
                self.field = EntryField::Hour;
                self.pending.clear();
                true
            }
            // Abandon without committing. The clock line reappears on the
            // next periodic tick, so no redraw is requested.
            'D' => {
                self.mode = OperatingMode::Normal;
                self.field = EntryField::Hour;
                self.pending.clear();
                false
            }
            '#' if self.mode == OperatingMode::Set => {
                self.commit_field();
                true
            }
            key if self.mode == OperatingMode::Set => {
                // No validation here: the buffer accepts anything, including
                // out-of-range digits, so a two-character field can be typed
                // before being judged as a whole at '#'.
                self.pending.store(key);
                true
            }
            _ => false,
        }
    }

    /// Validate the pending buffer against the current field. On success the
    /// field advances; on failure the machine drops into `Error` mode with
    /// the field left in place for a retry. Either way the buffer is
    /// cleared.
    fn commit_field(&mut self) {
        let valid = match self.field {
            EntryField::Hour => match self.pending.as_two_digits() {
                Some(hour @ 1..=12) => {
                    self.candidate.hour = hour;
                    true
                }
                _ => false,
            },
            EntryField::Minute => match self.pending.as_two_digits() {
                Some(minute @ 0..=59) => {
                    self.candidate.minute = minute;
                    true
                }
                _ => false,
            },
            EntryField::AmPm => {
                let [meridiem, m] = self.pending.slots();
                if (meridiem == 'A' || meridiem == 'P') && m == 'M' {
                    // Resolve to 24-hour form. 12 AM is 0; 12 PM stays 12.
                    if meridiem == 'P' && self.candidate.hour != 12 {
                        self.candidate.hour += 12;
                    } else if meridiem == 'A' && self.candidate.hour == 12 {
                        self.candidate.hour = 0;
                    }
                    true
                } else {
                    false
                }
            }
            EntryField::Commit => false,
        };

        if valid {
            self.field = self.field.next();
        } else {
            self.mode = OperatingMode::Error;
        }
        self.pending.clear();
    }

    /// If all fields have validated, hand out the resolved time and reset to
    /// Normal/Hour. Seconds are forced to zero by the caller's commit.
    pub fn take_commit(&mut self) -> Option<CommitRequest> {
        if self.field != EntryField::Commit {
            return None;
        }
        let request = CommitRequest {
            hour: self.candidate.hour,
            minute: self.candidate.minute,
        };
        self.mode = OperatingMode::Normal;
        self.field = EntryField::Hour;
        self.pending.clear();
        Some(request)
    }

    /// Error-dwell expiry: step down exactly one level, back into Set mode
    /// on the same field, with the cursor at slot 0 and both slots blank.
    pub fn clear_error(&mut self) {
        if self.mode == OperatingMode::Error {
            self.mode = OperatingMode::Set;
            self.pending.clear();
        }
    }
}
