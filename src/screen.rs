//! Line formatting for the 16x2 character LCD.

use core::fmt::Write as _;

use heapless::String;

use crate::Result;
use crate::temperature::TempUnit;
use crate::time_entry::EntryField;

/// One rendered display line. 64 chars covers every display this crate
/// targets.
pub type Line = String<64>;

/// Banner shown while a failed validation dwells.
pub const ERROR_BANNER: &str = "---- ERROR! ----";

/// The Normal-mode clock line: `HH:MM:SS AM/PM TT U`.
///
/// Hours render in 12-hour form (a 24-hour 0 shows as 12); AM/PM comes from
/// the 24-hour value, 12 and above being PM.
pub fn clock_line(hour24: u8, minute: u8, second: u8, degrees: i32, unit: TempUnit) -> Result<Line> {
    let (hour12, meridiem) = to_12_hour(hour24);
    let mut line = Line::new();
    write!(
        line,
        "{hour12:02}:{minute:02}:{second:02} {meridiem} {degrees:02} {}",
        unit.label()
    )?;
    Ok(line)
}

/// The Set-mode prompt for the field being typed, blanks rendered as the
/// slot placeholder.
pub fn prompt_line(field: EntryField, slots: [char; 2]) -> Result<Line> {
    // Commit is consumed by the main loop before the scheduler runs, so its
    // prompt is never shown; Hour's label stands in.
    let label = match field {
        EntryField::Hour | EntryField::Commit => "HOUR: ",
        EntryField::Minute => "MIN: ",
        EntryField::AmPm => "AM or PM: ",
    };
    let [first, second] = slots;
    let mut line = Line::new();
    write!(line, "{label} {first}{second}")?;
    Ok(line)
}

/// 24-hour to 12-hour with meridiem label.
#[must_use]
pub fn to_12_hour(hour24: u8) -> (u8, &'static str) {
    let meridiem = if hour24 >= 12 { "PM" } else { "AM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        hour => hour,
    };
    (hour12, meridiem)
}
