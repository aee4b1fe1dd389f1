use embassy_time::Duration;

/// Rows driven, columns sensed: the keypad is a 4x4 matrix.
pub const ROW_COUNT: usize = 4;
/// Number of sensed column lines.
pub const COL_COUNT: usize = 4;

/// Minimum wait after changing a row line before the columns are sampled.
pub const SETTLE_DELAY: Duration = Duration::from_millis(4);
/// A second acceptance of the same key coordinate inside this window is
/// swallowed as contact bounce.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Normal-mode clock line refresh cadence.
pub const NORMAL_REFRESH: Duration = Duration::from_secs(1);
/// How long the error banner stays up before stepping back into Set mode.
pub const ERROR_DWELL: Duration = Duration::from_secs(2);

/// Placeholder shown for an entry slot that has not been typed yet.
pub const BLANK_SLOT: char = '_';

/// Seconds in a day; the wall clock wraps at this boundary.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;
