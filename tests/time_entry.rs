//! Host tests for the mode/entry state machine.

use lcd_clock::{BLANK_SLOT, CommitRequest, EntryField, OperatingMode, TimeEntry};

fn type_keys(entry: &mut TimeEntry, keys: &str) {
    for key in keys.chars() {
        entry.handle_key(key);
    }
}

#[test]
fn starts_in_normal_mode() {
    let entry = TimeEntry::new();
    assert_eq!(entry.mode(), OperatingMode::Normal);
    assert_eq!(entry.field(), EntryField::Hour);
    assert_eq!(entry.pending().slots(), [BLANK_SLOT; 2]);
}

#[test]
fn star_enters_set_mode_and_requests_redraw() {
    let mut entry = TimeEntry::new();
    assert!(entry.handle_key('*'));
    assert_eq!(entry.mode(), OperatingMode::Set);
    assert_eq!(entry.field(), EntryField::Hour);
}

#[test]
fn star_discards_an_entry_in_progress() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*05#1");
    assert_eq!(entry.field(), EntryField::Minute);
    assert!(entry.handle_key('*'));
    assert_eq!(entry.field(), EntryField::Hour);
    assert_eq!(entry.pending().slots(), [BLANK_SLOT; 2]);
}

#[test]
fn d_abandons_without_committing_or_redrawing() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*05#30#");
    assert!(!entry.handle_key('D'));
    assert_eq!(entry.mode(), OperatingMode::Normal);
    assert_eq!(entry.field(), EntryField::Hour);
    assert_eq!(entry.take_commit(), None);
}

#[test]
fn keys_are_ignored_in_normal_mode() {
    let mut entry = TimeEntry::new();
    assert!(!entry.handle_key('5'));
    assert!(!entry.handle_key('#'));
    assert_eq!(entry.mode(), OperatingMode::Normal);
    assert_eq!(entry.pending().slots(), [BLANK_SLOT; 2]);
}

#[test]
fn digits_fill_slots_and_flip_the_cursor() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*1");
    assert_eq!(entry.pending().slots(), ['1', BLANK_SLOT]);
    entry.handle_key('2');
    assert_eq!(entry.pending().slots(), ['1', '2']);
    // A third keystroke wraps around and overwrites slot 0.
    entry.handle_key('3');
    assert_eq!(entry.pending().slots(), ['3', '2']);
}

#[test]
fn hour_rejects_out_of_range() {
    for hour in ["00", "13", "99"] {
        let mut entry = TimeEntry::new();
        type_keys(&mut entry, "*");
        type_keys(&mut entry, hour);
        entry.handle_key('#');
        assert_eq!(entry.mode(), OperatingMode::Error, "hour {hour}");
        // The failed field stays put for the retry.
        assert_eq!(entry.field(), EntryField::Hour, "hour {hour}");
    }
}

#[test]
fn hour_accepts_full_range() {
    for hour in ["01", "09", "10", "12"] {
        let mut entry = TimeEntry::new();
        type_keys(&mut entry, "*");
        type_keys(&mut entry, hour);
        entry.handle_key('#');
        assert_eq!(entry.mode(), OperatingMode::Set, "hour {hour}");
        assert_eq!(entry.field(), EntryField::Minute, "hour {hour}");
    }
}

#[test]
fn commit_with_blank_slots_is_a_validation_error() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*#");
    assert_eq!(entry.mode(), OperatingMode::Error);
}

#[test]
fn minute_rejects_sixty_and_above() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*10#60#");
    assert_eq!(entry.mode(), OperatingMode::Error);
    assert_eq!(entry.field(), EntryField::Minute);
}

#[test]
fn minute_accepts_bounds() {
    for minute in ["00", "59"] {
        let mut entry = TimeEntry::new();
        type_keys(&mut entry, "*10#");
        type_keys(&mut entry, minute);
        entry.handle_key('#');
        assert_eq!(entry.field(), EntryField::AmPm, "minute {minute}");
    }
}

#[test]
fn ampm_rejects_malformed_entries() {
    for meridiem in ["AA", "MM", "5M", "M_"] {
        let mut entry = TimeEntry::new();
        type_keys(&mut entry, "*10#30#");
        type_keys(&mut entry, meridiem);
        entry.handle_key('#');
        assert_eq!(entry.mode(), OperatingMode::Error, "meridiem {meridiem}");
        assert_eq!(entry.field(), EntryField::AmPm, "meridiem {meridiem}");
    }
}

#[test]
fn pm_adds_twelve_to_the_hour() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*05#00#PM#");
    assert_eq!(
        entry.take_commit(),
        Some(CommitRequest {
            hour: 17,
            minute: 0
        })
    );
}

#[test]
fn twelve_pm_stays_twelve() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*12#00#PM#");
    assert_eq!(
        entry.take_commit(),
        Some(CommitRequest {
            hour: 12,
            minute: 0
        })
    );
}

#[test]
fn twelve_am_commits_zero_hours() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*12#45#AM#");
    assert_eq!(
        entry.take_commit(),
        Some(CommitRequest {
            hour: 0,
            minute: 45
        })
    );
}

#[test]
fn full_entry_sequence_commits_and_returns_to_normal() {
    // Full happy path: * 0 1 # 3 0 # P M # from Normal mode.
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*01#30#PM#");
    assert_eq!(entry.field(), EntryField::Commit);
    assert_eq!(
        entry.take_commit(),
        Some(CommitRequest {
            hour: 13,
            minute: 30
        })
    );
    assert_eq!(entry.mode(), OperatingMode::Normal);
    assert_eq!(entry.field(), EntryField::Hour);
    assert_eq!(entry.pending().slots(), [BLANK_SLOT; 2]);
    // The commit is handed out exactly once.
    assert_eq!(entry.take_commit(), None);
}

#[test]
fn take_commit_is_none_mid_entry() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*01#30#");
    assert_eq!(entry.take_commit(), None);
}

#[test]
fn error_mode_ignores_every_key() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*13#");
    assert_eq!(entry.mode(), OperatingMode::Error);
    for key in ['*', 'D', '#', '5', 'A'] {
        assert!(!entry.handle_key(key), "key {key}");
    }
    assert_eq!(entry.mode(), OperatingMode::Error);
    assert_eq!(entry.field(), EntryField::Hour);
    assert_eq!(entry.pending().slots(), [BLANK_SLOT; 2]);
    assert_eq!(entry.take_commit(), None);
}

#[test]
fn clear_error_steps_down_to_set_on_the_same_field() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*10#60#");
    assert_eq!(entry.mode(), OperatingMode::Error);
    entry.clear_error();
    assert_eq!(entry.mode(), OperatingMode::Set);
    assert_eq!(entry.field(), EntryField::Minute);
    assert_eq!(entry.pending().slots(), [BLANK_SLOT; 2]);
}

#[test]
fn clear_error_outside_error_mode_is_a_no_op() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*1");
    entry.clear_error();
    assert_eq!(entry.mode(), OperatingMode::Set);
    assert_eq!(entry.pending().slots(), ['1', BLANK_SLOT]);
}

#[test]
fn retry_after_error_succeeds() {
    let mut entry = TimeEntry::new();
    type_keys(&mut entry, "*13#");
    entry.clear_error();
    type_keys(&mut entry, "11#30#AM#");
    assert_eq!(
        entry.take_commit(),
        Some(CommitRequest {
            hour: 11,
            minute: 30
        })
    );
}
