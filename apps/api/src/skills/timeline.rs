//! Proficiency timeline primitives.
//!
//! Samples arrive in whatever order the user entered them. Ordering rules:
//! - chronological by `date`
//! - on equal dates, input order is preserved, so the *last* sample entered
//!   for a given day is the one that counts as latest
//!   and the *first* one counts as earliest

use crate::models::ProficiencyEntry;

/// Returns the samples sorted ascending by date. Stable on equal dates.
pub fn sorted_timeline(entries: &[ProficiencyEntry]) -> Vec<ProficiencyEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Chronologically latest sample; last in input order on ties.
pub fn latest_entry(entries: &[ProficiencyEntry]) -> Option<&ProficiencyEntry> {
    // max_by_key yields the last of several equal maxima
    entries.iter().max_by_key(|e| e.date)
}

/// Chronologically earliest sample; first in input order on ties.
pub fn earliest_entry(entries: &[ProficiencyEntry]) -> Option<&ProficiencyEntry> {
    // min_by_key yields the first of several equal minima
    entries.iter().min_by_key(|e| e.date)
}

/// Level of the latest sample, `None` when the timeline is empty.
pub fn current_level(entries: &[ProficiencyEntry]) -> Option<u8> {
    latest_entry(entries).map(|e| e.level)
}

/// Latest level minus earliest level. Negative when a skill regressed,
/// zero for an empty or single-sample timeline.
pub fn growth(entries: &[ProficiencyEntry]) -> i16 {
    match (earliest_entry(entries), latest_entry(entries)) {
        (Some(first), Some(last)) => i16::from(last.level) - i16::from(first.level),
        _ => 0,
    }
}
