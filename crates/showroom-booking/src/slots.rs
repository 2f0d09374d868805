// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business-hours slot generation and occupancy filtering.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use showroom_core::EventSpan;

/// Generate every candidate slot start for a day.
///
/// Slots run from `open_hour` and step by `slot_minutes`; a slot may start
/// any time strictly before `close_hour`.
pub fn generate_slots(
    date: NaiveDate,
    open_hour: u32,
    close_hour: u32,
    slot_minutes: u32,
) -> Vec<NaiveDateTime> {
    let Some(open) = date.and_hms_opt(open_hour, 0, 0) else {
        return Vec::new();
    };
    let close = match date.and_hms_opt(close_hour, 0, 0) {
        Some(c) => c,
        // close_hour == 24 runs to midnight of the next day.
        None => match date.succ_opt().and_then(|d| d.and_hms_opt(0, 0, 0)) {
            Some(c) => c,
            None => return Vec::new(),
        },
    };

    let step = Duration::minutes(i64::from(slot_minutes.max(1)));
    let mut slots = Vec::new();
    let mut current = open;
    while current < close {
        slots.push(current);
        current = current + step;
    }
    slots
}

/// Whether a candidate slot collides with an existing event.
///
/// Touching boundaries are NOT overlaps: back-to-back slots are allowed.
pub fn overlaps(slot_start: NaiveDateTime, slot_end: NaiveDateTime, event: &EventSpan) -> bool {
    slot_start < event.end && slot_end > event.start
}

/// Filter candidate slot starts down to those free of every event.
pub fn available_slots(
    candidates: &[NaiveDateTime],
    slot_minutes: u32,
    events: &[EventSpan],
) -> Vec<NaiveDateTime> {
    let span = Duration::minutes(i64::from(slot_minutes));
    candidates
        .iter()
        .copied()
        .filter(|&start| {
            let end = start + span;
            !events.iter().any(|event| overlaps(start, end, event))
        })
        .collect()
}
