//! Cursor reconciliation across feed refreshes.
//!
//! A refresh may reorder, drop, or renumber rows. The focused row is
//! captured by value before the table is overwritten and rescored against
//! the new rows afterwards, so the cursor follows the bus the rider was
//! watching rather than a slot number.

use heapless::String;
use log::debug;

use crate::feed::{DEST_BYTES, FeedSnapshot, LINE_BYTES};

/// Added to a candidate's score when its line differs from the captured
/// one. ETA deltas stay below this, so same-line candidates always win.
pub const LINE_MISMATCH_PENALTY: i32 = 100;

/// Focused row captured by value before a refresh overwrites the table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FocusRef {
    line: String<LINE_BYTES>,
    destination: String<DEST_BYTES>,
    eta_minutes: i16,
}

/// Captures the row at `linear_index`, or `None` when the cursor does not
/// reference a live row.
pub fn capture(snapshot: &FeedSnapshot, linear_index: usize) -> Option<FocusRef> {
    let row = snapshot.row(linear_index)?;
    Some(FocusRef {
        line: row.line.clone(),
        destination: row.destination.clone(),
        eta_minutes: row.eta_minutes,
    })
}

/// Finds the row in the refreshed table that best continues the captured
/// focus: exact destination match, scored by ETA distance plus a penalty
/// for a different line. Lowest score wins; ties go to the lowest index.
pub fn rescore(prev: &FocusRef, snapshot: &FeedSnapshot) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for (index, row) in snapshot.rows().enumerate() {
        if row.destination.as_str() != prev.destination.as_str() {
            continue;
        }

        let mut score = (i32::from(row.eta_minutes) - i32::from(prev.eta_minutes)).abs();
        if row.line.as_str() != prev.line.as_str() {
            score += LINE_MISMATCH_PENALTY;
        }

        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((index, score));
        }
    }

    match best {
        Some((index, score)) => {
            debug!("focus: matched row={} score={}", index, score);
            Some(index)
        }
        None => {
            debug!("focus: no match, cursor resets");
            None
        }
    }
}
