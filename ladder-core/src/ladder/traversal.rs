//! Following a vertical from the top of the ladder to the bottom.

use super::{Ladder, RungRow};
use crate::domain::ValidationError;

/// Final vertical reached from `start` after applying every row in order.
///
/// Pure: no randomness is consumed here, so the same ladder and start always
/// land on the same index after exactly `height` steps.
pub fn resolve(ladder: &Ladder, start: usize) -> Result<usize, ValidationError> {
    if start > ladder.width() {
        return Err(ValidationError::StartOutOfRange {
            start,
            width: ladder.width(),
        });
    }
    Ok(descend(ladder, start))
}

pub(crate) fn descend(ladder: &Ladder, start: usize) -> usize {
    ladder
        .rows()
        .iter()
        .fold(start, |position, row| step(row, position))
}

/// Move across at most one rung. A rung on the left wins; the row invariant
/// guarantees there is never a rung on both sides.
fn step(row: &RungRow, position: usize) -> usize {
    if position > 0 && row.has_rung(position - 1) {
        position - 1
    } else if row.has_rung(position) {
        position + 1
    } else {
        position
    }
}
