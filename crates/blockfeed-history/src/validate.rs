use crate::error::HistoryError;

/// Check a requested `[start, end]` ledger range against the oldest
/// retained sequence.
///
/// Both bounds must be supplied, positive, and ordered. A `start` before
/// the retained boundary fails with
/// [`HistoryError::BeforeRetainedHistory`]. An `end` past the newest
/// available ledger is not an error; an empty load is the acceptable
/// outcome. Performs no loads and has no side effects.
pub fn validate_range(start: i32, end: i32, oldest_retained: i32) -> Result<(), HistoryError> {
    if start <= 0 || end <= 0 || start > end {
        return Err(HistoryError::InvalidRange { start, end });
    }
    if start < oldest_retained {
        return Err(HistoryError::BeforeRetainedHistory {
            start,
            oldest: oldest_retained,
        });
    }
    Ok(())
}
