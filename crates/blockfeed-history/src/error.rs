/// Errors produced by history reads and range validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("ledger {start} is before the oldest retained ledger {oldest}")]
    BeforeRetainedHistory { start: i32, oldest: i32 },

    #[error("invalid ledger range: start={start}, end={end}")]
    InvalidRange { start: i32, end: i32 },

    #[error("history store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("history query failed: {0}")]
    QueryFailed(String),
}
