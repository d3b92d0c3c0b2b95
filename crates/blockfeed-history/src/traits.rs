use blockfeed_types::{LedgerRow, OperationRow, TransactionRow};

use crate::error::HistoryError;

/// Read boundary over the relational history store.
///
/// All bounds are inclusive ledger sequences. Each load either returns the
/// complete ordered row set for the range or fails; partial results are
/// never surfaced.
pub trait HistoryReader: Send + Sync {
    /// Oldest ledger sequence the store still retains data for.
    fn oldest_retained_sequence(&self) -> Result<i32, HistoryError>;

    /// Ledgers whose sequence lies in `[start, end]`.
    fn ledgers_in_range(&self, start: i32, end: i32) -> Result<Vec<LedgerRow>, HistoryError>;

    /// Transactions whose owning ledger sequence lies in `[start, end]`.
    fn transactions_in_range(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<TransactionRow>, HistoryError>;

    /// Operations whose owning ledger sequence, via their transaction, lies
    /// in `[start, end]`.
    fn operations_in_range(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<OperationRow>, HistoryError>;
}
