use std::collections::HashSet;
use std::sync::RwLock;

use blockfeed_types::{LedgerRow, OperationRow, TransactionRow};

use crate::error::HistoryError;
use crate::fixture::HistoryFixture;
use crate::traits::HistoryReader;

/// In-memory history backend for tests, local demos, and embedding.
///
/// Serves rows in ascending key order: ledgers by sequence, transactions
/// by id, operations by id. Operation ids encode their position, so
/// ascending id keeps operations grouped by transaction in application
/// order.
pub struct InMemoryHistory {
    inner: RwLock<HistoryState>,
}

#[derive(Default)]
struct HistoryState {
    ledgers: Vec<LedgerRow>,
    transactions: Vec<TransactionRow>,
    operations: Vec<OperationRow>,
    oldest_retained: Option<i32>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HistoryState::default()),
        }
    }

    /// Build a backend pre-loaded with the fixture's row sets.
    pub fn from_fixture(fixture: HistoryFixture) -> Self {
        Self {
            inner: RwLock::new(HistoryState {
                ledgers: fixture.ledgers,
                transactions: fixture.transactions,
                operations: fixture.operations,
                oldest_retained: fixture.oldest_retained,
            }),
        }
    }

    pub fn push_ledger(&self, row: LedgerRow) -> Result<(), HistoryError> {
        self.write()?.ledgers.push(row);
        Ok(())
    }

    pub fn push_transaction(&self, row: TransactionRow) -> Result<(), HistoryError> {
        self.write()?.transactions.push(row);
        Ok(())
    }

    pub fn push_operation(&self, row: OperationRow) -> Result<(), HistoryError> {
        self.write()?.operations.push(row);
        Ok(())
    }

    /// Pin the retained-history boundary, simulating pruned early history.
    pub fn set_oldest_retained(&self, sequence: i32) -> Result<(), HistoryError> {
        self.write()?.oldest_retained = Some(sequence);
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HistoryState>, HistoryError> {
        self.inner
            .read()
            .map_err(|_| HistoryError::StoreUnavailable("history read lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HistoryState>, HistoryError> {
        self.inner
            .write()
            .map_err(|_| HistoryError::StoreUnavailable("history write lock poisoned".into()))
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryReader for InMemoryHistory {
    fn oldest_retained_sequence(&self) -> Result<i32, HistoryError> {
        let state = self.read()?;
        if let Some(pinned) = state.oldest_retained {
            return Ok(pinned);
        }
        Ok(state
            .ledgers
            .iter()
            .map(|l| l.sequence)
            .min()
            .unwrap_or(1))
    }

    fn ledgers_in_range(&self, start: i32, end: i32) -> Result<Vec<LedgerRow>, HistoryError> {
        let state = self.read()?;
        let mut rows: Vec<LedgerRow> = state
            .ledgers
            .iter()
            .filter(|l| l.sequence >= start && l.sequence <= end)
            .cloned()
            .collect();
        rows.sort_by_key(|l| l.sequence);
        Ok(rows)
    }

    fn transactions_in_range(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<TransactionRow>, HistoryError> {
        let state = self.read()?;
        let mut rows: Vec<TransactionRow> = state
            .transactions
            .iter()
            .filter(|t| t.ledger_sequence >= start && t.ledger_sequence <= end)
            .cloned()
            .collect();
        rows.sort_by_key(|t| t.id);
        Ok(rows)
    }

    fn operations_in_range(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<OperationRow>, HistoryError> {
        let state = self.read()?;
        let in_range: HashSet<i64> = state
            .transactions
            .iter()
            .filter(|t| t.ledger_sequence >= start && t.ledger_sequence <= end)
            .map(|t| t.id)
            .collect();
        let mut rows: Vec<OperationRow> = state
            .operations
            .iter()
            .filter(|o| in_range.contains(&o.transaction_id))
            .cloned()
            .collect();
        rows.sort_by_key(|o| o.id);
        Ok(rows)
    }
}
