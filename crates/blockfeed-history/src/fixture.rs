use blockfeed_types::{LedgerRow, OperationRow, TransactionRow};
use serde::{Deserialize, Serialize};

/// Flat history row sets for seeding an
/// [`InMemoryHistory`](crate::InMemoryHistory).
///
/// Row order in the fixture is the order the backend serves, subject to the
/// backend's own sort keys.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryFixture {
    #[serde(default)]
    pub ledgers: Vec<LedgerRow>,
    #[serde(default)]
    pub transactions: Vec<TransactionRow>,
    #[serde(default)]
    pub operations: Vec<OperationRow>,
    /// Pins the retained-history boundary; when absent it is derived from
    /// the oldest ledger present.
    #[serde(default)]
    pub oldest_retained: Option<i32>,
}

impl HistoryFixture {
    /// Parse a fixture from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
