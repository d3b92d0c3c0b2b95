use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ledger header row from the history store.
///
/// `sequence` is unique and monotonically increasing; it is the primary
/// ordering key for everything downstream. `successful_transaction_count`
/// and `failed_transaction_count` are absent for rows ingested before the
/// store tracked them separately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub id: i64,
    pub sequence: i32,
    pub hash: String,
    pub prev_hash: Option<String>,
    pub transaction_count: i32,
    pub successful_transaction_count: Option<i32>,
    pub failed_transaction_count: Option<i32>,
    pub operation_count: i32,
    pub closed_at: DateTime<Utc>,
    /// Total native supply at close, in stroops.
    pub total_coins: i64,
    /// Accumulated fee pool at close, in stroops.
    pub fee_pool: i64,
    pub base_fee: i32,
    pub base_reserve: i32,
    pub max_tx_set_size: i32,
    pub protocol_version: i32,
    pub header_xdr: Option<String>,
}

impl LedgerRow {
    /// Opaque, order-preserving pagination cursor for this row.
    pub fn paging_token(&self) -> String {
        self.id.to_string()
    }
}

/// One transaction row from the history store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: i64,
    pub hash: String,
    /// Sequence of the ledger that included this transaction.
    pub ledger_sequence: i32,
    pub account: String,
    pub account_sequence: String,
    pub fee_charged: i32,
    pub operation_count: i32,
    pub envelope_xdr: String,
    pub result_xdr: String,
    pub result_meta_xdr: String,
    pub fee_meta_xdr: String,
    pub memo_type: String,
    /// Comma-joined signature summary, as stored.
    pub signatures: String,
}

impl TransactionRow {
    /// Opaque, order-preserving pagination cursor for this row.
    pub fn paging_token(&self) -> String {
        self.id.to_string()
    }
}

/// One operation row from the history store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationRow {
    pub id: i64,
    /// Id of the transaction that carried this operation.
    pub transaction_id: i64,
    /// Ordinal position within the owning transaction.
    pub application_order: i32,
    pub type_code: i32,
    /// Type-specific detail blob, JSON as stored text.
    pub details: String,
    /// Empty when the operation did not name an explicit source; assembly
    /// defaults it to the owning transaction's source account.
    pub source_account: String,
}
