use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root response payload: one record per assembled ledger, in load order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockData {
    pub records: Vec<BlockValue>,
}

/// Envelope around one assembled ledger, matching the message-produce
/// record shape the kafka proxy expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockValue {
    pub value: AssembledLedger,
}

/// One fully assembled ledger with its transactions attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssembledLedger {
    pub id: String,
    pub paging_token: String,
    pub hash: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub prev_hash: String,
    pub sequence: i32,
    pub transaction_count: i32,
    pub successful_transaction_count: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub failed_transaction_count: Option<i32>,
    pub operation_count: i32,
    pub closed_at: DateTime<Utc>,
    pub total_coins: String,
    pub fee_pool: String,
    pub base_fee_in_stroops: i32,
    pub base_reserve_in_stroops: i32,
    pub max_tx_set_size: i32,
    pub protocol_version: i32,
    pub header_xdr: String,
    pub transactions: Vec<AssembledTransaction>,
}

/// One assembled transaction with its operations attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssembledTransaction {
    pub id: String,
    pub paging_token: String,
    pub hash: String,
    pub ledger: i32,
    pub source_account: String,
    pub source_account_sequence: String,
    pub fee_paid: i32,
    pub operation_count: i32,
    pub envelope_xdr: String,
    pub result_xdr: String,
    pub result_meta_xdr: String,
    pub fee_meta_xdr: String,
    pub memo_type: String,
    pub signatures: String,
    pub operations: Vec<AssembledOperation>,
}

/// One assembled operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssembledOperation {
    pub operation_id: String,
    pub transaction_id: String,
    pub application_order: i32,
    #[serde(rename = "type")]
    pub type_name: String,
    pub detail: String,
    pub source_account: String,
}
