use std::collections::HashMap;

use blockfeed_types::{
    display_amount, operation_type_name, LedgerRow, OperationRow, TransactionRow,
};

use crate::document::{
    AssembledLedger, AssembledOperation, AssembledTransaction, BlockData, BlockValue,
};
use crate::groups::OrderedGroups;

/// Assemble flat history rows into one nested document per ledger.
///
/// Total and pure. Rows whose parent is absent from the same batch are
/// dropped, absent children become empty lists, and input order is the
/// output order at every level. Operations without an explicit source
/// account take their owning transaction's source account.
pub fn assemble(
    ledgers: &[LedgerRow],
    transactions: &[TransactionRow],
    operations: &[OperationRow],
) -> BlockData {
    let transaction_sources: HashMap<i64, &str> = transactions
        .iter()
        .map(|tx| (tx.id, tx.account.as_str()))
        .collect();

    let mut operations_by_transaction: OrderedGroups<i64, AssembledOperation> =
        OrderedGroups::new();
    for op in operations {
        let source_account = if op.source_account.is_empty() {
            transaction_sources
                .get(&op.transaction_id)
                .copied()
                .unwrap_or_default()
                .to_string()
        } else {
            op.source_account.clone()
        };
        operations_by_transaction.push(
            op.transaction_id,
            AssembledOperation {
                operation_id: op.id.to_string(),
                transaction_id: op.transaction_id.to_string(),
                application_order: op.application_order,
                type_name: operation_type_name(op.type_code).to_string(),
                detail: op.details.clone(),
                source_account,
            },
        );
    }

    let mut transactions_by_ledger: OrderedGroups<i32, AssembledTransaction> =
        OrderedGroups::new();
    for tx in transactions {
        transactions_by_ledger.push(
            tx.ledger_sequence,
            AssembledTransaction {
                id: tx.id.to_string(),
                paging_token: tx.paging_token(),
                hash: tx.hash.clone(),
                ledger: tx.ledger_sequence,
                source_account: tx.account.clone(),
                source_account_sequence: tx.account_sequence.clone(),
                fee_paid: tx.fee_charged,
                operation_count: tx.operation_count,
                envelope_xdr: tx.envelope_xdr.clone(),
                result_xdr: tx.result_xdr.clone(),
                result_meta_xdr: tx.result_meta_xdr.clone(),
                fee_meta_xdr: tx.fee_meta_xdr.clone(),
                memo_type: tx.memo_type.clone(),
                signatures: tx.signatures.clone(),
                operations: operations_by_transaction.take(&tx.id),
            },
        );
    }

    let mut records = Vec::with_capacity(ledgers.len());
    for ledger in ledgers {
        records.push(BlockValue {
            value: AssembledLedger {
                id: ledger.id.to_string(),
                paging_token: ledger.paging_token(),
                hash: ledger.hash.clone(),
                prev_hash: ledger.prev_hash.clone().unwrap_or_default(),
                sequence: ledger.sequence,
                transaction_count: ledger.transaction_count,
                successful_transaction_count: ledger
                    .successful_transaction_count
                    .unwrap_or(ledger.transaction_count),
                failed_transaction_count: ledger.failed_transaction_count,
                operation_count: ledger.operation_count,
                closed_at: ledger.closed_at,
                total_coins: display_amount(ledger.total_coins),
                fee_pool: display_amount(ledger.fee_pool),
                base_fee_in_stroops: ledger.base_fee,
                base_reserve_in_stroops: ledger.base_reserve,
                max_tx_set_size: ledger.max_tx_set_size,
                protocol_version: ledger.protocol_version,
                header_xdr: ledger.header_xdr.clone().unwrap_or_default(),
                transactions: transactions_by_ledger.take(&ledger.sequence),
            },
        });
    }

    BlockData { records }
}
