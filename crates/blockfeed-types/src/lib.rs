//! Foundation types for blockfeed.
//!
//! This crate provides the flat history-row types delivered by the history
//! store, plus the small value-level helpers the rest of the system needs:
//!
//! - [`LedgerRow`] / [`TransactionRow`] / [`OperationRow`] — one row per
//!   stored entity, in store order
//! - [`operation_type_name`] — numeric operation code to display name
//! - [`display_amount`] — stroop amounts rendered as fixed-point strings
//! - Paging tokens derived from row ids

pub mod amount;
pub mod op_type;
pub mod rows;

pub use amount::{display_amount, STROOPS_PER_UNIT};
pub use op_type::operation_type_name;
pub use rows::{LedgerRow, OperationRow, TransactionRow};
