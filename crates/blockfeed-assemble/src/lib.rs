//! Hierarchical assembly for blockfeed.
//!
//! Turns the three flat row sets loaded from the history store into one
//! nested document per ledger (ledger → transactions → operations). The
//! transform is total and pure: it performs no I/O, never fails, drops
//! children whose parent was not loaded in the same batch, and preserves
//! load order at every level.

pub mod assemble;
pub mod document;
pub mod groups;

pub use assemble::assemble;
pub use document::{
    AssembledLedger, AssembledOperation, AssembledTransaction, BlockData, BlockValue,
};
pub use groups::OrderedGroups;
