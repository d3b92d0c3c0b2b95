//! History-store read boundary for blockfeed.
//!
//! This crate defines the narrow interface the export pipeline consumes:
//!
//! - [`HistoryReader`] — the three inclusive range loads plus the oldest
//!   retained sequence
//! - [`validate_range`] — requested range vs. retained-history boundary
//! - [`InMemoryHistory`] — backend for tests, local demos, and embedding
//! - [`HistoryFixture`] — JSON row sets for seeding the in-memory backend
//!
//! Row order is defined by the store and preserved by every caller; nothing
//! downstream re-sorts.

pub mod error;
pub mod fixture;
pub mod memory;
pub mod traits;
pub mod validate;

pub use error::HistoryError;
pub use fixture::HistoryFixture;
pub use memory::InMemoryHistory;
pub use traits::HistoryReader;
pub use validate::validate_range;
