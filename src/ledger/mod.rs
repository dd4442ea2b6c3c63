//! Ledger domain models, derived queries, and helpers.

pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod seed;
pub mod transaction;

pub use filter::{CategoryFilter, TypeFilter};
pub use ledger::{Ledger, Totals};
pub use transaction::{Category, EntryKind, Transaction, FALLBACK_COLOR};
