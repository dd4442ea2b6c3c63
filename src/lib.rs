#![doc(test(attr(deny(warnings))))]

//! Expense Core holds the authoritative transaction ledger for a personal
//! finance tracker: recording income and expense entries, deriving totals and
//! category breakdowns, filtering, monthly reporting, and JSON import/export,
//! all persisted as a single snapshot on disk.

pub mod cli;
pub mod errors;
pub mod interchange;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
