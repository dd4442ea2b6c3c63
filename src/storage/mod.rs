pub mod json_backend;

use crate::{errors::Result, ledger::Ledger};

/// Abstraction over persistence backends capable of storing the ledger
/// snapshot. Persistence is always a full overwrite of one blob, never an
/// incremental patch.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &Ledger) -> Result<()>;
    /// Returns `None` when no snapshot has been written yet; the caller
    /// decides what an empty store starts from.
    fn load(&self) -> Result<Option<Ledger>>;
}

pub use json_backend::JsonStore;
