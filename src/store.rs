use chrono::NaiveDate;

use crate::{
    errors::Result,
    ledger::{seed, Category, EntryKind, Ledger, Transaction},
    storage::StorageBackend,
};

/// Owns the authoritative in-memory ledger and its storage backend. Loaded
/// once at startup; every mutation writes the full snapshot back before
/// returning, so the persisted state never lags the in-memory one.
pub struct Store {
    ledger: Ledger,
    backend: Box<dyn StorageBackend>,
}

impl Store {
    /// Loads the persisted snapshot, falling back to the fixed starter
    /// records when none exists yet.
    pub fn open(backend: Box<dyn StorageBackend>) -> Result<Self> {
        let ledger = match backend.load()? {
            Some(ledger) => {
                tracing::info!(entries = ledger.len(), "loaded ledger snapshot");
                ledger
            }
            None => {
                tracing::info!("no snapshot found, starting from seed data");
                seed::starter_ledger()
            }
        };
        Ok(Self { ledger, backend })
    }

    /// Read-only view for derived queries (totals, filters, breakdown,
    /// monthly slices).
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Records a new entry and persists. Validation failures leave both the
    /// in-memory ledger and the snapshot untouched.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        category: Category,
        date: NaiveDate,
        description: Option<String>,
    ) -> Result<u64> {
        let id = self
            .ledger
            .add(title, amount, kind, category, date, description)?;
        self.persist()?;
        Ok(id)
    }

    /// Deletes by id and persists. Missing ids are a no-op; the caller is
    /// responsible for confirming destructive intent first.
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        let removed = self.ledger.remove(id);
        self.persist()?;
        Ok(removed)
    }

    /// Merges a validated import batch in front of the sequence and
    /// persists. Returns the number of merged records.
    pub fn import(&mut self, batch: Vec<Transaction>) -> Result<usize> {
        let count = batch.len();
        self.ledger.merge_imported(batch);
        self.persist()?;
        Ok(count)
    }

    fn persist(&self) -> Result<()> {
        self.backend.save(&self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStore;
    use tempfile::TempDir;

    fn open_in(temp: &TempDir) -> Store {
        let backend = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        Store::open(Box::new(backend)).expect("open store")
    }

    #[test]
    fn open_falls_back_to_seed_when_storage_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = open_in(&temp);
        assert_eq!(store.ledger().len(), 5);
    }

    #[test]
    fn mutations_survive_a_reopen() {
        let temp = TempDir::new().unwrap();
        let id = {
            let mut store = open_in(&temp);
            store
                .add(
                    "Lunch",
                    12.5,
                    EntryKind::Expense,
                    Category::Food,
                    NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
                    None,
                )
                .expect("add entry")
        };
        let reopened = open_in(&temp);
        assert_eq!(reopened.ledger().len(), 6);
        assert_eq!(reopened.ledger().entries()[0].id, id);
        assert_eq!(reopened.ledger().entries()[0].title, "Lunch");
    }

    #[test]
    fn failed_add_does_not_touch_the_snapshot() {
        let temp = TempDir::new().unwrap();
        let mut store = open_in(&temp);
        let before = store.ledger().clone();
        assert!(store
            .add(
                "Broken",
                -3.0,
                EntryKind::Expense,
                Category::Other,
                NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
                None,
            )
            .is_err());
        assert_eq!(store.ledger(), &before);
    }
}
