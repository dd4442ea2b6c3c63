use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

use super::{
    filter::{CategoryFilter, TypeFilter},
    transaction::{Category, EntryKind, Transaction},
};

/// The full ordered collection of transactions, newest first. Serializes as a
/// bare JSON array so the persisted snapshot, the export payload, and the
/// import payload all share one shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

/// Aggregate sums over a set of entries, recomputed from scratch on each
/// request so nothing can drift.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn of<'a>(entries: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut totals = Totals::default();
        for txn in entries {
            match txn.kind {
                EntryKind::Income => totals.income += txn.amount,
                EntryKind::Expense => totals.expense += txn.amount,
            }
        }
        totals
    }

    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Transaction>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next free id: one past the highest id currently present. Ids stay
    /// unique and ordered by creation even after imports reassigned theirs.
    fn next_id(&self) -> u64 {
        self.entries.iter().map(|txn| txn.id).max().unwrap_or(0) + 1
    }

    /// Validates and records a new entry at the front of the sequence,
    /// returning its assigned id. Amount must be a finite positive number and
    /// the title must be non-empty; nothing is mutated on rejection.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        category: Category,
        date: NaiveDate,
        description: Option<String>,
    ) -> Result<u64> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LedgerError::EmptyTitle);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }
        let id = self.next_id();
        let description = description.filter(|text| !text.trim().is_empty());
        self.entries.insert(
            0,
            Transaction::new(id, title, amount, kind, category, date, description),
        );
        Ok(id)
    }

    /// Removes the entry with the given id. A missing id is a no-op, not an
    /// error; returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|txn| txn.id != id);
        self.entries.len() != before
    }

    /// Merges an already-validated import batch in front of the existing
    /// sequence, preserving batch order. Ids carried in the source file are
    /// replaced with fresh unique ones; every other field is kept as-is.
    pub fn merge_imported(&mut self, mut batch: Vec<Transaction>) {
        let base = self.next_id();
        for (offset, txn) in batch.iter_mut().enumerate() {
            txn.id = base + offset as u64;
        }
        self.entries.splice(0..0, batch);
    }

    /// Income and expense sums plus their difference, over the whole ledger.
    pub fn totals(&self) -> Totals {
        Totals::of(&self.entries)
    }

    /// The subsequence matching both filters, in store order. An empty result
    /// is a valid state, not an error.
    pub fn filtered(&self, kind: TypeFilter, category: &CategoryFilter) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|txn| kind.matches(txn) && category.matches(txn))
            .collect()
    }

    /// Summed expense amounts per category, expenses only. Categories absent
    /// from the data are absent from the map; out-of-set categories sum under
    /// their own label.
    pub fn category_breakdown(&self) -> BTreeMap<Category, f64> {
        let mut sums = BTreeMap::new();
        for txn in &self.entries {
            if txn.kind == EntryKind::Expense {
                *sums.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
            }
        }
        sums
    }

    /// Entries whose date falls in the given calendar month, in store order.
    /// Matching is numeric on (year, month), never on formatted labels.
    pub fn in_month(&self, year: i32, month: u32) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|txn| txn.date.year() == year && txn.date.month() == month)
            .collect()
    }
}
