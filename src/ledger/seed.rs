use chrono::NaiveDate;

use super::{
    ledger::Ledger,
    transaction::{Category, EntryKind, Transaction},
};

/// Fixed starter records used when no snapshot exists yet, so a first run
/// shows a populated dashboard instead of an empty one.
pub fn starter_ledger() -> Ledger {
    let entry = |id, title: &str, amount, kind, category, (y, m, d), note: &str| {
        Transaction::new(
            id,
            title,
            amount,
            kind,
            category,
            NaiveDate::from_ymd_opt(y, m, d).expect("static seed date"),
            Some(note.to_string()),
        )
    };
    Ledger::from_entries(vec![
        entry(
            1,
            "Groceries",
            85.50,
            EntryKind::Expense,
            Category::Food,
            (2024, 1, 15),
            "Weekly grocery shopping",
        ),
        entry(
            2,
            "Salary",
            2500.00,
            EntryKind::Income,
            Category::Other,
            (2024, 1, 1),
            "Monthly salary",
        ),
        entry(
            3,
            "Gas",
            45.00,
            EntryKind::Expense,
            Category::Transport,
            (2024, 1, 14),
            "Car fuel",
        ),
        entry(
            4,
            "Netflix",
            15.99,
            EntryKind::Expense,
            Category::Entertainment,
            (2024, 1, 10),
            "Monthly subscription",
        ),
        entry(
            5,
            "Electric Bill",
            120.75,
            EntryKind::Expense,
            Category::Bills,
            (2024, 1, 5),
            "December bill",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_entries_with_known_totals() {
        let ledger = starter_ledger();
        assert_eq!(ledger.len(), 5);
        let totals = ledger.totals();
        assert!((totals.income - 2500.00).abs() < 1e-9);
        assert!((totals.expense - 267.24).abs() < 1e-9);
    }
}
