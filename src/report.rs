//! Plain-text monthly report generation.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::ledger::{Ledger, Totals, Transaction};

/// One calendar month's slice of the ledger plus its totals. Built only when
/// at least one entry matches; a month with no activity produces no report.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub entries: Vec<Transaction>,
    pub totals: Totals,
}

/// Parses a `YYYY-MM` month argument.
pub fn parse_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

impl MonthlyReport {
    /// Collects the entries dated in the given month, in store order.
    /// Returns `None` when nothing matches.
    pub fn build(ledger: &Ledger, year: i32, month: u32) -> Option<Self> {
        let entries: Vec<Transaction> =
            ledger.in_month(year, month).into_iter().cloned().collect();
        if entries.is_empty() {
            return None;
        }
        let totals = Totals::of(&entries);
        Some(Self {
            year,
            month,
            entries,
            totals,
        })
    }

    /// Human month label, e.g. `January 2024`.
    pub fn label(&self) -> String {
        self.first_of_month().format("%B %Y").to_string()
    }

    /// Download name for the rendered report, e.g. `report-January-2024.txt`.
    pub fn file_name(&self) -> String {
        format!("report-{}.txt", self.first_of_month().format("%B-%Y"))
    }

    fn first_of_month(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month validated on construction")
    }

    /// Renders the fixed report layout: header, summary totals, then one
    /// block per transaction in store order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let header = format!("Monthly Report - {}", self.label());
        let _ = writeln!(out, "{header}");
        let _ = writeln!(out, "{}", "=".repeat(header.len()));
        let _ = writeln!(out);
        let _ = writeln!(out, "Summary");
        let _ = writeln!(out, "  Income:   ${:.2}", self.totals.income);
        let _ = writeln!(out, "  Expenses: ${:.2}", self.totals.expense);
        let _ = writeln!(out, "  Net:      ${:.2}", self.totals.balance());
        let _ = writeln!(out);
        let _ = writeln!(out, "Transactions ({})", self.entries.len());
        for (index, txn) in self.entries.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}. {}  {}", index + 1, txn.date, txn.title);
            let _ = writeln!(out, "   Type:     {}", txn.kind.as_str());
            let _ = writeln!(out, "   Category: {}", txn.category.display_name());
            let _ = writeln!(out, "   Amount:   ${:.2}", txn.amount);
            if let Some(notes) = &txn.description {
                let _ = writeln!(out, "   Notes:    {notes}");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed;

    #[test]
    fn month_with_no_entries_builds_nothing() {
        let ledger = seed::starter_ledger();
        assert!(MonthlyReport::build(&ledger, 2024, 2).is_none());
        assert!(MonthlyReport::build(&ledger, 2023, 1).is_none());
    }

    #[test]
    fn report_covers_the_month_in_store_order() {
        let ledger = seed::starter_ledger();
        let report = MonthlyReport::build(&ledger, 2024, 1).expect("january has entries");
        assert_eq!(report.entries.len(), 5);
        assert_eq!(report.entries[0].title, "Groceries");
        assert_eq!(report.label(), "January 2024");
        assert_eq!(report.file_name(), "report-January-2024.txt");
    }

    #[test]
    fn rendered_layout_has_header_totals_and_blocks() {
        let ledger = seed::starter_ledger();
        let report = MonthlyReport::build(&ledger, 2024, 1).unwrap();
        let text = report.render();
        assert!(text.starts_with("Monthly Report - January 2024\n"));
        assert!(text.contains("  Income:   $2500.00"));
        assert!(text.contains("  Expenses: $267.24"));
        assert!(text.contains("  Net:      $2232.76"));
        assert!(text.contains("1. 2024-01-15  Groceries"));
        assert!(text.contains("   Category: Food & Dining"));
        assert!(text.contains("   Notes:    Weekly grocery shopping"));
    }

    #[test]
    fn parse_month_accepts_iso_pairs_only() {
        assert_eq!(parse_month("2024-01"), Some((2024, 1)));
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(parse_month("January"), None);
        assert_eq!(parse_month("2024"), None);
    }
}
