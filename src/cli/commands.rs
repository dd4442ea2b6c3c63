use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};
use dialoguer::Confirm;

use crate::{
    errors::{LedgerError, Result},
    interchange,
    ledger::{Category, CategoryFilter, EntryKind, Transaction, TypeFilter},
    report::{parse_month, MonthlyReport},
    store::Store,
};

use super::output;

/// `add <title> <amount> <type> <category> [date] [description]`; the date
/// defaults to today, matching the entry form.
pub fn add(store: &mut Store, args: &[String]) -> Result<()> {
    let (title, amount, kind, category) = match args {
        [title, amount, kind, category, ..] => (title, amount, kind, category),
        _ => {
            return Err(LedgerError::Invalid(
                "usage: add <title> <amount> <income|expense> <category> [YYYY-MM-DD] [description]"
                    .into(),
            ))
        }
    };
    let amount: f64 = amount
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(amount.clone()))?;
    let kind = EntryKind::from_keyword(kind).ok_or_else(|| {
        LedgerError::Invalid(format!("unknown type `{kind}`, expected income or expense"))
    })?;
    let category = Category::from_keyword(category);
    let date = match args.get(4) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| LedgerError::Invalid(format!("invalid date `{raw}`, expected YYYY-MM-DD")))?,
        None => Local::now().date_naive(),
    };
    let description = args.get(5).cloned();

    let id = store.add(title.clone(), amount, kind, category, date, description)?;
    output::success(format!("Transaction added successfully! (id {id})"));
    Ok(())
}

/// `list [type] [category]` with `all` as the sentinel for either position.
pub fn list(store: &Store, args: &[String]) -> Result<()> {
    let kind = match args.first().map(String::as_str) {
        Some(raw) => TypeFilter::from_keyword(raw).ok_or_else(|| {
            LedgerError::Invalid(format!("unknown type filter `{raw}`, expected all, income, or expense"))
        })?,
        None => TypeFilter::All,
    };
    let category = args
        .get(1)
        .map(|raw| CategoryFilter::from_keyword(raw))
        .unwrap_or_default();

    let entries = store.ledger().filtered(kind, &category);
    if entries.is_empty() {
        output::info("No transactions found matching your filters.");
        return Ok(());
    }
    output::section("Transactions");
    for txn in entries {
        print_entry(txn);
    }
    Ok(())
}

fn print_entry(txn: &Transaction) {
    let sign = match txn.kind {
        EntryKind::Income => '+',
        EntryKind::Expense => '-',
    };
    println!(
        "  #{:<4} {}  {sign}${:<10.2} {:<18} {}",
        txn.id,
        txn.date,
        txn.amount,
        txn.category.display_name(),
        txn.title,
    );
    if let Some(notes) = &txn.description {
        println!("        {notes}");
    }
}

/// `summary`: the three dashboard figures.
pub fn summary(store: &Store) {
    let totals = store.ledger().totals();
    output::section("Summary");
    println!("  Balance:  ${:.2}", totals.balance());
    println!("  Income:   ${:.2}", totals.income);
    println!("  Expenses: ${:.2}", totals.expense);
}

/// `breakdown`: per-category expense sums with share and chart color, the
/// series the original handed to its doughnut chart.
pub fn breakdown(store: &Store) {
    let sums = store.ledger().category_breakdown();
    if sums.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    let total: f64 = sums.values().sum();
    output::section("Expenses by category");
    for (category, amount) in &sums {
        let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
        println!(
            "  {:<18} ${:<10.2} {:>5.1}%  {}",
            category.display_name(),
            amount,
            share,
            category.color(),
        );
    }
}

/// `export [path]`: writes the whole ledger as pretty JSON, defaulting to a
/// date-stamped file in the current directory.
pub fn export(store: &Store, args: &[String]) -> Result<()> {
    let path = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(interchange::export_file_name(Local::now().date_naive())));
    interchange::export_to_path(store.ledger(), &path)?;
    output::success(format!("Data exported to {}", path.display()));
    Ok(())
}

/// `import <path>`: all-or-nothing merge of a validated JSON payload.
pub fn import(store: &mut Store, args: &[String]) -> Result<()> {
    let path = args
        .first()
        .map(Path::new)
        .ok_or_else(|| LedgerError::Invalid("usage: import <file.json>".into()))?;
    let batch = interchange::import_from_path(path)?;
    let count = store.import(batch)?;
    output::success(format!("{count} transactions imported successfully!"));
    Ok(())
}

/// `delete <id>`: asks for confirmation first; this is the only gate against
/// accidental loss, there is no undo.
pub fn delete(store: &mut Store, args: &[String]) -> Result<()> {
    let id: u64 = args
        .first()
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| LedgerError::Invalid("usage: delete <id>".into()))?;
    let confirmed = Confirm::new()
        .with_prompt("Are you sure you want to delete this transaction?")
        .default(false)
        .interact()
        .map_err(|err| LedgerError::Invalid(format!("confirmation prompt failed: {err}")))?;
    if !confirmed {
        output::info("Deletion cancelled.");
        return Ok(());
    }
    if store.remove(id)? {
        output::success("Transaction deleted!");
    } else {
        output::warning(format!("No transaction with id {id}."));
    }
    Ok(())
}

/// `report <YYYY-MM>`: writes the fixed-layout text report, or tells the
/// user when the month has no activity (no file is produced then).
pub fn report(store: &Store, args: &[String]) -> Result<()> {
    let (year, month) = args
        .first()
        .and_then(|raw| parse_month(raw))
        .ok_or_else(|| LedgerError::Invalid("usage: report <YYYY-MM>".into()))?;
    match MonthlyReport::build(store.ledger(), year, month) {
        Some(report) => {
            let path = PathBuf::from(report.file_name());
            fs::write(&path, report.render())?;
            output::success(format!(
                "Report for {} written to {}",
                report.label(),
                path.display()
            ));
            Ok(())
        }
        None => {
            output::warning("No transactions found for that month.");
            Ok(())
        }
    }
}
