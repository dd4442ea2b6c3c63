use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded income or expense event. Entries are never edited in place;
/// they are created, listed, and deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        category: Category,
        date: NaiveDate,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            amount,
            kind,
            category,
            date,
            description,
        }
    }

    /// Signed display amount: income counts toward the balance, expense
    /// against it.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

/// Whether an entry adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "income" => Some(EntryKind::Income),
            "expense" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

/// Spending category. The closed set mirrors the entry form; values outside
/// it can still arrive through import or hand-edited storage and are carried
/// verbatim as `Unknown` so they keep summing and rendering with a fallback
/// label and color instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Education,
    Other,
    #[serde(untagged)]
    Unknown(String),
}

/// Neutral color for categories outside the known set.
pub const FALLBACK_COLOR: &str = "#CCCCCC";

impl Category {
    pub const KNOWN: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    /// Parses the lowercase keyword used on the wire and in CLI arguments.
    /// Out-of-set values become `Unknown` rather than an error.
    pub fn from_keyword(value: &str) -> Self {
        match value {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "shopping" => Category::Shopping,
            "entertainment" => Category::Entertainment,
            "bills" => Category::Bills,
            "health" => Category::Health,
            "education" => Category::Education,
            "other" => Category::Other,
            raw => Category::Unknown(raw.to_string()),
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Bills => "bills",
            Category::Health => "health",
            Category::Education => "education",
            Category::Other => "other",
            Category::Unknown(raw) => raw,
        }
    }

    /// Human-facing label shown in lists, reports, and the breakdown legend.
    pub fn display_name(&self) -> &str {
        match self {
            Category::Food => "Food & Dining",
            Category::Transport => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills & Utilities",
            Category::Health => "Health & Medical",
            Category::Education => "Education",
            Category::Other => "Other",
            Category::Unknown(raw) => raw,
        }
    }

    /// Hex color for the category breakdown chart series.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#FF6384",
            Category::Transport => "#36A2EB",
            Category::Shopping => "#FFCE56",
            Category::Entertainment => "#4BC0C0",
            Category::Bills => "#9966FF",
            Category::Health => "#FF9F40",
            Category::Education => "#C9CBCF",
            Category::Other => "#42A5F5",
            Category::Unknown(_) => FALLBACK_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_round_trips_lowercase() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"food\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Food);
    }

    #[test]
    fn out_of_set_category_is_carried_verbatim() {
        let parsed: Category = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(parsed, Category::Unknown("crypto".into()));
        assert_eq!(parsed.display_name(), "crypto");
        assert_eq!(parsed.color(), FALLBACK_COLOR);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"crypto\"");
    }

    #[test]
    fn entry_kind_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&EntryKind::Expense).unwrap(),
            "\"expense\""
        );
        assert_eq!(EntryKind::from_keyword("income"), Some(EntryKind::Income));
        assert_eq!(EntryKind::from_keyword("transfer"), None);
    }

    #[test]
    fn transaction_serializes_with_type_field_and_optional_description() {
        let txn = Transaction::new(
            7,
            "Gas",
            45.0,
            EntryKind::Expense,
            Category::Transport,
            NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            None,
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "expense");
        assert!(value.get("description").is_none());
        assert_eq!(value["date"], "2024-01-14");
    }
}
