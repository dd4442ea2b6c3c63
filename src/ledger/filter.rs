use super::transaction::{Category, EntryKind, Transaction};

/// List filter over the entry kind. `All` is the sentinel matching
/// everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EntryKind),
}

impl TypeFilter {
    pub fn from_keyword(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(TypeFilter::All);
        }
        EntryKind::from_keyword(value).map(TypeFilter::Only)
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(kind) => txn.kind == *kind,
        }
    }
}

/// List filter over the category. Unknown keywords still form a valid filter
/// so hand-typed values simply match nothing rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn from_keyword(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from_keyword(value))
        }
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => txn.category == *category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_filter_rejects_unknown_keywords() {
        assert_eq!(TypeFilter::from_keyword("all"), Some(TypeFilter::All));
        assert_eq!(
            TypeFilter::from_keyword("expense"),
            Some(TypeFilter::Only(EntryKind::Expense))
        );
        assert_eq!(TypeFilter::from_keyword("transfer"), None);
    }

    #[test]
    fn category_filter_accepts_any_keyword() {
        assert_eq!(CategoryFilter::from_keyword("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_keyword("food"),
            CategoryFilter::Only(Category::Food)
        );
        assert_eq!(
            CategoryFilter::from_keyword("crypto"),
            CategoryFilter::Only(Category::Unknown("crypto".into()))
        );
    }
}
