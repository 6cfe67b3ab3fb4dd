//! Client-held snapshot of wallets and budgets.
//!
//! The coordinator never fetches on its own: the caller builds a snapshot
//! from prior `list()` calls and passes it in, so staleness is visible in the
//! interface instead of hidden behind an implicit read.

use api_types::{budget::Budget, wallet::Wallet};

#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    wallets: Vec<Wallet>,
    budgets: Vec<Budget>,
}

impl Snapshot {
    pub fn new(wallets: Vec<Wallet>, budgets: Vec<Budget>) -> Self {
        Self { wallets, budgets }
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn wallet(&self, id: i64) -> Option<&Wallet> {
        self.wallets.iter().find(|wallet| wallet.id == id)
    }

    /// First budget whose category matches case-insensitively.
    pub fn budget_for_category(&self, category: &str) -> Option<&Budget> {
        let wanted = category.to_lowercase();
        self.budgets
            .iter()
            .find(|budget| budget.category_name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn budget(id: i64, category: &str) -> Budget {
        Budget {
            id,
            title: format!("Budget {category}"),
            amount: 0,
            limit_amount: 100,
            category_name: category.to_string(),
            user_id: 1,
            date_start: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            date_end: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        }
    }

    #[test]
    fn category_lookup_ignores_case() {
        let snapshot = Snapshot::new(vec![], vec![budget(1, "Food"), budget(2, "Transport")]);
        assert_eq!(snapshot.budget_for_category("fOOd").map(|b| b.id), Some(1));
        assert_eq!(
            snapshot.budget_for_category("TRANSPORT").map(|b| b.id),
            Some(2)
        );
        assert!(snapshot.budget_for_category("Rent").is_none());
    }
}
