use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

pub mod wallet {
    use super::*;

    /// Wallet category as spelled by the backend.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum WalletKind {
        Bank,
        Ewallet,
    }

    impl WalletKind {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Bank => "Bank",
                Self::Ewallet => "Ewallet",
            }
        }
    }

    /// A balance-holding account (bank or e-wallet) owned by a user.
    ///
    /// `balance` is a signed amount in minor currency units. It is only
    /// mutated through explicit update calls; nothing here is computed.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Wallet {
        #[serde(default)]
        pub id: i64,
        /// Provider name (bank or e-wallet brand).
        pub name: String,
        #[serde(rename = "type")]
        pub kind: WalletKind,
        pub balance: i64,
        /// Account number. The backend key is the Indonesian word for it.
        #[serde(rename = "rekening")]
        pub account_number: i64,
        pub user_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub created_at: Option<DateTime<FixedOffset>>,
    }
}

pub mod budget {
    use super::*;

    /// A spending ceiling for a named category over an inclusive date range.
    ///
    /// `amount` is the spent-so-far total; the intended invariant
    /// `amount <= limit_amount` is advisory and enforced only as a warning
    /// by the posting workflow, never by the backend.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Budget {
        #[serde(default)]
        pub id: i64,
        pub title: String,
        pub amount: i64,
        pub limit_amount: i64,
        /// Free-text join key against transactions, matched case-insensitively.
        pub category_name: String,
        pub user_id: i64,
        pub date_start: NaiveDate,
        pub date_end: NaiveDate,
    }

    /// Body of the narrow `budgets/{id}/amount` update.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct BudgetAmountUpdate {
        pub amount: i64,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum TransactionKind {
        Income,
        Outcome,
    }

    impl TransactionKind {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Income => "Income",
                Self::Outcome => "Outcome",
            }
        }
    }

    /// A single posted income or expense event.
    ///
    /// `amount` is an unsigned magnitude (> 0); the sign comes from `kind`.
    /// Once posted a transaction is immutable from the client's perspective.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Transaction {
        #[serde(default)]
        pub id: i64,
        pub title: String,
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        /// Empty string means uncategorized (no budget propagation).
        #[serde(default)]
        pub category_name: String,
        pub wallet_id: i64,
        pub user_id: i64,
        pub created_at: DateTime<FixedOffset>,
    }
}

pub mod auth {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoginRequest {
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RegisterRequest {
        pub name: String,
        pub email: String,
        pub password: String,
        pub password_confirmation: String,
    }

    /// User record as returned by `login`/`register`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct User {
        pub id: i64,
        pub name: String,
        pub email: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub created_at: Option<DateTime<FixedOffset>>,
    }
}

#[cfg(test)]
mod tests {
    use super::budget::Budget;
    use super::transaction::{Transaction, TransactionKind};
    use super::wallet::{Wallet, WalletKind};

    #[test]
    fn wallet_wire_keys() {
        let json = r#"{
            "id": 1,
            "name": "BCA",
            "type": "Bank",
            "balance": 100000,
            "rekening": 1234567890,
            "user_id": 1
        }"#;
        let wallet: Wallet = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.kind, WalletKind::Bank);
        assert_eq!(wallet.account_number, 1234567890);
        assert_eq!(wallet.created_at, None);

        let out = serde_json::to_value(&wallet).unwrap();
        assert_eq!(out["type"], "Bank");
        assert_eq!(out["rekening"], 1234567890i64);
        // Absent created_at must not be serialized as null.
        assert!(out.get("created_at").is_none());
    }

    #[test]
    fn budget_dates_parse_as_plain_dates() {
        let json = r#"{
            "id": 3,
            "title": "Makan",
            "amount": 20000,
            "limit_amount": 50000,
            "category_name": "Food",
            "user_id": 1,
            "date_start": "2026-08-01",
            "date_end": "2026-08-31"
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.date_start.to_string(), "2026-08-01");
        assert_eq!(budget.date_end.to_string(), "2026-08-31");
    }

    #[test]
    fn transaction_kind_spelling_and_default_category() {
        let json = r#"{
            "id": 7,
            "title": "Lunch",
            "amount": 15000,
            "type": "Outcome",
            "wallet_id": 1,
            "user_id": 1,
            "created_at": "2026-08-23T12:00:00+07:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Outcome);
        assert_eq!(tx.category_name, "");

        let out = serde_json::to_value(&tx).unwrap();
        assert_eq!(out["type"], "Outcome");
    }
}
