//! Contracts for the three remote stores.
//!
//! Every method returns an explicit `Result`; no store swallows failures into
//! an empty list. The associated error type lets implementations surface their
//! own transport errors while the coordinator only needs them to be printable.

use api_types::{budget::Budget, transaction::Transaction, wallet::Wallet};

/// CRUD over wallet records.
pub trait WalletStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch all wallets visible to the current session.
    async fn list(&self) -> Result<Vec<Wallet>, Self::Error>;

    /// Fetch a single wallet; absence is an error.
    async fn get(&self, id: i64) -> Result<Wallet, Self::Error>;

    /// Create a wallet and return the stored entity. Implementations tolerate
    /// a backend that returns no body on success by echoing the input.
    async fn create(&self, wallet: &Wallet) -> Result<Wallet, Self::Error>;

    /// Full-record replace.
    async fn update(&self, id: i64, wallet: &Wallet) -> Result<Wallet, Self::Error>;

    /// Returns whether the remote call reported success; a non-2xx response
    /// maps to `Ok(false)`, only transport failure is an error.
    async fn delete(&self, id: i64) -> Result<bool, Self::Error>;
}

/// CRUD over budget records, plus the narrow spent-amount update.
pub trait BudgetStore {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn list(&self) -> Result<Vec<Budget>, Self::Error>;

    async fn get(&self, id: i64) -> Result<Budget, Self::Error>;

    async fn create(&self, budget: &Budget) -> Result<Budget, Self::Error>;

    /// Full-record replace.
    async fn update(&self, id: i64, budget: &Budget) -> Result<Budget, Self::Error>;

    /// Set only the spent-amount field, avoiding a full-record overwrite race.
    ///
    /// On an empty success body implementations re-fetch the budget by id
    /// instead of echoing: the caller does not hold a consistent full record.
    async fn update_amount(&self, id: i64, new_amount: i64) -> Result<Budget, Self::Error>;

    async fn delete(&self, id: i64) -> Result<bool, Self::Error>;
}

/// Create/list over transaction records. The backend exposes no update or
/// delete; a posted transaction is immutable from the client's perspective.
pub trait TransactionStore {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn list(&self) -> Result<Vec<Transaction>, Self::Error>;

    /// Create a transaction. The backend does not return the created entity,
    /// only success or failure.
    async fn create(&self, transaction: &Transaction) -> Result<(), Self::Error>;
}
