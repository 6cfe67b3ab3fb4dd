//! Errors and warnings of the posting workflow.
//!
//! Only transaction creation is fatal. Budget and wallet propagation problems
//! are collected as [`Warning`]s on an otherwise successful posting; callers
//! must inspect both and must not present a warned posting as a failure.

use thiserror::Error;

/// Fatal failure of a posting. Nothing was propagated.
#[derive(Debug, Error)]
pub enum PostError {
    /// Transaction amounts are unsigned magnitudes and must be positive.
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
    /// The transaction itself could not be created; no budget or wallet
    /// mutation was attempted.
    #[error("transaction was not created: {0}")]
    TransactionCreateFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Non-fatal problem attached to a successful posting.
///
/// The transaction is already created when any of these occur and is never
/// rolled back; the warning is the only trace of the unreconciled state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Warning {
    /// Applying the spent amount would exceed the budget ceiling; the budget
    /// was left unchanged.
    #[error(
        "budget \"{category}\" left unchanged: {attempted} would exceed the limit of {limit}"
    )]
    BudgetLimitExceeded {
        budget_id: i64,
        category: String,
        attempted: i64,
        limit: i64,
    },
    /// The spent-amount update failed; the budget is now out of sync with the
    /// posted transaction.
    #[error("budget {budget_id} was not updated: {reason}")]
    BudgetUpdateFailed { budget_id: i64, reason: String },
    /// The wallet balance update failed or the wallet was missing from the
    /// snapshot; the balance is now out of sync with the posted transaction.
    #[error("wallet {wallet_id} balance was not updated: {reason}")]
    WalletUpdateFailed { wallet_id: i64, reason: String },
}
