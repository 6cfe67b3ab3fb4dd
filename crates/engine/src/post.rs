//! Transaction posting with derived-state propagation.
//!
//! A posting is three sequential remote calls: create the transaction, bump
//! the matching budget's spent amount, move the wallet balance. There is no
//! atomicity across them and no compensating action: once the transaction is
//! created, budget and wallet failures are reported as warnings and the
//! transaction stays posted.

use api_types::{
    budget::Budget,
    transaction::{Transaction, TransactionKind},
    wallet::Wallet,
};
use chrono::{DateTime, FixedOffset};

use crate::{
    error::{PostError, Warning},
    snapshot::Snapshot,
    store::{BudgetStore, TransactionStore, WalletStore},
};

/// UI placeholder meaning "no category". Normalized away before posting.
pub const NO_CATEGORY_SENTINEL: &str = "Tidak ada";

/// A user-entered transaction intent, not yet posted.
#[derive(Clone, Debug)]
pub struct NewTransaction {
    pub title: String,
    /// Unsigned magnitude; the sign comes from `kind`.
    pub amount: i64,
    pub kind: TransactionKind,
    /// Raw category as entered; the no-category sentinel is still allowed.
    pub category: Option<String>,
    pub wallet_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<FixedOffset>,
}

impl NewTransaction {
    /// Category with the sentinel and surrounding whitespace stripped.
    /// Empty means no budget propagation.
    fn normalized_category(&self) -> &str {
        match &self.category {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed == NO_CATEGORY_SENTINEL {
                    ""
                } else {
                    trimmed
                }
            }
            None => "",
        }
    }
}

/// Outcome of a successful posting.
///
/// `updated_budget` / `updated_wallet` carry the post-propagation records so
/// the caller can refresh its local snapshot without another fetch. They are
/// `None` when the respective propagation was skipped or failed.
#[derive(Clone, Debug)]
pub struct PostResult {
    pub transaction: Transaction,
    pub updated_budget: Option<Budget>,
    pub updated_wallet: Option<Wallet>,
    pub warnings: Vec<Warning>,
}

/// Orchestrates a posting over the three stores.
///
/// Stateless between calls; the budgets/wallets it consults come from the
/// [`Snapshot`] handed to [`Coordinator::post`], and keeping that snapshot
/// fresh is the caller's job.
pub struct Coordinator<'a, T, B, W> {
    transactions: &'a T,
    budgets: &'a B,
    wallets: &'a W,
}

impl<'a, T, B, W> Coordinator<'a, T, B, W>
where
    T: TransactionStore,
    B: BudgetStore,
    W: WalletStore,
{
    pub fn new(transactions: &'a T, budgets: &'a B, wallets: &'a W) -> Self {
        Self {
            transactions,
            budgets,
            wallets,
        }
    }

    /// Post a transaction and propagate its effect.
    ///
    /// Only the transaction create is fatal. Budget and wallet propagation
    /// failures surface as warnings on the returned [`PostResult`]; callers
    /// must still treat the posting as saved.
    pub async fn post(
        &self,
        intent: NewTransaction,
        snapshot: &Snapshot,
    ) -> Result<PostResult, PostError> {
        if intent.amount <= 0 {
            return Err(PostError::InvalidAmount(intent.amount));
        }

        let category = intent.normalized_category().to_string();
        let transaction = Transaction {
            id: 0,
            title: intent.title.clone(),
            amount: intent.amount,
            kind: intent.kind,
            category_name: category.clone(),
            wallet_id: intent.wallet_id,
            user_id: intent.user_id,
            created_at: intent.created_at,
        };

        self.transactions
            .create(&transaction)
            .await
            .map_err(|err| PostError::TransactionCreateFailed(Box::new(err)))?;

        let mut warnings = Vec::new();

        let updated_budget = if intent.kind == TransactionKind::Outcome && !category.is_empty() {
            self.propagate_budget(&category, intent.amount, snapshot, &mut warnings)
                .await
        } else {
            None
        };

        let updated_wallet = self
            .propagate_wallet(&intent, snapshot, &mut warnings)
            .await;

        Ok(PostResult {
            transaction,
            updated_budget,
            updated_wallet,
            warnings,
        })
    }

    /// Bump the spent amount of the budget matching `category`, if any.
    ///
    /// A missing budget is not an error: uncovered categories are simply not
    /// tracked. Exceeding the ceiling leaves the budget untouched on purpose.
    async fn propagate_budget(
        &self,
        category: &str,
        amount: i64,
        snapshot: &Snapshot,
        warnings: &mut Vec<Warning>,
    ) -> Option<Budget> {
        let budget = snapshot.budget_for_category(category)?;

        let new_amount = budget.amount + amount;
        if new_amount > budget.limit_amount {
            tracing::warn!(
                budget_id = budget.id,
                new_amount,
                limit = budget.limit_amount,
                "budget limit would be exceeded, skipping update"
            );
            warnings.push(Warning::BudgetLimitExceeded {
                budget_id: budget.id,
                category: budget.category_name.clone(),
                attempted: new_amount,
                limit: budget.limit_amount,
            });
            return None;
        }

        match self.budgets.update_amount(budget.id, new_amount).await {
            Ok(updated) => Some(updated),
            Err(err) => {
                tracing::warn!(budget_id = budget.id, "budget update failed: {err}");
                warnings.push(Warning::BudgetUpdateFailed {
                    budget_id: budget.id,
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    /// Debit or credit the wallet the transaction points at.
    ///
    /// Balances may go negative here: the pre-posting balance check is the
    /// caller's responsibility, and a stale snapshot could not enforce a
    /// floor reliably anyway.
    async fn propagate_wallet(
        &self,
        intent: &NewTransaction,
        snapshot: &Snapshot,
        warnings: &mut Vec<Warning>,
    ) -> Option<Wallet> {
        let Some(wallet) = snapshot.wallet(intent.wallet_id) else {
            warnings.push(Warning::WalletUpdateFailed {
                wallet_id: intent.wallet_id,
                reason: "wallet not present in snapshot".to_string(),
            });
            return None;
        };

        let new_balance = match intent.kind {
            TransactionKind::Income => wallet.balance + intent.amount,
            TransactionKind::Outcome => wallet.balance - intent.amount,
        };

        let updated = Wallet {
            balance: new_balance,
            ..wallet.clone()
        };

        match self.wallets.update(wallet.id, &updated).await {
            Ok(stored) => Some(stored),
            Err(err) => {
                tracing::warn!(wallet_id = wallet.id, "wallet update failed: {err}");
                warnings.push(Warning::WalletUpdateFailed {
                    wallet_id: wallet.id,
                    reason: err.to_string(),
                });
                None
            }
        }
    }
}
