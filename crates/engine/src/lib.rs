//! Posting core for the Arto client.
//!
//! The only non-trivial state-consistency concern in the application lives
//! here: creating a transaction and propagating its financial effect onto the
//! matching budget and wallet, without pretending the three remote calls are
//! atomic. Everything talks to the backend through the store traits in
//! [`store`], so the coordinator itself performs no I/O of its own and can be
//! exercised with in-memory stores.

pub use error::{PostError, Warning};
pub use post::{Coordinator, NewTransaction, PostResult, NO_CATEGORY_SENTINEL};
pub use snapshot::Snapshot;
pub use store::{BudgetStore, TransactionStore, WalletStore};

mod error;
mod post;
mod snapshot;
mod store;
