use clap::Subcommand;
use client::ApiClient;

use crate::{
    error::{AppError, Result},
    session::{Session, SessionStore},
};

mod auth;
mod budgets;
mod transactions;
mod wallets;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and persist a local session.
    Login(auth::LoginArgs),
    /// Create a backend account.
    Register(auth::RegisterArgs),
    /// Drop the local session.
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// Wallet operations.
    Wallet(wallets::WalletCmd),
    /// Budget operations.
    Budget(budgets::BudgetCmd),
    /// Transaction operations.
    Tx(transactions::TxCmd),
}

pub async fn run(command: Command, api: &ApiClient, sessions: &SessionStore) -> Result<()> {
    match command {
        Command::Login(args) => auth::login(args, api, sessions).await,
        Command::Register(args) => auth::register(args, api).await,
        Command::Logout => auth::logout(sessions),
        Command::Whoami => auth::whoami(sessions),
        Command::Wallet(cmd) => wallets::run(cmd, api, sessions).await,
        Command::Budget(cmd) => budgets::run(cmd, api, sessions).await,
        Command::Tx(cmd) => transactions::run(cmd, api, sessions).await,
    }
}

/// Commands acting on user-owned data need the persisted identity.
fn require_session(sessions: &SessionStore) -> Result<Session> {
    sessions.load()?.ok_or(AppError::NotLoggedIn)
}
