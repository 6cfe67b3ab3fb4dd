use api_types::wallet::{Wallet, WalletKind};
use chrono::Utc;
use clap::{Args, Subcommand};
use client::ApiClient;
use engine::WalletStore;

use crate::{error::Result, session::SessionStore};

use super::require_session;

#[derive(Args, Debug)]
pub struct WalletCmd {
    #[command(subcommand)]
    command: WalletCommand,
}

#[derive(Subcommand, Debug)]
enum WalletCommand {
    /// List all wallets.
    List,
    /// Create a wallet.
    Create(WalletCreateArgs),
    /// Replace fields of an existing wallet.
    Update(WalletUpdateArgs),
    /// Delete a wallet.
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct WalletCreateArgs {
    #[arg(long)]
    name: String,
    /// Wallet category: bank or ewallet.
    #[arg(long, value_parser = parse_wallet_kind)]
    kind: WalletKind,
    /// Opening balance in minor currency units.
    #[arg(long, default_value_t = 0)]
    balance: i64,
    #[arg(long)]
    account_number: i64,
}

#[derive(Args, Debug)]
struct WalletUpdateArgs {
    id: i64,
    #[arg(long)]
    name: Option<String>,
    #[arg(long, value_parser = parse_wallet_kind)]
    kind: Option<WalletKind>,
    #[arg(long)]
    balance: Option<i64>,
    #[arg(long)]
    account_number: Option<i64>,
}

fn parse_wallet_kind(raw: &str) -> std::result::Result<WalletKind, String> {
    match raw {
        "bank" | "Bank" => Ok(WalletKind::Bank),
        "ewallet" | "Ewallet" => Ok(WalletKind::Ewallet),
        other => Err(format!("unsupported wallet kind: {other}")),
    }
}

pub async fn run(cmd: WalletCmd, api: &ApiClient, sessions: &SessionStore) -> Result<()> {
    match cmd.command {
        WalletCommand::List => {
            let wallets = api.list().await?;
            if wallets.is_empty() {
                println!("no wallets");
                return Ok(());
            }
            for wallet in wallets {
                println!(
                    "{:>4}  {:<20} {:<8} balance {:>12}  acct {}",
                    wallet.id,
                    wallet.name,
                    wallet.kind.as_str(),
                    wallet.balance,
                    wallet.account_number
                );
            }
            Ok(())
        }
        WalletCommand::Create(args) => {
            let session = require_session(sessions)?;
            let wallet = api
                .create(&Wallet {
                    id: 0,
                    name: args.name,
                    kind: args.kind,
                    balance: args.balance,
                    account_number: args.account_number,
                    user_id: session.user_id,
                    created_at: Some(Utc::now().fixed_offset()),
                })
                .await?;
            println!("created wallet: {} (id {})", wallet.name, wallet.id);
            Ok(())
        }
        WalletCommand::Update(args) => {
            let mut wallet = api.get(args.id).await?;
            if let Some(name) = args.name {
                wallet.name = name;
            }
            if let Some(kind) = args.kind {
                wallet.kind = kind;
            }
            if let Some(balance) = args.balance {
                wallet.balance = balance;
            }
            if let Some(account_number) = args.account_number {
                wallet.account_number = account_number;
            }
            let wallet = api.update(args.id, &wallet).await?;
            println!("updated wallet: {} (id {})", wallet.name, wallet.id);
            Ok(())
        }
        WalletCommand::Delete { id } => {
            // Referential cleanup of transactions pointing at the wallet is
            // the backend's problem; the client only reports the outcome.
            if api.delete(id).await? {
                println!("deleted wallet {id}");
            } else {
                println!("backend refused to delete wallet {id}");
            }
            Ok(())
        }
    }
}
