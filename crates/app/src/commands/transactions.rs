use api_types::transaction::TransactionKind;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use clap::{Args, Subcommand};
use client::ApiClient;
use engine::{BudgetStore, Coordinator, NewTransaction, Snapshot, TransactionStore, WalletStore};

use crate::{
    error::{AppError, Result},
    session::SessionStore,
};

use super::require_session;

#[derive(Args, Debug)]
pub struct TxCmd {
    #[command(subcommand)]
    command: TxCommand,
}

#[derive(Subcommand, Debug)]
enum TxCommand {
    /// List all transactions.
    List,
    /// Post a transaction and propagate it to the budget and wallet.
    Post(TxPostArgs),
}

#[derive(Args, Debug)]
struct TxPostArgs {
    #[arg(long)]
    title: String,
    /// Magnitude in minor currency units, always positive.
    #[arg(long)]
    amount: i64,
    /// income or outcome.
    #[arg(long, value_parser = parse_transaction_kind)]
    kind: TransactionKind,
    /// Budget category; omit for an uncategorized transaction.
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    wallet: i64,
    /// RFC3339 timestamp or YYYY-MM-DD; defaults to now.
    #[arg(long, value_parser = parse_created_at)]
    date: Option<DateTime<FixedOffset>>,
}

fn parse_transaction_kind(raw: &str) -> std::result::Result<TransactionKind, String> {
    match raw {
        "income" | "Income" => Ok(TransactionKind::Income),
        "outcome" | "Outcome" => Ok(TransactionKind::Outcome),
        other => Err(format!("unsupported transaction kind: {other}")),
    }
}

fn parse_created_at(raw: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(stamp);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        .map_err(|_| format!("not an RFC3339 timestamp or YYYY-MM-DD date: {raw}"))
}

pub async fn run(cmd: TxCmd, api: &ApiClient, sessions: &SessionStore) -> Result<()> {
    match cmd.command {
        TxCommand::List => {
            let transactions = TransactionStore::list(api).await?;
            if transactions.is_empty() {
                println!("no transactions");
                return Ok(());
            }
            for tx in transactions {
                println!(
                    "{:>4}  {}  {:<7} {:>10}  {:<16} wallet {}  {}",
                    tx.id,
                    tx.created_at.format("%Y-%m-%d"),
                    tx.kind.as_str(),
                    tx.amount,
                    if tx.category_name.is_empty() {
                        "-"
                    } else {
                        tx.category_name.as_str()
                    },
                    tx.wallet_id,
                    tx.title
                );
            }
            Ok(())
        }
        TxCommand::Post(args) => post(args, api, sessions).await,
    }
}

async fn post(args: TxPostArgs, api: &ApiClient, sessions: &SessionStore) -> Result<()> {
    let session = require_session(sessions)?;

    // Fresh snapshot: the coordinator consults only what we pass in.
    let snapshot = Snapshot::new(
        WalletStore::list(api).await?,
        BudgetStore::list(api).await?,
    );

    // Caller-side pre-checks. The coordinator re-validates only the amount;
    // the balance floor in particular exists only here.
    let wallet = snapshot
        .wallet(args.wallet)
        .ok_or_else(|| AppError::Invalid(format!("wallet {} not found", args.wallet)))?;
    if args.kind == TransactionKind::Outcome && args.amount > wallet.balance {
        return Err(AppError::Invalid(format!(
            "insufficient balance: wallet {} holds {}, transaction needs {}",
            wallet.id, wallet.balance, args.amount
        )));
    }

    let coordinator = Coordinator::new(api, api, api);
    let result = coordinator
        .post(
            NewTransaction {
                title: args.title,
                amount: args.amount,
                kind: args.kind,
                category: args.category,
                wallet_id: args.wallet,
                user_id: session.user_id,
                created_at: args.date.unwrap_or_else(|| Utc::now().fixed_offset()),
            },
            &snapshot,
        )
        .await?;

    // A posting with warnings is still a saved transaction; the warnings
    // describe unreconciled budget/wallet state, not a failed posting.
    println!("transaction saved: {}", result.transaction.title);
    if let Some(budget) = result.updated_budget {
        println!(
            "budget \"{}\" now at {} / {}",
            budget.category_name, budget.amount, budget.limit_amount
        );
    }
    if let Some(wallet) = result.updated_wallet {
        println!("wallet {} balance now {}", wallet.name, wallet.balance);
    }
    for warning in &result.warnings {
        println!("warning: {warning}");
    }

    Ok(())
}
