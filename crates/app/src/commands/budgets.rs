use api_types::budget::Budget;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use client::ApiClient;
use engine::BudgetStore;

use crate::{error::Result, session::SessionStore};

use super::require_session;

#[derive(Args, Debug)]
pub struct BudgetCmd {
    #[command(subcommand)]
    command: BudgetCommand,
}

#[derive(Subcommand, Debug)]
enum BudgetCommand {
    /// List all budgets.
    List,
    /// Create a budget.
    Create(BudgetCreateArgs),
    /// Replace fields of an existing budget.
    Update(BudgetUpdateArgs),
    /// Delete a budget.
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct BudgetCreateArgs {
    #[arg(long)]
    title: String,
    /// Spending ceiling in minor currency units.
    #[arg(long)]
    limit: i64,
    /// Category joined against transactions, matched case-insensitively.
    #[arg(long)]
    category: String,
    /// Period start (YYYY-MM-DD, inclusive).
    #[arg(long)]
    date_start: NaiveDate,
    /// Period end (YYYY-MM-DD, inclusive).
    #[arg(long)]
    date_end: NaiveDate,
}

#[derive(Args, Debug)]
struct BudgetUpdateArgs {
    id: i64,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    limit: Option<i64>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    date_start: Option<NaiveDate>,
    #[arg(long)]
    date_end: Option<NaiveDate>,
}

pub async fn run(cmd: BudgetCmd, api: &ApiClient, sessions: &SessionStore) -> Result<()> {
    match cmd.command {
        BudgetCommand::List => {
            let budgets = api.list().await?;
            if budgets.is_empty() {
                println!("no budgets");
                return Ok(());
            }
            for budget in budgets {
                println!(
                    "{:>4}  {:<20} {:<16} {:>10} / {:<10}  {} .. {}",
                    budget.id,
                    budget.title,
                    budget.category_name,
                    budget.amount,
                    budget.limit_amount,
                    budget.date_start,
                    budget.date_end
                );
            }
            Ok(())
        }
        BudgetCommand::Create(args) => {
            let session = require_session(sessions)?;
            let budget = api
                .create(&Budget {
                    id: 0,
                    title: args.title,
                    amount: 0,
                    limit_amount: args.limit,
                    category_name: args.category,
                    user_id: session.user_id,
                    date_start: args.date_start,
                    date_end: args.date_end,
                })
                .await?;
            println!("created budget: {} (id {})", budget.title, budget.id);
            Ok(())
        }
        BudgetCommand::Update(args) => {
            let mut budget = api.get(args.id).await?;
            if let Some(title) = args.title {
                budget.title = title;
            }
            if let Some(limit) = args.limit {
                budget.limit_amount = limit;
            }
            if let Some(category) = args.category {
                budget.category_name = category;
            }
            if let Some(date_start) = args.date_start {
                budget.date_start = date_start;
            }
            if let Some(date_end) = args.date_end {
                budget.date_end = date_end;
            }
            let budget = api.update(args.id, &budget).await?;
            println!("updated budget: {} (id {})", budget.title, budget.id);
            Ok(())
        }
        BudgetCommand::Delete { id } => {
            if api.delete(id).await? {
                println!("deleted budget {id}");
            } else {
                println!("backend refused to delete budget {id}");
            }
            Ok(())
        }
    }
}
