use anyhow::Result;
use clap::Parser;
use chrono::Local;
use colored::Colorize;
use std::env;
use uuid::Uuid;

use finance_visualizer::budgets::db_types::{BudgetRecord, CreateBudget, UpdateBudget};
use finance_visualizer::cli_utils::{
    menu::{confirm_operation, DashboardAction},
    print_error, print_info, print_success, print_warning, CliResult, Input,
};
use finance_visualizer::cli_utils::formatting::{format_money, format_uuid_short};
use finance_visualizer::dashboard::{view, Dashboard, HttpFinanceClient};
use finance_visualizer::period::Period;
use finance_visualizer::transactions::db_types::{CreateTransaction, TransactionRecord, UpdateTransaction};

#[derive(Parser, Debug)]
#[command(name = "finance-dashboard", about = "Terminal dashboard for the finance API")]
struct DashboardArgs {
    /// Base URL of the finance API
    #[clap(long, env = "FINANCE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,
}

type App = Dashboard<HttpFinanceClient>;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = DashboardArgs::parse();

    eprintln!("{}", "╔═══════════════════════════════════════════════════════╗".bright_cyan());
    eprintln!("{}", "║           Personal Finance Dashboard                  ║".bright_cyan());
    eprintln!("{}", "╚═══════════════════════════════════════════════════════╝".bright_cyan());
    print_info(&format!("Using API at {}", args.api_url));

    let dashboard = Dashboard::new(HttpFinanceClient::new(args.api_url), Period::current());
    dashboard.mount().await;

    loop {
        let state = dashboard.snapshot();
        view::render(&state, Local::now().date_naive());
        println!();

        let action = match DashboardAction::select(state.error.is_some()) {
            Ok(action) => action,
            Err(e) => {
                print_error(&e.to_string());
                break;
            }
        };

        let outcome = match action {
            DashboardAction::Refresh => {
                dashboard.mount().await;
                Ok(())
            }
            DashboardAction::ChangePeriod => change_period(&dashboard).await,
            DashboardAction::AddTransaction => add_transaction(&dashboard).await,
            DashboardAction::EditTransaction => edit_transaction(&dashboard).await,
            DashboardAction::DeleteTransaction => delete_transaction(&dashboard).await,
            DashboardAction::RetryTransactions => {
                dashboard.refresh_transactions().await;
                Ok(())
            }
            DashboardAction::ManageBudgets => add_budget(&dashboard).await,
            DashboardAction::EditBudget => edit_budget(&dashboard).await,
            DashboardAction::DeleteBudget => delete_budget(&dashboard).await,
            DashboardAction::Quit => {
                eprintln!("{}", "Goodbye!".bright_cyan());
                break;
            }
        };

        if let Err(e) = outcome {
            print_error(&e.to_string());
        }
    }

    Ok(())
}

async fn change_period(dashboard: &App) -> Result<()> {
    let current = dashboard.snapshot().period;

    let months: Vec<String> = (1..=12)
        .filter_map(|m| Period::new(m, current.year).ok())
        .map(|p| p.month_name().to_string())
        .collect();
    let month_idx = Input::select_from_list("Month", months, current.month as usize - 1)?;

    let years = Period::selectable_years();
    let year_labels: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    let default_year = years.iter().position(|y| *y == current.year).unwrap_or(2);
    let year_idx = Input::select_from_list("Year", year_labels, default_year)?;

    let period = Period::new(month_idx as u32 + 1, years[year_idx])?;
    dashboard.select_period(period).await;
    Ok(())
}

fn transaction_form() -> CliResult<CreateTransaction> {
    Ok(CreateTransaction {
        amount: Input::get_decimal("Amount")?,
        category: Input::get_string("Category")?,
        date: Input::get_date("Date", Local::now().date_naive())?,
        description: Input::get_string("Description")?,
    })
}

async fn add_transaction(dashboard: &App) -> Result<()> {
    dashboard.set_transaction_dialog(true);
    let input = match transaction_form() {
        Ok(input) => input,
        Err(e) => {
            dashboard.set_transaction_dialog(false);
            return Err(e.into());
        }
    };

    let record = dashboard.save_transaction(&input).await;
    if record.is_err() {
        dashboard.set_transaction_dialog(false);
    }
    let record = record?;
    print_success(&format!("Recorded {} for {}", format_money(&record.amount), record.category));
    Ok(())
}

fn pick_transaction(transactions: &[TransactionRecord]) -> CliResult<Option<Uuid>> {
    if transactions.is_empty() {
        print_warning("No transactions to choose from");
        return Ok(None);
    }
    let labels = transactions
        .iter()
        .map(|t| {
            format!(
                "{} {} {} {} ({})",
                t.date.format("%Y-%m-%d"),
                t.category,
                format_money(&t.amount),
                t.description,
                format_uuid_short(&t.id)
            )
        })
        .collect();
    let idx = Input::select_from_list("Transaction", labels, 0)?;
    Ok(transactions.get(idx).map(|t| t.id))
}

async fn edit_transaction(dashboard: &App) -> Result<()> {
    let Some(id) = pick_transaction(&dashboard.snapshot().transactions)? else {
        return Ok(());
    };

    let changes = UpdateTransaction {
        amount: Input::get_optional_decimal("Amount")?,
        category: Input::get_optional_string("Category")?,
        date: Input::get_optional_date("Date (YYYY-MM-DD)")?,
        description: Input::get_optional_string("Description")?,
        ..Default::default()
    };

    dashboard.edit_transaction(id, &changes).await?;
    print_success("Transaction updated");
    Ok(())
}

async fn delete_transaction(dashboard: &App) -> Result<()> {
    let Some(id) = pick_transaction(&dashboard.snapshot().transactions)? else {
        return Ok(());
    };

    if confirm_operation("Delete this transaction?")? {
        dashboard.remove_transaction(id).await?;
        print_success("Transaction deleted");
    }
    Ok(())
}

async fn add_budget(dashboard: &App) -> Result<()> {
    let period = dashboard.snapshot().period;
    dashboard.set_budget_dialog(true);

    let form = (|| -> CliResult<CreateBudget> {
        Ok(CreateBudget {
            category: Input::get_string("Category")?,
            amount: Input::get_decimal("Monthly limit")?,
            month: period.month_i32(),
            year: period.year,
        })
    })();
    let input = match form {
        Ok(input) => input,
        Err(e) => {
            dashboard.set_budget_dialog(false);
            return Err(e.into());
        }
    };

    let record = dashboard.save_budget(&input).await;
    if record.is_err() {
        dashboard.set_budget_dialog(false);
    }
    let record = record?;
    print_success(&format!(
        "Budget of {} set for {} in {}",
        format_money(&record.amount),
        record.category,
        period
    ));
    Ok(())
}

fn pick_budget(budgets: &[BudgetRecord]) -> CliResult<Option<Uuid>> {
    if budgets.is_empty() {
        print_warning("No budgets for this period");
        return Ok(None);
    }
    let labels = budgets
        .iter()
        .map(|b| format!("{} {}", b.category, format_money(&b.amount)))
        .collect();
    let idx = Input::select_from_list("Budget", labels, 0)?;
    Ok(budgets.get(idx).map(|b| b.id))
}

async fn edit_budget(dashboard: &App) -> Result<()> {
    let Some(id) = pick_budget(&dashboard.snapshot().budgets)? else {
        return Ok(());
    };

    let changes = UpdateBudget {
        category: Input::get_optional_string("Category")?,
        amount: Input::get_optional_decimal("Monthly limit")?,
        ..Default::default()
    };

    dashboard.edit_budget(id, &changes).await?;
    print_success("Budget updated");
    Ok(())
}

async fn delete_budget(dashboard: &App) -> Result<()> {
    let Some(id) = pick_budget(&dashboard.snapshot().budgets)? else {
        return Ok(());
    };

    if confirm_operation("Delete this budget?")? {
        dashboard.remove_budget(id).await?;
        print_success("Budget deleted");
    }
    Ok(())
}
