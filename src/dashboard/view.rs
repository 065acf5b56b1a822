use bigdecimal::ToPrimitive;
use chrono::NaiveDate;
use colored::Colorize;

use crate::cli_utils::formatting::{
    format_bar, format_money, format_record, format_table, format_uuid_short, print_header,
    print_section,
};
use crate::dashboard::state::DashboardState;
use crate::period::Period;
use crate::insights::{
    budget_comparison, category_breakdown, dashboard_summary, monthly_expenses, spending_insights,
    BudgetComparison, CategoryShare, DashboardSummary, MonthlyTotal, SpendingInsights,
};

const CHART_WIDTH: usize = 30;
const CHART_MONTHS: usize = 6;

/// Prints the whole dashboard for the current state.
pub fn render(state: &DashboardState, today: NaiveDate) {
    print_header("Personal Finance Visualizer");
    println!("{}", "Track your expenses, set budgets, and visualize your spending patterns".dimmed());

    render_summary(&dashboard_summary(&state.transactions, today));

    print_section(&format!("Budget Management: {}", state.period));
    if let Some(warning) = &state.budget_error {
        println!("{}", format!("⚠ {}", warning).yellow());
    }
    render_budget_comparison(&budget_comparison(&state.transactions, &state.budgets, state.period));
    render_insights(&spending_insights(&state.transactions, &state.budgets, state.period));

    render_transactions(state);
    render_monthly_chart(&monthly_expenses(&state.transactions, CHART_MONTHS, today));
    render_category_chart(&category_breakdown(&state.transactions));
}

pub fn render_summary(summary: &DashboardSummary) {
    print_section("Summary");
    format_record(vec![
        ("Total expenses", format_money(&summary.total_expenses)),
        ("This month", format_money(&summary.this_month)),
        ("Average transaction", format_money(&summary.average_transaction)),
        (
            "Top category",
            summary.top_category.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ]);
}

pub fn render_budget_comparison(rows: &[BudgetComparison]) {
    print_section("Budget vs Actual");
    if rows.is_empty() {
        println!("{}", "No budgets or spending for this period".dimmed());
        return;
    }

    let table_rows = rows
        .iter()
        .map(|row| {
            let used = match (row.has_budget, row.percent_used) {
                (false, _) => "no budget".to_string(),
                (true, Some(p)) => format!("{:.0}%", p),
                (true, None) => "n/a".to_string(),
            };
            let status = if row.over_budget {
                "over".red().to_string()
            } else {
                "ok".green().to_string()
            };
            vec![
                row.category.clone(),
                format_money(&row.budgeted),
                format_money(&row.actual),
                format_money(&row.remaining),
                used,
                status,
            ]
        })
        .collect();

    format_table(vec!["Category", "Budget", "Actual", "Remaining", "Used", "Status"], table_rows);
}

pub fn render_insights(insights: &SpendingInsights) {
    print_section("Spending Insights");

    let trend = match insights.month_over_month_percent {
        Some(change) => trend_label(change, insights.period.previous()),
        None => "no spending last month".dimmed().to_string(),
    };

    let over_budget = if insights.over_budget_categories.is_empty() {
        "none".green().to_string()
    } else {
        insights.over_budget_categories.join(", ").red().to_string()
    };

    let top = insights
        .top_category
        .as_ref()
        .map(|(category, total)| format!("{} ({})", category, format_money(total)))
        .unwrap_or_else(|| "-".to_string());

    format_record(vec![
        ("Spent this period", format_money(&insights.total_spent)),
        ("Trend", trend),
        ("Total budgeted", format_money(&insights.total_budgeted)),
        ("Remaining budget", format_money(&insights.remaining_budget)),
        ("Over budget", over_budget),
        ("Top category", top),
        ("Transactions", insights.transaction_count.to_string()),
        ("Daily average", format_money(&insights.daily_average)),
    ]);
}

/// Month-over-month change, anything that rounds to 0.0% reads as unchanged.
fn trend_label(change: f64, previous: Period) -> String {
    if change.abs() < 0.05 {
        format!("no change vs {}", previous).dimmed().to_string()
    } else if change > 0.0 {
        format!("↑ {:.1}% vs {}", change, previous).red().to_string()
    } else {
        format!("↓ {:.1}% vs {}", change.abs(), previous).green().to_string()
    }
}

pub fn render_transactions(state: &DashboardState) {
    print_section("Transactions");

    if let Some(error) = &state.error {
        println!("{}", format!("✗ {} (choose \"Retry loading transactions\")", error).red());
    }

    if state.is_loading {
        println!("{}", "Loading...".dimmed());
        return;
    }

    if state.transactions.is_empty() {
        println!("{}", "No transactions yet".dimmed());
        return;
    }

    let rows = state
        .transactions
        .iter()
        .map(|t| {
            vec![
                format_uuid_short(&t.id),
                t.date.format("%Y-%m-%d").to_string(),
                t.category.clone(),
                t.description.clone(),
                format_money(&t.amount),
            ]
        })
        .collect();

    format_table(vec!["Id", "Date", "Category", "Description", "Amount"], rows);
}

pub fn render_monthly_chart(series: &[MonthlyTotal]) {
    print_section("Monthly Expenses");
    let max = series
        .iter()
        .filter_map(|m| m.total.to_f64())
        .fold(0.0_f64, f64::max);

    for month in series {
        let value = month.total.to_f64().unwrap_or(0.0);
        println!(
            "  {:>8} {:<width$} {}",
            month.period.label(),
            format_bar(value, max, CHART_WIDTH).bright_cyan(),
            format_money(&month.total),
            width = CHART_WIDTH
        );
    }
}

pub fn render_category_chart(shares: &[CategoryShare]) {
    print_section("Spending by Category");
    if shares.is_empty() {
        println!("{}", "No spending recorded".dimmed());
        return;
    }

    for share in shares {
        println!(
            "  {:<14} {:<width$} {:>5.1}% {}",
            share.category,
            format_bar(share.share_percent, 100.0, CHART_WIDTH).bright_magenta(),
            share.share_percent,
            format_money(&share.total),
            width = CHART_WIDTH
        );
    }
}
