use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;

use crate::budgets::db_types::BudgetRecord;
use crate::insights::comparison::budget_comparison;
use crate::insights::{category_totals, divide, in_period, percent_of, sum, top_category};
use crate::period::Period;
use crate::transactions::db_types::TransactionRecord;

/// Figures for the summary cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_expenses: BigDecimal,
    pub this_month: BigDecimal,
    pub average_transaction: BigDecimal,
    pub top_category: Option<String>,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingInsights {
    pub period: Period,
    pub total_spent: BigDecimal,
    pub previous_total: BigDecimal,
    /// `None` when nothing was spent in the previous month.
    pub month_over_month_percent: Option<f64>,
    pub total_budgeted: BigDecimal,
    pub remaining_budget: BigDecimal,
    pub over_budget_categories: Vec<String>,
    pub top_category: Option<(String, BigDecimal)>,
    pub transaction_count: usize,
    pub daily_average: BigDecimal,
}

pub fn dashboard_summary(transactions: &[TransactionRecord], today: NaiveDate) -> DashboardSummary {
    let total_expenses = sum(transactions.iter().map(|t| &t.amount));
    let this_month = sum(in_period(transactions, Period::of(today)).map(|t| &t.amount));
    let totals = category_totals(transactions.iter());

    DashboardSummary {
        average_transaction: divide(&total_expenses, transactions.len() as u64),
        top_category: top_category(&totals).map(|(category, _)| category),
        transaction_count: transactions.len(),
        total_expenses,
        this_month,
    }
}

pub fn spending_insights(
    transactions: &[TransactionRecord],
    budgets: &[BudgetRecord],
    period: Period,
) -> SpendingInsights {
    let current: Vec<&TransactionRecord> = in_period(transactions, period).collect();
    let total_spent = sum(current.iter().map(|t| &t.amount));
    let previous_total = sum(in_period(transactions, period.previous()).map(|t| &t.amount));

    let month_over_month_percent = percent_of(&(total_spent.clone() - previous_total.clone()), &previous_total);

    let total_budgeted = sum(
        budgets
            .iter()
            .filter(|b| b.month == period.month_i32() && b.year == period.year)
            .map(|b| &b.amount),
    );

    let over_budget_categories = budget_comparison(transactions, budgets, period)
        .into_iter()
        .filter(|row| row.over_budget && row.has_budget)
        .map(|row| row.category)
        .collect();

    let totals = category_totals(current.iter().copied());

    SpendingInsights {
        period,
        remaining_budget: total_budgeted.clone() - total_spent.clone(),
        daily_average: divide(&total_spent, period.days() as u64),
        top_category: top_category(&totals),
        transaction_count: current.len(),
        month_over_month_percent,
        over_budget_categories,
        total_budgeted,
        previous_total,
        total_spent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::{budget, dec, spend};

    #[test]
    fn test_dashboard_summary() {
        let transactions = vec![
            spend((2024, 5, 3), "Food", "30"),
            spend((2024, 5, 9), "Rent", "60"),
            spend((2024, 4, 9), "Food", "40"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let summary = dashboard_summary(&transactions, today);
        assert_eq!(summary.total_expenses, dec("130"));
        assert_eq!(summary.this_month, dec("90"));
        assert_eq!(summary.average_transaction, dec("43.33"));
        assert_eq!(summary.top_category.as_deref(), Some("Food"));
        assert_eq!(summary.transaction_count, 3);
    }

    #[test]
    fn test_dashboard_summary_empty() {
        let summary = dashboard_summary(&[], NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        assert_eq!(summary.total_expenses, dec("0"));
        assert_eq!(summary.average_transaction, dec("0"));
        assert!(summary.top_category.is_none());
    }

    #[test]
    fn test_spending_insights_month_over_month() {
        let transactions = vec![
            spend((2024, 4, 2), "Food", "100"),
            spend((2024, 5, 3), "Food", "90"),
            spend((2024, 5, 4), "Fun", "60"),
        ];
        let budgets = vec![budget("Food", "80", 5, 2024), budget("Fun", "100", 5, 2024)];

        let insights = spending_insights(&transactions, &budgets, Period::new(5, 2024).unwrap());
        assert_eq!(insights.total_spent, dec("150"));
        assert_eq!(insights.previous_total, dec("100"));
        assert_eq!(insights.month_over_month_percent, Some(50.0));
        assert_eq!(insights.total_budgeted, dec("180"));
        assert_eq!(insights.remaining_budget, dec("30"));
        assert_eq!(insights.over_budget_categories, vec!["Food".to_string()]);
        assert_eq!(insights.top_category, Some(("Food".to_string(), dec("90"))));
        assert_eq!(insights.transaction_count, 2);
        assert_eq!(insights.daily_average, dec("4.84"));
    }

    #[test]
    fn test_zero_budget_with_spending_is_over_budget() {
        let transactions = vec![spend((2024, 5, 3), "Fun", "25"), spend((2024, 5, 8), "Food", "40")];
        let budgets = vec![budget("Fun", "0", 5, 2024)];

        let insights = spending_insights(&transactions, &budgets, Period::new(5, 2024).unwrap());
        assert_eq!(insights.over_budget_categories, vec!["Fun".to_string()]);
        assert_eq!(insights.total_budgeted, dec("0"));
    }

    #[test]
    fn test_spending_insights_without_history() {
        let transactions = vec![spend((2024, 1, 15), "Food", "10")];

        let insights = spending_insights(&transactions, &[], Period::new(1, 2024).unwrap());
        assert_eq!(insights.previous_total, dec("0"));
        assert_eq!(insights.month_over_month_percent, None);
        assert!(insights.over_budget_categories.is_empty());
    }
}
