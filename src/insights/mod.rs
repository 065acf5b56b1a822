//! Read-time aggregations behind the dashboard charts.
//!
//! Everything here is a pure reduction over records that were already
//! fetched; transactions are linked to budgets by category and by the month
//! and year of the transaction date.

pub mod charts;
pub mod comparison;
pub mod summary;

use std::collections::BTreeMap;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};

use crate::period::Period;
use crate::transactions::db_types::TransactionRecord;

pub use charts::{category_breakdown, monthly_expenses, CategoryShare, MonthlyTotal};
pub use comparison::{budget_comparison, BudgetComparison};
pub use summary::{dashboard_summary, spending_insights, DashboardSummary, SpendingInsights};

pub(crate) fn sum<'a>(amounts: impl Iterator<Item = &'a BigDecimal>) -> BigDecimal {
    amounts.fold(BigDecimal::zero(), |acc, amount| acc + amount)
}

pub(crate) fn in_period<'a>(
    transactions: &'a [TransactionRecord],
    period: Period,
) -> impl Iterator<Item = &'a TransactionRecord> {
    transactions.iter().filter(move |t| period.contains(t.date))
}

/// Totals per category, alphabetically keyed.
pub(crate) fn category_totals<'a>(
    transactions: impl Iterator<Item = &'a TransactionRecord>,
) -> BTreeMap<String, BigDecimal> {
    let mut totals: BTreeMap<String, BigDecimal> = BTreeMap::new();
    for transaction in transactions {
        let entry = totals.entry(transaction.category.clone()).or_insert_with(BigDecimal::zero);
        *entry += &transaction.amount;
    }
    totals
}

/// Largest total wins, ties go to the alphabetically first category.
pub(crate) fn top_category(totals: &BTreeMap<String, BigDecimal>) -> Option<(String, BigDecimal)> {
    let mut top: Option<(&String, &BigDecimal)> = None;
    for (category, total) in totals {
        match top {
            Some((_, best)) if total <= best => {}
            _ => top = Some((category, total)),
        }
    }
    top.map(|(category, total)| (category.clone(), total.clone()))
}

pub(crate) fn money(value: BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

pub(crate) fn divide(total: &BigDecimal, count: u64) -> BigDecimal {
    if count == 0 {
        return BigDecimal::zero();
    }
    money(total.clone() / BigDecimal::from(count))
}

/// `part / whole * 100`, `None` when `whole` is zero.
pub(crate) fn percent_of(part: &BigDecimal, whole: &BigDecimal) -> Option<f64> {
    if whole.is_zero() {
        return None;
    }
    let ratio = (part.clone() / whole.clone()).to_f64()?;
    Some((ratio * 10000.0).round() / 100.0)
}
