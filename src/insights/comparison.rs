use std::collections::BTreeMap;
use bigdecimal::{BigDecimal, Zero};
use serde::Serialize;

use crate::budgets::db_types::BudgetRecord;
use crate::insights::{category_totals, in_period, percent_of};
use crate::period::Period;
use crate::transactions::db_types::TransactionRecord;

/// Budget against actual spending for one category in one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    pub category: String,
    pub budgeted: BigDecimal,
    pub actual: BigDecimal,
    /// Negative once the category is over budget.
    pub remaining: BigDecimal,
    /// `None` when the budget is zero or missing.
    pub percent_used: Option<f64>,
    /// A budget row exists for the category in the period, even if it is zero.
    pub has_budget: bool,
    pub over_budget: bool,
}

/// One row per category that has a budget in `period` or any spending in it,
/// sorted by category.
pub fn budget_comparison(
    transactions: &[TransactionRecord],
    budgets: &[BudgetRecord],
    period: Period,
) -> Vec<BudgetComparison> {
    let mut budgeted: BTreeMap<String, BigDecimal> = BTreeMap::new();
    for budget in budgets
        .iter()
        .filter(|b| b.month == period.month_i32() && b.year == period.year)
    {
        *budgeted.entry(budget.category.clone()).or_insert_with(BigDecimal::zero) += &budget.amount;
    }

    let mut actuals = category_totals(in_period(transactions, period));
    for category in budgeted.keys() {
        actuals.entry(category.clone()).or_insert_with(BigDecimal::zero);
    }

    actuals
        .into_iter()
        .map(|(category, actual)| {
            let has_budget = budgeted.contains_key(&category);
            let budget = budgeted.get(&category).cloned().unwrap_or_else(BigDecimal::zero);
            BudgetComparison {
                has_budget,
                remaining: budget.clone() - actual.clone(),
                percent_used: percent_of(&actual, &budget),
                over_budget: actual > budget,
                budgeted: budget,
                actual,
                category,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::{budget, dec, spend};

    #[test]
    fn test_comparison_unions_budgeted_and_spent_categories() {
        let transactions = vec![
            spend((2024, 5, 3), "Food", "150"),
            spend((2024, 5, 9), "Food", "100"),
            spend((2024, 5, 9), "Fun", "40"),
            spend((2024, 4, 9), "Rent", "900"),
        ];
        let budgets = vec![
            budget("Food", "200", 5, 2024),
            budget("Rent", "1000", 5, 2024),
            budget("Food", "999", 6, 2024),
        ];

        let rows = budget_comparison(&transactions, &budgets, Period::new(5, 2024).unwrap());
        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Fun", "Rent"]);

        let food = &rows[0];
        assert_eq!(food.actual, dec("250"));
        assert_eq!(food.remaining, dec("-50"));
        assert!(food.over_budget);
        assert_eq!(food.percent_used, Some(125.0));
        assert!(food.has_budget);

        let fun = &rows[1];
        assert_eq!(fun.budgeted, dec("0"));
        assert!(fun.over_budget);
        assert_eq!(fun.percent_used, None);
        assert!(!fun.has_budget);

        let rent = &rows[2];
        assert_eq!(rent.actual, dec("0"));
        assert!(!rent.over_budget);
        assert_eq!(rent.percent_used, Some(0.0));
    }
}
