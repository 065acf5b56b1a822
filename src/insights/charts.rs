use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use serde::Serialize;

use crate::insights::{category_totals, in_period, percent_of, sum};
use crate::period::Period;
use crate::transactions::db_types::TransactionRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub period: Period,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: BigDecimal,
    pub share_percent: f64,
}

/// Spending per month for the `months` months ending with the month of
/// `today`, oldest first. Months without spending are present with zero.
pub fn monthly_expenses(transactions: &[TransactionRecord], months: usize, today: NaiveDate) -> Vec<MonthlyTotal> {
    Period::of(today)
        .trailing(months)
        .into_iter()
        .map(|period| MonthlyTotal {
            period,
            total: sum(in_period(transactions, period).map(|t| &t.amount)),
        })
        .collect()
}

/// Spending per category across all transactions, largest first.
pub fn category_breakdown(transactions: &[TransactionRecord]) -> Vec<CategoryShare> {
    let grand_total = sum(transactions.iter().map(|t| &t.amount));
    let mut shares: Vec<CategoryShare> = category_totals(transactions.iter())
        .into_iter()
        .map(|(category, total)| CategoryShare {
            share_percent: percent_of(&total, &grand_total).unwrap_or(0.0),
            category,
            total,
        })
        .collect();

    shares.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    shares
}

impl MonthlyTotal {
    pub fn is_empty(&self) -> bool {
        self.total.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::{dec, spend};

    #[test]
    fn test_monthly_expenses_zero_fills_gaps() {
        let transactions = vec![
            spend((2024, 3, 4), "Food", "10"),
            spend((2024, 3, 20), "Food", "5.50"),
            spend((2024, 5, 1), "Rent", "900"),
            spend((2023, 12, 1), "Gifts", "99"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();

        let series = monthly_expenses(&transactions, 3, today);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].period, Period::new(3, 2024).unwrap());
        assert_eq!(series[0].total, dec("15.50"));
        assert!(series[1].is_empty());
        assert_eq!(series[2].total, dec("900"));
    }

    #[test]
    fn test_category_breakdown_shares() {
        let transactions = vec![
            spend((2024, 5, 1), "Food", "25"),
            spend((2024, 5, 2), "Rent", "75"),
        ];

        let shares = category_breakdown(&transactions);
        assert_eq!(shares[0].category, "Rent");
        assert_eq!(shares[0].share_percent, 75.0);
        assert_eq!(shares[1].category, "Food");
        assert_eq!(shares[1].share_percent, 25.0);
    }

    #[test]
    fn test_category_breakdown_empty() {
        assert!(category_breakdown(&[]).is_empty());
    }
}
