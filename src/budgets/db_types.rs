use anyhow::{anyhow, Result};
use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDateTime;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::schema::budgets as BudgetsTable;
use crate::utils::commons::{decimal_number, optional_decimal_number, trimmed};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 9999;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = BudgetsTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BudgetRecord {
    pub id: Uuid,
    pub category: String,
    #[serde(with = "decimal_number")]
    pub amount: BigDecimal,
    pub month: i32,
    pub year: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BudgetRecord {
    /// Applies every present field of `changes`, leaving the rest untouched.
    pub fn merged(&self, changes: &UpdateBudget) -> BudgetRecord {
        let mut merged = self.clone();
        if let Some(category) = &changes.category {
            merged.category = category.clone();
        }
        if let Some(amount) = &changes.amount {
            merged.amount = amount.clone();
        }
        if let Some(month) = changes.month {
            merged.month = month;
        }
        if let Some(year) = changes.year {
            merged.year = year;
        }
        if let Some(updated_at) = changes.updated_at {
            merged.updated_at = updated_at;
        }
        merged
    }

    pub fn is_same_slot(&self, category: &str, month: i32, year: i32) -> bool {
        self.category == category && self.month == month && self.year == year
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable)]
#[diesel(table_name = BudgetsTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CreateBudget {
    pub category: String,
    #[serde(with = "decimal_number")]
    pub amount: BigDecimal,
    pub month: i32,
    pub year: i32,
}

impl CreateBudget {
    pub fn normalized(&self) -> Self {
        Self {
            category: trimmed(&self.category),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_category(&self.category)?;
        validate_amount(&self.amount)?;
        validate_month(self.month)?;
        validate_year(self.year)
    }
}

/// Partial update. `None` keeps the stored value, diesel skips `None` columns.
#[derive(Serialize, Deserialize, Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = BudgetsTable)]
pub struct UpdateBudget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "optional_decimal_number")]
    pub amount: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip)]
    pub updated_at: Option<NaiveDateTime>,
}

impl UpdateBudget {
    pub fn normalized(&self) -> Self {
        Self {
            category: self.category.as_deref().map(trimmed),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        if let Some(amount) = &self.amount {
            validate_amount(amount)?;
        }
        if let Some(month) = self.month {
            validate_month(month)?;
        }
        if let Some(year) = self.year {
            validate_year(year)?;
        }
        Ok(())
    }

    pub fn touched(mut self, at: NaiveDateTime) -> Self {
        self.updated_at = Some(at);
        self
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetFilter {
    pub month: Option<i32>,
    pub year: Option<i32>,
}

impl BudgetFilter {
    pub fn matches(&self, budget: &BudgetRecord) -> bool {
        self.month.is_none_or(|m| budget.month == m) && self.year.is_none_or(|y| budget.year == y)
    }
}

fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(anyhow!("category is required"));
    }
    Ok(())
}

fn validate_amount(amount: &BigDecimal) -> Result<()> {
    if amount < &BigDecimal::zero() {
        return Err(anyhow!("amount cannot be negative"));
    }
    Ok(())
}

fn validate_month(month: i32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(anyhow!("month must be between 1 and 12"));
    }
    Ok(())
}

fn validate_year(year: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(anyhow!("year must be between {} and {}", MIN_YEAR, MAX_YEAR));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_budget() -> BudgetRecord {
        let now = chrono::Utc::now().naive_utc();
        BudgetRecord {
            id: Uuid::new_v4(),
            category: "Food".to_string(),
            amount: BigDecimal::from(200),
            month: 5,
            year: 2024,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_merge_only_touches_present_fields() {
        let budget = food_budget();
        let changes = UpdateBudget {
            amount: Some(BigDecimal::from(250)),
            ..Default::default()
        };

        let merged = budget.merged(&changes);
        assert_eq!(merged.amount, BigDecimal::from(250));
        assert_eq!(merged.category, "Food");
        assert_eq!(merged.month, 5);
        assert_eq!(merged.year, 2024);
        assert_eq!(merged.id, budget.id);
    }

    #[test]
    fn test_create_validation() {
        let valid = CreateBudget {
            category: "Food".to_string(),
            amount: BigDecimal::from(0),
            month: 12,
            year: 2024,
        };
        assert!(valid.validate().is_ok());

        let negative = CreateBudget { amount: BigDecimal::from(-1), ..valid.clone() };
        assert!(negative.validate().is_err());

        let bad_month = CreateBudget { month: 13, ..valid.clone() };
        assert!(bad_month.validate().is_err());

        let blank = CreateBudget { category: "   ".to_string(), ..valid };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_update_deserializes_nulls_as_absent() {
        let changes: UpdateBudget =
            serde_json::from_str(r#"{"amount": 250, "category": null, "unknown": 1}"#).unwrap();
        assert_eq!(changes.amount, Some(BigDecimal::from(250)));
        assert!(changes.category.is_none());
        assert!(changes.month.is_none());
    }

    #[test]
    fn test_update_rejects_wrong_types() {
        assert!(serde_json::from_str::<UpdateBudget>(r#"{"amount": "abc"}"#).is_err());
        assert!(serde_json::from_str::<UpdateBudget>(r#"{"month": "May"}"#).is_err());
    }

    #[test]
    fn test_filter_matches_period() {
        let budget = food_budget();
        assert!(BudgetFilter::default().matches(&budget));
        assert!(BudgetFilter { month: Some(5), year: Some(2024) }.matches(&budget));
        assert!(!BudgetFilter { month: Some(6), year: Some(2024) }.matches(&budget));
        assert!(!BudgetFilter { month: None, year: Some(2023) }.matches(&budget));
    }
}
