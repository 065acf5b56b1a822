use anyhow::{anyhow, Result};
use bigdecimal::{BigDecimal, Zero};
use chrono::{NaiveDate, NaiveDateTime};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::schema::transactions as TransactionsTable;
use crate::utils::commons::{decimal_number, optional_decimal_number, trimmed};

pub const MAX_DESCRIPTION_LEN: usize = 200;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = TransactionsTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TransactionRecord {
    pub id: Uuid,
    #[serde(with = "decimal_number")]
    pub amount: BigDecimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TransactionRecord {
    pub fn merged(&self, changes: &UpdateTransaction) -> TransactionRecord {
        let mut merged = self.clone();
        if let Some(amount) = &changes.amount {
            merged.amount = amount.clone();
        }
        if let Some(category) = &changes.category {
            merged.category = category.clone();
        }
        if let Some(date) = changes.date {
            merged.date = date;
        }
        if let Some(description) = &changes.description {
            merged.description = description.clone();
        }
        if let Some(updated_at) = changes.updated_at {
            merged.updated_at = updated_at;
        }
        merged
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable)]
#[diesel(table_name = TransactionsTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CreateTransaction {
    #[serde(with = "decimal_number")]
    pub amount: BigDecimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl CreateTransaction {
    pub fn normalized(&self) -> Self {
        Self {
            category: trimmed(&self.category),
            description: trimmed(&self.description),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_amount(&self.amount)?;
        validate_category(&self.category)?;
        validate_description(&self.description)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = TransactionsTable)]
pub struct UpdateTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "optional_decimal_number")]
    pub amount: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub updated_at: Option<NaiveDateTime>,
}

impl UpdateTransaction {
    pub fn normalized(&self) -> Self {
        Self {
            category: self.category.as_deref().map(trimmed),
            description: self.description.as_deref().map(trimmed),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = &self.amount {
            validate_amount(amount)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }

    pub fn touched(mut self, at: NaiveDateTime) -> Self {
        self.updated_at = Some(at);
        self
    }
}

fn validate_amount(amount: &BigDecimal) -> Result<()> {
    if amount <= &BigDecimal::zero() {
        return Err(anyhow!("amount must be greater than zero"));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(anyhow!("category is required"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(anyhow!("description is required"));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(anyhow!("description cannot exceed {} characters", MAX_DESCRIPTION_LEN));
    }
    Ok(())
}
