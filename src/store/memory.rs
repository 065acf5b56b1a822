use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use anyhow::{anyhow, Result};
use chrono::Utc;
use uuid::Uuid;

use crate::budgets::db_types::{BudgetFilter, BudgetRecord, CreateBudget, UpdateBudget};
use crate::store::FinanceStore;
use crate::transactions::db_types::{CreateTransaction, TransactionRecord, UpdateTransaction};

#[derive(Debug, Default)]
struct Tables {
    budgets: HashMap<Uuid, BudgetRecord>,
    transactions: HashMap<Uuid, TransactionRecord>,
}

/// In-memory store mirroring the table constraints of the Postgres schema,
/// including the unique (category, month, year) index on budgets.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))
    }

    pub fn seed_budget(&self, budget: BudgetRecord) -> Result<()> {
        self.tables()?.budgets.insert(budget.id, budget);
        Ok(())
    }

    pub fn seed_transaction(&self, transaction: TransactionRecord) -> Result<()> {
        self.tables()?.transactions.insert(transaction.id, transaction);
        Ok(())
    }
}

fn ensure_unique_slot(tables: &Tables, candidate: &BudgetRecord) -> Result<()> {
    let clash = tables.budgets.values().any(|existing| {
        existing.id != candidate.id
            && existing.is_same_slot(&candidate.category, candidate.month, candidate.year)
    });

    if clash {
        return Err(anyhow!(
            "duplicate key value violates unique constraint: budget for {} in {}/{} already exists",
            candidate.category,
            candidate.month,
            candidate.year
        ));
    }
    Ok(())
}

impl FinanceStore for InMemoryStore {
    fn insert_budget(&self, budget: &CreateBudget) -> Result<BudgetRecord> {
        let mut tables = self.tables()?;
        let now = Utc::now().naive_utc();
        let record = BudgetRecord {
            id: Uuid::new_v4(),
            category: budget.category.clone(),
            amount: budget.amount.clone(),
            month: budget.month,
            year: budget.year,
            created_at: now,
            updated_at: now,
        };

        ensure_unique_slot(&tables, &record)?;
        tables.budgets.insert(record.id, record.clone());

        Ok(record)
    }

    fn find_budgets(&self, filter: &BudgetFilter) -> Result<Vec<BudgetRecord>> {
        let tables = self.tables()?;
        let mut results: Vec<BudgetRecord> = tables
            .budgets
            .values()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();

        results.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then(b.month.cmp(&a.month))
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(results)
    }

    fn update_budget(&self, budget_id: Uuid, changes: &UpdateBudget) -> Result<Option<BudgetRecord>> {
        let mut tables = self.tables()?;
        let Some(existing) = tables.budgets.get(&budget_id) else {
            return Ok(None);
        };

        let merged = existing.merged(changes);
        ensure_unique_slot(&tables, &merged)?;
        tables.budgets.insert(budget_id, merged.clone());

        Ok(Some(merged))
    }

    fn delete_budget(&self, budget_id: Uuid) -> Result<usize> {
        let mut tables = self.tables()?;

        Ok(tables.budgets.remove(&budget_id).map_or(0, |_| 1))
    }

    fn insert_transaction(&self, transaction: &CreateTransaction) -> Result<TransactionRecord> {
        let mut tables = self.tables()?;
        let now = Utc::now().naive_utc();
        let record = TransactionRecord {
            id: Uuid::new_v4(),
            amount: transaction.amount.clone(),
            category: transaction.category.clone(),
            date: transaction.date,
            description: transaction.description.clone(),
            created_at: now,
            updated_at: now,
        };

        tables.transactions.insert(record.id, record.clone());

        Ok(record)
    }

    fn find_transactions(&self) -> Result<Vec<TransactionRecord>> {
        let tables = self.tables()?;
        let mut results: Vec<TransactionRecord> = tables.transactions.values().cloned().collect();

        results.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        Ok(results)
    }

    fn update_transaction(
        &self,
        transaction_id: Uuid,
        changes: &UpdateTransaction,
    ) -> Result<Option<TransactionRecord>> {
        let mut tables = self.tables()?;
        let Some(existing) = tables.transactions.get(&transaction_id) else {
            return Ok(None);
        };

        let merged = existing.merged(changes);
        tables.transactions.insert(transaction_id, merged.clone());

        Ok(Some(merged))
    }

    fn delete_transaction(&self, transaction_id: Uuid) -> Result<usize> {
        let mut tables = self.tables()?;

        Ok(tables.transactions.remove(&transaction_id).map_or(0, |_| 1))
    }
}
