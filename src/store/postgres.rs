use anyhow::Result;
use diesel::prelude::*;
use uuid::Uuid;

use crate::budgets::db_types::{BudgetFilter, BudgetRecord, CreateBudget, UpdateBudget};
use crate::schema::budgets as BudgetsTable;
use crate::schema::transactions as TransactionsTable;
use crate::store::FinanceStore;
use crate::transactions::db_types::{CreateTransaction, TransactionRecord, UpdateTransaction};
use crate::utils::db::{get_conn, DbPool};

/// Diesel backed store over the `budgets` and `transactions` tables.
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl FinanceStore for PgStore {
    fn insert_budget(&self, budget: &CreateBudget) -> Result<BudgetRecord> {
        let mut conn = get_conn(&self.pool)?;

        let record = diesel::insert_into(BudgetsTable::table)
            .values(budget)
            .get_result::<BudgetRecord>(&mut conn)?;

        Ok(record)
    }

    fn find_budgets(&self, filter: &BudgetFilter) -> Result<Vec<BudgetRecord>> {
        use crate::schema::budgets::dsl::*;
        let mut conn = get_conn(&self.pool)?;

        let mut query = budgets.into_boxed();
        if let Some(month_filter) = filter.month {
            query = query.filter(month.eq(month_filter));
        }
        if let Some(year_filter) = filter.year {
            query = query.filter(year.eq(year_filter));
        }

        let results = query
            .order((year.desc(), month.desc(), category.asc()))
            .get_results::<BudgetRecord>(&mut conn)?;

        Ok(results)
    }

    fn update_budget(&self, budget_id: Uuid, changes: &UpdateBudget) -> Result<Option<BudgetRecord>> {
        use crate::schema::budgets::dsl::*;
        let mut conn = get_conn(&self.pool)?;

        let result = diesel::update(budgets.filter(id.eq(budget_id)))
            .set(changes)
            .get_result::<BudgetRecord>(&mut conn)
            .optional()?;

        Ok(result)
    }

    fn delete_budget(&self, budget_id: Uuid) -> Result<usize> {
        use crate::schema::budgets::dsl::*;
        let mut conn = get_conn(&self.pool)?;

        let removed = diesel::delete(budgets.filter(id.eq(budget_id))).execute(&mut conn)?;

        Ok(removed)
    }

    fn insert_transaction(&self, transaction: &CreateTransaction) -> Result<TransactionRecord> {
        let mut conn = get_conn(&self.pool)?;

        let record = diesel::insert_into(TransactionsTable::table)
            .values(transaction)
            .get_result::<TransactionRecord>(&mut conn)?;

        Ok(record)
    }

    fn find_transactions(&self) -> Result<Vec<TransactionRecord>> {
        use crate::schema::transactions::dsl::*;
        let mut conn = get_conn(&self.pool)?;

        let results = transactions
            .order((date.desc(), created_at.desc()))
            .get_results::<TransactionRecord>(&mut conn)?;

        Ok(results)
    }

    fn update_transaction(
        &self,
        transaction_id: Uuid,
        changes: &UpdateTransaction,
    ) -> Result<Option<TransactionRecord>> {
        use crate::schema::transactions::dsl::*;
        let mut conn = get_conn(&self.pool)?;

        let result = diesel::update(transactions.filter(id.eq(transaction_id)))
            .set(changes)
            .get_result::<TransactionRecord>(&mut conn)
            .optional()?;

        Ok(result)
    }

    fn delete_transaction(&self, transaction_id: Uuid) -> Result<usize> {
        use crate::schema::transactions::dsl::*;
        let mut conn = get_conn(&self.pool)?;

        let removed = diesel::delete(transactions.filter(id.eq(transaction_id))).execute(&mut conn)?;

        Ok(removed)
    }
}
