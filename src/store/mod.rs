pub mod memory;
pub mod postgres;

use anyhow::Result;
use uuid::Uuid;

use crate::budgets::db_types::{BudgetFilter, BudgetRecord, CreateBudget, UpdateBudget};
use crate::transactions::db_types::{CreateTransaction, TransactionRecord, UpdateTransaction};

/// Record store the processors delegate to.
///
/// Updates and deletes report a missing id through `None` / `0` rather than an
/// error, so callers can tell "not found" apart from a rejected write.
pub trait FinanceStore: Send + Sync {
    fn insert_budget(&self, budget: &CreateBudget) -> Result<BudgetRecord>;

    /// Budgets ordered by year, month (newest first) then category.
    fn find_budgets(&self, filter: &BudgetFilter) -> Result<Vec<BudgetRecord>>;

    fn update_budget(&self, budget_id: Uuid, changes: &UpdateBudget) -> Result<Option<BudgetRecord>>;

    /// Returns the number of removed records, at most one.
    fn delete_budget(&self, budget_id: Uuid) -> Result<usize>;

    fn insert_transaction(&self, transaction: &CreateTransaction) -> Result<TransactionRecord>;

    /// Transactions ordered by date, newest first.
    fn find_transactions(&self) -> Result<Vec<TransactionRecord>>;

    fn update_transaction(
        &self,
        transaction_id: Uuid,
        changes: &UpdateTransaction,
    ) -> Result<Option<TransactionRecord>>;

    fn delete_transaction(&self, transaction_id: Uuid) -> Result<usize>;
}
