use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::budgets::db_types::{BudgetFilter, BudgetRecord, CreateBudget, UpdateBudget};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateBudgetInputArgs {
    pub budget_id: Uuid,
    pub changes: UpdateBudget,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum BudgetsProcessorInput {
    CreateBudget(CreateBudget),
    GetBudgets(BudgetFilter),
    UpdateBudget(UpdateBudgetInputArgs),
    DeleteBudget(Uuid),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum BudgetsProcessorOutput {
    CreateBudget(BudgetRecord),
    GetBudgets(Vec<BudgetRecord>),
    /// `None` when no budget has the requested id.
    UpdateBudget(Option<BudgetRecord>),
    /// Number of removed budgets.
    DeleteBudget(usize),
}
