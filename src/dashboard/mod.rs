//! Terminal counterpart of the finance dashboard page.
//!
//! [`Dashboard`] owns the UI state and drives the two fetch sequences:
//! transactions once on mount (and on retry or after a mutation), budgets on
//! mount and on every period change. Each fetch takes a [`FetchTicket`] so a
//! slow response for an abandoned period never overwrites a newer one.

pub mod client;
pub mod state;
pub mod view;

use std::sync::{Mutex, PoisonError};
use anyhow::Result;
use uuid::Uuid;

use crate::budgets::db_types::{BudgetRecord, CreateBudget, UpdateBudget};
use crate::period::Period;
use crate::transactions::db_types::{CreateTransaction, TransactionRecord, UpdateTransaction};

pub use client::{FinanceApi, HttpFinanceClient};
pub use state::{DashboardState, FetchTicket};

pub struct Dashboard<C> {
    client: C,
    state: Mutex<DashboardState>,
}

impl<C: FinanceApi> Dashboard<C> {
    pub fn new(client: C, period: Period) -> Self {
        Self {
            client,
            state: Mutex::new(DashboardState::new(period)),
        }
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn snapshot(&self) -> DashboardState {
        self.update(|state| state.clone())
    }

    /// Initial load: both fetch sequences run concurrently.
    pub async fn mount(&self) {
        tokio::join!(self.refresh_transactions(), self.refresh_budgets());
    }

    pub async fn refresh_transactions(&self) {
        let ticket = self.update(|state| state.begin_transactions_fetch());
        let result = self.client.fetch_transactions().await;
        self.update(|state| state.finish_transactions_fetch(ticket, result));
    }

    pub async fn refresh_budgets(&self) {
        let ticket = self.update(|state| state.begin_budgets_fetch());
        let result = self.client.fetch_budgets(ticket.period).await;
        self.update(|state| state.finish_budgets_fetch(ticket, result));
    }

    pub async fn select_period(&self, period: Period) {
        let changed = self.update(|state| {
            let changed = state.period != period;
            state.period = period;
            changed
        });

        if changed {
            tracing::debug!(%period, "period changed");
            self.refresh_budgets().await;
        }
    }

    pub fn set_transaction_dialog(&self, open: bool) {
        self.update(|state| state.transaction_dialog_open = open);
    }

    pub fn set_budget_dialog(&self, open: bool) {
        self.update(|state| state.budget_dialog_open = open);
    }

    pub async fn save_transaction(&self, input: &CreateTransaction) -> Result<TransactionRecord> {
        let record = self.client.create_transaction(input).await?;
        self.refresh_transactions().await;
        self.set_transaction_dialog(false);
        Ok(record)
    }

    pub async fn edit_transaction(&self, id: Uuid, changes: &UpdateTransaction) -> Result<TransactionRecord> {
        let record = self.client.update_transaction(id, changes).await?;
        self.refresh_transactions().await;
        Ok(record)
    }

    pub async fn remove_transaction(&self, id: Uuid) -> Result<()> {
        self.client.delete_transaction(id).await?;
        self.refresh_transactions().await;
        Ok(())
    }

    pub async fn save_budget(&self, input: &CreateBudget) -> Result<BudgetRecord> {
        let record = self.client.create_budget(input).await?;
        self.refresh_budgets().await;
        self.set_budget_dialog(false);
        Ok(record)
    }

    pub async fn edit_budget(&self, id: Uuid, changes: &UpdateBudget) -> Result<BudgetRecord> {
        let record = self.client.update_budget(id, changes).await?;
        self.refresh_budgets().await;
        Ok(record)
    }

    pub async fn remove_budget(&self, id: Uuid) -> Result<()> {
        self.client.delete_budget(id).await?;
        self.refresh_budgets().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use anyhow::anyhow;
    use bigdecimal::BigDecimal;
    use chrono::{NaiveDate, Utc};

    use crate::insights::fixtures::budget;

    /// Serves canned budgets per month, each after its own delay.
    #[derive(Default)]
    struct ScriptedApi {
        budgets: HashMap<u32, (Vec<BudgetRecord>, Duration)>,
        transactions: Mutex<Vec<TransactionRecord>>,
        fail_transactions: bool,
        fail_budgets: bool,
        transaction_fetches: AtomicUsize,
    }

    impl FinanceApi for ScriptedApi {
        async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
            self.transaction_fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_transactions {
                return Err(anyhow!("Failed to fetch transactions"));
            }
            Ok(self.transactions.lock().unwrap().clone())
        }

        async fn fetch_budgets(&self, period: Period) -> Result<Vec<BudgetRecord>> {
            if self.fail_budgets {
                return Err(anyhow!("Failed to fetch budgets"));
            }
            let (budgets, delay) = self.budgets.get(&period.month).cloned().unwrap_or_default();
            tokio::time::sleep(delay).await;
            Ok(budgets)
        }

        async fn create_transaction(&self, input: &CreateTransaction) -> Result<TransactionRecord> {
            let now = Utc::now().naive_utc();
            let record = TransactionRecord {
                id: Uuid::new_v4(),
                amount: input.amount.clone(),
                category: input.category.clone(),
                date: input.date,
                description: input.description.clone(),
                created_at: now,
                updated_at: now,
            };
            self.transactions.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn update_transaction(&self, _id: Uuid, _changes: &UpdateTransaction) -> Result<TransactionRecord> {
            Err(anyhow!("Failed to update transaction"))
        }

        async fn delete_transaction(&self, _id: Uuid) -> Result<()> {
            Err(anyhow!("Failed to delete transaction"))
        }

        async fn create_budget(&self, _input: &CreateBudget) -> Result<BudgetRecord> {
            Err(anyhow!("Failed to save budget: duplicate"))
        }

        async fn update_budget(&self, _id: Uuid, _changes: &UpdateBudget) -> Result<BudgetRecord> {
            Err(anyhow!("Failed to update budget"))
        }

        async fn delete_budget(&self, _id: Uuid) -> Result<()> {
            Ok(())
        }
    }

    fn june() -> Period {
        Period::new(6, 2024).unwrap()
    }

    fn july() -> Period {
        Period::new(7, 2024).unwrap()
    }

    fn api_with_delays(june_delay: u64, july_delay: u64) -> ScriptedApi {
        let mut budgets = HashMap::new();
        budgets.insert(6, (vec![budget("Food", "100", 6, 2024)], Duration::from_millis(june_delay)));
        budgets.insert(7, (vec![budget("Food", "300", 7, 2024)], Duration::from_millis(july_delay)));
        ScriptedApi { budgets, ..Default::default() }
    }

    #[tokio::test]
    async fn test_slow_earlier_period_does_not_overwrite_latest() {
        let dashboard = Dashboard::new(api_with_delays(80, 0), june());

        tokio::join!(dashboard.refresh_budgets(), dashboard.select_period(july()));

        let state = dashboard.snapshot();
        assert_eq!(state.period, july());
        assert_eq!(state.budgets.len(), 1);
        assert_eq!(state.budgets[0].month, 7);
    }

    #[tokio::test]
    async fn test_slow_latest_period_still_wins() {
        let dashboard = Dashboard::new(api_with_delays(0, 80), june());

        tokio::join!(dashboard.refresh_budgets(), dashboard.select_period(july()));

        let state = dashboard.snapshot();
        assert_eq!(state.budgets[0].month, 7);
        assert_eq!(state.budgets[0].amount, BigDecimal::from(300));
    }

    #[tokio::test]
    async fn test_mount_surfaces_transaction_error() {
        let api = ScriptedApi { fail_transactions: true, ..api_with_delays(0, 0) };
        let dashboard = Dashboard::new(api, june());

        dashboard.mount().await;

        let state = dashboard.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch transactions"));
        assert_eq!(state.budgets.len(), 1);
        assert!(state.budget_error.is_none());
    }

    #[tokio::test]
    async fn test_budget_error_does_not_block_transactions() {
        let api = ScriptedApi { fail_budgets: true, ..Default::default() };
        let dashboard = Dashboard::new(api, june());

        dashboard.mount().await;

        let state = dashboard.snapshot();
        assert!(state.error.is_none());
        assert_eq!(state.budget_error.as_deref(), Some("Failed to fetch budgets"));
    }

    #[tokio::test]
    async fn test_saving_transaction_refreshes_and_closes_dialog() {
        let dashboard = Dashboard::new(ScriptedApi::default(), june());
        dashboard.mount().await;
        dashboard.set_transaction_dialog(true);

        let input = CreateTransaction {
            amount: BigDecimal::from(20),
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            description: "Lunch".to_string(),
        };
        dashboard.save_transaction(&input).await.unwrap();

        let state = dashboard.snapshot();
        assert!(!state.transaction_dialog_open);
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(dashboard.client.transaction_fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_budget_save_keeps_dialog_open() {
        let dashboard = Dashboard::new(ScriptedApi::default(), june());
        dashboard.set_budget_dialog(true);

        let input = CreateBudget {
            category: "Food".to_string(),
            amount: BigDecimal::from(10),
            month: 6,
            year: 2024,
        };
        assert!(dashboard.save_budget(&input).await.is_err());
        assert!(dashboard.snapshot().budget_dialog_open);
    }

    #[tokio::test]
    async fn test_selecting_same_period_does_not_refetch() {
        let dashboard = Dashboard::new(api_with_delays(0, 0), june());
        dashboard.select_period(june()).await;

        assert!(dashboard.snapshot().budgets.is_empty());
    }
}
