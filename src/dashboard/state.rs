use anyhow::Result;

use crate::budgets::db_types::BudgetRecord;
use crate::period::Period;
use crate::transactions::db_types::TransactionRecord;

/// Identifies one issued fetch. Only the most recently issued ticket of each
/// kind may write its response into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub period: Period,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub transactions: Vec<TransactionRecord>,
    pub budgets: Vec<BudgetRecord>,
    pub period: Period,
    pub transaction_dialog_open: bool,
    pub budget_dialog_open: bool,
    pub is_loading: bool,
    /// Transaction fetch failure, shown with a retry action.
    pub error: Option<String>,
    /// Budget fetch failure, shown as a warning next to the budget panels.
    pub budget_error: Option<String>,
    transactions_seq: u64,
    budgets_seq: u64,
}

impl DashboardState {
    pub fn new(period: Period) -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Vec::new(),
            period,
            transaction_dialog_open: false,
            budget_dialog_open: false,
            is_loading: true,
            error: None,
            budget_error: None,
            transactions_seq: 0,
            budgets_seq: 0,
        }
    }

    pub fn begin_transactions_fetch(&mut self) -> FetchTicket {
        self.transactions_seq += 1;
        self.is_loading = true;
        self.error = None;

        FetchTicket {
            seq: self.transactions_seq,
            period: self.period,
        }
    }

    /// Returns whether the response was applied.
    pub fn finish_transactions_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<TransactionRecord>>,
    ) -> bool {
        if ticket.seq != self.transactions_seq {
            tracing::debug!(seq = ticket.seq, latest = self.transactions_seq, "discarding stale transactions response");
            return false;
        }

        match result {
            Ok(transactions) => self.transactions = transactions,
            Err(e) => {
                tracing::warn!("Failed to fetch transactions: {:#}", e);
                self.error = Some(e.to_string());
            }
        }
        self.is_loading = false;
        true
    }

    pub fn begin_budgets_fetch(&mut self) -> FetchTicket {
        self.budgets_seq += 1;

        FetchTicket {
            seq: self.budgets_seq,
            period: self.period,
        }
    }

    /// Returns whether the response was applied. A response for a period the
    /// user has since moved away from is dropped even if it arrives last.
    pub fn finish_budgets_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<BudgetRecord>>) -> bool {
        if ticket.seq != self.budgets_seq || ticket.period != self.period {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.budgets_seq,
                period = %ticket.period,
                "discarding stale budgets response"
            );
            return false;
        }

        match result {
            Ok(budgets) => {
                self.budgets = budgets;
                self.budget_error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch budgets: {:#}", e);
                let period = ticket.period;
                self.budgets
                    .retain(|b| b.month == period.month_i32() && b.year == period.year);
                self.budget_error = Some(e.to_string());
            }
        }
        true
    }
}
