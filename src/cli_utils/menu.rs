use crate::cli_utils::CliResult;
use dialoguer::Select;

/// Interactive menu builder
pub struct Menu {
    title: String,
    items: Vec<String>,
}

impl Menu {
    /// Create a new menu with a title
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    /// Add multiple items
    pub fn items(mut self, items: Vec<&str>) -> Self {
        self.items.extend(items.iter().map(|s| s.to_string()));
        self
    }

    /// Show the menu and get the selected index
    pub fn interact(&self) -> CliResult<usize> {
        let item_refs: Vec<&str> = self.items.iter().map(|s| s.as_str()).collect();
        let idx = Select::new()
            .with_prompt(&self.title)
            .items(&item_refs)
            .default(0)
            .interact()?;
        Ok(idx)
    }
}

/// Dashboard actions, in menu order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardAction {
    Refresh,
    ChangePeriod,
    AddTransaction,
    EditTransaction,
    DeleteTransaction,
    RetryTransactions,
    ManageBudgets,
    EditBudget,
    DeleteBudget,
    Quit,
}

impl DashboardAction {
    const ALL: [DashboardAction; 10] = [
        DashboardAction::Refresh,
        DashboardAction::ChangePeriod,
        DashboardAction::AddTransaction,
        DashboardAction::EditTransaction,
        DashboardAction::DeleteTransaction,
        DashboardAction::RetryTransactions,
        DashboardAction::ManageBudgets,
        DashboardAction::EditBudget,
        DashboardAction::DeleteBudget,
        DashboardAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardAction::Refresh => "Refresh",
            DashboardAction::ChangePeriod => "Change period",
            DashboardAction::AddTransaction => "Add transaction",
            DashboardAction::EditTransaction => "Edit transaction",
            DashboardAction::DeleteTransaction => "Delete transaction",
            DashboardAction::RetryTransactions => "Retry loading transactions",
            DashboardAction::ManageBudgets => "Manage budgets",
            DashboardAction::EditBudget => "Edit budget",
            DashboardAction::DeleteBudget => "Delete budget",
            DashboardAction::Quit => "Quit",
        }
    }

    /// Show the action menu; the retry entry only appears while a
    /// transaction error is displayed.
    pub fn select(show_retry: bool) -> CliResult<Self> {
        let actions: Vec<DashboardAction> = Self::ALL
            .into_iter()
            .filter(|a| show_retry || *a != DashboardAction::RetryTransactions)
            .collect();
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

        let idx = Menu::new("Select action").items(labels).interact()?;
        Ok(actions.get(idx).copied().unwrap_or(DashboardAction::Quit))
    }
}

/// Yes/No confirmation
pub fn confirm_operation(message: &str) -> CliResult<bool> {
    use dialoguer::Confirm;
    let confirmed = Confirm::new()
        .with_prompt(message)
        .interact()?;
    Ok(confirmed)
}
