// Public library interface for finance-visualizer
pub mod action_router;
pub mod api;
pub mod budgets;
pub mod cli_utils;
pub mod dashboard;
pub mod insights;
pub mod period;
pub mod schema;
pub mod store;
pub mod transactions;
pub mod utils;
