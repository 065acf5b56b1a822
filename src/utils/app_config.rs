use std::sync::Arc;
use anyhow::{Context, Result};

use crate::store::{memory::InMemoryStore, postgres::PgStore, FinanceStore};
use crate::utils::db::build_pool;

#[derive(Clone)]
pub struct AppConfig {
    pub store: Arc<dyn FinanceStore>,
}

impl AppConfig {
    pub fn new(store: Arc<dyn FinanceStore>) -> Self {
        Self { store }
    }

    pub fn from_database_url(database_url: &str) -> Result<Self> {
        let pool = build_pool(database_url).context("failed to build database pool")?;

        Ok(Self::new(Arc::new(PgStore::new(pool))))
    }

    /// Volatile store, nothing survives a restart.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}
