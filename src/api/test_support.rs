use std::sync::Arc;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use crate::api::router::build_router;
use crate::budgets::db_types::BudgetRecord;
use crate::store::memory::InMemoryStore;
use crate::transactions::db_types::TransactionRecord;
use crate::utils::app_config::AppConfig;

pub fn food_budget(month: i32, year: i32) -> BudgetRecord {
    let now = Utc::now().naive_utc();
    BudgetRecord {
        id: Uuid::new_v4(),
        category: "Food".to_string(),
        amount: BigDecimal::from(200),
        month,
        year,
        created_at: now,
        updated_at: now,
    }
}

pub fn transaction_on(year: i32, month: u32, day: u32, category: &str, amount: i64) -> TransactionRecord {
    let now = Utc::now().naive_utc();
    TransactionRecord {
        id: Uuid::new_v4(),
        amount: BigDecimal::from(amount),
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        description: format!("{} purchase", category),
        created_at: now,
        updated_at: now,
    }
}

pub fn seeded_router(budgets: Vec<BudgetRecord>, transactions: Vec<TransactionRecord>) -> Router {
    let store = Arc::new(InMemoryStore::new());
    for budget in budgets {
        store.seed_budget(budget).unwrap();
    }
    for transaction in transactions {
        store.seed_transaction(transaction).unwrap();
    }
    build_router(AppConfig::new(store))
}

pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
