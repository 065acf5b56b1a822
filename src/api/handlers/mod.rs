pub mod budgets;
pub mod health;
pub mod transactions;

use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))
}
