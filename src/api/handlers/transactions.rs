use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::JsonBody,
        handlers::to_json,
        response::ApiResponse,
        validation::validate_uuid,
    },
    transactions::{
        db_types::{CreateTransaction, UpdateTransaction},
        processor_enums::{
            TransactionsProcessorInput, TransactionsProcessorOutput, UpdateTransactionInputArgs,
        },
    },
    utils::app_config::AppConfig,
};

type TransactionResponse = Result<(StatusCode, Json<ApiResponse<serde_json::Value>>), ApiError>;

/// GET /api/transactions - All transactions, newest first
pub async fn get_transactions(State(app_config): State<AppConfig>) -> TransactionResponse {
    let action = ActionRouterInput::Transactions(TransactionsProcessorInput::GetTransactions);

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to fetch transactions: {}", e)))?;

    match result {
        ActionRouterOutput::Transactions(TransactionsProcessorOutput::GetTransactions(records)) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(to_json(&records)?))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/transactions
pub async fn create_transaction(
    State(app_config): State<AppConfig>,
    JsonBody(payload): JsonBody<CreateTransaction>,
) -> TransactionResponse {
    let action =
        ActionRouterInput::Transactions(TransactionsProcessorInput::CreateTransaction(payload));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    match result {
        ActionRouterOutput::Transactions(TransactionsProcessorOutput::CreateTransaction(record)) => {
            Ok((StatusCode::CREATED, Json(ApiResponse::success(to_json(&record)?))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// PUT /api/transactions/{id}
pub async fn update_transaction(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<UpdateTransaction>,
) -> TransactionResponse {
    let transaction_id = validate_uuid(&id)?;

    let action = ActionRouterInput::Transactions(TransactionsProcessorInput::UpdateTransaction(
        UpdateTransactionInputArgs { transaction_id, changes },
    ));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    match result {
        ActionRouterOutput::Transactions(TransactionsProcessorOutput::UpdateTransaction(Some(record))) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(to_json(&record)?))))
        }
        ActionRouterOutput::Transactions(TransactionsProcessorOutput::UpdateTransaction(None)) => {
            Err(ApiError::not_found("Transaction"))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /api/transactions/{id}
pub async fn delete_transaction(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> TransactionResponse {
    let transaction_id = validate_uuid(&id).map_err(|e| ApiError::rejected(e.to_string()))?;

    let action =
        ActionRouterInput::Transactions(TransactionsProcessorInput::DeleteTransaction(transaction_id));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::rejected(e.to_string()))?;

    match result {
        ActionRouterOutput::Transactions(TransactionsProcessorOutput::DeleteTransaction(0)) => {
            Err(ApiError::not_found("Transaction"))
        }
        ActionRouterOutput::Transactions(TransactionsProcessorOutput::DeleteTransaction(_)) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(json!({})))))
        }
        _ => Err(ApiError::rejected("Unexpected response type")),
    }
}
