use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::JsonBody,
        handlers::to_json,
        response::ApiResponse,
        validation::{parse_optional_i32, validate_uuid},
    },
    budgets::{
        db_types::{BudgetFilter, CreateBudget, UpdateBudget},
        processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput, UpdateBudgetInputArgs},
    },
    utils::app_config::AppConfig,
};

type BudgetResponse = Result<(StatusCode, Json<ApiResponse<serde_json::Value>>), ApiError>;

/// Query parameters for the budget list, both optional
#[derive(Debug, Deserialize)]
pub struct BudgetListParams {
    pub month: Option<String>,
    pub year: Option<String>,
}

/// GET /api/budgets?month=&year= - List budgets, optionally for one period
pub async fn get_budgets(
    State(app_config): State<AppConfig>,
    Query(params): Query<BudgetListParams>,
) -> BudgetResponse {
    let filter = BudgetFilter {
        month: parse_optional_i32(params.month.as_deref(), "month")?,
        year: parse_optional_i32(params.year.as_deref(), "year")?,
    };

    let action = ActionRouterInput::Budgets(BudgetsProcessorInput::GetBudgets(filter));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to fetch budgets: {}", e)))?;

    match result {
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::GetBudgets(budgets)) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(to_json(&budgets)?))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/budgets - Create a budget for a category and period
pub async fn create_budget(
    State(app_config): State<AppConfig>,
    JsonBody(payload): JsonBody<CreateBudget>,
) -> BudgetResponse {
    let action = ActionRouterInput::Budgets(BudgetsProcessorInput::CreateBudget(payload));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    match result {
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::CreateBudget(budget)) => {
            Ok((StatusCode::CREATED, Json(ApiResponse::success(to_json(&budget)?))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// PUT /api/budgets/{id} - Merge the provided fields into a budget
pub async fn update_budget(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<UpdateBudget>,
) -> BudgetResponse {
    let budget_id = validate_uuid(&id)?;

    let action = ActionRouterInput::Budgets(BudgetsProcessorInput::UpdateBudget(
        UpdateBudgetInputArgs { budget_id, changes },
    ));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    match result {
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::UpdateBudget(Some(budget))) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(to_json(&budget)?))))
        }
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::UpdateBudget(None)) => {
            Err(ApiError::not_found("Budget"))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /api/budgets/{id} - Remove a budget
///
/// Failures other than "not found" never echo their detail to the client.
pub async fn delete_budget(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> BudgetResponse {
    let budget_id = validate_uuid(&id).map_err(|e| ApiError::rejected(e.to_string()))?;

    let action = ActionRouterInput::Budgets(BudgetsProcessorInput::DeleteBudget(budget_id));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::rejected(e.to_string()))?;

    match result {
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::DeleteBudget(0)) => {
            Err(ApiError::not_found("Budget"))
        }
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::DeleteBudget(_)) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(json!({})))))
        }
        _ => Err(ApiError::rejected("Unexpected response type")),
    }
}
