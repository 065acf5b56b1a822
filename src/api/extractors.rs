use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::ApiError;

/// JSON body extractor that reports every rejection as a 400 in the API envelope.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                ApiError::bad_request(format!("Failed to parse JSON: {}", e))
            })?;

        if !value.is_object() {
            return Err(ApiError::bad_request(
                "Request body must be a JSON object",
            ));
        }

        let parsed = serde_json::from_value::<T>(value)
            .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))?;

        Ok(JsonBody(parsed))
    }
}
