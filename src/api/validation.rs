use crate::api::error::ApiError;

pub fn validate_uuid(uuid_str: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(uuid_str)
        .map_err(|_| ApiError::bad_request(format!("Invalid id format: {}", uuid_str)))
}

/// Parses an optional integer query parameter, treating an empty value as absent.
pub fn parse_optional_i32(value: Option<&str>, field_name: &str) -> Result<Option<i32>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ApiError::bad_request(format!("{} must be a number", field_name))),
    }
}
