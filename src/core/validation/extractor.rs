//! Axum extractor for request payloads
//!
//! Bodies are wrapped as `{"data": {...}}`. The [`Payload`] extractor decodes
//! the JSON and unwraps `data` so controllers only ever see the fields.

use crate::core::error::{ApiError, RequestError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// The `data` member of a JSON request body
///
/// A body without `data` yields `Value::Null`, which fails the first field
/// rule the controller checks.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(Payload(data): Payload) -> ApiResult<Json<Dish>> {
///     let draft = Dish::validate_create(&data)?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Value);

impl Payload {
    /// Unwrap the `data` member of a decoded body
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self(fields.remove("data").unwrap_or(Value::Null)),
            _ => Self(Value::Null),
        }
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<Value> = Json::from_request(req, state).await.map_err(|e| {
            RequestError::InvalidBody {
                message: e.body_text(),
            }
        })?;

        Ok(Self::from_body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_unwraps_data() {
        let Payload(data) = Payload::from_body(json!({"data": {"name": "Taco"}}));
        assert_eq!(data, json!({"name": "Taco"}));
    }

    #[test]
    fn test_from_body_without_data_is_null() {
        assert_eq!(Payload::from_body(json!({"name": "Taco"})), Payload(Value::Null));
        assert_eq!(Payload::from_body(json!([1, 2])), Payload(Value::Null));
    }

    #[tokio::test]
    async fn test_extractor_rejects_malformed_json() {
        let req = Request::builder()
            .method("POST")
            .uri("/dishes")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let err = Payload::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_extractor_reads_data() {
        let req = Request::builder()
            .method("POST")
            .uri("/dishes")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(r#"{"data":{"price":3}}"#))
            .unwrap();

        let Payload(data) = Payload::from_request(req, &()).await.unwrap();
        assert_eq!(data, json!({"price": 3}));
    }
}
