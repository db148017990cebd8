//! Typed error handling for the GrubDash API
//!
//! Every failure a request can hit is one of the enums below. Handlers return
//! [`ApiError`], and its [`IntoResponse`] impl is the single place where an
//! error becomes an HTTP response.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: payload rules enforced by the resource controllers (400)
//! - [`EntityError`]: lookups that miss (404)
//! - [`RequestError`]: routing and body-decoding failures raised before a controller runs
//! - [`StorageError`]: problems building a collection from seed records
//!
//! # Example
//!
//! ```rust,ignore
//! match controller.read("42").await {
//!     Ok(dish) => println!("Found: {:?}", dish),
//!     Err(ApiError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("Dish {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The top-level error type returned by every request handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload rejected by a validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lookup by id failed
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Routing or body-decoding failure
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Unexpected failure inside the service
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body rendered for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: &'static str,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Entity(e) => e.status_code(),
            ApiError::Request(e) => e.status_code(),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Entity(e) => e.error_code(),
            ApiError::Request(e) => e.error_code(),
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Rule violations found while checking a request payload
///
/// Validation is fail-fast: the first broken rule is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or empty
    #[error("{entity} must include a {field}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A field that must be a positive number is not
    #[error("{entity} must include a {field} that is a number greater than 0")]
    NotPositiveNumber {
        entity: &'static str,
        field: &'static str,
    },

    /// A list field is not a list, or is empty
    #[error("{entity} must include at least one {item}")]
    EmptyList {
        entity: &'static str,
        item: &'static str,
    },

    /// The list entry at `index` has a bad quantity
    #[error("Dish {index} must have a quantity that is an integer greater than 0")]
    InvalidQuantity { index: usize },

    /// The id in the body disagrees with the id in the route
    #[error("{entity} id does not match route id. {entity}: {body_id}, Route: {route_id}")]
    IdMismatch {
        entity: &'static str,
        body_id: String,
        route_id: String,
    },

    /// The requested status is missing or not assignable
    #[error("{entity} must have a status of {allowed}")]
    InvalidStatus {
        entity: &'static str,
        allowed: String,
    },

    /// The requested status is `delivered`
    #[error("A delivered order cannot be changed")]
    DeliveredOrder,

    /// Deletion attempted on an order that already left `pending`
    #[error("An order cannot be deleted unless it is pending")]
    NotPending,
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// No record with this id exists
    #[error("{entity} id not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "NOT_FOUND",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors raised by the routing layer, before any controller runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Known path, unsupported method
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// No route matches the path
    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    /// The body could not be decoded as JSON
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::PathNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            RequestError::PathNotFound { .. } => "NOT_FOUND",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised while loading records into a collection
#[derive(Debug, Error)]
pub enum StorageError {
    /// Two records share an id
    #[error("duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    /// A record breaks the same rules a create request would
    #[error("invalid {entity} '{id}': {source}")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        #[source]
        source: ValidationError,
    },

    /// The id generator kept returning ids already in use
    #[error("no free {entity} id after {attempts} attempts")]
    IdsExhausted {
        entity: &'static str,
        attempts: usize,
    },

    /// A record could not be converted to JSON for validation
    #[error("failed to serialize {entity} '{id}': {message}")]
    Serialization {
        entity: &'static str,
        id: String,
        message: String,
    },
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for request handling
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_returns_400() {
        let err: ApiError = ValidationError::MissingField {
            entity: "Dish",
            field: "name",
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Dish must include a name");
    }

    #[test]
    fn test_not_found_message_names_id() {
        let err: ApiError = EntityError::NotFound {
            entity: "Order",
            id: "abc".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Order id not found: abc");
    }

    #[test]
    fn test_id_mismatch_names_both_ids() {
        let err = ValidationError::IdMismatch {
            entity: "Dish",
            body_id: "b".to_string(),
            route_id: "r".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Dish id does not match route id. Dish: b, Route: r"
        );
    }

    #[test]
    fn test_rule_messages() {
        assert_eq!(
            ValidationError::NotPositiveNumber {
                entity: "Dish",
                field: "price"
            }
            .to_string(),
            "Dish must include a price that is a number greater than 0"
        );
        assert_eq!(
            ValidationError::EmptyList {
                entity: "Order",
                item: "dish"
            }
            .to_string(),
            "Order must include at least one dish"
        );
        assert_eq!(
            ValidationError::InvalidQuantity { index: 1 }.to_string(),
            "Dish 1 must have a quantity that is an integer greater than 0"
        );
    }

    #[test]
    fn test_request_error_status_codes() {
        let err = RequestError::MethodNotAllowed {
            method: "PATCH".to_string(),
            path: "/dishes".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "PATCH not allowed for /dishes");

        let err = RequestError::PathNotFound {
            path: "/nowhere".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = RequestError::InvalidBody {
            message: "EOF".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response_serialization() {
        let err = ApiError::Validation(ValidationError::NotPending);
        let body = serde_json::to_value(err.to_response()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "error": "An order cannot be deleted unless it is pending",
                "code": "VALIDATION_ERROR"
            })
        );
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
