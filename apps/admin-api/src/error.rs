//! # API Error Type
//!
//! Unified error type for the HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Admin API                          │
//! │                                                                         │
//! │  Client                       Rust Backend                              │
//! │  ──────                       ────────────                              │
//! │                                                                         │
//! │  POST /products                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler: Result<HttpResponse, ApiError>                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation failed? ── 422 { "errors": { field: message } }     │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Id unknown? ───────── 404 { notice: error "... not found" }    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store/DB blew up? ─── log, 500 { notice: error generic }       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The client renders field errors under the inputs and the notice as    │
//! │  a one-shot banner.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{json, Map, Value};
use thiserror::Error;

use catalog_core::ValidationErrors;
use catalog_db::DbError;

use crate::response::Envelope;

/// API error returned from handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input validation failed; carries every failing field.
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// Resource not found (404).
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A mutation was aborted; `message` is the user-facing generic notice.
    /// The underlying cause was already logged where the failure happened.
    #[error("{message}")]
    OperationFailed { message: String },

    /// Unexpected database failure on a read path.
    #[error("Database error: {0}")]
    Db(#[from] DbError),
}

impl ApiError {
    /// Creates a not found error.
    pub fn not_found(entity: &str, id: &str) -> Self {
        ApiError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// Records a failed mutation: logs the operation name and underlying
    /// error, and surfaces only the generic user-facing message.
    pub fn operation_failed(
        operation: &'static str,
        message: &'static str,
        source: impl std::fmt::Display,
    ) -> Self {
        tracing::error!(operation = operation, error = %source, "Operation failed");
        ApiError::OperationFailed {
            message: message.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Db(DbError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(errors) => {
                let mut fields = Map::new();
                for err in errors.field_errors() {
                    fields.insert(err.field, Value::String(err.message));
                }
                HttpResponse::UnprocessableEntity().json(json!({ "errors": fields }))
            }
            ApiError::NotFound { .. } => {
                HttpResponse::NotFound().json(Envelope::<Value>::error(self.to_string()))
            }
            ApiError::OperationFailed { message } => {
                HttpResponse::InternalServerError().json(Envelope::<Value>::error(message.clone()))
            }
            ApiError::Db(DbError::NotFound { .. }) => {
                HttpResponse::NotFound().json(Envelope::<Value>::error(self.to_string()))
            }
            ApiError::Db(e) => {
                tracing::error!(error = %e, "Database operation failed");
                HttpResponse::InternalServerError()
                    .json(Envelope::<Value>::error("Database operation failed"))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::validation::validate_product_input;
    use catalog_core::ProductInput;

    #[test]
    fn test_validation_maps_to_422() {
        let errors = validate_product_input(&ProductInput {
            name: String::new(),
            description: "d".to_string(),
            price: "9.99".to_string(),
        })
        .unwrap_err();

        let err = ApiError::from(errors);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::not_found("Product", "abc");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Product not found: abc");
    }

    #[test]
    fn test_operation_failed_keeps_only_the_generic_message() {
        let err = ApiError::operation_failed(
            "product create",
            "Product creation failed, please try again.",
            "disk on fire",
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Product creation failed, please try again.");
    }
}
