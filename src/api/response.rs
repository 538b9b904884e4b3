//! Response types for the Bar Ops API.
//!
//! This module defines the success bodies that wrap engine results and the
//! error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::CostBreakdown;

/// Response body for `POST /api/calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Total assembly minutes for one person.
    pub total_time_minutes: Decimal,
    /// Whole hours for one person, rounded up.
    pub required_hours: Decimal,
    /// Per-component minutes.
    pub breakdown: CostBreakdown,
}

impl From<CostBreakdown> for CalculationResponse {
    fn from(breakdown: CostBreakdown) -> Self {
        Self {
            total_time_minutes: breakdown.total_minutes,
            required_hours: breakdown.required_hours(),
            breakdown,
        }
    }
}

/// Row counts of the loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogHealth {
    /// Module rate rows.
    pub modules: usize,
    /// Accessory rows.
    pub accessories: usize,
    /// Zone rows.
    pub zones: usize,
    /// Fixed staff rows.
    pub staff: usize,
}

/// Response body for `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the server answers.
    pub status: String,
    /// Catalog row counts.
    pub catalog: CatalogHealth,
    /// Events on the calendar.
    pub events: usize,
}

/// Response body for `DELETE /api/events/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always "deleted".
    pub status: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidConfiguration { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Engine settings are invalid",
                    message,
                ),
            },
            EngineError::InvalidTarget { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TARGET",
                    message,
                    "A positive target_time_minutes is required",
                ),
            },
            EngineError::EventNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EVENT_NOT_FOUND",
                    message,
                    format!("No event with id {} is on the calendar", id),
                ),
            },
            EngineError::InvalidEvent { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_EVENT", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_target_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidTarget {
            message: "target_time_minutes is required".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_TARGET");
        assert!(api_error.error.message.contains("target_time_minutes"));
    }

    #[test]
    fn test_event_not_found_maps_to_not_found() {
        let api_error: ApiErrorResponse = EngineError::EventNotFound { id: 3 }.into();

        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "EVENT_NOT_FOUND");
    }

    #[test]
    fn test_invalid_configuration_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfiguration {
            field: "max_staff".to_string(),
            message: "too small".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_calculation_response_from_breakdown() {
        let breakdown = CostBreakdown {
            module_minutes: Decimal::from(64),
            union_minutes: Decimal::from(25),
            accessories_minutes: Decimal::ZERO,
            zone_minutes: Decimal::ZERO,
            zone_name: "unknown zone".to_string(),
            stock_minutes: Decimal::from(10),
            total_minutes: Decimal::from(99),
        };

        let response = CalculationResponse::from(breakdown);
        assert_eq!(response.total_time_minutes, Decimal::from(99));
        assert_eq!(response.required_hours, Decimal::from(2));
    }
}
