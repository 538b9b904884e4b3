//! HTTP request handlers for the Bar Ops API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_labour_cost, compute_breakdown, optimize_staff};
use crate::error::EngineError;
use crate::models::EventDraft;

use super::request::{CostCalculateRequest, LayoutRequest, OptimizeStaffRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, CatalogHealth, DeleteResponse, HealthResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/settings", get(settings_handler))
        .route("/api/zones", get(zones_handler))
        .route("/api/accessories", get(accessories_handler))
        .route("/api/calculate", post(calculate_handler))
        .route("/api/optimize-staff", post(optimize_staff_handler))
        .route("/api/cost-calculate", post(cost_calculate_handler))
        .route("/api/events", get(list_events_handler).post(create_event_handler))
        .route(
            "/api/events/:id",
            put(update_event_handler).delete(delete_event_handler),
        )
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a body rejection to a 400 with a machine-readable code.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message, e.g. "missing field `event_name`"
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn path_rejection_response(correlation_id: Uuid, rejection: PathRejection) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection,
        "Invalid path parameter"
    );
    json_response(
        StatusCode::BAD_REQUEST,
        ApiError::with_details(
            "VALIDATION_ERROR",
            "Event id must be a positive integer",
            rejection.body_text(),
        ),
    )
}

/// Handler for GET /api/health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    let body = HealthResponse {
        status: "ok".to_string(),
        catalog: CatalogHealth {
            modules: catalog.modules().len(),
            accessories: catalog.accessories().count(),
            zones: catalog.zones().count(),
            staff: catalog.staff().len(),
        },
        events: state.calendar().list().await.len(),
    };
    json_response(StatusCode::OK, body)
}

/// Handler for GET /api/settings.
async fn settings_handler(State(state): State<AppState>) -> impl IntoResponse {
    json_response(StatusCode::OK, state.catalog().settings())
}

/// Handler for GET /api/zones.
async fn zones_handler(State(state): State<AppState>) -> impl IntoResponse {
    let zones: Vec<_> = state.catalog().zones().collect();
    json_response(StatusCode::OK, zones)
}

/// Handler for GET /api/accessories.
async fn accessories_handler(State(state): State<AppState>) -> impl IntoResponse {
    let accessories: Vec<_> = state.catalog().accessories().collect();
    json_response(StatusCode::OK, accessories)
}

/// Handler for POST /api/calculate.
///
/// Returns the time breakdown for a layout, worked by one person.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<LayoutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let catalog = state.catalog();
    let module_count = request.resolved_module_count();
    let accessory_ids = request.accessory_ids();
    let breakdown = compute_breakdown(
        module_count,
        &accessory_ids,
        request.resolved_zone_id(),
        catalog.settings(),
        catalog,
    );

    info!(
        correlation_id = %correlation_id,
        module_count,
        accessories = accessory_ids.len(),
        zone = %breakdown.zone_name,
        total_minutes = %breakdown.total_minutes,
        duration_us = start_time.elapsed().as_micros(),
        "Breakdown computed"
    );
    json_response(StatusCode::OK, CalculationResponse::from(breakdown))
}

/// Handler for POST /api/optimize-staff.
///
/// Computes the breakdown for the layout and searches for the smallest
/// crew that finishes within `target_time_minutes`.
async fn optimize_staff_handler(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeStaffRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing optimize-staff request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let catalog = state.catalog();
    let breakdown = compute_breakdown(
        request.layout.resolved_module_count(),
        &request.layout.accessory_ids(),
        request.layout.resolved_zone_id(),
        catalog.settings(),
        catalog,
    );

    match optimize_staff(&breakdown, request.target_time_minutes, catalog.settings()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                optimal_staff = result.optimal_staff,
                estimated_minutes = %result.estimated_time_minutes,
                meets_target = result.meets_target,
                duration_us = start_time.elapsed().as_micros(),
                "Staff optimization completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /api/cost-calculate.
///
/// Weighs the required hours against what the fixed staff pool still has
/// free in the event's month.
async fn cost_calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CostCalculateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cost-calculate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let assigned_hours = match request.event_date {
        Some(date) => state.calendar().assigned_hours_in_month(date).await,
        None => Decimal::ZERO,
    };
    let catalog = state.catalog();
    let result = calculate_labour_cost(
        request.required_hours.unwrap_or(Decimal::ZERO),
        catalog.fixed_capacity_hours(),
        assigned_hours,
        catalog.settings(),
    );

    info!(
        correlation_id = %correlation_id,
        required_hours = %result.required_hours,
        remaining_capacity = %result.remaining_capacity,
        ett_hours = %result.ett_hours,
        "Labour cost computed"
    );
    json_response(StatusCode::OK, result)
}

/// Handler for GET /api/events.
async fn list_events_handler(State(state): State<AppState>) -> impl IntoResponse {
    let events = state.calendar().list().await;
    debug!(count = events.len(), "Listing events");
    json_response(StatusCode::OK, events)
}

/// Handler for POST /api/events.
async fn create_event_handler(
    State(state): State<AppState>,
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.calendar().create(draft).await {
        Ok(event) => {
            info!(
                correlation_id = %correlation_id,
                event_id = event.id,
                event_date = %event.event_date,
                "Event created"
            );
            json_response(StatusCode::CREATED, event)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /api/events/:id.
async fn update_event_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.calendar().update(id, draft).await {
        Ok(event) => {
            info!(correlation_id = %correlation_id, event_id = id, "Event updated");
            json_response(StatusCode::OK, event)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /api/events/:id.
///
/// Deleting an id that is not on the calendar still succeeds.
async fn delete_event_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };

    let existed = state.calendar().delete(id).await;
    info!(correlation_id = %correlation_id, event_id = id, existed, "Event deleted");
    json_response(
        StatusCode::OK,
        DeleteResponse {
            status: "deleted".to_string(),
        },
    )
}
