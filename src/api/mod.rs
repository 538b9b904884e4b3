//! HTTP API module for the Bar Ops engine.
//!
//! This module provides the REST endpoints for estimating assembly time,
//! sizing the crew, costing labour and managing the event calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CostCalculateRequest, LayoutRequest, OptimizeStaffRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, CatalogHealth, DeleteResponse, HealthResponse,
};
pub use state::AppState;
