//! Core data models for the Bar Ops engine.
//!
//! This module contains the domain models used throughout the engine.

mod breakdown;
mod event;
mod labour;
mod optimization;

pub use breakdown::{CostBreakdown, UNKNOWN_ZONE_NAME};
pub use event::{Event, EventDraft};
pub use labour::{LabourCostResult, TeardownRecommendation};
pub use optimization::{OptimizationResult, StaffProjection, TimeSplit};
