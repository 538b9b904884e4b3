//! Calculation logic for the Bar Ops engine.
//!
//! This module contains the assembly-time cost model, the staff optimizer
//! that searches for the smallest crew meeting a target duration, the
//! labour cost calculation against the fixed staff pool, and the
//! reference-data trait the cost model reads through.

mod cost_model;
mod labour_cost;
mod reference;
mod staff_optimizer;

pub use cost_model::compute_breakdown;
pub use labour_cost::calculate_labour_cost;
pub use reference::{ModuleKind, ReferenceData};
pub use staff_optimizer::optimize_staff;
