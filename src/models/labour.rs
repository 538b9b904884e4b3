//! Labour cost result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Who should handle teardown after the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeardownRecommendation {
    /// Keep the bar staff on for teardown.
    RetainBarStaff,
    /// Book external porters for teardown.
    ExternalPorters,
}

/// The outcome of costing an event's labour against the fixed staff pool.
///
/// # Example
///
/// ```
/// use bar_ops_engine::models::{LabourCostResult, TeardownRecommendation};
/// use rust_decimal::Decimal;
///
/// let result = LabourCostResult {
///     can_use_fixed: false,
///     remaining_capacity: Decimal::from(2),
///     required_hours: Decimal::from(5),
///     ett_hours: Decimal::from(3),
///     ett_cost: Decimal::from(54),
///     ett_rate: Decimal::from(18),
///     teardown: TeardownRecommendation::ExternalPorters,
///     rule_four_hours: "Consider external porters for teardown (>4h).".to_string(),
/// };
/// assert!(!result.can_use_fixed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabourCostResult {
    /// Whether the remaining fixed capacity covers the required hours.
    pub can_use_fixed: bool,
    /// Fixed staff hours left in the event's month.
    pub remaining_capacity: Decimal,
    /// Hours the event needs.
    pub required_hours: Decimal,
    /// Hours that must be bought from the agency.
    pub ett_hours: Decimal,
    /// Cost of `ett_hours`.
    pub ett_cost: Decimal,
    /// Agency hourly rate applied.
    pub ett_rate: Decimal,
    /// Teardown recommendation.
    pub teardown: TeardownRecommendation,
    /// Human-readable teardown recommendation.
    pub rule_four_hours: String,
}
