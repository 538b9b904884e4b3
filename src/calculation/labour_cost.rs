//! Labour cost calculation against the fixed staff pool.
//!
//! An event draws hours from the fixed staff's monthly capacity. Whatever
//! the remaining capacity cannot cover is bought from a temporary-work
//! agency (ETT) at the configured hourly rate.

use rust_decimal::Decimal;

use crate::config::EngineSettings;
use crate::models::{LabourCostResult, TeardownRecommendation};

/// Costs an event's labour against the fixed staff's remaining capacity.
///
/// # Arguments
///
/// * `required_hours` - Hours the event needs (negative values count as zero)
/// * `fixed_capacity_hours` - Monthly hours of the whole fixed staff pool
/// * `assigned_hours` - Hours already assigned to events in the same month
/// * `settings` - Engine constants (`ett_rate`, `four_hours_threshold`)
///
/// # Example
///
/// ```
/// use bar_ops_engine::calculation::calculate_labour_cost;
/// use bar_ops_engine::config::EngineSettings;
/// use bar_ops_engine::models::TeardownRecommendation;
/// use rust_decimal::Decimal;
///
/// let result = calculate_labour_cost(
///     Decimal::from(6),
///     Decimal::from(400),
///     Decimal::from(397),
///     &EngineSettings::default(),
/// );
///
/// assert_eq!(result.remaining_capacity, Decimal::from(3));
/// assert_eq!(result.ett_hours, Decimal::from(3));
/// assert_eq!(result.ett_cost, Decimal::from(54));
/// assert_eq!(result.teardown, TeardownRecommendation::ExternalPorters);
/// ```
pub fn calculate_labour_cost(
    required_hours: Decimal,
    fixed_capacity_hours: Decimal,
    assigned_hours: Decimal,
    settings: &EngineSettings,
) -> LabourCostResult {
    let required_hours = required_hours.max(Decimal::ZERO);
    let remaining_capacity = (fixed_capacity_hours - assigned_hours).max(Decimal::ZERO);

    let can_use_fixed = required_hours <= remaining_capacity;
    let ett_hours = (required_hours - remaining_capacity).max(Decimal::ZERO);
    let ett_cost = ett_hours * settings.ett_rate;

    let threshold = settings.four_hours_threshold.normalize();
    let (teardown, rule_four_hours) = if required_hours <= settings.four_hours_threshold {
        (
            TeardownRecommendation::RetainBarStaff,
            format!("Recommendation: keep bar staff on for teardown (<={}h).", threshold),
        )
    } else {
        (
            TeardownRecommendation::ExternalPorters,
            format!("Recommendation: consider external porters for teardown (>{}h).", threshold),
        )
    };

    LabourCostResult {
        can_use_fixed,
        remaining_capacity,
        required_hours,
        ett_hours,
        ett_cost,
        ett_rate: settings.ett_rate,
        teardown,
        rule_four_hours,
    }
}
