//! Staff optimization result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CostBreakdown;

/// Fixed versus variable time behind an optimization, with the components
/// that make up each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSplit {
    /// Travel plus stock fill.
    pub fixed_time: Decimal,
    /// Modules plus unions plus accessories.
    pub variable_time: Decimal,
    /// Travel to the zone.
    pub zone_minutes: Decimal,
    /// Module assembly.
    pub module_minutes: Decimal,
    /// Unions.
    pub union_minutes: Decimal,
    /// Accessories.
    pub accessories_minutes: Decimal,
    /// Stock fill.
    pub stock_minutes: Decimal,
}

impl From<&CostBreakdown> for TimeSplit {
    fn from(breakdown: &CostBreakdown) -> Self {
        Self {
            fixed_time: breakdown.fixed_minutes(),
            variable_time: breakdown.variable_minutes(),
            zone_minutes: breakdown.zone_minutes,
            module_minutes: breakdown.module_minutes,
            union_minutes: breakdown.union_minutes,
            accessories_minutes: breakdown.accessories_minutes,
            stock_minutes: breakdown.stock_minutes,
        }
    }
}

/// One staff count evaluated by the optimizer's scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProjection {
    /// Staff count evaluated.
    pub staff: u32,
    /// `efficiency_factor ^ (staff - 1)`.
    pub efficiency_multiplier: Decimal,
    /// Projected duration, rounded to whole minutes.
    pub projected_minutes: Decimal,
    /// Whether the unrounded projection met the target.
    pub meets_target: bool,
}

/// The outcome of a staff optimization.
///
/// Always produced once the target is valid; failing to reach the target
/// within the staff range is reported through `meets_target`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Smallest staff count meeting the target, or the last count tried.
    pub optimal_staff: u32,
    /// Projected duration for `optimal_staff`, in whole minutes.
    pub estimated_time_minutes: Decimal,
    /// The requested target duration.
    pub target_time_minutes: Decimal,
    /// Duration for a single person.
    pub base_time_minutes: Decimal,
    /// Whether `optimal_staff` meets the target.
    pub meets_target: bool,
    /// Margin left under the target; zero when the target is missed.
    pub savings_minutes: Decimal,
    /// Efficiency factor the scan used.
    pub efficiency_factor: Decimal,
    /// Upper bound of the staff range.
    pub max_staff_checked: u32,
    /// Fixed/variable split of the base time.
    pub breakdown: TimeSplit,
    /// Every staff count the scan evaluated, in order. Empty when no scan ran.
    pub projections: Vec<StaffProjection>,
}
