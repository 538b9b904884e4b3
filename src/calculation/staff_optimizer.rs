//! Staff optimization functionality.
//!
//! This module finds the smallest crew that can assemble a layout within a
//! target duration.
//!
//! ## Efficiency Model
//!
//! Only variable work (modules, unions, accessories) is shared between
//! staff. Each additional worker compounds an efficiency penalty:
//!
//! - multiplier = efficiency_factor ^ (staff − 1)
//! - projected = fixed + variable / (staff × multiplier)
//!
//! Travel and stock fill are fixed and never shrink.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::config::EngineSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{CostBreakdown, OptimizationResult, StaffProjection, TimeSplit};

/// Finds the minimum staff count whose projected duration meets the target.
///
/// Staff counts are scanned in ascending order from `min_staff` to
/// `max_staff`; the first count whose unrounded projection is at or under
/// the target wins. Reported projections are rounded to whole minutes.
///
/// Short-circuits:
/// - if one person already meets the target, returns one person with the base time
/// - if there is no variable work, returns one person (more staff cannot help)
///
/// When no count in range meets the target, the result reports the last
/// count evaluated with `meets_target = false` and zero savings.
///
/// # Errors
///
/// - [`EngineError::InvalidTarget`] if `target_time_minutes` is absent or not positive
/// - [`EngineError::InvalidConfiguration`] if `min_staff` is zero or above `max_staff`
///
/// # Example
///
/// ```
/// use bar_ops_engine::calculation::{compute_breakdown, optimize_staff};
/// use bar_ops_engine::config::{EngineSettings, ReferenceCatalog};
/// use rust_decimal::Decimal;
///
/// let settings = EngineSettings::default();
/// let empty = ReferenceCatalog::new(settings.clone(), vec![], vec![], vec![], vec![]);
/// let breakdown = compute_breakdown(4, &[], None, &settings, &empty);
///
/// let result = optimize_staff(&breakdown, Some(Decimal::from(60)), &settings).unwrap();
///
/// // Two people project 62.35 minutes, three project 51.06.
/// assert!(result.meets_target);
/// assert_eq!(result.optimal_staff, 3);
/// assert_eq!(result.estimated_time_minutes, Decimal::from(51));
/// ```
pub fn optimize_staff(
    breakdown: &CostBreakdown,
    target_time_minutes: Option<Decimal>,
    settings: &EngineSettings,
) -> EngineResult<OptimizationResult> {
    let target = match target_time_minutes {
        Some(target) if target > Decimal::ZERO => target,
        Some(target) => {
            return Err(EngineError::InvalidTarget {
                message: format!("target_time_minutes must be greater than zero (got {})", target),
            });
        }
        None => {
            return Err(EngineError::InvalidTarget {
                message: "target_time_minutes is required".to_string(),
            });
        }
    };

    if settings.min_staff == 0 || settings.min_staff > settings.max_staff {
        return Err(EngineError::InvalidConfiguration {
            field: "min_staff".to_string(),
            message: format!(
                "staff range {}..={} is empty or starts at zero",
                settings.min_staff, settings.max_staff
            ),
        });
    }

    let fixed_time = breakdown.fixed_minutes();
    let variable_time = breakdown.variable_minutes();
    let base_time = fixed_time + variable_time;

    let result = |optimal_staff: u32,
                  estimated: Decimal,
                  meets_target: bool,
                  savings: Decimal,
                  projections: Vec<StaffProjection>| {
        OptimizationResult {
            optimal_staff,
            estimated_time_minutes: estimated,
            target_time_minutes: target,
            base_time_minutes: base_time,
            meets_target,
            savings_minutes: savings,
            efficiency_factor: settings.efficiency_factor,
            max_staff_checked: settings.max_staff,
            breakdown: TimeSplit::from(breakdown),
            projections,
        }
    };

    if base_time <= target {
        debug!(base = %base_time, target_minutes = %target, "One person meets the target");
        return Ok(result(1, base_time, true, target - base_time, Vec::new()));
    }

    if variable_time.is_zero() {
        debug!(fixed = %fixed_time, target_minutes = %target, "Only fixed work, adding staff cannot help");
        return Ok(result(1, base_time, false, Decimal::ZERO, Vec::new()));
    }

    let mut projections = Vec::new();
    let mut best = (1, round_minutes(base_time));
    let mut meets_target = false;

    for staff in settings.min_staff..=settings.max_staff {
        let Some(multiplier) = efficiency_multiplier(settings.efficiency_factor, staff) else {
            warn!(staff, "Efficiency multiplier overflowed, stopping scan");
            break;
        };
        let Some(shared) = variable_time.checked_div(Decimal::from(staff) * multiplier) else {
            warn!(staff, multiplier = %multiplier, "Projection not representable, stopping scan");
            break;
        };

        let projected = fixed_time + shared;
        let hit = projected <= target;
        let rounded = round_minutes(projected);

        projections.push(StaffProjection {
            staff,
            efficiency_multiplier: multiplier,
            projected_minutes: rounded,
            meets_target: hit,
        });
        best = (staff, rounded);

        if hit {
            meets_target = true;
            break;
        }
    }

    let (optimal_staff, estimated) = best;
    let savings = if meets_target {
        (target - estimated).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    Ok(result(optimal_staff, estimated, meets_target, savings, projections))
}

/// `factor ^ (staff - 1)`, or `None` if it cannot be represented.
fn efficiency_multiplier(factor: Decimal, staff: u32) -> Option<Decimal> {
    (1..staff).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(factor))
}

/// Rounds to the nearest whole minute, halves away from zero.
fn round_minutes(minutes: Decimal) -> Decimal {
    minutes.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
