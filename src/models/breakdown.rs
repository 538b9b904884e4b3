//! Assembly-time breakdown model.
//!
//! This module contains the [`CostBreakdown`] produced by the cost model
//! for a single bar configuration.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Name reported when a calculation references a zone the catalog does not know.
pub const UNKNOWN_ZONE_NAME: &str = "unknown zone";

/// Minute-level breakdown of the work needed to assemble one bar layout.
///
/// A pure function of the configuration, the engine settings and the
/// reference data; it has no identity and is recomputed per request.
///
/// # Example
///
/// ```
/// use bar_ops_engine::models::CostBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = CostBreakdown {
///     module_minutes: Decimal::from(64),
///     union_minutes: Decimal::from(25),
///     accessories_minutes: Decimal::ZERO,
///     zone_minutes: Decimal::ZERO,
///     zone_name: "unknown zone".to_string(),
///     stock_minutes: Decimal::from(10),
///     total_minutes: Decimal::from(99),
/// };
///
/// assert_eq!(breakdown.fixed_minutes(), Decimal::from(10));
/// assert_eq!(breakdown.variable_minutes(), Decimal::from(89));
/// assert_eq!(breakdown.required_hours(), Decimal::from(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Standard and corner module assembly.
    pub module_minutes: Decimal,
    /// Joints between adjacent units.
    pub union_minutes: Decimal,
    /// Selected accessories.
    pub accessories_minutes: Decimal,
    /// Travel to the zone.
    pub zone_minutes: Decimal,
    /// Name of the zone, or [`UNKNOWN_ZONE_NAME`].
    pub zone_name: String,
    /// Stock fill.
    pub stock_minutes: Decimal,
    /// Sum of every component above.
    pub total_minutes: Decimal,
}

impl CostBreakdown {
    /// Work that does not shrink with more staff: travel plus stock fill.
    pub fn fixed_minutes(&self) -> Decimal {
        self.zone_minutes + self.stock_minutes
    }

    /// Work that is shared between staff: modules, unions and accessories.
    pub fn variable_minutes(&self) -> Decimal {
        self.module_minutes + self.union_minutes + self.accessories_minutes
    }

    /// Whole hours needed by a single person, rounded up.
    pub fn required_hours(&self) -> Decimal {
        (self.total_minutes / Decimal::from(60))
            .round_dp_with_strategy(0, RoundingStrategy::ToPositiveInfinity)
    }
}
