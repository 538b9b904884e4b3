//! Request types for the Bar Ops API.
//!
//! Layout fields are accepted leniently: a non-integer `module_count` falls
//! back to the length of `modules`, non-integer accessory entries are
//! dropped, and an unreadable `zone_id` is treated as no zone.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bar layout as sent by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Explicit standard module count.
    #[serde(default)]
    pub module_count: Option<Value>,
    /// Individual modules; only their number is used.
    #[serde(default)]
    pub modules: Vec<Value>,
    /// Selected accessory ids.
    #[serde(default)]
    pub accessories: Vec<Value>,
    /// Selected zone.
    #[serde(default)]
    pub zone_id: Option<Value>,
}

impl LayoutRequest {
    /// `module_count` if it is a non-negative integer, else the number of `modules`.
    pub fn resolved_module_count(&self) -> u32 {
        self.module_count
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or_else(|| u32::try_from(self.modules.len()).unwrap_or(u32::MAX))
    }

    /// The integer entries of `accessories`.
    pub fn accessory_ids(&self) -> Vec<i64> {
        self.accessories.iter().filter_map(Value::as_i64).collect()
    }

    /// The zone id, if it is an integer or a string holding one.
    pub fn resolved_zone_id(&self) -> Option<i64> {
        match self.zone_id.as_ref()? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Request body for `POST /api/optimize-staff`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizeStaffRequest {
    /// The layout to staff.
    #[serde(flatten)]
    pub layout: LayoutRequest,
    /// Target duration in minutes.
    #[serde(default)]
    pub target_time_minutes: Option<Decimal>,
}

/// Request body for `POST /api/cost-calculate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostCalculateRequest {
    /// Hours the event needs; zero when absent.
    #[serde(default)]
    pub required_hours: Option<Decimal>,
    /// Day of the event; selects the month whose capacity is consumed.
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
}
