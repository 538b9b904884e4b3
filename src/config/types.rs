//! Configuration types for the Bar Ops engine.
//!
//! This module contains the strongly-typed structures deserialized from
//! the YAML files in a catalog directory: the engine constants and the
//! read-only reference tables (module rates, accessories, zones, staff).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

/// Process-wide engine constants.
///
/// Built once at startup, validated, then shared read-only. Every field has
/// a default so `settings.yaml` only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Minutes spent filling stock, added once per setup.
    pub stock_minutes: Decimal,
    /// Minutes per joint between two adjacent units.
    pub union_minutes: Decimal,
    /// Corner modules included in every layout.
    pub corner_count: u32,
    /// Standard module minutes when the catalog has no "standard" row.
    pub module_base_fallback: Decimal,
    /// Corner module minutes when the catalog has no "corner" row.
    pub corner_base_fallback: Decimal,
    /// First staff count tried by the optimizer.
    pub min_staff: u32,
    /// Last staff count tried by the optimizer.
    pub max_staff: u32,
    /// Per-additional-worker efficiency multiplier.
    pub efficiency_factor: Decimal,
    /// Cost of one agency (ETT) hour.
    pub ett_rate: Decimal,
    /// Required hours at or below which bar staff are kept for teardown.
    pub four_hours_threshold: Decimal,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            stock_minutes: Decimal::from(10),
            union_minutes: Decimal::from(5),
            corner_count: 2,
            module_base_fallback: Decimal::from(12),
            corner_base_fallback: Decimal::from(8),
            min_staff: 1,
            max_staff: 20,
            efficiency_factor: Decimal::new(85, 2),
            ett_rate: Decimal::from(18),
            four_hours_threshold: Decimal::from(4),
        }
    }
}

impl EngineSettings {
    /// Checks that the constants describe a usable engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] when a minute, rate or
    /// threshold constant is negative, when `min_staff` is zero or larger
    /// than `max_staff`, or when `efficiency_factor` is not positive.
    ///
    /// # Example
    ///
    /// ```
    /// use bar_ops_engine::config::EngineSettings;
    ///
    /// let mut settings = EngineSettings::default();
    /// assert!(settings.validate().is_ok());
    ///
    /// settings.min_staff = 30;
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("stock_minutes", self.stock_minutes),
            ("union_minutes", self.union_minutes),
            ("module_base_fallback", self.module_base_fallback),
            ("corner_base_fallback", self.corner_base_fallback),
            ("ett_rate", self.ett_rate),
            ("four_hours_threshold", self.four_hours_threshold),
        ];

        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(invalid(field, format!("must not be negative (got {})", value)));
            }
        }

        if self.min_staff == 0 {
            return Err(invalid("min_staff", "must be at least 1".to_string()));
        }

        if self.min_staff > self.max_staff {
            return Err(invalid(
                "min_staff",
                format!("must not exceed max_staff ({})", self.max_staff),
            ));
        }

        if self.efficiency_factor <= Decimal::ZERO {
            return Err(invalid(
                "efficiency_factor",
                format!("must be greater than zero (got {})", self.efficiency_factor),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidConfiguration {
        field: field.to_string(),
        message,
    }
}

/// Assembly minutes for one kind of bar module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRate {
    /// Catalog name of the module kind ("standard" or "corner").
    pub name: String,
    /// Minutes to assemble one unit.
    pub base_minutes: Decimal,
}

/// An optional add-on that lengthens the setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    /// Accessory id as selected by callers.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Extra setup minutes when selected.
    pub extra_minutes: Decimal,
}

/// A venue sub-area and the time it takes to get there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone id as selected by callers.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Travel minutes to reach the zone.
    pub travel_minutes: Decimal,
}

/// A member of the fixed staff pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Staff id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contracted hours per month.
    pub monthly_hours: Decimal,
}

/// modules.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ModulesConfig {
    /// Module rate rows.
    pub modules: Vec<ModuleRate>,
}

/// accessories.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessoriesConfig {
    /// Accessory rows.
    pub accessories: Vec<Accessory>,
}

/// zones.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonesConfig {
    /// Zone rows.
    pub zones: Vec<Zone>,
}

/// staff.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffConfig {
    /// Fixed staff rows.
    pub staff: Vec<StaffMember>,
}

/// Engine settings plus every reference table, as loaded from a catalog
/// directory.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    settings: EngineSettings,
    modules: Vec<ModuleRate>,
    accessories: BTreeMap<i64, Accessory>,
    zones: BTreeMap<i64, Zone>,
    staff: Vec<StaffMember>,
}

impl ReferenceCatalog {
    /// Creates a catalog from its component parts.
    ///
    /// Accessories and zones are keyed by id; a repeated id keeps the last row.
    pub fn new(
        settings: EngineSettings,
        modules: Vec<ModuleRate>,
        accessories: Vec<Accessory>,
        zones: Vec<Zone>,
        staff: Vec<StaffMember>,
    ) -> Self {
        Self {
            settings,
            modules,
            accessories: accessories.into_iter().map(|a| (a.id, a)).collect(),
            zones: zones.into_iter().map(|z| (z.id, z)).collect(),
            staff,
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the module rate rows.
    pub fn modules(&self) -> &[ModuleRate] {
        &self.modules
    }

    /// Returns accessories ordered by id.
    pub fn accessories(&self) -> impl Iterator<Item = &Accessory> {
        self.accessories.values()
    }

    /// Looks up a single accessory.
    pub fn accessory(&self, id: i64) -> Option<&Accessory> {
        self.accessories.get(&id)
    }

    /// Returns zones ordered by id.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.values()
    }

    /// Looks up a single zone.
    pub fn zone(&self, id: i64) -> Option<&Zone> {
        self.zones.get(&id)
    }

    /// Returns the fixed staff pool.
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Total monthly hours of the fixed staff pool.
    pub fn fixed_capacity_hours(&self) -> Decimal {
        self.staff.iter().map(|s| s.monthly_hours).sum()
    }
}
