//! Assembly-time cost model.
//!
//! This module turns a bar configuration (standard module count, selected
//! accessories, zone) into a [`CostBreakdown`] in minutes.
//!
//! ## Formula
//!
//! - units = modules + corners
//! - module minutes = modules × standard rate + corners × corner rate
//! - union minutes = max(units − 1, 0) × union minutes
//! - total = module + union + accessories + zone travel + stock fill

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineSettings;
use crate::models::{CostBreakdown, UNKNOWN_ZONE_NAME};

use super::reference::{ModuleKind, ReferenceData};

/// Computes the assembly-time breakdown for a bar configuration.
///
/// Missing reference data never fails the calculation:
/// - a missing module rate row uses the configured fallback for that kind
/// - unknown accessory ids add nothing; repeated ids count once
/// - an unknown or absent zone adds no travel and is named [`UNKNOWN_ZONE_NAME`]
///
/// # Arguments
///
/// * `module_count` - Number of standard modules (corners are added automatically)
/// * `accessory_ids` - Selected accessory ids
/// * `zone_id` - Zone the bar is set up in
/// * `settings` - Engine constants
/// * `reference` - Module, accessory and zone lookups
///
/// # Example
///
/// ```
/// use bar_ops_engine::calculation::compute_breakdown;
/// use bar_ops_engine::config::{EngineSettings, ReferenceCatalog};
/// use rust_decimal::Decimal;
///
/// let settings = EngineSettings::default();
/// let empty = ReferenceCatalog::new(settings.clone(), vec![], vec![], vec![], vec![]);
///
/// let breakdown = compute_breakdown(4, &[], None, &settings, &empty);
///
/// assert_eq!(breakdown.module_minutes, Decimal::from(64));
/// assert_eq!(breakdown.union_minutes, Decimal::from(25));
/// assert_eq!(breakdown.total_minutes, Decimal::from(99));
/// ```
pub fn compute_breakdown<R>(
    module_count: u32,
    accessory_ids: &[i64],
    zone_id: Option<i64>,
    settings: &EngineSettings,
    reference: &R,
) -> CostBreakdown
where
    R: ReferenceData + ?Sized,
{
    let corner_count = settings.corner_count;
    let total_units = u64::from(module_count) + u64::from(corner_count);

    let module_base = reference
        .module_rate(ModuleKind::Standard)
        .unwrap_or_else(|| {
            debug!(fallback = %settings.module_base_fallback, "No standard module rate, using fallback");
            settings.module_base_fallback
        });
    let corner_base = reference
        .module_rate(ModuleKind::Corner)
        .unwrap_or_else(|| {
            debug!(fallback = %settings.corner_base_fallback, "No corner module rate, using fallback");
            settings.corner_base_fallback
        });

    let module_minutes =
        Decimal::from(module_count) * module_base + Decimal::from(corner_count) * corner_base;

    let unions = total_units.saturating_sub(1);
    let union_minutes = Decimal::from(unions) * settings.union_minutes;

    let accessories_minutes: Decimal = accessory_ids
        .iter()
        .copied()
        .collect::<BTreeSet<i64>>()
        .into_iter()
        .filter_map(|id| reference.accessory_minutes(id))
        .sum();

    let zone = zone_id.and_then(|id| reference.zone(id));
    let (zone_minutes, zone_name) = match zone {
        Some(zone) => (zone.travel_minutes, zone.name.clone()),
        None => {
            debug!(zone_id = ?zone_id, "Zone not resolved, assuming no travel");
            (Decimal::ZERO, UNKNOWN_ZONE_NAME.to_string())
        }
    };

    let stock_minutes = settings.stock_minutes;
    let total_minutes =
        module_minutes + union_minutes + accessories_minutes + zone_minutes + stock_minutes;

    CostBreakdown {
        module_minutes,
        union_minutes,
        accessories_minutes,
        zone_minutes,
        zone_name,
        stock_minutes,
        total_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Accessory, ModuleRate, ReferenceCatalog, Zone};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn empty_catalog() -> ReferenceCatalog {
        ReferenceCatalog::new(EngineSettings::default(), vec![], vec![], vec![], vec![])
    }

    fn venue_catalog() -> ReferenceCatalog {
        ReferenceCatalog::new(
            EngineSettings::default(),
            vec![
                ModuleRate {
                    name: "standard".to_string(),
                    base_minutes: dec("15"),
                },
                ModuleRate {
                    name: "corner".to_string(),
                    base_minutes: dec("9.5"),
                },
            ],
            vec![
                Accessory {
                    id: 1,
                    name: "Back bar shelving".to_string(),
                    extra_minutes: dec("15"),
                },
                Accessory {
                    id: 3,
                    name: "Draught beer tower".to_string(),
                    extra_minutes: dec("20"),
                },
            ],
            vec![Zone {
                id: 2,
                name: "Garden terrace".to_string(),
                travel_minutes: dec("15"),
            }],
            vec![],
        )
    }

    // ==========================================================================
    // CM-001: four modules with fallback rates and no extras
    // ==========================================================================
    #[test]
    fn test_cm_001_four_modules_with_fallback_rates() {
        let settings = EngineSettings::default();
        let breakdown = compute_breakdown(4, &[], None, &settings, &empty_catalog());

        assert_eq!(breakdown.module_minutes, dec("64"));
        assert_eq!(breakdown.union_minutes, dec("25"));
        assert_eq!(breakdown.accessories_minutes, dec("0"));
        assert_eq!(breakdown.zone_minutes, dec("0"));
        assert_eq!(breakdown.stock_minutes, dec("10"));
        assert_eq!(breakdown.total_minutes, dec("99"));
    }

    // ==========================================================================
    // CM-002: catalog rates take precedence over fallbacks
    // ==========================================================================
    #[test]
    fn test_cm_002_catalog_rates_used_when_present() {
        let settings = EngineSettings::default();
        let breakdown = compute_breakdown(2, &[], Some(2), &settings, &venue_catalog());

        // 2 × 15 + 2 × 9.5
        assert_eq!(breakdown.module_minutes, dec("49"));
        // 4 units, 3 unions
        assert_eq!(breakdown.union_minutes, dec("15"));
        assert_eq!(breakdown.zone_minutes, dec("15"));
        assert_eq!(breakdown.zone_name, "Garden terrace");
        assert_eq!(breakdown.total_minutes, dec("89"));
    }

    // ==========================================================================
    // CM-003: only one module kind missing from the catalog
    // ==========================================================================
    #[test]
    fn test_cm_003_partial_rates_fall_back_per_kind() {
        let settings = EngineSettings::default();
        let catalog = ReferenceCatalog::new(
            settings.clone(),
            vec![ModuleRate {
                name: "corner".to_string(),
                base_minutes: dec("10"),
            }],
            vec![],
            vec![],
            vec![],
        );

        let breakdown = compute_breakdown(3, &[], None, &settings, &catalog);

        // 3 × 12 (fallback) + 2 × 10 (catalog)
        assert_eq!(breakdown.module_minutes, dec("56"));
    }

    // ==========================================================================
    // CM-004: accessories sum over distinct known ids
    // ==========================================================================
    #[test]
    fn test_cm_004_accessories_ignore_unknown_and_repeated_ids() {
        let settings = EngineSettings::default();
        let breakdown =
            compute_breakdown(0, &[1, 3, 3, 42, -1], None, &settings, &venue_catalog());

        assert_eq!(breakdown.accessories_minutes, dec("35"));
    }

    // ==========================================================================
    // CM-005: unknown zone degrades to zero travel
    // ==========================================================================
    #[test]
    fn test_cm_005_unknown_zone_uses_sentinel() {
        let settings = EngineSettings::default();
        let breakdown = compute_breakdown(1, &[], Some(99), &settings, &venue_catalog());

        assert_eq!(breakdown.zone_minutes, dec("0"));
        assert_eq!(breakdown.zone_name, UNKNOWN_ZONE_NAME);
    }

    #[test]
    fn test_zero_modules_and_no_corners_has_no_unions() {
        let settings = EngineSettings {
            corner_count: 0,
            ..EngineSettings::default()
        };
        let breakdown = compute_breakdown(0, &[], None, &settings, &empty_catalog());

        assert_eq!(breakdown.module_minutes, dec("0"));
        assert_eq!(breakdown.union_minutes, dec("0"));
        assert_eq!(breakdown.total_minutes, dec("10"));
    }

    #[test]
    fn test_single_unit_has_no_unions() {
        let settings = EngineSettings {
            corner_count: 1,
            ..EngineSettings::default()
        };
        let breakdown = compute_breakdown(0, &[], None, &settings, &empty_catalog());

        assert_eq!(breakdown.union_minutes, dec("0"));
        assert_eq!(breakdown.module_minutes, dec("8"));
    }

    #[test]
    fn test_compute_breakdown_is_idempotent() {
        let settings = EngineSettings::default();
        let catalog = venue_catalog();

        let first = compute_breakdown(5, &[1, 3], Some(2), &settings, &catalog);
        let second = compute_breakdown(5, &[1, 3], Some(2), &settings, &catalog);

        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_union_minutes_follow_unit_count(module_count in 0u32..500, corners in 0u32..6) {
            let settings = EngineSettings { corner_count: corners, ..EngineSettings::default() };
            let breakdown = compute_breakdown(module_count, &[], None, &settings, &empty_catalog());

            let units = i64::from(module_count) + i64::from(corners);
            let expected = Decimal::from((units - 1).max(0)) * settings.union_minutes;
            prop_assert_eq!(breakdown.union_minutes, expected);
        }

        #[test]
        fn prop_total_is_sum_of_components(
            module_count in 0u32..200,
            accessories in proptest::collection::vec(-5i64..10, 0..6),
            zone_id in proptest::option::of(0i64..4),
        ) {
            let settings = EngineSettings::default();
            let b = compute_breakdown(module_count, &accessories, zone_id, &settings, &venue_catalog());

            prop_assert_eq!(
                b.total_minutes,
                b.module_minutes + b.union_minutes + b.accessories_minutes + b.zone_minutes + b.stock_minutes
            );
        }
    }
}
