//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading engine
//! settings and reference tables from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AccessoriesConfig, EngineSettings, ModulesConfig, ReferenceCatalog, StaffConfig, ZonesConfig,
};

/// Loads and provides access to the reference catalog.
///
/// # Directory Structure
///
/// ```text
/// config/bar-ops/
/// ├── settings.yaml     # Engine constants (all optional, defaults apply)
/// ├── modules.yaml      # Module rates ("standard", "corner")
/// ├── accessories.yaml  # Selectable accessories
/// ├── zones.yaml        # Venue zones and travel minutes
/// └── staff.yaml        # Fixed staff pool
/// ```
///
/// Every engine constant can be overridden from the environment using its
/// upper-case name (`STOCK_MINUTES`, `MAX_STAFF`, `EFFICIENCY_FACTOR`, ...).
/// Overrides are applied before validation, so a bad override fails the load.
///
/// # Example
///
/// ```no_run
/// use bar_ops_engine::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/bar-ops")?;
/// println!("Zones loaded: {}", loader.catalog().zones().count());
/// # Ok::<(), bar_ops_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: ReferenceCatalog,
}

impl CatalogLoader {
    /// Loads the catalog from a directory, applying overrides from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - An environment override cannot be parsed
    /// - The resulting settings fail [`EngineSettings::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Self::load_with_overrides(path, |key| std::env::var(key).ok())
    }

    /// Loads the catalog from a directory, reading overrides through `lookup`.
    pub fn load_with_overrides<P, F>(path: P, lookup: F) -> EngineResult<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();

        let mut settings = Self::load_yaml::<EngineSettings>(&path.join("settings.yaml"))?;
        apply_overrides(&mut settings, lookup)?;
        settings.validate()?;

        let modules = Self::load_yaml::<ModulesConfig>(&path.join("modules.yaml"))?;
        let accessories = Self::load_yaml::<AccessoriesConfig>(&path.join("accessories.yaml"))?;
        let zones = Self::load_yaml::<ZonesConfig>(&path.join("zones.yaml"))?;
        let staff = Self::load_yaml::<StaffConfig>(&path.join("staff.yaml"))?;

        let catalog = ReferenceCatalog::new(
            settings,
            modules.modules,
            accessories.accessories,
            zones.zones,
            staff.staff,
        );

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Consumes the loader, returning the catalog.
    pub fn into_catalog(self) -> ReferenceCatalog {
        self.catalog
    }
}

/// Overwrites settings with any values `lookup` returns for their
/// environment names. Blank values are ignored.
pub fn apply_overrides<F>(settings: &mut EngineSettings, lookup: F) -> EngineResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    for (key, slot) in [
        ("STOCK_MINUTES", &mut settings.stock_minutes),
        ("UNION_MINUTES", &mut settings.union_minutes),
        ("MODULE_BASE_FALLBACK", &mut settings.module_base_fallback),
        ("CORNER_BASE_FALLBACK", &mut settings.corner_base_fallback),
        ("EFFICIENCY_FACTOR", &mut settings.efficiency_factor),
        ("ETT_RATE", &mut settings.ett_rate),
        ("FOUR_HOURS_THRESHOLD", &mut settings.four_hours_threshold),
    ] {
        if let Some(raw) = read(key) {
            *slot = Decimal::from_str(raw.trim()).map_err(|e| env_error(key, e))?;
        }
    }

    for (key, slot) in [
        ("CORNER_COUNT", &mut settings.corner_count),
        ("MIN_STAFF", &mut settings.min_staff),
        ("MAX_STAFF", &mut settings.max_staff),
    ] {
        if let Some(raw) = read(key) {
            *slot = raw.trim().parse::<u32>().map_err(|e| env_error(key, e))?;
        }
    }

    Ok(())
}

fn env_error(key: &str, error: impl std::fmt::Display) -> EngineError {
    EngineError::ConfigParseError {
        path: format!("env:{}", key),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_path() -> &'static str {
        "./config/bar-ops"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_load_valid_catalog() {
        let result = CatalogLoader::load_with_overrides(config_path(), no_env);
        assert!(result.is_ok(), "Failed to load catalog: {:?}", result.err());

        let loader = result.unwrap();
        let catalog = loader.catalog();
        assert_eq!(catalog.settings(), &EngineSettings::default());
        assert_eq!(catalog.modules().len(), 2);
        assert_eq!(catalog.zones().count(), 4);
        assert_eq!(catalog.accessories().count(), 5);
        assert_eq!(catalog.staff().len(), 3);
    }

    #[test]
    fn test_loaded_zone_rows() {
        let loader = CatalogLoader::load_with_overrides(config_path(), no_env).unwrap();
        let zone = loader.catalog().zone(2).unwrap();

        assert_eq!(zone.name, "Garden terrace");
        assert_eq!(zone.travel_minutes, dec("15"));
    }

    #[test]
    fn test_loaded_fixed_capacity() {
        let loader = CatalogLoader::load_with_overrides(config_path(), no_env).unwrap();
        assert_eq!(loader.catalog().fixed_capacity_hours(), dec("400"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = CatalogLoader::load_with_overrides("/nonexistent/path", no_env);

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_overrides_replace_settings() {
        let env = env_of(&[
            ("STOCK_MINUTES", "20"),
            ("MAX_STAFF", "6"),
            ("EFFICIENCY_FACTOR", "0.9"),
        ]);
        let loader = CatalogLoader::load_with_overrides(config_path(), env).unwrap();
        let settings = loader.catalog().settings();

        assert_eq!(settings.stock_minutes, dec("20"));
        assert_eq!(settings.max_staff, 6);
        assert_eq!(settings.efficiency_factor, dec("0.9"));
        assert_eq!(settings.union_minutes, dec("5"));
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let mut settings = EngineSettings::default();
        apply_overrides(&mut settings, env_of(&[("UNION_MINUTES", "  ")])).unwrap();
        assert_eq!(settings.union_minutes, dec("5"));
    }

    #[test]
    fn test_unparseable_env_override_fails() {
        let mut settings = EngineSettings::default();
        let result = apply_overrides(&mut settings, env_of(&[("MIN_STAFF", "two")]));

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "env:MIN_STAFF");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_override_fails_validation_at_load() {
        let env = env_of(&[("MIN_STAFF", "25")]);
        let result = CatalogLoader::load_with_overrides(config_path(), env);

        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }
}
