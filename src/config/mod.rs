//! Configuration loading and management for the Bar Ops engine.
//!
//! This module loads the engine constants and reference tables from YAML
//! files, applies environment overrides, and reads the server settings.
//!
//! # Example
//!
//! ```no_run
//! use bar_ops_engine::config::CatalogLoader;
//!
//! let loader = CatalogLoader::load("./config/bar-ops").unwrap();
//! println!("Max staff: {}", loader.catalog().settings().max_staff);
//! ```

mod loader;
mod server;
mod types;

pub use loader::{CatalogLoader, apply_overrides};
pub use server::{DEFAULT_CONFIG_DIR, DEFAULT_PORT, DEV_ORIGINS, ServerConfig};
pub use types::{
    AccessoriesConfig, Accessory, EngineSettings, ModuleRate, ModulesConfig, ReferenceCatalog,
    StaffConfig, StaffMember, Zone, ZonesConfig,
};
