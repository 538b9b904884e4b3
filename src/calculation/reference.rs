//! Reference-data lookups used by the cost model.
//!
//! The cost model never reads the catalog directly; it goes through the
//! [`ReferenceData`] trait so that any store can back it. Every lookup
//! returns an `Option`, and the caller decides what a miss degrades to.

use rust_decimal::Decimal;

use crate::config::{ReferenceCatalog, Zone};

/// The two module kinds every layout is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// A straight bar section; the count is chosen per layout.
    Standard,
    /// A corner section; every layout has `corner_count` of them.
    Corner,
}

impl ModuleKind {
    /// The row name used for this kind in the module rate table.
    pub fn catalog_name(self) -> &'static str {
        match self {
            ModuleKind::Standard => "standard",
            ModuleKind::Corner => "corner",
        }
    }
}

/// Read-only lookups the cost model needs.
pub trait ReferenceData {
    /// Minutes to assemble one module of `kind`, if the table has a row.
    fn module_rate(&self, kind: ModuleKind) -> Option<Decimal>;

    /// Extra minutes for accessory `id`, if it exists.
    fn accessory_minutes(&self, id: i64) -> Option<Decimal>;

    /// The zone with `id`, if it exists.
    fn zone(&self, id: i64) -> Option<&Zone>;
}

impl ReferenceData for ReferenceCatalog {
    fn module_rate(&self, kind: ModuleKind) -> Option<Decimal> {
        self.modules()
            .iter()
            .find(|m| m.name == kind.catalog_name())
            .map(|m| m.base_minutes)
    }

    fn accessory_minutes(&self, id: i64) -> Option<Decimal> {
        self.accessory(id).map(|a| a.extra_minutes)
    }

    fn zone(&self, id: i64) -> Option<&Zone> {
        ReferenceCatalog::zone(self, id)
    }
}
