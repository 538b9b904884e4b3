//! Application state for the Bar Ops API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::EventCalendar;
use crate::config::ReferenceCatalog;

/// Shared application state.
///
/// The catalog is read-only after startup; the calendar carries its own lock.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<ReferenceCatalog>,
    calendar: Arc<EventCalendar>,
}

impl AppState {
    /// Creates a new application state with an empty calendar.
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self::with_calendar(catalog, EventCalendar::new())
    }

    /// Creates a new application state around an existing calendar.
    pub fn with_calendar(catalog: ReferenceCatalog, calendar: EventCalendar) -> Self {
        Self {
            catalog: Arc::new(catalog),
            calendar: Arc::new(calendar),
        }
    }

    /// Returns the reference catalog.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Returns the event calendar.
    pub fn calendar(&self) -> &EventCalendar {
        &self.calendar
    }
}
