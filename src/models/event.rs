//! Calendar event models.
//!
//! This module defines the [`Event`] stored on the calendar and the
//! [`EventDraft`] callers send to create or replace one.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A scheduled bar setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Calendar-assigned id.
    pub id: u64,
    /// Display name.
    pub event_name: String,
    /// Day of the event.
    pub event_date: NaiveDate,
    /// Zone the bar is set up in, if known.
    pub zone_id: Option<i64>,
    /// Staff hours the event consumes from the fixed pool.
    pub required_hours: Decimal,
    /// Bar layout as sent by the client; stored verbatim.
    pub bar_config: Option<serde_json::Value>,
    /// When the event was first stored.
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied fields of an [`Event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Display name; must not be blank.
    pub event_name: String,
    /// Day of the event.
    pub event_date: NaiveDate,
    /// Zone the bar is set up in.
    #[serde(default)]
    pub zone_id: Option<i64>,
    /// Staff hours; defaults to zero.
    #[serde(default)]
    pub required_hours: Decimal,
    /// Bar layout.
    #[serde(default)]
    pub bar_config: Option<serde_json::Value>,
}

impl EventDraft {
    /// Rejects drafts the calendar should not store.
    ///
    /// # Example
    ///
    /// ```
    /// use bar_ops_engine::models::EventDraft;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let draft = EventDraft {
    ///     event_name: "  ".to_string(),
    ///     event_date: NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
    ///     zone_id: None,
    ///     required_hours: Decimal::ZERO,
    ///     bar_config: None,
    /// };
    /// assert!(draft.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.event_name.trim().is_empty() {
            return Err(EngineError::InvalidEvent {
                field: "event_name".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        if self.required_hours < Decimal::ZERO {
            return Err(EngineError::InvalidEvent {
                field: "required_hours".to_string(),
                message: format!("must not be negative (got {})", self.required_hours),
            });
        }

        Ok(())
    }
}
