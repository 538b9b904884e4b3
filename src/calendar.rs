//! In-memory event calendar.
//!
//! Events are kept in a [`BTreeMap`] behind a tokio [`RwLock`]; ids are
//! handed out from 1 upwards and never reused.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{Event, EventDraft};

#[derive(Debug, Default)]
struct CalendarInner {
    next_id: u64,
    events: BTreeMap<u64, Event>,
}

/// The calendar of scheduled bar setups.
#[derive(Debug, Default)]
pub struct EventCalendar {
    inner: RwLock<CalendarInner>,
}

impl EventCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every event, latest `event_date` first. Events on the same
    /// day are ordered newest id first.
    pub async fn list(&self) -> Vec<Event> {
        let inner = self.inner.read().await;
        let mut events: Vec<Event> = inner.events.values().cloned().collect();
        events.sort_by(|a, b| b.event_date.cmp(&a.event_date).then(b.id.cmp(&a.id)));
        events
    }

    /// Looks up a single event.
    pub async fn get(&self, id: u64) -> Option<Event> {
        self.inner.read().await.events.get(&id).cloned()
    }

    /// Validates and stores a new event.
    pub async fn create(&self, draft: EventDraft) -> EngineResult<Event> {
        draft.validate()?;

        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let event = Event {
            id: inner.next_id,
            event_name: draft.event_name,
            event_date: draft.event_date,
            zone_id: draft.zone_id,
            required_hours: draft.required_hours,
            bar_config: draft.bar_config,
            created_at: Utc::now(),
        };
        inner.events.insert(event.id, event.clone());
        Ok(event)
    }

    /// Replaces the caller-supplied fields of an existing event.
    ///
    /// # Errors
    ///
    /// [`EngineError::EventNotFound`] if no event has `id`, or
    /// [`EngineError::InvalidEvent`] if the draft is rejected.
    pub async fn update(&self, id: u64, draft: EventDraft) -> EngineResult<Event> {
        draft.validate()?;

        let mut inner = self.inner.write().await;
        let event = inner
            .events
            .get_mut(&id)
            .ok_or(EngineError::EventNotFound { id })?;

        event.event_name = draft.event_name;
        event.event_date = draft.event_date;
        event.zone_id = draft.zone_id;
        event.required_hours = draft.required_hours;
        event.bar_config = draft.bar_config;
        Ok(event.clone())
    }

    /// Removes an event. Returns whether it existed.
    pub async fn delete(&self, id: u64) -> bool {
        self.inner.write().await.events.remove(&id).is_some()
    }

    /// Sum of `required_hours` over events in the calendar month of `date`.
    pub async fn assigned_hours_in_month(&self, date: NaiveDate) -> Decimal {
        self.inner
            .read()
            .await
            .events
            .values()
            .filter(|e| e.event_date.year() == date.year() && e.event_date.month() == date.month())
            .map(|e| e.required_hours)
            .sum()
    }
}
