//! Calendar events owned by a realtor.

use chrono::{DateTime, Utc};
use realty_shared::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of calendar entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventType {
    /// Property viewing with a client.
    #[default]
    Viewing,
    /// Deal signing.
    Deal,
    /// Anything else.
    Other,
}

impl CalendarEventType {
    /// Canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Deal => "deal",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for CalendarEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event window that ends before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("end_time must not be before start_time")]
pub struct WindowError;

impl From<WindowError> for AppError {
    fn from(err: WindowError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// A start/end pair with `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Builds a window.
    ///
    /// # Errors
    ///
    /// Returns `WindowError` if `end` precedes `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, WindowError> {
        if end < start {
            return Err(WindowError);
        }
        Ok(Self { start, end })
    }

    /// Window start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Window end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

/// Payload for creating a calendar event.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCalendarEvent {
    /// Property the event concerns.
    pub property_id: i32,
    /// Event kind.
    #[serde(default)]
    pub event_type: CalendarEventType,
    /// Title.
    pub title: String,
    /// Optional notes.
    #[serde(default)]
    pub description: Option<String>,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// End time.
    pub end_time: DateTime<Utc>,
}

impl NewCalendarEvent {
    /// Validated time window of the new event.
    ///
    /// # Errors
    ///
    /// Returns `WindowError` if the end precedes the start.
    pub fn window(&self) -> Result<TimeWindow, WindowError> {
        TimeWindow::new(self.start_time, self.end_time)
    }
}

/// Partial update of a calendar event. Absent fields are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarEventPatch {
    /// New property.
    #[serde(default)]
    pub property_id: Option<i32>,
    /// New kind.
    #[serde(default)]
    pub event_type: Option<CalendarEventType>,
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New notes, or `null` to clear them.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    /// New start.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    /// New end.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

impl CalendarEventPatch {
    /// Merges the patched times onto the current ones and validates the result.
    ///
    /// # Errors
    ///
    /// Returns `WindowError` if the merged end precedes the merged start.
    pub fn window(
        &self,
        current_start: DateTime<Utc>,
        current_end: DateTime<Utc>,
    ) -> Result<TimeWindow, WindowError> {
        TimeWindow::new(
            self.start_time.unwrap_or(current_start),
            self.end_time.unwrap_or(current_end),
        )
    }
}
