//! Immutable value records describing the booking domain.
//!
//! Everything here is a plain fact constructed by the caller (typically
//! loaded from storage) and passed into the decision functions by
//! reference. The engine never mutates or destroys an entity; the only
//! behavior is closed-interval membership on [`TimeWindow`].

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A prospective visitor. Identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: u32,
}

/// A staff member who performs apartment visits. Identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    pub id: u32,
}

/// Geographic grouping of apartments, used to detect a runner doubling
/// back on their same-day route. Identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: u32,
}

/// A closed `[start, end]` interval of naive instants.
///
/// Both bounds are inclusive; a window with `start == end` contains
/// exactly that one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Build a window, rejecting reversed bounds.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidInterval`] when `end < start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end < start {
            return Err(EngineError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whether `instant` falls within the window, bounds included.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// An apartment that can be visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: u32,
    /// The runner normally assigned to this apartment.
    pub runner: Runner,
    pub zone: Zone,
    /// Weekdays on which this apartment accepts visits. `None` means
    /// every day is allowed.
    pub avail_days: Option<Vec<Weekday>>,
    /// Windows within which this apartment accepts visits. `None` means
    /// any time (the global visiting-hours policy still applies).
    pub avail_times: Option<Vec<TimeWindow>>,
}

/// A period during which a specific runner is unavailable for any visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub runner: Runner,
    pub window: TimeWindow,
}

/// A single appointment: one tenant visiting one apartment at one
/// instant. Candidate and already-scheduled visits share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub apartment: Apartment,
    pub tenant: Tenant,
    pub date: NaiveDateTime,
}
