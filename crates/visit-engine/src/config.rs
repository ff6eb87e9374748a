//! Visiting-policy configuration.
//!
//! The slot grid is an explicit value passed to the decision functions,
//! not a set of global constants: which weekdays may be visited, the
//! inclusive hour band, and the permitted minute marks within an hour.

use chrono::Weekday;

use crate::error::{EngineError, Result};

/// The slot grid a candidate instant must land on.
///
/// The default policy is Monday through Friday, hours 9 through 17
/// inclusive, quarter-hour marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPolicy {
    pub(crate) visiting_days: Vec<Weekday>,
    pub(crate) min_hour: u32,
    pub(crate) max_hour: u32,
    pub(crate) slot_minutes: Vec<u32>,
}

impl SlotPolicy {
    /// Build a validated policy.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidPolicy`] when the hour band is
    /// reversed or runs past 23, when a minute mark is not a valid
    /// minute, or when either set is empty. A policy that can never
    /// accept an instant is treated as a contract violation rather than
    /// a configuration.
    pub fn new(
        visiting_days: Vec<Weekday>,
        min_hour: u32,
        max_hour: u32,
        slot_minutes: Vec<u32>,
    ) -> Result<Self> {
        if visiting_days.is_empty() {
            return Err(EngineError::InvalidPolicy("no visiting days".into()));
        }
        if slot_minutes.is_empty() {
            return Err(EngineError::InvalidPolicy("no slot minute marks".into()));
        }
        if min_hour > max_hour {
            return Err(EngineError::InvalidPolicy(format!(
                "min hour {min_hour} exceeds max hour {max_hour}"
            )));
        }
        if max_hour > 23 {
            return Err(EngineError::InvalidPolicy(format!(
                "max hour {max_hour} is not a valid hour"
            )));
        }
        if let Some(mark) = slot_minutes.iter().find(|&&mark| mark > 59) {
            return Err(EngineError::InvalidPolicy(format!(
                "{mark} is not a valid minute mark"
            )));
        }

        Ok(Self {
            visiting_days,
            min_hour,
            max_hour,
            slot_minutes,
        })
    }
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            visiting_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            min_hour: 9,
            max_hour: 17,
            slot_minutes: vec![0, 15, 30, 45],
        }
    }
}
