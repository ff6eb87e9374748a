//! Slot-grid validity: is an instant a bookable appointment slot at all?
//!
//! Independent of any apartment, runner, or calendar state. Appointments
//! sit on an exact sub-hour grid within configured visiting days and
//! hours.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::config::SlotPolicy;

/// Whether `instant` lands on the policy's slot grid: a permitted
/// weekday, an hour within the inclusive `[min_hour, max_hour]` band, a
/// permitted minute mark, and a seconds component of exactly zero.
pub fn is_valid_slot(instant: NaiveDateTime, policy: &SlotPolicy) -> bool {
    let valid_day = policy.visiting_days.contains(&instant.weekday());
    let valid_hour = policy.min_hour <= instant.hour() && instant.hour() <= policy.max_hour;

    valid_day
        && valid_hour
        && policy.slot_minutes.contains(&instant.minute())
        && instant.second() == 0
}
