//! Per-apartment availability constraints.

use chrono::{Datelike, NaiveDateTime};

use crate::entities::Apartment;

/// Whether the apartment accepts visits at `instant`.
///
/// When `avail_days` is set, the instant's weekday must be a member.
/// When `avail_times` is set, the instant must fall inside at least one
/// closed window. Both constraints must pass when present; an apartment
/// declaring neither accepts any instant.
pub fn apartment_available(instant: NaiveDateTime, apartment: &Apartment) -> bool {
    if let Some(days) = &apartment.avail_days {
        if !days.contains(&instant.weekday()) {
            return false;
        }
    }

    if let Some(windows) = &apartment.avail_times {
        return windows.iter().any(|window| window.contains(instant));
    }

    true
}
