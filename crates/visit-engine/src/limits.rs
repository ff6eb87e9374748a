//! The visit-limit scan: would booking the candidate overload the
//! apartment or its runner?
//!
//! A single pass over the scheduled-visit collection enforces four
//! limits: slot capacity (at most two tenants per apartment slot), a
//! weekly cap on visits to the same apartment, a consecutive-day rule,
//! and a zone-revisit rule over the runner's same-day route. Collection
//! order is significant: it decides which scheduled visit is seen first
//! by the short-circuit exits and the accumulation order of the runner's
//! prior visits today.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};

use crate::entities::{Visit, Zone};

/// Maximum visits to one apartment within its booking week (Monday
/// through Saturday). The visit that pushes the count past the cap
/// blocks.
pub const WEEKLY_VISIT_CAP: u32 = 30;

/// Whether `scheduled_instant` is "yesterday" relative to the candidate.
///
/// Yesterday is the identical instant one calendar day earlier, except
/// when the candidate falls on a Monday: then it is three days earlier,
/// the preceding Friday. The comparison is exact-instant equality, so
/// only a prior visit at the same time of day matches.
pub fn visited_yesterday(
    candidate_instant: NaiveDateTime,
    scheduled_instant: NaiveDateTime,
) -> bool {
    let days_back = if candidate_instant.weekday() == Weekday::Mon {
        3
    } else {
        1
    };

    scheduled_instant == candidate_instant - Duration::days(days_back)
}

/// Whether a scheduled visit on a *different* apartment holds exactly the
/// candidate's instant.
///
/// When this fires, the whole visit-limit scan exits as *not blocked*:
/// another apartment owning the identical slot makes the remaining
/// scheduled visits irrelevant to this candidate. It terminates the scan,
/// it does not merely skip one entry.
pub fn slot_claimed_by_other_apartment(candidate: &Visit, scheduled: &Visit) -> bool {
    scheduled.apartment.id != candidate.apartment.id && scheduled.date == candidate.date
}

/// Whether the runner's next stop would re-enter a zone they already
/// visited and then left earlier today.
///
/// `prior_today` holds the runner's strictly-earlier visits on the
/// candidate's day, in schedule order. The rule fires only when the most
/// recent prior visit sits in a different zone than the target and some
/// earlier prior visit was already in the target zone.
pub fn reenters_abandoned_zone(prior_today: &[&Visit], target_zone: &Zone) -> bool {
    match prior_today.split_last() {
        Some((last, earlier)) if last.apartment.zone != *target_zone => earlier
            .iter()
            .any(|visit| visit.apartment.zone == *target_zone),
        _ => false,
    }
}

/// Whether booking `candidate` would violate a visit limit.
///
/// Scans `scheduled_visits` in collection order. For visits on the same
/// apartment as the candidate:
///
/// - **Slot capacity**: a visit at exactly the candidate's instant bumps
///   the slot occupancy; once two scheduled tenants hold the slot (the
///   candidate would be the third), the scan blocks.
/// - **Weekly cap**: visits within the candidate's booking week bump the
///   week counter, which starts at 1 for the candidate itself. The week
///   runs Monday through Saturday and both bounds carry the candidate's
///   time of day.
/// - **Consecutive day**: the week counter exceeding
///   [`WEEKLY_VISIT_CAP`], or a scheduled visit matching
///   [`visited_yesterday`], blocks.
///
/// A visit on a different apartment at exactly the candidate's instant
/// ends the entire scan as *not blocked*, see
/// [`slot_claimed_by_other_apartment`].
///
/// Along the way, strictly-earlier same-day visits performed by the
/// candidate apartment's runner are collected, same-apartment visits
/// included; after the scan, [`reenters_abandoned_zone`] decides the
/// zone-revisit rule over that list.
pub fn over_visit_limit(candidate: &Visit, scheduled_visits: &[Visit]) -> bool {
    let candidate_instant = candidate.date;
    let apartment = &candidate.apartment;
    let runner_id = apartment.runner.id;

    let weekday_offset = i64::from(candidate_instant.weekday().num_days_from_monday());
    let week_start = candidate_instant - Duration::days(weekday_offset);
    let week_end = candidate_instant + Duration::days(5 - weekday_offset);

    // The candidate itself counts toward the week.
    let mut week_visits: u32 = 1;
    let mut slot_occupancy: u32 = 0;
    let mut prior_today: Vec<&Visit> = Vec::new();

    for scheduled in scheduled_visits {
        let scheduled_instant = scheduled.date;

        if scheduled.apartment.id == apartment.id {
            if scheduled_instant == candidate_instant {
                slot_occupancy += 1;
                if slot_occupancy == 2 {
                    return true;
                }
            }

            if week_start <= scheduled_instant && scheduled_instant <= week_end {
                week_visits += 1;
            }

            if week_visits > WEEKLY_VISIT_CAP
                || visited_yesterday(candidate_instant, scheduled_instant)
            {
                return true;
            }
        } else if slot_claimed_by_other_apartment(candidate, scheduled) {
            return false;
        }

        if scheduled.apartment.runner.id == runner_id
            && scheduled_instant.date() == candidate_instant.date()
            && scheduled_instant < candidate_instant
        {
            prior_today.push(scheduled);
        }
    }

    reenters_abandoned_zone(&prior_today, &apartment.zone)
}
