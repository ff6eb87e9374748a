//! The orchestrator: combine the rule predicates into one decision.

use crate::availability::apartment_available;
use crate::config::SlotPolicy;
use crate::entities::{Holiday, Visit};
use crate::holiday::runner_available;
use crate::limits::over_visit_limit;
use crate::slot::is_valid_slot;

/// Decide whether `candidate`'s slot may be booked, under the default
/// visiting policy.
///
/// `scheduled` may be empty; its order is significant (it determines
/// which scheduled visit is seen first by the scan's short-circuit
/// exits). `None` for `holidays` means no runner is ever on holiday.
pub fn is_slot_available(
    candidate: &Visit,
    scheduled: &[Visit],
    holidays: Option<&[Holiday]>,
) -> bool {
    is_slot_available_with(&SlotPolicy::default(), candidate, scheduled, holidays)
}

/// Decide whether `candidate`'s slot may be booked under an explicit
/// policy.
///
/// The rules run in fixed order with short-circuit AND: slot-grid
/// validity, apartment availability, runner availability, then the
/// visit-limit scan. The scan is the only check that walks the scheduled
/// collection and runs only once the cheaper checks have passed.
pub fn is_slot_available_with(
    policy: &SlotPolicy,
    candidate: &Visit,
    scheduled: &[Visit],
    holidays: Option<&[Holiday]>,
) -> bool {
    is_valid_slot(candidate.date, policy)
        && apartment_available(candidate.date, &candidate.apartment)
        && runner_available(candidate.date, candidate.apartment.runner.id, holidays)
        && !over_visit_limit(candidate, scheduled)
}
