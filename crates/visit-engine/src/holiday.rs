//! Runner holiday conflicts.

use chrono::NaiveDateTime;

use crate::entities::Holiday;

/// Whether the runner identified by `runner_id` is working at `instant`.
///
/// `None` for the holiday collection means no runner is ever on holiday.
/// The runner is unavailable iff one of their holidays covers the
/// instant; the first covering holiday short-circuits the scan.
pub fn runner_available(
    instant: NaiveDateTime,
    runner_id: u32,
    holidays: Option<&[Holiday]>,
) -> bool {
    let Some(holidays) = holidays else {
        return true;
    };

    !holidays
        .iter()
        .any(|holiday| holiday.runner.id == runner_id && holiday.window.contains(instant))
}
