//! Property-based tests for the booking decision using proptest.
//!
//! These verify invariants that should hold for *any* instant, not just
//! the specific calendars in the example-based tests.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use visit_engine::{
    is_slot_available, Apartment, Holiday, Runner, Tenant, TimeWindow, Visit, Zone,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Instants on the default policy's grid: Monday through Friday starting
/// from 2024-01-01 (a Monday), hours 9 through 17, quarter-hour marks.
fn arb_grid_instant() -> impl Strategy<Value = NaiveDateTime> {
    (
        0i64..104,
        0i64..=4,
        9u32..=17,
        prop_oneof![Just(0u32), Just(15u32), Just(30u32), Just(45u32)],
    )
        .prop_map(|(week, dow, hour, minute)| {
            let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            (monday + Duration::days(week * 7 + dow))
                .and_hms_opt(hour, minute, 0)
                .unwrap()
        })
}

/// Arbitrary instants, including weekends, nights, and odd seconds.
fn arb_any_instant() -> impl Strategy<Value = NaiveDateTime> {
    (
        2024i32..=2026,
        1u32..=12,
        1u32..=28,
        0u32..=23,
        0u32..=59,
        0u32..=59,
    )
        .prop_map(|(y, m, d, h, min, s)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, s)
                .unwrap()
        })
}

fn unconstrained(id: u32) -> Apartment {
    Apartment {
        id,
        runner: Runner { id: 0 },
        zone: Zone { id: 0 },
        avail_days: None,
        avail_times: None,
    }
}

fn candidate_at(date: NaiveDateTime) -> Visit {
    Visit {
        apartment: unconstrained(0),
        tenant: Tenant { id: 0 },
        date,
    }
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: instants on the valid grid with no constraints are accepted
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn grid_instant_with_empty_calendar_is_available(date in arb_grid_instant()) {
        prop_assert!(is_slot_available(&candidate_at(date), &[], None));
    }
}

// ---------------------------------------------------------------------------
// Property 2: off-grid minutes are never accepted
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn off_grid_minute_is_never_available(
        date in arb_grid_instant(),
        minute in 0u32..60,
    ) {
        prop_assume!(![0, 15, 30, 45].contains(&minute));
        let off_grid = date.with_minute(minute).unwrap();
        prop_assert!(!is_slot_available(&candidate_at(off_grid), &[], None));
    }
}

// ---------------------------------------------------------------------------
// Property 3: hours outside the visiting band are never accepted
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn hour_outside_band_is_never_available(
        date in arb_grid_instant(),
        hour in 0u32..24,
    ) {
        prop_assume!(!(9..=17).contains(&hour));
        let off_hours = date.with_hour(hour).unwrap();
        prop_assert!(!is_slot_available(&candidate_at(off_hours), &[], None));
    }
}

// ---------------------------------------------------------------------------
// Property 4: weekends are never accepted under the default policy
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn weekend_is_never_available(
        week in 0i64..104,
        dow in 5i64..=6,
        hour in 9u32..=17,
    ) {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let date = (monday + Duration::days(week * 7 + dow))
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        prop_assert!(!is_slot_available(&candidate_at(date), &[], None));
    }
}

// ---------------------------------------------------------------------------
// Property 5: a holiday covering the instant always blocks
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn covering_holiday_always_blocks(date in arb_grid_instant()) {
        let holidays = vec![Holiday {
            runner: Runner { id: 0 },
            window: TimeWindow::new(date - Duration::days(1), date + Duration::days(1)).unwrap(),
        }];
        prop_assert!(!is_slot_available(&candidate_at(date), &[], Some(&holidays)));
    }
}

// ---------------------------------------------------------------------------
// Property 6: a third tenant on the same slot always blocks
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn third_tenant_always_blocks(date in arb_grid_instant()) {
        let scheduled = vec![
            Visit { apartment: unconstrained(0), tenant: Tenant { id: 1 }, date },
            Visit { apartment: unconstrained(0), tenant: Tenant { id: 2 }, date },
        ];
        prop_assert!(!is_slot_available(&candidate_at(date), &scheduled, None));
    }
}

// ---------------------------------------------------------------------------
// Property 7: the decision is total and deterministic
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn decision_is_deterministic(date in arb_any_instant()) {
        let candidate = candidate_at(date);
        let first = is_slot_available(&candidate, &[], None);
        let second = is_slot_available(&candidate, &[], None);
        prop_assert_eq!(first, second);
    }
}
