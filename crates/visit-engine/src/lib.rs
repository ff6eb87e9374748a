//! # visit-engine
//!
//! Pure decision core for apartment-visit bookings: given a candidate
//! appointment, the already-scheduled visits, and the runners' holiday
//! periods, decide whether the slot may be booked.
//!
//! The engine is a chain of independent rule predicates evaluated in a
//! fixed order with short-circuit AND semantics. It holds no state,
//! writes nothing, and treats every input as an immutable snapshot;
//! persistence and booking-race coordination belong to the caller.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use visit_engine::{is_slot_available, Apartment, Runner, Tenant, Visit, Zone};
//!
//! let candidate = Visit {
//!     apartment: Apartment {
//!         id: 0,
//!         runner: Runner { id: 0 },
//!         zone: Zone { id: 0 },
//!         avail_days: None,
//!         avail_times: None,
//!     },
//!     tenant: Tenant { id: 0 },
//!     // A Monday at 09:00.
//!     date: NaiveDate::from_ymd_opt(2024, 1, 1)
//!         .unwrap()
//!         .and_hms_opt(9, 0, 0)
//!         .unwrap(),
//! };
//!
//! assert!(is_slot_available(&candidate, &[], None));
//! ```
//!
//! ## Modules
//!
//! - [`entities`] -- immutable value records (tenants, runners, zones, apartments, holidays, visits)
//! - [`config`] -- the slot-grid policy (visiting days, hour band, minute marks)
//! - [`slot`] -- slot-grid validity
//! - [`availability`] -- per-apartment availability constraints
//! - [`holiday`] -- runner holiday conflicts
//! - [`limits`] -- the visit-limit scan (slot capacity, weekly cap, consecutive day, zone revisit)
//! - [`decision`] -- the orchestrator
//! - [`error`] -- error types

pub mod availability;
pub mod config;
pub mod decision;
pub mod entities;
pub mod error;
pub mod holiday;
pub mod limits;
pub mod slot;

pub use config::SlotPolicy;
pub use decision::{is_slot_available, is_slot_available_with};
pub use entities::{Apartment, Holiday, Runner, Tenant, TimeWindow, Visit, Zone};
pub use error::EngineError;
