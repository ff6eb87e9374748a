//! `visits` CLI -- check apartment-visit slot availability from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Decide a booking request (stdin -> stdout)
//! cat request.json | visits check
//!
//! # Decide from a file
//! visits check -i request.json
//!
//! # Show the outcome of every rule in evaluation order
//! visits explain -i request.json
//!
//! # Run the built-in demo booking
//! visits demo
//! ```
//!
//! A booking request is a JSON document:
//!
//! ```json
//! {
//!   "candidate": {
//!     "apartment": { "id": 0, "runner": { "id": 0 }, "zone": { "id": 0 } },
//!     "tenant": { "id": 0 },
//!     "date": "2024-01-01T09:00:00"
//!   },
//!   "scheduled": [],
//!   "holidays": []
//! }
//! ```
//!
//! `scheduled` defaults to empty and `holidays` may be omitted entirely
//! (omitted means no runner is ever on holiday).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};

use visit_engine::{
    availability, holiday, limits, slot, Apartment, Holiday, Runner, SlotPolicy, Tenant, Visit,
    Zone,
};

#[derive(Parser)]
#[command(
    name = "visits",
    version,
    about = "Apartment-visit slot availability checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether the requested slot may be booked
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print each rule's outcome in evaluation order
    Explain {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Run the built-in demo booking
    Demo,
}

/// The JSON booking request consumed by `check` and `explain`.
#[derive(Deserialize)]
struct BookingRequest {
    candidate: Visit,
    #[serde(default)]
    scheduled: Vec<Visit>,
    holidays: Option<Vec<Holiday>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let request = read_request(input.as_deref())?;
            let available = visit_engine::is_slot_available(
                &request.candidate,
                &request.scheduled,
                request.holidays.as_deref(),
            );
            println!("{}", if available { "available" } else { "unavailable" });
        }
        Commands::Explain { input } => {
            let request = read_request(input.as_deref())?;
            explain(&request);
        }
        Commands::Demo => demo(),
    }

    Ok(())
}

/// Print the outcome of each rule in the engine's evaluation order.
///
/// Unlike the decision itself this does not short-circuit: every rule is
/// reported even when an earlier one already failed.
fn explain(request: &BookingRequest) {
    let policy = SlotPolicy::default();
    let candidate = &request.candidate;

    let on_grid = slot::is_valid_slot(candidate.date, &policy);
    let apartment_open = availability::apartment_available(candidate.date, &candidate.apartment);
    let runner_working = holiday::runner_available(
        candidate.date,
        candidate.apartment.runner.id,
        request.holidays.as_deref(),
    );
    let within_limits = !limits::over_visit_limit(candidate, &request.scheduled);

    println!("slot grid:           {}", verdict(on_grid));
    println!("apartment available: {}", verdict(apartment_open));
    println!("runner available:    {}", verdict(runner_working));
    println!("visit limits:        {}", verdict(within_limits));

    let available = on_grid && apartment_open && runner_working && within_limits;
    println!(
        "decision:            {}",
        if available { "available" } else { "unavailable" }
    );
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

/// The demo booking: one unconstrained apartment, an empty calendar,
/// and a Monday-morning slot.
fn demo() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let apartment = Apartment {
        id: 0,
        runner: Runner { id: 0 },
        zone: Zone { id: 0 },
        avail_days: None,
        avail_times: None,
    };
    let candidate = Visit {
        apartment: apartment.clone(),
        tenant: Tenant { id: 0 },
        date,
    };

    if visit_engine::is_slot_available(&candidate, &[], None) {
        println!("Scheduled: APT {} at {}", apartment.id, date);
    } else {
        println!("Failed: APT {} at {}", apartment.id, date);
    }
}

/// Read a booking request from a file or stdin and parse it.
fn read_request(path: Option<&str>) -> Result<BookingRequest> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse booking request")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
