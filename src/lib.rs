//! # Slot Reservation
//!
//! Nearest-slot search and retry orchestration for booking time slots against a
//! stateful third-party scheduling site.
//!
//! The site itself (login, scraping, subscribe buttons) stays behind the
//! [`core::BookingPort`] trait. This crate decides *which* slot to try, *when*
//! to give up on a request, and *when* to come back for another round.
//!
//! ## Core Problem Solved
//!
//! - **Closest slot**: a request for `10:07` on a 15-minute grid starting at
//!   `10:00` targets the `10:00` slot, then tries `10:15`, then `9:45`... until
//!   something is free
//! - **Partial failure**: an unknown person or an existing booking aborts only
//!   that request; everyone else in the batch keeps going
//! - **Transient unavailability**: requests that found nothing open are retried
//!   in later rounds, bounded by a retry credit
//!
//! ## Key Components
//!
//! - **TimeSlot codec** ([`core::ScheduleGrid`]): `HH:MM` ⇄ slot index
//! - **Nearest-slot sequencer** ([`core::NearestSlots`]): later-first alternating search order
//! - **Attempt state machine** ([`core::attempt_reservation`]): one request, one session
//! - **Retry scheduler** ([`core::RetryScheduler`]): rounds, login/logout, waits
//!
//! ```rust,ignore
//! use slot_reservation::core::{RetryPolicy, RetryScheduler, ScheduleGrid};
//! use slot_reservation::infra::InMemoryBookingPort;
//! use slot_reservation::runtime::TokioDelay;
//! use slot_reservation::util::ReservationRequest;
//!
//! let grid = ScheduleGrid::from_clock("10:00", 15, "16:15")?;
//! let site = InMemoryBookingPort::new().with_open_slot(1).with_registered("Ana");
//! let mut scheduler = RetryScheduler::new(grid, RetryPolicy::default(), site, TokioDelay);
//!
//! let report = scheduler.run(vec![ReservationRequest::new("Ana", "10:07")]).await?;
//! assert_eq!(report.confirmed[0].actual_time, "10:15");
//! ```
//!
//! For complete scenarios, see:
//! - `tests/retry_scheduler_test.rs` - Multi-round integration tests
//! - `tests/attempt_test.rs` - Single-session attempt tests

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Orchestration core: codec, sequencer, attempt state machine, retry scheduler.
pub mod core;
/// Configuration models for the grid, retry policy and batch input.
pub mod config;
/// Builders to construct scheduler components from configuration.
pub mod builders;
/// Infrastructure adapters implementing the booking port.
pub mod infra;
/// Runtime adapters and run reporting.
pub mod runtime;
/// Shared utilities and data model.
pub mod util;
