//! Configuration models for the schedule grid, retry policy and batch input.

pub mod booking;

pub use booking::{BookingConfig, GridConfig, ReservationEntry, RetryConfig, SiteConfig};
