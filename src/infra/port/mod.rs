//! Booking port backends.

pub mod memory;

pub use memory::InMemoryBookingPort;
