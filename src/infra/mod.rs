//! Infrastructure adapters implementing the core's ports.

pub mod port;

pub use port::InMemoryBookingPort;
