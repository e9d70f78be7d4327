//! Booking orchestration core: slot codec, search order, attempt state machine
//! and retry scheduler.

pub mod attempt;
pub mod audit;
pub mod error;
pub mod port;
pub mod scheduler;
pub mod sequencer;
pub mod slot;

pub use attempt::{attempt_reservation, AttemptOutcome};
pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink};
pub use error::{AppResult, BookingError, FailureReason};
pub use port::{AvailableSlotMap, BookingPort, Delay, ReserveResult};
pub use scheduler::{
    BatchReport, RetryPolicy, RetryScheduler, DEFAULT_RETRY_CREDIT, DEFAULT_RETRY_INTERVAL_MINUTES,
};
pub use sequencer::NearestSlots;
pub use slot::{parse_clock, ScheduleGrid};
