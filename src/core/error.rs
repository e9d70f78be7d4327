//! Error types for reservation operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the booking core, its configuration and its ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The booking window is currently closed.
    #[error("reservations are not open")]
    ReservationsNotOpen,
    /// A wall-clock time could not be parsed as `HH:MM`.
    #[error("invalid time: {0}")]
    InvalidTime(String),
    /// The schedule grid violates its invariants.
    #[error("invalid schedule grid: {0}")]
    InvalidGrid(String),
    /// A reservation entry could not be interpreted.
    #[error("invalid reservation: {0}")]
    InvalidReservation(String),
    /// A port operation was issued outside of a login session.
    #[error("no active session")]
    NoSession,
    /// Configuration failed to load or validate.
    #[error("config error: {0}")]
    Config(String),
    /// Port-specific failure with context.
    #[error("port error: {0}")]
    Port(String),
}

/// Reason recorded for a request that will never be retried.
///
/// This is the reported error type of a batch run; it is data, not control flow.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum FailureReason {
    /// The person is not on the site's registered list.
    #[error("person not found: {0}")]
    PersonNotFound(String),
    /// The person already holds a reservation.
    #[error("person already has a reservation: {0}")]
    PersonAlreadyHasReservation(String),
    /// The site showed neither a confirmation nor a recognizable failure.
    #[error("missing reservation code: {0}")]
    MissingReservationCode(String),
    /// The desired time is not a parseable `HH:MM` value.
    #[error("invalid time: {0}")]
    InvalidTime(String),
    /// The port failed while the request was being attempted.
    #[error("port error: {0}")]
    Port(String),
    /// A later round could not open a session.
    #[error("session unavailable: {0}")]
    SessionUnavailable(String),
    /// Still pending when the retry credit ran out.
    #[error("failed to reserve")]
    ExhaustedRetries,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
