//! Serializable data model shared by the core, the builders and the runtime API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::FailureReason;

/// Index of one bookable interval on a schedule grid.
pub type SlotIndex = usize;

/// Opaque identifier of an open slot, meaningful only to the booking port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotHandle(pub String);

impl SlotHandle {
    /// Create a handle from any string-like identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person asking for a slot as close as possible to a wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Name exactly as registered on the booking site.
    pub person: String,
    /// Desired time as `HH:MM`.
    pub desired_time: String,
}

impl ReservationRequest {
    /// Create a request.
    pub fn new(person: impl Into<String>, desired_time: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            desired_time: desired_time.into(),
        }
    }
}

/// A reservation the booking site confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedReservation {
    /// Person the slot was booked for.
    pub person: String,
    /// Time originally asked for.
    pub desired_time: String,
    /// Start time of the slot actually booked, as `H:MM`.
    pub actual_time: String,
    /// Code the site issued for the booking (also used to cancel it).
    pub confirmation_code: String,
}

/// A request that ended in a permanent failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedReservation {
    /// Person the request was for.
    pub person: String,
    /// Time originally asked for.
    pub desired_time: String,
    /// Why the request will not be retried.
    pub reason: FailureReason,
}

impl FailedReservation {
    /// Record a permanent failure for `request`.
    pub fn new(request: &ReservationRequest, reason: FailureReason) -> Self {
        Self {
            person: request.person.clone(),
            desired_time: request.desired_time.clone(),
            reason,
        }
    }
}

/// Final outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationOutcome {
    /// A slot was booked.
    Confirmed(ConfirmedReservation),
    /// The request failed permanently.
    Failed(FailedReservation),
}

impl ReservationOutcome {
    /// Person the outcome belongs to.
    pub fn person(&self) -> &str {
        match self {
            Self::Confirmed(c) => &c.person,
            Self::Failed(f) => &f.person,
        }
    }
}
