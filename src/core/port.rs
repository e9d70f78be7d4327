//! Capability traits the core consumes: the booking site and the inter-round wait.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::BookingError;
use crate::util::{SlotHandle, SlotIndex};

/// Slots that were open when a session started, keyed by slot index.
///
/// Taken once per login and never reused across sessions; it goes stale as
/// soon as any reservation succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableSlotMap {
    slots: BTreeMap<SlotIndex, SlotHandle>,
}

impl AvailableSlotMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an open slot.
    pub fn insert(&mut self, slot: SlotIndex, handle: SlotHandle) {
        self.slots.insert(slot, handle);
    }

    /// Handle for `slot`, if it was open at login.
    pub fn handle(&self, slot: SlotIndex) -> Option<&SlotHandle> {
        self.slots.get(&slot)
    }

    /// Whether `slot` was open at login.
    pub fn contains(&self, slot: SlotIndex) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Number of open slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot was open.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Open slot indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.slots.keys().copied()
    }
}

impl FromIterator<(SlotIndex, SlotHandle)> for AvailableSlotMap {
    fn from_iter<I: IntoIterator<Item = (SlotIndex, SlotHandle)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// What the site answered to a single subscribe attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveResult {
    /// The slot is booked; `code` is the confirmation (cancelation) code.
    Confirmed {
        /// Confirmation code shown by the site.
        code: String,
    },
    /// No open handle, or the slot's control is not subscribable right now.
    SlotUnavailable,
    /// The person is not on the site's registered list.
    PersonNotFound,
    /// The site refused because the person already holds a reservation.
    PersonAlreadyHasReservation,
    /// Neither a confirmation nor a recognizable refusal was shown.
    MissingReservationCode {
        /// Whatever text the site displayed instead.
        detail: String,
    },
}

/// The booking site, as seen by the orchestration core.
///
/// Implementations own all session and UI state. Calls are issued strictly
/// one at a time: `login`, then any number of `holds_reservation` and
/// `attempt_reserve`, then `logout`.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use slot_reservation::core::{AvailableSlotMap, BookingError, BookingPort, ReserveResult};
///
/// struct AlwaysClosed;
///
/// #[async_trait]
/// impl BookingPort for AlwaysClosed {
///     async fn login(&mut self) -> Result<AvailableSlotMap, BookingError> {
///         Err(BookingError::ReservationsNotOpen)
///     }
///     async fn logout(&mut self) -> Result<(), BookingError> { Ok(()) }
///     async fn holds_reservation(&mut self, _: &str) -> Result<bool, BookingError> { Ok(false) }
///     async fn attempt_reserve(&mut self, _: &str, _: usize) -> Result<ReserveResult, BookingError> {
///         Err(BookingError::NoSession)
///     }
/// }
/// ```
#[async_trait]
pub trait BookingPort: Send {
    /// Open a session and snapshot the currently open slots.
    ///
    /// Fails with [`BookingError::ReservationsNotOpen`] while the booking
    /// window is closed.
    async fn login(&mut self) -> Result<AvailableSlotMap, BookingError>;

    /// Close the session. Must be safe to call more than once.
    async fn logout(&mut self) -> Result<(), BookingError>;

    /// Whether `person` already appears on the session's reservation roster.
    async fn holds_reservation(&mut self, person: &str) -> Result<bool, BookingError>;

    /// Try to book `slot` for `person`.
    async fn attempt_reserve(
        &mut self,
        person: &str,
        slot: SlotIndex,
    ) -> Result<ReserveResult, BookingError>;
}

/// Abstraction for the wall-clock wait between retry rounds.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Suspend the caller for `duration`.
    async fn wait(&self, duration: Duration);
}
