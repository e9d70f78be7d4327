//! In-memory booking site with scriptable availability and outcomes.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::config::SiteConfig;
use crate::core::{AvailableSlotMap, BookingError, BookingPort, ReserveResult, ScheduleGrid};
use crate::util::{SlotHandle, SlotIndex};

/// One row of the simulated schedule.
#[derive(Debug, Clone)]
struct SiteSlot {
    handle: SlotHandle,
    holder: Option<String>,
    /// Login number from which the slot shows up as open.
    opens_at_login: u32,
}

#[derive(Debug)]
struct SiteState {
    open: bool,
    closes_after_login: Option<u32>,
    slots: BTreeMap<SlotIndex, SiteSlot>,
    registered: HashSet<String>,
    holders: HashSet<String>,
    scripted: HashMap<(String, SlotIndex), VecDeque<ReserveResult>>,
    in_session: bool,
    logins: u32,
    logouts: u32,
    attempts: Vec<(String, SlotIndex)>,
    next_code: u64,
}

impl SiteState {
    fn book(&mut self, person: &str, slot: SlotIndex) {
        if let Some(row) = self.slots.get_mut(&slot) {
            row.holder = Some(person.to_string());
        }
        self.holders.insert(person.to_string());
    }
}

/// Booking site kept entirely in memory.
///
/// Clones share state, so a test can keep a handle while the scheduler owns
/// another and inspect logins, attempts and bookings afterwards.
#[derive(Clone)]
pub struct InMemoryBookingPort {
    state: Arc<Mutex<SiteState>>,
}

impl Default for InMemoryBookingPort {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookingPort {
    /// Create an open site with no slots and nobody registered.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SiteState {
                open: true,
                closes_after_login: None,
                slots: BTreeMap::new(),
                registered: HashSet::new(),
                holders: HashSet::new(),
                scripted: HashMap::new(),
                in_session: false,
                logins: 0,
                logouts: 0,
                attempts: Vec::new(),
                next_code: 100_000,
            })),
        }
    }

    /// Build a site from the simulator section of the configuration.
    pub fn from_site_config(grid: &ScheduleGrid, cfg: &SiteConfig) -> Result<Self, BookingError> {
        let mut site = Self::new();
        for time in &cfg.open_slots {
            site = site.with_open_slot(grid.time_to_slot(time)?);
        }
        for person in &cfg.registered {
            site = site.with_registered(person);
        }
        for person in &cfg.holders {
            site = site.with_holder(person);
        }
        if !cfg.open {
            site = site.with_window_closed();
        }
        Ok(site)
    }

    /// Add a slot that is open from the first login.
    #[must_use]
    pub fn with_open_slot(self, slot: SlotIndex) -> Self {
        self.with_slot_opening_at(slot, 1)
    }

    /// Add a slot that only shows up as open from login number `login` onward.
    #[must_use]
    pub fn with_slot_opening_at(self, slot: SlotIndex, login: u32) -> Self {
        self.state.lock().slots.insert(
            slot,
            SiteSlot {
                handle: SlotHandle::new(format!("row-{slot}")),
                holder: None,
                opens_at_login: login,
            },
        );
        self
    }

    /// Add a slot already booked by `holder`, who also lands on the roster.
    #[must_use]
    pub fn with_taken_slot(self, slot: SlotIndex, holder: &str) -> Self {
        {
            let mut state = self.state.lock();
            state.slots.insert(
                slot,
                SiteSlot {
                    handle: SlotHandle::new(format!("row-{slot}")),
                    holder: None,
                    opens_at_login: 1,
                },
            );
            state.book(holder, slot);
        }
        self
    }

    /// Register a person so they can be selected on the site.
    #[must_use]
    pub fn with_registered(self, person: &str) -> Self {
        self.state.lock().registered.insert(person.to_string());
        self
    }

    /// Mark a person as already holding a reservation.
    #[must_use]
    pub fn with_holder(self, person: &str) -> Self {
        self.state.lock().holders.insert(person.to_string());
        self
    }

    /// Keep the booking window closed.
    #[must_use]
    pub fn with_window_closed(self) -> Self {
        self.state.lock().open = false;
        self
    }

    /// Close the booking window for every login after the `login`-th.
    #[must_use]
    pub fn closing_after_login(self, login: u32) -> Self {
        self.state.lock().closes_after_login = Some(login);
        self
    }

    /// Queue a canned answer for the next attempt of `person` on `slot`.
    #[must_use]
    pub fn with_scripted(self, person: &str, slot: SlotIndex, result: ReserveResult) -> Self {
        self.state
            .lock()
            .scripted
            .entry((person.to_string(), slot))
            .or_default()
            .push_back(result);
        self
    }

    /// Number of `login` calls so far.
    pub fn logins(&self) -> u32 {
        self.state.lock().logins
    }

    /// Number of `logout` calls so far.
    pub fn logouts(&self) -> u32 {
        self.state.lock().logouts
    }

    /// Whether a session is currently open.
    pub fn in_session(&self) -> bool {
        self.state.lock().in_session
    }

    /// Every `(person, slot)` passed to `attempt_reserve`, in call order.
    pub fn attempts(&self) -> Vec<(String, SlotIndex)> {
        self.state.lock().attempts.clone()
    }

    /// Who holds `slot`, if anyone.
    pub fn holder_of(&self, slot: SlotIndex) -> Option<String> {
        self.state.lock().slots.get(&slot).and_then(|s| s.holder.clone())
    }
}

#[async_trait]
impl BookingPort for InMemoryBookingPort {
    async fn login(&mut self) -> Result<AvailableSlotMap, BookingError> {
        let mut state = self.state.lock();
        state.logins += 1;
        let login = state.logins;
        let closed = !state.open || state.closes_after_login.is_some_and(|n| login > n);
        if closed {
            tracing::debug!(login, "booking window closed");
            return Err(BookingError::ReservationsNotOpen);
        }
        state.in_session = true;
        Ok(state
            .slots
            .iter()
            .filter(|(_, row)| row.holder.is_none() && row.opens_at_login <= login)
            .map(|(slot, row)| (*slot, row.handle.clone()))
            .collect())
    }

    async fn logout(&mut self) -> Result<(), BookingError> {
        let mut state = self.state.lock();
        state.in_session = false;
        state.logouts += 1;
        Ok(())
    }

    async fn holds_reservation(&mut self, person: &str) -> Result<bool, BookingError> {
        let state = self.state.lock();
        if !state.in_session {
            return Err(BookingError::NoSession);
        }
        Ok(state.holders.contains(person))
    }

    async fn attempt_reserve(
        &mut self,
        person: &str,
        slot: SlotIndex,
    ) -> Result<ReserveResult, BookingError> {
        let mut state = self.state.lock();
        if !state.in_session {
            return Err(BookingError::NoSession);
        }
        state.attempts.push((person.to_string(), slot));

        let key = (person.to_string(), slot);
        if let Some(result) = state.scripted.get_mut(&key).and_then(VecDeque::pop_front) {
            if matches!(result, ReserveResult::Confirmed { .. }) {
                state.book(person, slot);
            }
            return Ok(result);
        }

        let login = state.logins;
        let subscribable = state
            .slots
            .get(&slot)
            .is_some_and(|row| row.holder.is_none() && row.opens_at_login <= login);
        if !subscribable {
            return Ok(ReserveResult::SlotUnavailable);
        }
        if !state.registered.contains(person) {
            return Ok(ReserveResult::PersonNotFound);
        }
        if state.holders.contains(person) {
            return Ok(ReserveResult::PersonAlreadyHasReservation);
        }

        state.book(person, slot);
        state.next_code += 1;
        let code = state.next_code.to_string();
        tracing::debug!(person, slot, code = %code, "slot booked");
        Ok(ReserveResult::Confirmed { code })
    }
}
