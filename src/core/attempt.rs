//! Drives one reservation request through the nearest-slot search.

use crate::core::{
    AvailableSlotMap, BookingPort, FailureReason, NearestSlots, ReserveResult, ScheduleGrid,
};
use crate::util::{ConfirmedReservation, ReservationRequest};

/// Result of walking the search sequence for one request within one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// A slot was booked.
    Succeeded(ConfirmedReservation),
    /// The request must not be retried.
    AbortedPermanently(FailureReason),
    /// Every candidate was unavailable; retry in a later session.
    Exhausted,
}

/// Try every slot near the requested time until one is booked or a permanent
/// failure is signaled.
///
/// `slots` is the snapshot returned by the current session's login. Candidates
/// without a handle in it are skipped without asking the port. Port errors are
/// converted into [`FailureReason::Port`]; nothing escapes this boundary.
pub async fn attempt_reservation<P>(
    port: &mut P,
    grid: &ScheduleGrid,
    slots: &AvailableSlotMap,
    request: &ReservationRequest,
) -> AttemptOutcome
where
    P: BookingPort + ?Sized,
{
    let person = request.person.as_str();
    let target = match grid.time_to_slot(&request.desired_time) {
        Ok(slot) => slot,
        Err(e) => {
            tracing::warn!(person, error = %e, "unparseable desired time");
            return AttemptOutcome::AbortedPermanently(FailureReason::InvalidTime(
                request.desired_time.clone(),
            ));
        }
    };

    match port.holds_reservation(person).await {
        Ok(false) => {}
        Ok(true) => {
            tracing::warn!(person, "already on the reservation roster");
            return AttemptOutcome::AbortedPermanently(
                FailureReason::PersonAlreadyHasReservation(person.to_string()),
            );
        }
        Err(e) => return AttemptOutcome::AbortedPermanently(FailureReason::Port(e.to_string())),
    }

    for slot in NearestSlots::new(target, grid.total_slots()) {
        if !slots.contains(slot) {
            continue;
        }
        let result = match port.attempt_reserve(person, slot).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(person, slot, error = %e, "port failed during attempt");
                return AttemptOutcome::AbortedPermanently(FailureReason::Port(e.to_string()));
            }
        };
        let reason = match result {
            ReserveResult::Confirmed { code } => {
                let actual_time = grid.slot_to_time(slot);
                tracing::info!(person, slot, time = %actual_time, "reservation confirmed");
                return AttemptOutcome::Succeeded(ConfirmedReservation {
                    person: person.to_string(),
                    desired_time: request.desired_time.clone(),
                    actual_time,
                    confirmation_code: code,
                });
            }
            ReserveResult::SlotUnavailable => {
                tracing::debug!(person, slot, "slot unavailable");
                continue;
            }
            ReserveResult::PersonNotFound => FailureReason::PersonNotFound(person.to_string()),
            ReserveResult::PersonAlreadyHasReservation => {
                FailureReason::PersonAlreadyHasReservation(person.to_string())
            }
            ReserveResult::MissingReservationCode { detail } => {
                FailureReason::MissingReservationCode(detail)
            }
        };
        tracing::warn!(person, slot, %reason, "permanent failure");
        return AttemptOutcome::AbortedPermanently(reason);
    }

    tracing::debug!(person, target, "no candidate slot available this session");
    AttemptOutcome::Exhausted
}
