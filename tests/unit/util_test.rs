//! Tests for utility functions and the shared data model

use slot_reservation::core::FailureReason;
use slot_reservation::util::{
    format_clock, ConfirmedReservation, FailedReservation, ReservationOutcome, ReservationRequest,
    SlotHandle,
};

#[test]
fn test_format_clock() {
    assert_eq!(format_clock(615), "10:15");
    assert_eq!(format_clock(485), "8:05");
}

#[test]
fn test_slot_handle() {
    let handle = SlotHandle::new("row-7");
    assert_eq!(handle.as_str(), "row-7");
    assert_eq!(handle.to_string(), "row-7");
}

#[test]
fn test_failed_reservation_copies_request() {
    let request = ReservationRequest::new("Ana", "10:30");
    let failed = FailedReservation::new(&request, FailureReason::ExhaustedRetries);
    assert_eq!(failed.person, "Ana");
    assert_eq!(failed.desired_time, "10:30");
    assert_eq!(failed.reason, FailureReason::ExhaustedRetries);
}

#[test]
fn test_outcome_person() {
    let confirmed = ReservationOutcome::Confirmed(ConfirmedReservation {
        person: "Ana".into(),
        desired_time: "10:30".into(),
        actual_time: "10:30".into(),
        confirmation_code: "1".into(),
    });
    assert_eq!(confirmed.person(), "Ana");
}

#[test]
fn test_request_round_trips_through_json() {
    let request = ReservationRequest::new("Ana Pop", "10:30");
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, r#"{"person":"Ana Pop","desired_time":"10:30"}"#);
}
