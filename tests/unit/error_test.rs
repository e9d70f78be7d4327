//! Tests for error types

use slot_reservation::core::{BookingError, FailureReason};

#[test]
fn test_reservations_not_open_error() {
    let err = BookingError::ReservationsNotOpen;
    assert_eq!(format!("{}", err), "reservations are not open");
}

#[test]
fn test_invalid_time_error() {
    let err = BookingError::InvalidTime("noon".to_string());
    assert_eq!(format!("{}", err), "invalid time: noon");
}

#[test]
fn test_port_error() {
    let err = BookingError::Port("connection reset".to_string());
    assert_eq!(format!("{}", err), "port error: connection reset");
}

#[test]
fn test_failure_reason_messages() {
    assert_eq!(
        FailureReason::PersonNotFound("Ana".into()).to_string(),
        "person not found: Ana"
    );
    assert_eq!(
        FailureReason::PersonAlreadyHasReservation("Ana".into()).to_string(),
        "person already has a reservation: Ana"
    );
    assert_eq!(
        FailureReason::MissingReservationCode("message not found".into()).to_string(),
        "missing reservation code: message not found"
    );
    assert_eq!(FailureReason::ExhaustedRetries.to_string(), "failed to reserve");
}

#[test]
fn test_failure_reason_serializes_tagged() {
    let json = serde_json::to_value(FailureReason::PersonNotFound("Ana".into())).unwrap();
    assert_eq!(json["kind"], "person_not_found");
    assert_eq!(json["detail"], "Ana");

    let json = serde_json::to_value(FailureReason::ExhaustedRetries).unwrap();
    assert_eq!(json["kind"], "exhausted_retries");
}
