//! Tests for run reporting and the tokio delay

use std::time::Duration;

use slot_reservation::core::{BatchReport, Delay, FailureReason};
use slot_reservation::runtime::{render_header, render_text, OutputFormat, RunSummary, TokioDelay};
use slot_reservation::util::{ConfirmedReservation, FailedReservation, ReservationRequest};

fn report() -> BatchReport {
    BatchReport {
        confirmed: vec![ConfirmedReservation {
            person: "Ana".into(),
            desired_time: "10:07".into(),
            actual_time: "10:15".into(),
            confirmation_code: "100001".into(),
        }],
        failed: vec![FailedReservation::new(
            &ReservationRequest::new("Ghost", "11:00"),
            FailureReason::PersonNotFound("Ghost".into()),
        )],
        rounds: 1,
        credit_remaining: 4,
    }
}

#[test]
fn test_render_text() {
    assert_eq!(
        render_text(&report()),
        "Reserved: name=Ana, time=10:15, cancelation_code=100001\n\
         Failed to reserve: name=Ghost, time=11:00, reason=person not found: Ghost\n"
    );
}

#[test]
fn test_render_header() {
    let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_micro_opt(7, 30, 0, 42)
        .unwrap();
    assert_eq!(render_header(at), "=== 2024-03-05 07:30:00.000042\n");
}

#[test]
fn test_run_summary_json() {
    let summary = RunSummary::from(&report());
    let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
    assert_eq!(json["reserved"][0]["actual_time"], "10:15");
    assert_eq!(json["failed"][0]["reason"], "person not found: Ghost");
    assert_eq!(json["rounds"], 1);
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("yaml".parse::<OutputFormat>().is_err());
}

#[tokio::test]
async fn test_tokio_delay_waits() {
    let started = tokio::time::Instant::now();
    TokioDelay::new().wait(Duration::from_millis(20)).await;
    assert!(started.elapsed() >= Duration::from_millis(20));
}
