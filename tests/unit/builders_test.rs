//! Tests for builder modules

use std::time::Duration;

use slot_reservation::builders::{build_batch, build_grid, build_policy, build_scheduler, parse_cli_entry};
use slot_reservation::config::{BookingConfig, GridConfig, ReservationEntry, RetryConfig};
use slot_reservation::core::BookingError;
use slot_reservation::infra::InMemoryBookingPort;
use slot_reservation::runtime::TokioDelay;
use slot_reservation::util::ReservationRequest;

fn config_with_reservations() -> BookingConfig {
    BookingConfig {
        reservations: vec![
            ReservationEntry {
                person: "Ana Pop".into(),
                time: "10:30".into(),
            },
            ReservationEntry {
                person: "Ion".into(),
                time: "11:00".into(),
            },
        ],
        ..BookingConfig::default()
    }
}

#[test]
fn test_build_grid_defaults() {
    let grid = build_grid(&GridConfig::default()).unwrap();
    assert_eq!(grid.start_minutes(), 600);
    assert_eq!(grid.interval_minutes(), 15);
    assert_eq!(grid.stop_minutes(), 975);
    assert_eq!(grid.total_slots(), 25);
}

#[test]
fn test_build_grid_invalid() {
    let cfg = GridConfig {
        interval_minutes: 0,
        ..GridConfig::default()
    };
    assert!(matches!(build_grid(&cfg), Err(BookingError::Config(_))));
}

#[test]
fn test_build_policy() {
    let policy = build_policy(&RetryConfig {
        retry_credit: 3,
        retry_interval_minutes: 2,
    })
    .unwrap();
    assert_eq!(policy.retry_credit, 3);
    assert_eq!(policy.retry_interval, Duration::from_secs(120));
}

#[test]
fn test_build_scheduler_uses_config() {
    let scheduler =
        build_scheduler(&BookingConfig::default(), InMemoryBookingPort::new(), TokioDelay).unwrap();
    assert_eq!(scheduler.policy().retry_credit, 4);
    assert_eq!(scheduler.grid().total_slots(), 25);
}

#[test]
fn test_parse_cli_entry_multi_word_name() {
    let request = parse_cli_entry("Ana  Maria Pop 10:30").unwrap();
    assert_eq!(request, ReservationRequest::new("Ana Maria Pop", "10:30"));
}

#[test]
fn test_parse_cli_entry_rejects_missing_parts() {
    assert!(matches!(
        parse_cli_entry("10:30"),
        Err(BookingError::InvalidReservation(_))
    ));
    assert!(matches!(
        parse_cli_entry("   "),
        Err(BookingError::InvalidReservation(_))
    ));
    assert!(matches!(
        parse_cli_entry("Ana later"),
        Err(BookingError::InvalidTime(_))
    ));
}

#[test]
fn test_build_batch_falls_back_to_config() {
    let batch = build_batch(&[], &config_with_reservations()).unwrap();
    assert_eq!(
        batch,
        vec![
            ReservationRequest::new("Ana Pop", "10:30"),
            ReservationRequest::new("Ion", "11:00"),
        ]
    );
}

#[test]
fn test_build_batch_cli_wins_without_merging() {
    let cli = vec!["Maria 12:00".to_string()];
    let batch = build_batch(&cli, &config_with_reservations()).unwrap();
    assert_eq!(batch, vec![ReservationRequest::new("Maria", "12:00")]);
}
