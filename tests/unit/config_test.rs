//! Tests for configuration validation

use slot_reservation::config::{BookingConfig, GridConfig, ReservationEntry, RetryConfig, SiteConfig};

#[test]
fn test_grid_config_validation() {
    assert!(GridConfig::default().validate().is_ok());
}

#[test]
fn test_grid_config_invalid_interval() {
    let invalid = GridConfig {
        interval_minutes: 0,
        ..GridConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_grid_config_stop_before_start() {
    let invalid = GridConfig {
        start: "16:00".into(),
        interval_minutes: 15,
        stop: "10:00".into(),
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_grid_config_unparseable_time() {
    let invalid = GridConfig {
        start: "ten".into(),
        ..GridConfig::default()
    };
    let err = invalid.validate().unwrap_err();
    assert!(err.starts_with("start:"), "{err}");
}

#[test]
fn test_retry_config_invalid_credit() {
    let invalid = RetryConfig {
        retry_credit: 0,
        retry_interval_minutes: 5,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_booking_config_empty_person() {
    let config = BookingConfig {
        reservations: vec![ReservationEntry {
            person: "  ".into(),
            time: "10:00".into(),
        }],
        ..BookingConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_booking_config_bad_site_slot() {
    let config = BookingConfig {
        site: Some(SiteConfig {
            open_slots: vec!["later".into()],
            ..SiteConfig::default()
        }),
        ..BookingConfig::default()
    };
    assert!(config.validate().unwrap_err().starts_with("site invalid"));
}

#[test]
fn test_booking_config_from_json() {
    let json = r#"{
        "grid": { "start": "09:00", "interval_minutes": 30, "stop": "12:00" },
        "retry": { "retry_credit": 2, "retry_interval_minutes": 1 },
        "reservations": [
            { "person": "Ana Pop", "time": "10:30" },
            { "person": "Ion", "time": "09:00" }
        ],
        "site": { "open": false, "registered": ["Ana Pop"] }
    }"#;

    let config = BookingConfig::from_json_str(json).unwrap();
    assert_eq!(config.grid.interval_minutes, 30);
    assert_eq!(config.retry.retry_credit, 2);
    assert_eq!(config.reservations.len(), 2);
    assert_eq!(config.reservations[0].person, "Ana Pop");
    assert_eq!(config.reservations[1].time, "09:00");
    assert!(!config.site.unwrap().open);
}

#[test]
fn test_booking_config_from_json_rejects_invalid() {
    assert!(BookingConfig::from_json_str("{ not json").is_err());
    assert!(BookingConfig::from_json_str(r#"{"retry": {"retry_credit": 0}}"#).is_err());
}
