//! Tests for audit sink

use slot_reservation::core::{build_audit_event, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(1, Some("Ana"), "confirm", Some("10:15".to_string()));

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].person.as_deref(), Some("Ana"));
    assert_eq!(events[0].action, "confirm");
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(1, None, "login", None));
    sink.record(build_audit_event(1, None, "logout", None));
    sink.record(build_audit_event(1, None, "wait", None));

    assert_eq!(sink.actions(), vec!["logout", "wait"]);
}

#[test]
fn test_audit_sink_clones_share_buffer() {
    let sink = InMemoryAuditSink::new(4);
    let mut writer = sink.clone();
    writer.record(build_audit_event(2, None, "login", None));
    assert_eq!(sink.actions(), vec!["login"]);
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(3, Some("Ana"), "fail", Some("person not found: Ana".to_string()));

    assert_eq!(event.round, 3);
    assert_eq!(event.person, Some("Ana".to_string()));
    assert_eq!(event.action, "fail");
    assert_eq!(event.detail, Some("person not found: Ana".to_string()));
    assert!(event.created_at_ms > 0);
    assert_ne!(event.event_id, build_audit_event(3, None, "fail", None).event_id);
}
