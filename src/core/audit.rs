//! Audit sink implementations.
//!
//! The scheduler reports every session and outcome event to an optional sink,
//! giving callers a per-run journal without scraping logs.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::util::clock::now_ms;

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Round (1-based) the event belongs to.
    pub round: u32,
    /// Person concerned, if the event is about one request.
    pub person: Option<String>,
    /// Action taken (login, confirm, fail, pending, logout, wait, exhausted).
    pub action: String,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
///
/// Clones share the same buffer, so a handle kept by the caller observes
/// events recorded through the copy handed to the scheduler.
#[derive(Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Actions of the stored events, in order.
    pub fn actions(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.action.clone()).collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Audit sink that forwards events to `tracing` at info level.
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: AuditEvent) {
        tracing::info!(
            target: "slot_reservation::audit",
            event_id = %event.event_id,
            round = event.round,
            person = event.person.as_deref().unwrap_or("-"),
            detail = event.detail.as_deref().unwrap_or(""),
            "{}",
            event.action
        );
    }
}

/// Helper to build an audit event with a fresh identifier and timestamp.
pub fn build_audit_event(
    round: u32,
    person: Option<&str>,
    action: impl Into<String>,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        round,
        person: person.map(str::to_string),
        action: action.into(),
        created_at_ms: now_ms(),
        detail,
    }
}
