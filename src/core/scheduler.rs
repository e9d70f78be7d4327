//! Multi-round retry scheduler over a batch of reservation requests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{
    attempt_reservation, build_audit_event, AttemptOutcome, AuditSink, AvailableSlotMap,
    BookingError, BookingPort, Delay, FailureReason, ScheduleGrid,
};
use crate::util::{ConfirmedReservation, FailedReservation, ReservationOutcome, ReservationRequest};

/// Rounds allowed for a batch when nothing else is configured.
pub const DEFAULT_RETRY_CREDIT: u32 = 4;
/// Minutes waited between rounds when nothing else is configured.
pub const DEFAULT_RETRY_INTERVAL_MINUTES: u64 = 5;

/// How many rounds to run and how long to wait between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Credit for rounds; each round that leaves requests pending consumes one
    /// unit, and the run stops once it reaches zero.
    pub retry_credit: u32,
    /// Wait between two rounds.
    pub retry_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_credit: DEFAULT_RETRY_CREDIT,
            retry_interval: Duration::from_secs(DEFAULT_RETRY_INTERVAL_MINUTES * 60),
        }
    }
}

/// Everything a run produced. Each input request appears exactly once across
/// `confirmed` and `failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Booked reservations, in the order they were confirmed.
    pub confirmed: Vec<ConfirmedReservation>,
    /// Permanent failures, in the order they were decided.
    pub failed: Vec<FailedReservation>,
    /// Rounds that opened a session.
    pub rounds: u32,
    /// Retry credit left when the run ended.
    pub credit_remaining: u32,
}

impl BatchReport {
    /// All outcomes, confirmations first.
    pub fn outcomes(&self) -> Vec<ReservationOutcome> {
        self.confirmed
            .iter()
            .cloned()
            .map(ReservationOutcome::Confirmed)
            .chain(self.failed.iter().cloned().map(ReservationOutcome::Failed))
            .collect()
    }

    /// Number of requests covered by the report.
    pub fn len(&self) -> usize {
        self.confirmed.len() + self.failed.len()
    }

    /// Whether the report covers no request at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs batches of requests in rounds, one login session per round.
///
/// Requests that found no open slot stay pending and are retried after
/// [`RetryPolicy::retry_interval`]; permanent failures are never retried.
pub struct RetryScheduler<P, D> {
    grid: ScheduleGrid,
    policy: RetryPolicy,
    port: P,
    delay: D,
    audit: Option<Box<dyn AuditSink>>,
}

impl<P, D> RetryScheduler<P, D>
where
    P: BookingPort,
    D: Delay,
{
    /// Create a scheduler from its collaborators.
    pub fn new(grid: ScheduleGrid, policy: RetryPolicy, port: P, delay: D) -> Self {
        Self {
            grid,
            policy,
            port,
            delay,
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Grid used to map times to slots.
    pub const fn grid(&self) -> &ScheduleGrid {
        &self.grid
    }

    /// Active retry policy.
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Borrow the booking port.
    pub const fn port(&self) -> &P {
        &self.port
    }

    /// Consume the scheduler and return the booking port.
    pub fn into_port(self) -> P {
        self.port
    }

    /// Book every request in `batch`.
    ///
    /// Returns `Err` only when the very first login fails (for example with
    /// [`BookingError::ReservationsNotOpen`]); per-request problems end up in
    /// [`BatchReport::failed`].
    pub async fn run(&mut self, batch: Vec<ReservationRequest>) -> Result<BatchReport, BookingError> {
        let mut report = BatchReport {
            credit_remaining: self.policy.retry_credit,
            ..BatchReport::default()
        };
        let mut pending = batch;

        while !pending.is_empty() {
            let round = report.rounds + 1;
            let slots = match self.port.login().await {
                Ok(slots) => slots,
                Err(e) if round == 1 => {
                    tracing::error!(error = %e, "login failed, aborting run");
                    self.audit(round, None, "login_failed", Some(e.to_string()));
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!(round, error = %e, pending = pending.len(), "login failed, giving up");
                    self.audit(round, None, "login_failed", Some(e.to_string()));
                    let reason = FailureReason::SessionUnavailable(e.to_string());
                    report
                        .failed
                        .extend(pending.iter().map(|r| FailedReservation::new(r, reason.clone())));
                    return Ok(report);
                }
            };
            report.rounds = round;
            tracing::info!(round, open_slots = slots.len(), pending = pending.len(), "round started");
            self.audit(round, None, "login", Some(format!("{} open slots", slots.len())));

            pending = self.run_round(round, &slots, pending, &mut report).await;

            if let Err(e) = self.port.logout().await {
                tracing::warn!(round, error = %e, "logout failed");
            }
            self.audit(round, None, "logout", None);

            if pending.is_empty() {
                break;
            }
            report.credit_remaining = report.credit_remaining.saturating_sub(1);
            if report.credit_remaining == 0 {
                break;
            }
            tracing::info!(
                round,
                pending = pending.len(),
                credit = report.credit_remaining,
                "waiting {:?} before next round",
                self.policy.retry_interval
            );
            self.audit(round, None, "wait", Some(format!("{:?}", self.policy.retry_interval)));
            self.delay.wait(self.policy.retry_interval).await;
        }

        for request in pending {
            tracing::warn!(person = %request.person, "retry credit exhausted");
            self.audit(report.rounds, Some(&request.person), "exhausted", None);
            report
                .failed
                .push(FailedReservation::new(&request, FailureReason::ExhaustedRetries));
        }
        Ok(report)
    }

    /// One pass over `pending` inside an open session; returns what is still pending.
    async fn run_round(
        &mut self,
        round: u32,
        slots: &AvailableSlotMap,
        pending: Vec<ReservationRequest>,
        report: &mut BatchReport,
    ) -> Vec<ReservationRequest> {
        let mut still_pending = Vec::new();
        for request in pending {
            match attempt_reservation(&mut self.port, &self.grid, slots, &request).await {
                AttemptOutcome::Succeeded(confirmed) => {
                    self.audit(
                        round,
                        Some(&request.person),
                        "confirm",
                        Some(confirmed.actual_time.clone()),
                    );
                    report.confirmed.push(confirmed);
                }
                AttemptOutcome::AbortedPermanently(reason) => {
                    self.audit(round, Some(&request.person), "fail", Some(reason.to_string()));
                    report.failed.push(FailedReservation::new(&request, reason));
                }
                AttemptOutcome::Exhausted => {
                    self.audit(round, Some(&request.person), "pending", None);
                    still_pending.push(request);
                }
            }
        }
        still_pending
    }

    fn audit(&mut self, round: u32, person: Option<&str>, action: &str, detail: Option<String>) {
        if let Some(sink) = self.audit.as_mut() {
            sink.record(build_audit_event(round, person, action, detail));
        }
    }
}
