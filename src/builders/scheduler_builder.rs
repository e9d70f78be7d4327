//! Builders to construct a retry scheduler from configuration.

use std::time::Duration;

use crate::config::{BookingConfig, GridConfig, RetryConfig};
use crate::core::{BookingError, BookingPort, Delay, RetryPolicy, RetryScheduler, ScheduleGrid};

/// Build the schedule grid described by `cfg`.
pub fn build_grid(cfg: &GridConfig) -> Result<ScheduleGrid, BookingError> {
    cfg.validate()
        .map_err(|e| BookingError::Config(format!("grid invalid: {e}")))?;
    ScheduleGrid::from_clock(&cfg.start, cfg.interval_minutes, &cfg.stop)
}

/// Build the retry policy described by `cfg`.
pub fn build_policy(cfg: &RetryConfig) -> Result<RetryPolicy, BookingError> {
    cfg.validate()
        .map_err(|e| BookingError::Config(format!("retry invalid: {e}")))?;
    Ok(RetryPolicy {
        retry_credit: cfg.retry_credit,
        retry_interval: Duration::from_secs(cfg.retry_interval_minutes.saturating_mul(60)),
    })
}

/// Build a scheduler from configuration and the provided collaborators.
pub fn build_scheduler<P, D>(
    cfg: &BookingConfig,
    port: P,
    delay: D,
) -> Result<RetryScheduler<P, D>, BookingError>
where
    P: BookingPort,
    D: Delay,
{
    cfg.validate()
        .map_err(|e| BookingError::Config(format!("config invalid: {e}")))?;
    let grid = build_grid(&cfg.grid)?;
    let policy = build_policy(&cfg.retry)?;
    Ok(RetryScheduler::new(grid, policy, port, delay))
}
