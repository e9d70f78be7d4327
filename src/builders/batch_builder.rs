//! Assemble the batch of reservation requests for a run.

use crate::config::BookingConfig;
use crate::core::{parse_clock, BookingError};
use crate::util::ReservationRequest;

/// Parse a command-line entry such as `"Ana Maria Pop 10:30"`.
///
/// The last whitespace-separated token is the time; everything before it is
/// the person's name, re-joined with single spaces.
pub fn parse_cli_entry(entry: &str) -> Result<ReservationRequest, BookingError> {
    let mut fragments: Vec<&str> = entry.split_whitespace().collect();
    let time = fragments
        .pop()
        .ok_or_else(|| BookingError::InvalidReservation("empty reservation".into()))?;
    if fragments.is_empty() {
        return Err(BookingError::InvalidReservation(format!(
            "`{entry}` has no person before the time"
        )));
    }
    parse_clock(time)?;
    Ok(ReservationRequest::new(fragments.join(" "), time))
}

/// Build the batch: command-line entries win; the configured reservations are
/// used only when none were given. The two sources are never merged.
pub fn build_batch(
    cli_entries: &[String],
    cfg: &BookingConfig,
) -> Result<Vec<ReservationRequest>, BookingError> {
    if cli_entries.is_empty() {
        return Ok(cfg
            .reservations
            .iter()
            .map(|e| ReservationRequest::new(e.person.clone(), e.time.clone()))
            .collect());
    }
    cli_entries.iter().map(|e| parse_cli_entry(e)).collect()
}
