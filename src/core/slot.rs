//! Conversion between wall-clock `HH:MM` strings and slot indices on a fixed grid.

use std::ops::Range;

use crate::core::BookingError;
use crate::util::{format_clock, SlotIndex};

/// Parse `HH:MM` into `(hour, minute)`.
///
/// Out-of-range but parseable values are clamped (hour to `0..=23`, minute to
/// `0..=59`); only input that is not two integers separated by `:` is rejected.
pub fn parse_clock(hhmm: &str) -> Result<(u32, u32), BookingError> {
    let invalid = || BookingError::InvalidTime(hhmm.to_string());
    let (hour, minute) = hhmm.trim().split_once(':').ok_or_else(invalid)?;
    let hour = clamp_component(hour, 23).ok_or_else(invalid)?;
    let minute = clamp_component(minute, 59).ok_or_else(invalid)?;
    Ok((hour, minute))
}

/// Parse one signed integer component and clamp it to `0..=max`.
///
/// Digit strings too long for `i64` clamp to the bound on their sign's side.
fn clamp_component(raw: &str, max: u32) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return u32::try_from(value.clamp(0, i64::from(max))).ok();
    }
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { 0 } else { max })
}

/// Discretized booking day: slots of `interval` minutes from `start` up to `stop`.
///
/// All offsets are minutes from midnight. The last slot starts at the latest
/// multiple of `interval` after `start` that still fits before `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleGrid {
    start: u32,
    interval: u32,
    stop: u32,
}

impl ScheduleGrid {
    /// Create a grid, validating that it holds at least one slot.
    pub fn new(start: u32, interval: u32, stop: u32) -> Result<Self, BookingError> {
        if interval == 0 {
            return Err(BookingError::InvalidGrid(
                "slot interval must be greater than 0".into(),
            ));
        }
        if stop <= start {
            return Err(BookingError::InvalidGrid(format!(
                "stop ({}) must be after start ({})",
                format_clock(stop),
                format_clock(start)
            )));
        }
        if stop - start < interval {
            return Err(BookingError::InvalidGrid(format!(
                "grid {}-{} is shorter than one {interval} minute slot",
                format_clock(start),
                format_clock(stop)
            )));
        }
        Ok(Self {
            start,
            interval,
            stop,
        })
    }

    /// Create a grid from `HH:MM` start and stop times.
    pub fn from_clock(start: &str, interval: u32, stop: &str) -> Result<Self, BookingError> {
        let (sh, sm) = parse_clock(start)?;
        let (eh, em) = parse_clock(stop)?;
        Self::new(sh * 60 + sm, interval, eh * 60 + em)
    }

    /// First slot start, minutes from midnight.
    pub const fn start_minutes(&self) -> u32 {
        self.start
    }

    /// Slot width in minutes.
    pub const fn interval_minutes(&self) -> u32 {
        self.interval
    }

    /// End of the bookable day, minutes from midnight.
    pub const fn stop_minutes(&self) -> u32 {
        self.stop
    }

    /// Number of bookable slots.
    pub const fn total_slots(&self) -> usize {
        ((self.stop - self.start) / self.interval) as usize
    }

    /// Every valid slot index.
    pub const fn slots(&self) -> Range<SlotIndex> {
        0..self.total_slots()
    }

    /// Map minutes from midnight onto the slot containing them, clamped to the grid.
    pub fn minutes_to_slot(&self, minutes: u32) -> SlotIndex {
        let offset = minutes.saturating_sub(self.start);
        let slot = (offset / self.interval) as usize;
        slot.min(self.total_slots() - 1)
    }

    /// Map `HH:MM` onto a slot index; never returns an index outside the grid.
    pub fn time_to_slot(&self, hhmm: &str) -> Result<SlotIndex, BookingError> {
        let (hour, minute) = parse_clock(hhmm)?;
        Ok(self.minutes_to_slot(hour * 60 + minute))
    }

    /// Start time of `slot` as `H:MM`, clamped to the last slot start.
    pub fn slot_to_time(&self, slot: SlotIndex) -> String {
        let last_start = self.stop - self.interval;
        let minutes = u32::try_from(slot)
            .ok()
            .and_then(|s| s.checked_mul(self.interval))
            .and_then(|m| m.checked_add(self.start))
            .map_or(last_start, |m| m.min(last_start));
        format_clock(minutes)
    }
}
