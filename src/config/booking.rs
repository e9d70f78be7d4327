//! Booking run configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::{parse_clock, DEFAULT_RETRY_CREDIT, DEFAULT_RETRY_INTERVAL_MINUTES};

fn default_start() -> String {
    "10:00".into()
}

fn default_interval_minutes() -> u32 {
    15
}

fn default_stop() -> String {
    "16:15".into()
}

fn default_retry_credit() -> u32 {
    DEFAULT_RETRY_CREDIT
}

fn default_retry_interval_minutes() -> u64 {
    DEFAULT_RETRY_INTERVAL_MINUTES
}

const fn default_open() -> bool {
    true
}

/// Schedule grid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// First slot start, `HH:MM`.
    #[serde(default = "default_start")]
    pub start: String,
    /// Slot width in minutes.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
    /// End of the bookable day, `HH:MM`.
    #[serde(default = "default_stop")]
    pub stop: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            interval_minutes: default_interval_minutes(),
            stop: default_stop(),
        }
    }
}

/// Retry policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of rounds.
    #[serde(default = "default_retry_credit")]
    pub retry_credit: u32,
    /// Minutes to wait between rounds.
    #[serde(default = "default_retry_interval_minutes")]
    pub retry_interval_minutes: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retry_credit: default_retry_credit(),
            retry_interval_minutes: default_retry_interval_minutes(),
        }
    }
}

/// One configured reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationEntry {
    /// Name as registered on the booking site.
    pub person: String,
    /// Desired time, `HH:MM`.
    pub time: String,
}

/// Scripted booking site used by the bundled simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Whether the booking window is open.
    #[serde(default = "default_open")]
    pub open: bool,
    /// Start times of the slots that can still be booked.
    #[serde(default)]
    pub open_slots: Vec<String>,
    /// Persons the site knows about.
    #[serde(default)]
    pub registered: Vec<String>,
    /// Persons that already hold a reservation.
    #[serde(default)]
    pub holders: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            open_slots: Vec::new(),
            registered: Vec::new(),
            holders: Vec::new(),
        }
    }
}

/// Root booking configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Schedule grid.
    #[serde(default)]
    pub grid: GridConfig,
    /// Retry policy.
    #[serde(default)]
    pub retry: RetryConfig,
    /// Reservations to make when none are given on the command line.
    #[serde(default)]
    pub reservations: Vec<ReservationEntry>,
    /// Simulated booking site.
    #[serde(default)]
    pub site: Option<SiteConfig>,
}

impl GridConfig {
    /// Validate grid values.
    pub fn validate(&self) -> Result<(), String> {
        if self.interval_minutes == 0 {
            return Err("interval_minutes must be greater than 0".into());
        }
        let (sh, sm) = parse_clock(&self.start).map_err(|e| format!("start: {e}"))?;
        let (eh, em) = parse_clock(&self.stop).map_err(|e| format!("stop: {e}"))?;
        let (start, stop) = (sh * 60 + sm, eh * 60 + em);
        if stop <= start {
            return Err("stop must be after start".into());
        }
        if stop - start < self.interval_minutes {
            return Err("grid must hold at least one slot".into());
        }
        Ok(())
    }
}

impl RetryConfig {
    /// Validate retry values.
    pub fn validate(&self) -> Result<(), String> {
        if self.retry_credit == 0 {
            return Err("retry_credit must be greater than 0".into());
        }
        Ok(())
    }
}

impl SiteConfig {
    /// Validate that every listed slot time parses.
    pub fn validate(&self) -> Result<(), String> {
        for time in &self.open_slots {
            parse_clock(time).map_err(|e| format!("open_slots: {e}"))?;
        }
        Ok(())
    }
}

impl BookingConfig {
    /// Validate all sections.
    pub fn validate(&self) -> Result<(), String> {
        self.grid.validate().map_err(|e| format!("grid invalid: {e}"))?;
        self.retry
            .validate()
            .map_err(|e| format!("retry invalid: {e}"))?;
        for (i, entry) in self.reservations.iter().enumerate() {
            if entry.person.trim().is_empty() {
                return Err(format!("reservation #{i} has an empty person"));
            }
            parse_clock(&entry.time).map_err(|e| format!("reservation `{}`: {e}", entry.person))?;
        }
        if let Some(site) = &self.site {
            site.validate().map_err(|e| format!("site invalid: {e}"))?;
        }
        Ok(())
    }

    /// Parse booking configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
