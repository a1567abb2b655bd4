//! Read-only inputs the demos take from the machine they run on.

use chrono::{Datelike, Local, Weekday};

use crate::config::HostConfig;
use crate::error::{Result, TourError};

/// Platform name and current weekday, as seen by the flow-control demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub platform: String,
    pub today: Weekday,
}

impl Host {
    /// Reads the live values from the running process and the local clock.
    pub fn detect() -> Self {
        Host {
            platform: std::env::consts::OS.to_string(),
            today: Local::now().weekday(),
        }
    }

    /// Starts from the live values and applies any overrides from config.
    pub fn from_config(config: &HostConfig) -> Result<Self> {
        let mut host = Host::detect();
        if let Some(platform) = &config.platform {
            host.platform = platform.clone();
        }
        if let Some(weekday) = &config.weekday {
            host.today = parse_weekday(weekday)?;
        }
        tracing::debug!(platform = %host.platform, today = %host.today, "host inputs");
        Ok(host)
    }
}

pub fn parse_weekday(s: &str) -> Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| TourError::UnknownWeekday(s.to_string()))
}
