use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Error;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Tunables applied to every edge by the graph builder.
///
/// Per-mode speeds, rates and emission factors are fixed tables on
/// [`TransportKind`](crate::TransportKind) and are not configurable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Layover allowance added to every edge, in minutes
    pub transfer_minutes: u32,
    /// Lowest fare charged for any edge, in INR
    pub minimum_fare_inr: u32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            transfer_minutes: 10,
            minimum_fare_inr: 10,
        }
    }
}

impl RoutingConfig {
    /// Parses and validates a JSON configuration; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or out-of-range values
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: RoutingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.transfer_minutes >= MINUTES_PER_DAY {
            return Err(Error::InvalidData(format!(
                "transfer allowance of {} minutes exceeds one day",
                self.transfer_minutes
            )));
        }
        Ok(())
    }
}
