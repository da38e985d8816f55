//! Transport modes and their fixed per-mode tables

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of transport a stop serves. Edges inherit the kind of their origin stop.
///
/// Feed values are matched case-insensitively; anything unrecognised becomes
/// [`TransportKind::Other`], which uses the default entry of every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportKind {
    Bus,
    Train,
    Metro,
    Cab,
    Car,
    Walk,
    Airport,
    Other,
}

impl TransportKind {
    pub const ALL: [TransportKind; 8] = [
        TransportKind::Bus,
        TransportKind::Train,
        TransportKind::Metro,
        TransportKind::Cab,
        TransportKind::Car,
        TransportKind::Walk,
        TransportKind::Airport,
        TransportKind::Other,
    ];

    /// Average travel speed in km/h
    pub const fn speed_kmh(self) -> f64 {
        match self {
            TransportKind::Train | TransportKind::Airport => 60.0,
            TransportKind::Bus => 40.0,
            TransportKind::Metro => 35.0,
            TransportKind::Cab => 32.0,
            TransportKind::Car | TransportKind::Other => 30.0,
            TransportKind::Walk => 5.0,
        }
    }

    /// Fare per kilometer in INR
    pub const fn rate_per_km(self) -> f64 {
        match self {
            TransportKind::Train => 1.5,
            TransportKind::Bus => 1.2,
            TransportKind::Metro => 2.0,
            TransportKind::Cab => 20.0,
            TransportKind::Car => 12.0,
            TransportKind::Walk => 0.0,
            TransportKind::Airport => 7.0,
            TransportKind::Other => 10.0,
        }
    }

    /// Emissions per kilometer in kg of CO₂
    pub const fn co2_per_km(self) -> f64 {
        match self {
            TransportKind::Train => 0.04,
            TransportKind::Bus => 0.09,
            TransportKind::Metro => 0.03,
            TransportKind::Cab => 0.18,
            TransportKind::Car => 0.15,
            TransportKind::Walk => 0.0,
            TransportKind::Airport => 0.25,
            TransportKind::Other => 0.1,
        }
    }

    /// Display color for map layers
    pub const fn color(self) -> &'static str {
        match self {
            TransportKind::Train => "#1f77b4",
            TransportKind::Bus => "#ff7f0e",
            TransportKind::Metro => "#2ca02c",
            TransportKind::Cab => "#d62728",
            TransportKind::Car => "#9467bd",
            TransportKind::Walk => "#8c564b",
            TransportKind::Airport => "#e377c2",
            TransportKind::Other => "#7f7f7f",
        }
    }

    pub const fn is_eco(self) -> bool {
        matches!(
            self,
            TransportKind::Train | TransportKind::Metro | TransportKind::Walk
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TransportKind::Bus => "Bus",
            TransportKind::Train => "Train",
            TransportKind::Metro => "Metro",
            TransportKind::Cab => "Cab",
            TransportKind::Car => "Car",
            TransportKind::Walk => "Walk",
            TransportKind::Airport => "Airport",
            TransportKind::Other => "Other",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TransportKind {
    fn from(value: &str) -> Self {
        let value = value.trim();
        TransportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
            .unwrap_or(TransportKind::Other)
    }
}

impl From<String> for TransportKind {
    fn from(value: String) -> Self {
        TransportKind::from(value.as_str())
    }
}

impl From<TransportKind> for String {
    fn from(value: TransportKind) -> Self {
        value.as_str().to_string()
    }
}
