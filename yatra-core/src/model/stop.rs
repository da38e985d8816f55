//! Stops, their onward routes and coordinates as delivered by the transport feed

use std::fmt;

use geo::Point;
use serde::{Deserialize, Serialize};

use super::mode::TransportKind;

/// WGS84 position. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

// geo points are (x = longitude, y = latitude)
impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

/// Feed-assigned stop identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StopId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An onward service offered from a stop.
///
/// `destination_name` is a display name; it is resolved to a stop by exact
/// name match when the graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub name: String,
    pub destination_name: String,
    #[serde(default)]
    pub arrives_in_minutes: i64,
}

impl Route {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        destination_name: impl Into<String>,
        arrives_in_minutes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            destination_name: destination_name.into(),
            arrives_in_minutes,
        }
    }
}

/// A transit hub with a position and its outgoing routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub kind: TransportKind,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub booking_url: String,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Stop {
    pub fn new(
        id: impl Into<StopId>,
        name: impl Into<String>,
        kind: TransportKind,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            coordinate,
            booking_url: String::new(),
            routes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_booking_url(mut self, url: impl Into<String>) -> Self {
        self.booking_url = url.into();
        self
    }

    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Stop position as a `geo` point
    pub fn geometry(&self) -> Point<f64> {
        self.coordinate.into()
    }
}
