use geo::{Distance, HaversineMeasure, Point};

use crate::EARTH_RADIUS_KM;
use crate::model::Coordinate;

/// Great-circle distance between two coordinates in kilometers
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let earth = HaversineMeasure::new(EARTH_RADIUS_KM * 1000.0);
    earth.distance(Point::from(from), Point::from(to)) / 1000.0
}
