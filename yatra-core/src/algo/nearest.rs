use crate::model::{Coordinate, Stop};

use super::haversine_km;

/// Stop closest to a query point and its great-circle distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestStop<'a> {
    pub stop: &'a Stop,
    pub distance_km: f64,
}

/// Linear scan for the stop closest to `point`.
///
/// Ties resolve to the stop that comes first in `stops`. Returns `None` only
/// for an empty stop list.
pub fn nearest_stop(point: Coordinate, stops: &[Stop]) -> Option<NearestStop<'_>> {
    let mut best: Option<NearestStop<'_>> = None;

    for stop in stops {
        let distance_km = haversine_km(point, stop.coordinate);
        if best.is_none_or(|current| distance_km < current.distance_km) {
            best = Some(NearestStop { stop, distance_km });
        }
    }

    best
}
