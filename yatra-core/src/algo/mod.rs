//! Geometric helpers: great-circle distance and stop snapping

mod haversine;
mod nearest;

pub use haversine::haversine_km;
pub use nearest::{NearestStop, nearest_stop};
