//! Presentation of solved paths: itinerary text and map geometry

mod summary;
mod to_geojson;

pub use summary::{ItinerarySegment, ItinerarySummary, summarize};
pub use to_geojson::route_geometry;
