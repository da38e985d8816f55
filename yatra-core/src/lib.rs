//! Multi-modal trip routing over a snapshot of transit stops.
//!
//! The crate turns a list of stops (each carrying its onward routes) into a
//! directed multigraph, finds distance- and cost-optimal paths through it and
//! renders the result as an itinerary or as `GeoJSON` map geometry.

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

pub use algo::{NearestStop, haversine_km, nearest_stop};
pub use loading::{RoutingConfig, build_edges, build_multimodal_graph, load_stops, parse_stops};
pub use model::{
    Coordinate, MultiModalEdge, MultiModalGraph, PathResult, Route, RouteTotals, Stop, StopId,
    TransportKind,
};
pub use routing::{
    ClassicalFallback, ItinerarySegment, ItinerarySummary, Objective, RouteKind, RouteOptimizer,
    RouteOptions, TripPlan, TripPlanner, TripRequest, route_geometry, select_routes,
    shortest_path, summarize,
};

/// Mean Earth radius used for every great-circle distance, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
