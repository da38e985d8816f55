// Re-export key components
pub use crate::algo::{NearestStop, haversine_km, nearest_stop};
pub use crate::loading::{
    RoutingConfig, build_edges, build_multimodal_graph, load_stops, load_stops_from_reader,
    parse_stops,
};
pub use crate::model::{
    Coordinate, MultiModalEdge, MultiModalGraph, PathResult, Route, RouteTotals, Stop, StopId,
    TransportKind,
};
pub use crate::routing::{
    ClassicalFallback, ItinerarySegment, ItinerarySummary, Objective, RouteKind, RouteOptimizer,
    RouteOptions, TripPlan, TripPlanner, TripRequest, route_geometry, select_routes,
    shortest_path, summarize,
};

pub use crate::EARTH_RADIUS_KM;
pub use crate::Error;
