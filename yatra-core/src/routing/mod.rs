//! Path finding over the multimodal graph and presentation of the results

pub mod dijkstra;
pub mod itinerary;
pub mod optimizer;
pub mod selection;

pub use dijkstra::{Objective, shortest_path};
pub use itinerary::{ItinerarySegment, ItinerarySummary, route_geometry, summarize};
pub use optimizer::{ClassicalFallback, RouteOptimizer};
pub use selection::{RouteKind, RouteOptions, TripPlan, TripPlanner, TripRequest, select_routes};
