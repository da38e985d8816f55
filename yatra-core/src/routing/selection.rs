//! Route selection: three solver runs over one shared graph, and the trip
//! planner that snaps raw coordinates to stops before selecting routes.

use geojson::FeatureCollection;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algo::nearest_stop;
use crate::loading::{RoutingConfig, build_multimodal_graph};
use crate::Error;
use crate::model::{Coordinate, MultiModalGraph, PathResult, Stop, StopId};

use super::dijkstra::{Objective, shortest_path};
use super::itinerary::{ItinerarySummary, route_geometry, summarize};
use super::optimizer::{ClassicalFallback, RouteOptimizer};

/// Which of the three selected routes to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Minimum total distance
    Shortest,
    /// Minimum total fare
    Cheapest,
    /// Result of the pluggable optimizer
    Advanced,
}

/// Results of one route selection. `None` means no path exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteOptions {
    pub shortest: Option<PathResult>,
    pub cheapest: Option<PathResult>,
    pub advanced: Option<PathResult>,
    /// Name of the optimizer that produced `advanced`
    pub advanced_optimizer: String,
}

impl RouteOptions {
    pub fn get(&self, kind: RouteKind) -> Option<&PathResult> {
        match kind {
            RouteKind::Shortest => self.shortest.as_ref(),
            RouteKind::Cheapest => self.cheapest.as_ref(),
            RouteKind::Advanced => self.advanced.as_ref(),
        }
    }

    /// True when at least one solver found a path
    pub fn has_route(&self) -> bool {
        self.shortest.is_some() || self.cheapest.is_some() || self.advanced.is_some()
    }
}

/// Runs the distance solver, the cost solver and `optimizer` on the same graph.
pub fn select_routes<O: RouteOptimizer + ?Sized>(
    graph: &MultiModalGraph,
    start: &StopId,
    end: &StopId,
    optimizer: &O,
) -> RouteOptions {
    RouteOptions {
        shortest: shortest_path(graph, start, end, Objective::Distance),
        cheapest: shortest_path(graph, start, end, Objective::Cost),
        advanced: optimizer.optimize(graph, start, end),
        advanced_optimizer: optimizer.name().to_string(),
    }
}

/// Origin and destination of one trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

impl TripRequest {
    pub const fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// Routes selected for a trip together with the stops the endpoints snapped to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    pub origin_stop: StopId,
    pub destination_stop: StopId,
    /// Distance from the requested origin to `origin_stop`
    pub origin_snap_km: f64,
    /// Distance from the requested destination to `destination_stop`
    pub destination_snap_km: f64,
    pub routes: RouteOptions,
}

impl TripPlan {
    pub fn route(&self, kind: RouteKind) -> Option<&PathResult> {
        self.routes.get(kind)
    }

    /// Itinerary for one of the selected routes; empty when it does not exist
    pub fn summary(&self, kind: RouteKind, stops: &[Stop]) -> ItinerarySummary {
        summarize(self.route(kind), stops)
    }

    /// Map geometry for one of the selected routes
    pub fn geometry(&self, kind: RouteKind, stops: &[Stop]) -> Option<FeatureCollection> {
        route_geometry(self.route(kind), stops)
    }
}

/// Plans trips between raw coordinates over a stop snapshot.
///
/// Every call builds its own graph from the stops it is given, so a planner
/// can be shared freely between independent requests.
#[derive(Debug, Clone)]
pub struct TripPlanner<O = ClassicalFallback> {
    config: RoutingConfig,
    optimizer: O,
}

impl Default for TripPlanner<ClassicalFallback> {
    fn default() -> Self {
        Self::new(RoutingConfig::default())
    }
}

impl TripPlanner<ClassicalFallback> {
    pub fn new(config: RoutingConfig) -> Self {
        Self {
            config,
            optimizer: ClassicalFallback,
        }
    }
}

impl<O: RouteOptimizer> TripPlanner<O> {
    pub fn with_optimizer(config: RoutingConfig, optimizer: O) -> Self {
        Self { config, optimizer }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn build_graph(&self, stops: &[Stop]) -> MultiModalGraph {
        build_multimodal_graph(stops, &self.config)
    }

    /// Snaps both coordinates to their nearest stops and selects routes between them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPointsFound`] when `stops` is empty. A missing path
    /// is not an error; it shows up as `None` routes in the plan.
    pub fn plan(
        &self,
        stops: &[Stop],
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<TripPlan, Error> {
        let graph = self.build_graph(stops);
        self.plan_on_graph(&graph, stops, TripRequest::new(origin, destination))
    }

    /// Selects routes between two known stop ids.
    pub fn plan_between(&self, stops: &[Stop], start: &StopId, end: &StopId) -> RouteOptions {
        let graph = self.build_graph(stops);
        select_routes(&graph, start, end, &self.optimizer)
    }

    fn plan_on_graph(
        &self,
        graph: &MultiModalGraph,
        stops: &[Stop],
        request: TripRequest,
    ) -> Result<TripPlan, Error> {
        let origin = nearest_stop(request.origin, stops).ok_or(Error::NoPointsFound)?;
        let destination = nearest_stop(request.destination, stops).ok_or(Error::NoPointsFound)?;

        debug!(
            "Snapped origin to {} ({:.3} km) and destination to {} ({:.3} km)",
            origin.stop.id, origin.distance_km, destination.stop.id, destination.distance_km
        );

        let routes = select_routes(graph, &origin.stop.id, &destination.stop.id, &self.optimizer);

        Ok(TripPlan {
            origin_stop: origin.stop.id.clone(),
            destination_stop: destination.stop.id.clone(),
            origin_snap_km: origin.distance_km,
            destination_snap_km: destination.distance_km,
            routes,
        })
    }
}

impl<O: RouteOptimizer + Sync> TripPlanner<O> {
    /// Plans independent trips over one stop snapshot in parallel.
    ///
    /// The graph is built once and shared read-only by all requests. Results
    /// keep the order of `requests`.
    pub fn plan_many(
        &self,
        stops: &[Stop],
        requests: &[TripRequest],
    ) -> Vec<Result<TripPlan, Error>> {
        let graph = self.build_graph(stops);

        requests
            .par_iter()
            .map(|request| self.plan_on_graph(&graph, stops, *request))
            .collect()
    }
}
