use crate::model::{MultiModalGraph, PathResult, StopId};

use super::dijkstra::{Objective, shortest_path};

/// Slot for an alternative route optimizer.
///
/// The route selector runs whatever optimizer it was given alongside the
/// distance and cost solvers, so a different strategy can be plugged in
/// without touching call sites.
pub trait RouteOptimizer {
    /// Short label reported with the optimizer's result
    fn name(&self) -> &str;

    fn optimize(&self, graph: &MultiModalGraph, start: &StopId, end: &StopId)
    -> Option<PathResult>;
}

/// Stand-in for the hybrid/quantum optimizer: solves classically for
/// minimum distance and therefore always agrees with the shortest route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicalFallback;

impl RouteOptimizer for ClassicalFallback {
    fn name(&self) -> &str {
        "classical-fallback"
    }

    fn optimize(
        &self,
        graph: &MultiModalGraph,
        start: &StopId,
        end: &StopId,
    ) -> Option<PathResult> {
        shortest_path(graph, start, end, Objective::Distance)
    }
}

impl<T: RouteOptimizer + ?Sized> RouteOptimizer for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn optimize(
        &self,
        graph: &MultiModalGraph,
        start: &StopId,
        end: &StopId,
    ) -> Option<PathResult> {
        (**self).optimize(graph, start, end)
    }
}

impl<T: RouteOptimizer + ?Sized> RouteOptimizer for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn optimize(
        &self,
        graph: &MultiModalGraph,
        start: &StopId,
        end: &StopId,
    ) -> Option<PathResult> {
        (**self).optimize(graph, start, end)
    }
}
