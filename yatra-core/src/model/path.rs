//! Solved walks through the multigraph and their aggregate totals

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use itertools::Itertools;
use serde::Serialize;

use super::graph::MultiModalEdge;
use super::stop::StopId;

/// Aggregates over a sequence of edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RouteTotals {
    pub distance_km: f64,
    pub cost_inr: u32,
    pub time_min: u32,
    pub co2_kg: f64,
}

impl RouteTotals {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn add_edge(&mut self, edge: &MultiModalEdge) {
        self.distance_km += edge.distance_km;
        self.cost_inr = self.cost_inr.saturating_add(edge.cost_inr);
        self.time_min = self.time_min.saturating_add(edge.time_min);
        self.co2_kg += edge.co2_kg;
    }
}

impl Add for RouteTotals {
    type Output = RouteTotals;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for RouteTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.distance_km += rhs.distance_km;
        self.cost_inr = self.cost_inr.saturating_add(rhs.cost_inr);
        self.time_min = self.time_min.saturating_add(rhs.time_min);
        self.co2_kg += rhs.co2_kg;
    }
}

impl<'a> Sum<&'a MultiModalEdge> for RouteTotals {
    fn sum<I: Iterator<Item = &'a MultiModalEdge>>(iter: I) -> Self {
        iter.fold(RouteTotals::default(), |mut totals, edge| {
            totals.add_edge(edge);
            totals
        })
    }
}

/// A walk from one stop to another with totals over all of its edges.
///
/// An empty edge list is the trivial path from a stop to itself. "No path"
/// is represented by the absence of a `PathResult` (`Option::None`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathResult {
    pub edges: Vec<MultiModalEdge>,
    #[serde(flatten)]
    pub totals: RouteTotals,
}

impl PathResult {
    /// Trivial path: no edges, all totals zero
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: Vec<MultiModalEdge>) -> Self {
        let totals = edges.iter().sum();
        Self { edges, totals }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn total_distance_km(&self) -> f64 {
        self.totals.distance_km
    }

    pub fn total_cost_inr(&self) -> u32 {
        self.totals.cost_inr
    }

    pub fn total_time_min(&self) -> u32 {
        self.totals.time_min
    }

    pub fn total_co2_kg(&self) -> f64 {
        self.totals.co2_kg
    }

    pub fn origin(&self) -> Option<&StopId> {
        self.edges.first().map(|edge| &edge.from)
    }

    pub fn destination(&self) -> Option<&StopId> {
        self.edges.last().map(|edge| &edge.to)
    }

    /// Number of intermediate stops where the traveler changes edge
    pub fn transfer_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    /// `edges[i].to == edges[i + 1].from` for every consecutive pair
    pub fn is_contiguous(&self) -> bool {
        self.edges
            .iter()
            .tuple_windows()
            .all(|(prev, next)| prev.to == next.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Route, TransportKind};

    fn edge(from: &str, to: &str, distance_km: f64, cost_inr: u32) -> MultiModalEdge {
        MultiModalEdge {
            from: from.into(),
            to: to.into(),
            mode: TransportKind::Train,
            distance_km,
            time_min: 15,
            cost_inr,
            co2_kg: 0.25,
            eco: true,
            ev: false,
            scenic: false,
            ticket_link: String::new(),
            source_route: Route::new("r", "route", to, 0),
        }
    }

    #[test]
    fn empty_path_has_zero_totals() {
        let path = PathResult::empty();
        assert!(path.is_empty());
        assert!(path.totals.is_zero());
        assert!(path.is_contiguous());
        assert_eq!(path.origin(), None);
        assert_eq!(path.transfer_count(), 0);
    }

    #[test]
    fn totals_sum_every_attribute() {
        let path = PathResult::from_edges(vec![edge("a", "b", 2.5, 12), edge("b", "c", 1.5, 30)]);

        assert_eq!(path.total_distance_km(), 4.0);
        assert_eq!(path.total_cost_inr(), 42);
        assert_eq!(path.total_time_min(), 30);
        assert_eq!(path.total_co2_kg(), 0.5);
        assert_eq!(path.origin(), Some(&StopId::new("a")));
        assert_eq!(path.destination(), Some(&StopId::new("c")));
        assert_eq!(path.transfer_count(), 1);
        assert!(path.is_contiguous());
    }

    #[test]
    fn detects_broken_walk() {
        let path = PathResult::from_edges(vec![edge("a", "b", 1.0, 10), edge("c", "d", 1.0, 10)]);
        assert!(!path.is_contiguous());
    }

    #[test]
    fn totals_add() {
        let a = RouteTotals {
            distance_km: 1.0,
            cost_inr: 10,
            time_min: 5,
            co2_kg: 0.5,
        };
        let sum = a + a;
        assert_eq!(sum.distance_km, 2.0);
        assert_eq!(sum.cost_inr, 20);
        assert_eq!(sum.time_min, 10);
        assert_eq!(sum.co2_kg, 1.0);
    }

    #[test]
    fn integer_totals_saturate() {
        let big = RouteTotals {
            cost_inr: u32::MAX,
            time_min: u32::MAX - 1,
            ..RouteTotals::default()
        };
        let sum = big + big;
        assert_eq!(sum.cost_inr, u32::MAX);
        assert_eq!(sum.time_min, u32::MAX);
    }
}
