//! Directed multigraph of stops connected by mode-annotated edges

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use super::mode::TransportKind;
use super::stop::{Route, Stop, StopId};

/// Directed edge derived from one (stop, route) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiModalEdge {
    pub from: StopId,
    pub to: StopId,
    pub mode: TransportKind,
    pub distance_km: f64,
    pub time_min: u32,
    pub cost_inr: u32,
    pub co2_kg: f64,
    pub eco: bool,
    /// Reserved: no feed currently distinguishes electric vehicles
    pub ev: bool,
    pub scenic: bool,
    /// Booking link of the origin stop
    pub ticket_link: String,
    pub source_route: Route,
}

/// Stops as nodes, [`MultiModalEdge`]s as (possibly parallel) edges.
///
/// Every stop of the snapshot becomes a node, including stops without
/// resolvable routes. Edge insertion order follows the stop list and each
/// stop's route order.
#[derive(Debug, Clone, Default)]
pub struct MultiModalGraph {
    pub(crate) graph: DiGraph<StopId, MultiModalEdge>,
    pub(crate) stop_nodes: HashMap<StopId, NodeIndex>,
}

impl MultiModalGraph {
    /// Assembles a graph from stops and edges built over them.
    ///
    /// Edges whose endpoints are not among `stops` are ignored. Stops sharing
    /// an id collapse into one node.
    pub fn new(stops: &[Stop], edges: Vec<MultiModalEdge>) -> Self {
        let mut graph = DiGraph::with_capacity(stops.len(), edges.len());
        let mut stop_nodes = HashMap::with_capacity(stops.len());

        for stop in stops {
            match stop_nodes.entry(stop.id.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(graph.add_node(stop.id.clone()));
                }
                Entry::Occupied(_) => log::warn!(
                    "Stop id {} appears more than once - merging into the first node",
                    stop.id
                ),
            }
        }

        for edge in edges {
            match (stop_nodes.get(&edge.from), stop_nodes.get(&edge.to)) {
                (Some(&from), Some(&to)) => {
                    graph.add_edge(from, to, edge);
                }
                _ => log::warn!(
                    "Edge {} -> {} references an unknown stop - skipping",
                    edge.from,
                    edge.to
                ),
            }
        }

        Self { graph, stop_nodes }
    }

    pub fn stop_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_stop(&self, stop: &StopId) -> bool {
        self.stop_nodes.contains_key(stop)
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &MultiModalEdge> {
        self.graph.edge_weights()
    }

    /// Outgoing edges of `stop`; empty when the stop is unknown
    pub fn outgoing<'a>(
        &'a self,
        stop: &StopId,
    ) -> impl Iterator<Item = &'a MultiModalEdge> + use<'a> {
        let node = self.node_index(stop);
        node.into_iter()
            .flat_map(move |node| self.graph.edges(node).map(|edge| edge.weight()))
    }

    pub(crate) fn node_index(&self, stop: &StopId) -> Option<NodeIndex> {
        self.stop_nodes.get(stop).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    fn edge(from: &str, to: &str, distance_km: f64) -> MultiModalEdge {
        MultiModalEdge {
            from: from.into(),
            to: to.into(),
            mode: TransportKind::Bus,
            distance_km,
            time_min: 10,
            cost_inr: 10,
            co2_kg: 0.0,
            eco: false,
            ev: false,
            scenic: false,
            ticket_link: String::new(),
            source_route: Route::new("r", "route", to, 0),
        }
    }

    fn stops() -> Vec<Stop> {
        ["a", "b", "c"]
            .into_iter()
            .map(|id| Stop::new(id, id, TransportKind::Bus, Coordinate::new(0.0, 0.0)))
            .collect()
    }

    #[test]
    fn keeps_parallel_edges() {
        let graph = MultiModalGraph::new(
            &stops(),
            vec![edge("a", "b", 1.0), edge("a", "b", 2.0), edge("b", "c", 1.0)],
        );

        assert_eq!(graph.stop_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.outgoing(&"a".into()).count(), 2);
        assert_eq!(graph.outgoing(&"c".into()).count(), 0);
    }

    #[test]
    fn duplicate_ids_share_one_node() {
        let mut stops = stops();
        stops.push(stops[0].clone());

        let graph = MultiModalGraph::new(&stops, vec![edge("a", "b", 1.0)]);
        assert_eq!(graph.stop_count(), stops.len() - 1);
        assert_eq!(graph.outgoing(&"a".into()).count(), 1);
    }

    #[test]
    fn skips_edges_to_unknown_stops() {
        let graph = MultiModalGraph::new(&stops(), vec![edge("a", "zz", 1.0)]);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_stop(&"zz".into()));
        assert_eq!(graph.outgoing(&"zz".into()).count(), 0);
    }

    #[test]
    fn edges_keep_insertion_order() {
        let graph = MultiModalGraph::new(
            &stops(),
            vec![edge("b", "c", 3.0), edge("a", "b", 1.0)],
        );
        let distances: Vec<_> = graph.edges().map(|e| e.distance_km).collect();
        assert_eq!(distances, vec![3.0, 1.0]);
    }
}
