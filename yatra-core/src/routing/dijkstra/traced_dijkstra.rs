use std::collections::BinaryHeap;

use hashbrown::HashMap;
use log::debug;
use ordered_float::OrderedFloat;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::objective::Objective;
use super::state::State;
use crate::model::{MultiModalGraph, PathResult, StopId};

/// Dijkstra's algorithm over the multimodal graph, minimizing `objective`.
///
/// Returns `None` when either stop is not part of the graph or `end` cannot be
/// reached. A request from a stop to itself yields the empty path. Totals of
/// the returned path cover every edge attribute, not only the minimized one.
pub fn shortest_path(
    graph: &MultiModalGraph,
    start: &StopId,
    end: &StopId,
    objective: Objective,
) -> Option<PathResult> {
    let start_node = graph.node_index(start)?;
    let end_node = graph.node_index(end)?;

    if start_node == end_node {
        return Some(PathResult::empty());
    }

    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(graph.stop_count());
    let mut predecessors: HashMap<NodeIndex, EdgeIndex> =
        HashMap::with_capacity(graph.stop_count());
    let mut heap = BinaryHeap::with_capacity(graph.edge_count().max(1));

    // Start node has distance 0
    heap.push(State {
        cost: OrderedFloat(0.0),
        node: start_node,
    });
    distances.insert(start_node, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost.0 > best {
                continue;
            }
        }

        // Settled the target
        if node == end_node {
            break;
        }

        // Parallel edges compete here like any other neighbor
        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost.0 + objective.weight(edge.weight());

            let improved = match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    true
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        true
                    } else {
                        false
                    }
                }
            };

            if improved {
                predecessors.insert(next, edge.id());
                heap.push(State {
                    cost: OrderedFloat(next_cost),
                    node: next,
                });
            }
        }
    }

    if !distances.contains_key(&end_node) {
        debug!("No {objective:?} path from {start} to {end}");
        return None;
    }

    // Follow predecessor edges backward from end to start
    let mut edges = Vec::new();
    let mut current = end_node;
    while current != start_node {
        let edge_idx = *predecessors.get(&current)?;
        let (source, _) = graph.graph.edge_endpoints(edge_idx)?;
        edges.push(graph.graph[edge_idx].clone());
        current = source;
    }
    edges.reverse();

    Some(PathResult::from_edges(edges))
}
