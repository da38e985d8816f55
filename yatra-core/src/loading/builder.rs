use hashbrown::HashMap;
use log::{debug, info, trace};

use super::config::RoutingConfig;
use crate::algo::haversine_km;
use crate::model::{MultiModalEdge, MultiModalGraph, Route, Stop};

/// Keywords that mark a route as scenic when found in its name or destination
const SCENIC_KEYWORDS: [&str; 7] = [
    "scenic", "tourist", "view", "lake", "hill", "valley", "forest",
];

/// Builds the multimodal graph for a stop snapshot.
///
/// Never fails: routes whose destination name matches no stop, or matches
/// the stop they start from, contribute no edge.
pub fn build_multimodal_graph(stops: &[Stop], config: &RoutingConfig) -> MultiModalGraph {
    let edges = build_edges(stops, config);
    let graph = MultiModalGraph::new(stops, edges);

    info!(
        "Built multimodal graph with {} stops and {} edges",
        graph.stop_count(),
        graph.edge_count()
    );

    graph
}

/// Derives one edge per resolvable (stop, route) pair, in stop and route order.
pub fn build_edges(stops: &[Stop], config: &RoutingConfig) -> Vec<MultiModalEdge> {
    // Later stops win on duplicate names
    let by_name: HashMap<&str, &Stop> = stops
        .iter()
        .map(|stop| (stop.name.as_str(), stop))
        .collect();

    let mut edges = Vec::with_capacity(stops.iter().map(|stop| stop.routes.len()).sum());
    let mut dropped = 0usize;

    for origin in stops {
        for route in &origin.routes {
            let Some(&destination) = by_name.get(route.destination_name.as_str()) else {
                trace!(
                    "Route {} from {} targets unknown stop {:?} - skipping",
                    route.id, origin.id, route.destination_name
                );
                dropped += 1;
                continue;
            };

            if destination.id == origin.id {
                trace!("Route {} loops back to {} - skipping", route.id, origin.id);
                dropped += 1;
                continue;
            }

            edges.push(edge_between(origin, route, destination, config));
        }
    }

    if dropped > 0 {
        debug!("Dropped {dropped} routes without a resolvable destination");
    }

    edges
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn edge_between(
    origin: &Stop,
    route: &Route,
    destination: &Stop,
    config: &RoutingConfig,
) -> MultiModalEdge {
    let mode = origin.kind;
    let distance_km = haversine_km(origin.coordinate, destination.coordinate);

    let travel_min = (distance_km / mode.speed_kmh() * 60.0).round() as u32;
    let fare = (distance_km * mode.rate_per_km()).round() as u32;
    let co2_kg = (distance_km * mode.co2_per_km() * 100.0).round() / 100.0;

    MultiModalEdge {
        from: origin.id.clone(),
        to: destination.id.clone(),
        mode,
        distance_km,
        time_min: travel_min.saturating_add(config.transfer_minutes),
        cost_inr: fare.max(config.minimum_fare_inr),
        co2_kg,
        eco: mode.is_eco(),
        ev: false,
        scenic: is_scenic(route),
        ticket_link: origin.booking_url.clone(),
        source_route: route.clone(),
    }
}

fn is_scenic(route: &Route) -> bool {
    let text = format!("{} {}", route.name, route.destination_name).to_lowercase();
    SCENIC_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
