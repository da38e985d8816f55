use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use yatra_core::prelude::*;

const KINDS: [TransportKind; 4] = [
    TransportKind::Bus,
    TransportKind::Train,
    TransportKind::Metro,
    TransportKind::Cab,
];

/// Square grid of stops with routes to the east and north neighbours
fn grid(side: usize) -> Vec<Stop> {
    let name = |row: usize, col: usize| format!("Stop {row}-{col}");

    let mut stops = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let mut stop = Stop::new(
                format!("{row}-{col}"),
                name(row, col),
                KINDS[(row + col) % KINDS.len()],
                Coordinate::new(row as f64 * 0.01, col as f64 * 0.01),
            );
            if col + 1 < side {
                stop = stop.with_route(Route::new("east", "Crosstown", name(row, col + 1), 4));
            }
            if row + 1 < side {
                stop = stop.with_route(Route::new("north", "Uptown", name(row + 1, col), 6));
            }
            stops.push(stop);
        }
    }
    stops
}

fn bench_routing(c: &mut Criterion) {
    let stops = grid(40);
    let config = RoutingConfig::default();
    let graph = build_multimodal_graph(&stops, &config);
    let start = StopId::new("0-0");
    let end = StopId::new("39-39");

    c.bench_function("build_graph_40x40", |b| {
        b.iter(|| build_multimodal_graph(black_box(&stops), &config));
    });

    c.bench_function("shortest_path_distance", |b| {
        b.iter(|| shortest_path(&graph, black_box(&start), black_box(&end), Objective::Distance));
    });

    c.bench_function("shortest_path_cost", |b| {
        b.iter(|| shortest_path(&graph, black_box(&start), black_box(&end), Objective::Cost));
    });

    let planner = TripPlanner::default();
    let requests: Vec<_> = (0..32u8)
        .map(|i| {
            let offset = f64::from(i) * 0.005;
            TripRequest::new(
                Coordinate::new(offset, 0.0),
                Coordinate::new(0.39, 0.39 - offset),
            )
        })
        .collect();

    c.bench_function("plan_many_32", |b| {
        b.iter(|| planner.plan_many(black_box(&stops), black_box(&requests)));
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
