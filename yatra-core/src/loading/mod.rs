//! This module is responsible for loading stop feeds and configuration
//! and building the multimodal routing graph.

mod builder;
mod config;
pub mod feed;

pub use builder::{build_edges, build_multimodal_graph};
pub use config::RoutingConfig;
pub use feed::{load_stops, load_stops_from_reader, parse_stops};
