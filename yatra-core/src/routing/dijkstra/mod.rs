mod objective;
mod state;
pub mod traced_dijkstra;

pub use objective::Objective;
pub use traced_dijkstra::shortest_path;
