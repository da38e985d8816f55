//! Data model for multi-modal trip routing
//!
//! Contains the feed-facing stop types, the derived multigraph and solved paths.

pub mod graph;
pub mod mode;
pub mod path;
pub mod stop;

pub use graph::{MultiModalEdge, MultiModalGraph};
pub use mode::TransportKind;
pub use path::{PathResult, RouteTotals};
pub use stop::{Coordinate, Route, Stop, StopId};
