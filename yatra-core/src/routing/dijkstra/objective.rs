use serde::{Deserialize, Serialize};

use crate::model::MultiModalEdge;

/// Edge attribute minimized by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Great-circle kilometers
    Distance,
    /// Fare in INR
    Cost,
}

impl Objective {
    pub fn weight(self, edge: &MultiModalEdge) -> f64 {
        match self {
            Objective::Distance => edge.distance_km,
            Objective::Cost => f64::from(edge.cost_inr),
        }
    }
}
