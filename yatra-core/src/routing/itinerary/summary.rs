use std::fmt;

use hashbrown::HashMap;
use serde::Serialize;

use crate::model::{MultiModalEdge, PathResult, RouteTotals, Stop, StopId, TransportKind};

/// One edge of an itinerary with resolved stop names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItinerarySegment {
    pub from: StopId,
    pub from_name: String,
    pub to: StopId,
    pub to_name: String,
    pub mode: TransportKind,
    pub operator: String,
    pub distance_km: f64,
    pub time_min: u32,
    pub cost_inr: u32,
    pub co2_kg: f64,
    pub eco: bool,
    pub ev: bool,
    pub scenic: bool,
    pub ticket_link: String,
}

impl ItinerarySegment {
    /// Human-readable line, e.g. `Train: New Delhi → Agra Cantt | 178.3 km | 188 min | ₹267 [Eco]`
    pub fn step(&self) -> String {
        let mut line = format!(
            "{}: {} → {} | {:.1} km | {} min | ₹{}",
            self.mode, self.from_name, self.to_name, self.distance_km, self.time_min, self.cost_inr
        );
        if self.eco {
            line.push_str(" [Eco]");
        }
        if self.ev {
            line.push_str(" [EV]");
        }
        if self.scenic {
            line.push_str(" [Scenic]");
        }
        line
    }
}

/// Steps, structured segments and totals for one path
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItinerarySummary {
    pub steps: Vec<String>,
    pub segments: Vec<ItinerarySegment>,
    pub totals: RouteTotals,
}

impl ItinerarySummary {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ItinerarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {step}", idx + 1)?;
        }
        write!(
            f,
            "Total: {:.1} km | {} min | ₹{} | {:.2} kg CO₂",
            self.totals.distance_km, self.totals.time_min, self.totals.cost_inr, self.totals.co2_kg
        )
    }
}

/// Formats a path as an itinerary.
///
/// `None` and the empty path both produce an empty summary with zero totals.
/// Stops missing from `stops` are shown by id.
pub fn summarize(path: Option<&PathResult>, stops: &[Stop]) -> ItinerarySummary {
    let Some(path) = path.filter(|path| !path.is_empty()) else {
        return ItinerarySummary::default();
    };

    let names: HashMap<&StopId, &str> = stops
        .iter()
        .map(|stop| (&stop.id, stop.name.as_str()))
        .collect();
    let name_of = |id: &StopId| {
        names
            .get(id)
            .map_or_else(|| id.to_string(), |name| (*name).to_string())
    };

    let mut summary = ItinerarySummary::default();
    let mut previous: Option<&MultiModalEdge> = None;

    for edge in &path.edges {
        // Each leg departs where the previous one arrived
        let from = previous.map_or(&edge.from, |prev| &prev.to);

        let segment = ItinerarySegment {
            from: from.clone(),
            from_name: name_of(from),
            to: edge.to.clone(),
            to_name: name_of(&edge.to),
            mode: edge.mode,
            operator: edge.source_route.name.clone(),
            distance_km: edge.distance_km,
            time_min: edge.time_min,
            cost_inr: edge.cost_inr,
            co2_kg: edge.co2_kg,
            eco: edge.eco,
            ev: edge.ev,
            scenic: edge.scenic,
            ticket_link: edge.ticket_link.clone(),
        };

        summary.totals.add_edge(edge);
        summary.steps.push(segment.step());
        summary.segments.push(segment);
        previous = Some(edge);
    }

    summary
}
