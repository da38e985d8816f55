use geo::{Point, line_string};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use hashbrown::HashMap;
use serde_json::{Value as JsonValue, json};

use crate::Error;
use crate::model::{MultiModalEdge, PathResult, Stop, StopId};

/// Converts a path to a `GeoJSON` `FeatureCollection` for map display.
///
/// Line features come first, one per edge, followed by point markers for the
/// start, every transfer stop and the end. Returns `None` for a missing or
/// empty path.
pub fn route_geometry(path: Option<&PathResult>, stops: &[Stop]) -> Option<FeatureCollection> {
    path.and_then(|path| path.to_geojson(stops))
}

impl PathResult {
    /// Converts the path to a `GeoJSON` `FeatureCollection`.
    ///
    /// Edges whose stops are missing from `stops` are left out of the collection.
    pub fn to_geojson(&self, stops: &[Stop]) -> Option<FeatureCollection> {
        let first = self.edges.first()?;
        let last = self.edges.last()?;

        let stops_by_id: HashMap<&StopId, &Stop> =
            stops.iter().map(|stop| (&stop.id, stop)).collect();

        let mut features = Vec::with_capacity(self.edges.len() * 2 + 1);

        for (idx, edge) in self.edges.iter().enumerate() {
            match (stops_by_id.get(&edge.from), stops_by_id.get(&edge.to)) {
                (Some(from), Some(to)) => features.push(segment_feature(edge, idx, from, to)),
                _ => log::warn!(
                    "Edge {} -> {} has no stop coordinates - leaving it off the map",
                    edge.from,
                    edge.to
                ),
            }
        }

        let markers = std::iter::once(("start", &first.from))
            .chain(self.edges.iter().skip(1).map(|edge| ("transfer", &edge.from)))
            .chain(std::iter::once(("end", &last.to)));

        for (marker, stop_id) in markers {
            if let Some(stop) = stops_by_id.get(stop_id) {
                features.push(marker_feature(marker, stop));
            }
        }

        Some(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    /// Serializes [`PathResult::to_geojson`]; an empty path gives an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_geojson_string(&self, stops: &[Stop]) -> Result<String, Error> {
        let collection = self.to_geojson(stops).unwrap_or(FeatureCollection {
            features: Vec::new(),
            bbox: None,
            foreign_members: None,
        });
        serde_json::to_string(&collection).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn segment_feature(edge: &MultiModalEdge, leg_idx: usize, from: &Stop, to: &Stop) -> Feature {
    // GeoJSON positions are (longitude, latitude)
    let line = line_string![
        (x: from.coordinate.longitude, y: from.coordinate.latitude),
        (x: to.coordinate.longitude, y: to.coordinate.latitude),
    ];

    let properties = json!({
        "feature_type": "segment",
        "leg_index": leg_idx,
        "from": edge.from,
        "to": edge.to,
        "from_name": from.name,
        "to_name": to.name,
        "mode": edge.mode,
        "operator": edge.source_route.name,
        "distance_km": edge.distance_km,
        "time_min": edge.time_min,
        "cost_inr": edge.cost_inr,
        "co2_kg": edge.co2_kg,
        "ticket_link": edge.ticket_link,
        "eco": edge.eco,
        "ev": edge.ev,
        "scenic": edge.scenic,
        "color": edge.mode.color(),
    });

    feature(Geometry::new(GeoJsonValue::from(&line)), properties)
}

fn marker_feature(marker: &str, stop: &Stop) -> Feature {
    let point: Point<f64> = stop.geometry();

    let properties = json!({
        "feature_type": "marker",
        "marker": marker,
        "stop_id": stop.id,
        "name": stop.name,
        "mode": stop.kind,
    });

    feature(Geometry::new(GeoJsonValue::from(&point)), properties)
}

fn feature(geometry: Geometry, properties: JsonValue) -> Feature {
    let properties = match properties {
        JsonValue::Object(map) => Some(map),
        _ => None,
    };

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinate, Route, TransportKind};

    fn stops() -> Vec<Stop> {
        vec![
            Stop::new("a", "Alpha", TransportKind::Train, Coordinate::new(10.0, 70.0)),
            Stop::new("b", "Bravo", TransportKind::Bus, Coordinate::new(11.0, 71.0)),
            Stop::new("c", "Charlie", TransportKind::Walk, Coordinate::new(12.0, 72.0)),
        ]
    }

    fn edge(from: &str, to: &str, mode: TransportKind) -> MultiModalEdge {
        MultiModalEdge {
            from: from.into(),
            to: to.into(),
            mode,
            distance_km: 150.0,
            time_min: 160,
            cost_inr: 225,
            co2_kg: 6.0,
            eco: mode.is_eco(),
            ev: false,
            scenic: true,
            ticket_link: format!("https://book.example/{from}"),
            source_route: Route::new("r", "Coastal Line", to, 0),
        }
    }

    fn marker_names(collection: &FeatureCollection) -> Vec<String> {
        collection
            .features
            .iter()
            .filter_map(|f| f.property("marker"))
            .filter_map(|m| m.as_str().map(str::to_string))
            .collect()
    }

    #[test]
    fn none_and_empty_have_no_geometry() {
        assert!(route_geometry(None, &stops()).is_none());
        assert!(route_geometry(Some(&PathResult::empty()), &stops()).is_none());

        let value: JsonValue =
            serde_json::from_str(&PathResult::empty().to_geojson_string(&stops()).unwrap())
                .unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"], json!([]));
    }

    #[test]
    fn lines_use_lon_lat_order() {
        let path = PathResult::from_edges(vec![edge("a", "b", TransportKind::Train)]);
        let collection = path.to_geojson(&stops()).unwrap();

        let value = serde_json::to_value(&collection).unwrap();
        let geometry = &value["features"][0]["geometry"];

        assert_eq!(geometry["type"], "LineString");
        assert_eq!(geometry["coordinates"], json!([[70.0, 10.0], [71.0, 11.0]]));
    }

    #[test]
    fn segment_properties() {
        let path = PathResult::from_edges(vec![edge("a", "b", TransportKind::Train)]);
        let collection = path.to_geojson(&stops()).unwrap();
        let segment = &collection.features[0];

        assert_eq!(segment.property("mode"), Some(&json!("Train")));
        assert_eq!(segment.property("color"), Some(&json!("#1f77b4")));
        assert_eq!(segment.property("operator"), Some(&json!("Coastal Line")));
        assert_eq!(segment.property("cost_inr"), Some(&json!(225)));
        assert_eq!(segment.property("eco"), Some(&json!(true)));
        assert_eq!(segment.property("scenic"), Some(&json!(true)));
        assert_eq!(
            segment.property("ticket_link"),
            Some(&json!("https://book.example/a"))
        );
    }

    #[test]
    fn markers_for_start_transfers_and_end() {
        let path = PathResult::from_edges(vec![
            edge("a", "b", TransportKind::Train),
            edge("b", "c", TransportKind::Bus),
        ]);
        let collection = path.to_geojson(&stops()).unwrap();

        assert_eq!(collection.features.len(), 5);
        assert_eq!(marker_names(&collection), vec!["start", "transfer", "end"]);

        let transfer = &collection.features[3];
        assert_eq!(transfer.property("stop_id"), Some(&json!("b")));
        assert_eq!(collection.features[1].property("color"), Some(&json!("#ff7f0e")));
    }

    #[test]
    fn geojson_string_is_a_feature_collection() {
        let path = PathResult::from_edges(vec![edge("a", "b", TransportKind::Walk)]);
        let value: JsonValue =
            serde_json::from_str(&path.to_geojson_string(&stops()).unwrap()).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 3);
    }
}
