//! Stop feed parsing.
//!
//! The transport-data feed delivers a JSON array of stop records with
//! camelCase keys. Records are validated here so the routing core can assume
//! unique ids and finite coordinates.

use std::io::Read;
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use log::{info, warn};

use crate::{Error, Stop};

/// Parses a stop feed from a JSON string.
///
/// # Errors
///
/// Returns an error for malformed JSON, duplicate stop ids or non-finite
/// coordinates
pub fn parse_stops(json: &str) -> Result<Vec<Stop>, Error> {
    let stops: Vec<Stop> = serde_json::from_str(json)?;
    validate_stops(&stops)?;
    Ok(stops)
}

/// Parses a stop feed from any reader.
///
/// # Errors
///
/// See [`parse_stops`]
pub fn load_stops_from_reader<R: Read>(reader: R) -> Result<Vec<Stop>, Error> {
    let stops: Vec<Stop> = serde_json::from_reader(reader)?;
    validate_stops(&stops)?;
    Ok(stops)
}

/// Reads a stop feed file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its contents are invalid
pub fn load_stops(path: impl AsRef<Path>) -> Result<Vec<Stop>, Error> {
    let path = path.as_ref();
    info!("Loading stop feed: {}", path.display());

    let file = std::fs::File::open(path)?;
    load_stops_from_reader(std::io::BufReader::new(file))
}

fn validate_stops(stops: &[Stop]) -> Result<(), Error> {
    let mut ids = HashSet::with_capacity(stops.len());
    let mut names: HashMap<&str, usize> = HashMap::with_capacity(stops.len());

    for stop in stops {
        if !ids.insert(&stop.id) {
            return Err(Error::InvalidData(format!("duplicate stop id `{}`", stop.id)));
        }
        if !stop.coordinate.is_finite() {
            return Err(Error::InvalidData(format!(
                "stop `{}` has non-finite coordinates",
                stop.id
            )));
        }
        *names.entry(stop.name.as_str()).or_default() += 1;
    }

    for (name, count) in names.iter().filter(|(_, count)| **count > 1) {
        warn!("{count} stops share the name {name:?}; routes to it resolve to the last one");
    }

    let unresolved = stops
        .iter()
        .flat_map(|stop| &stop.routes)
        .filter(|route| !names.contains_key(route.destination_name.as_str()))
        .count();
    if unresolved > 0 {
        warn!("{unresolved} routes name a destination that is not in the feed");
    }

    info!("Loaded {} stops", stops.len());
    Ok(())
}
