use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::model::{RailNetwork, StationRegistry};
use crate::{Error, StationId, Time};

/// Parses a whitespace-separated list of `from to minutes` triples.
///
/// The list is terminated by a sentinel triple whose first value is
/// negative; anything after the sentinel is ignored, and end of input
/// without a sentinel also terminates the list. A trailing partial triple
/// is ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for non-numeric tokens or for negative
/// values in a non-sentinel position.
pub fn parse_edge_list(input: &str) -> Result<Vec<(StationId, StationId, Time)>, Error> {
    let mut edges = Vec::new();
    for (a, b, w) in input.split_whitespace().tuples() {
        let from = parse_field(a)?;
        if from < 0 {
            return Ok(edges);
        }
        let to = parse_field(b)?;
        let minutes = parse_field(w)?;
        if to < 0 || minutes < 0 {
            return Err(Error::InvalidData(format!(
                "negative value in connection {a} {b} {w}"
            )));
        }
        let minutes = Time::try_from(minutes)
            .map_err(|_| Error::InvalidData(format!("travel time out of range: {w}")))?;
        edges.push((from as StationId, to as StationId, minutes));
    }
    Ok(edges)
}

fn parse_field(token: &str) -> Result<i64, Error> {
    token
        .parse()
        .map_err(|_| Error::InvalidData(format!("invalid connection field: {token}")))
}

/// Reads a connection list from disk and builds the travel-time matrix,
/// sized to the given station registry.
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains malformed data,
/// or references a station outside the registry.
pub fn load_network(path: &Path, stations: &StationRegistry) -> Result<RailNetwork, Error> {
    let text = std::fs::read_to_string(path)?;
    let edges = parse_edge_list(&text)?;
    info!(
        "loaded {} connections for {} stations from {}",
        edges.len(),
        stations.len(),
        path.display()
    );
    RailNetwork::from_edges(stations.len(), edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_until_the_sentinel() {
        let edges = parse_edge_list("0 1 10\n1 0 10\n-1 -1 -1\n5 5 5").unwrap();
        assert_eq!(edges, vec![(0, 1, 10), (1, 0, 10)]);
    }

    #[test]
    fn end_of_input_terminates_without_a_sentinel() {
        let edges = parse_edge_list("0 2 20").unwrap();
        assert_eq!(edges, vec![(0, 2, 20)]);
    }

    #[test]
    fn bare_sentinel_value_is_accepted() {
        // A lone trailing -1 is an incomplete triple and simply ends the list
        assert_eq!(parse_edge_list("0 1 10 -1").unwrap(), vec![(0, 1, 10)]);
    }

    #[test]
    fn non_numeric_tokens_are_invalid() {
        assert!(matches!(
            parse_edge_list("0 one 10"),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn negative_weight_is_invalid() {
        assert!(matches!(
            parse_edge_list("0 1 -5"),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn bundled_network_loads_against_the_dutch_registry() {
        let registry = crate::model::netherlands();
        let edges = parse_edge_list(include_str!("../../data/netherlands.txt")).unwrap();
        let network = RailNetwork::from_edges(registry.len(), edges).unwrap();
        // Symmetric by construction
        for from in 0..registry.len() {
            for (to, minutes) in network.connections(from) {
                assert_eq!(network.travel_time(to, from).unwrap(), minutes);
            }
        }
    }
}
