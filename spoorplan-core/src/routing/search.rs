//! Label-setting shortest-path search (Dijkstra, optionally A*)

use std::collections::BinaryHeap;

use crate::model::RailNetwork;
use crate::{Error, StationId, Time};

use super::heuristic::DistanceEstimator;
use super::path::reconstruct_route;
use super::state::{FrontierEntry, SearchState};

/// A found route: the stations in travel order and the total travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// Ordered visiting sequence, starting at the source and ending at the
    /// target. A query from a station to itself yields a single entry.
    pub stations: Vec<StationId>,
    /// Total travel time in minutes
    pub total_time: Time,
}

/// Outcome of a single shortest-path query.
///
/// An unreachable target is a normal query result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Reached(Journey),
    Unreachable,
}

/// Runs the label-setting search from `source` towards `target`.
///
/// With a heuristic the frontier is ordered by tentative travel time plus
/// the straight-line lower bound to the target (A*); without one, by
/// tentative travel time alone (plain Dijkstra). Each station's travel time
/// is finalized exactly once, on its first extraction; stale frontier
/// duplicates of finalized stations are skipped.
///
/// # Errors
///
/// Returns an error if `source` or `target` lies outside the network.
pub fn shortest_path(
    network: &RailNetwork,
    source: StationId,
    target: StationId,
    heuristic: Option<&DistanceEstimator>,
) -> Result<SearchOutcome, Error> {
    network.validate_station(source)?;
    network.validate_station(target)?;

    let mut state = SearchState::new(network.station_count(), source);
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        priority: heuristic.map_or(0, |h| h.estimate(source, target)),
        station: source,
    });

    while let Some(FrontierEntry { station, .. }) = frontier.pop() {
        if state.visited.contains(station) {
            continue;
        }
        state.visited.insert(station);

        if station == target {
            let stations = reconstruct_route(&state.predecessors, source, target)?;
            return Ok(SearchOutcome::Reached(Journey {
                stations,
                total_time: state.travel_times[target],
            }));
        }

        for (next, minutes) in network.connections(station) {
            if state.visited.contains(next) {
                continue;
            }
            let candidate = state.travel_times[station] + minutes;
            if candidate < state.travel_times[next] {
                state.travel_times[next] = candidate;
                state.predecessors[next] = Some(station);
                frontier.push(FrontierEntry {
                    priority: match heuristic {
                        Some(h) => candidate + h.estimate(next, target),
                        None => candidate,
                    },
                    station: next,
                });
            }
        }
    }

    Ok(SearchOutcome::Unreachable)
}
