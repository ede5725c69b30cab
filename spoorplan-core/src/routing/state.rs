use std::cmp::Ordering;

use fixedbitset::FixedBitSet;

use crate::{StationId, Time};

/// Frontier entry ordering the search by tentative priority.
///
/// Stale duplicates for the same station may coexist in the heap; the first
/// extraction of an unvisited station is the authoritative one and later
/// duplicates are skipped. This stands in for a decrease-key operation.
#[derive(Copy, Clone, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: Time,
    pub(crate) station: StationId,
}

// Implement Ord for FrontierEntry to use in BinaryHeap
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority (reversed from standard Rust BinaryHeap)
        other.priority.cmp(&self.priority)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-query search labels, allocated fresh for every query.
#[derive(Debug)]
pub(crate) struct SearchState {
    /// Best known travel time from the source, `Time::MAX` until relaxed
    pub(crate) travel_times: Vec<Time>,
    /// Stations whose travel time has been finalized
    pub(crate) visited: FixedBitSet,
    /// Last hop on the best known path to each station
    pub(crate) predecessors: Vec<Option<StationId>>,
}

impl SearchState {
    pub(crate) fn new(station_count: usize, source: StationId) -> Self {
        let mut travel_times = vec![Time::MAX; station_count];
        travel_times[source] = 0;
        SearchState {
            travel_times,
            visited: FixedBitSet::with_capacity(station_count),
            predecessors: vec![None; station_count],
        }
    }
}
