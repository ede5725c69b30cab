//! Route reconstruction from the predecessor table

use crate::{Error, StationId};

/// Rebuilds the travel-order station sequence from a finished search.
///
/// Follows predecessors backwards from `target` until `source` and reverses
/// the result, so the sequence always starts at `source` and ends at
/// `target`. The walk is iterative; its depth is bounded by the station
/// universe.
///
/// # Errors
///
/// Returns [`Error::StationNotReached`] if the predecessor chain breaks
/// before reaching the source, which happens when `target` was never
/// finalized by the search. A chain longer than the universe is reported
/// as invalid data.
pub fn reconstruct_route(
    predecessors: &[Option<StationId>],
    source: StationId,
    target: StationId,
) -> Result<Vec<StationId>, Error> {
    let mut stations = Vec::new();
    let mut current = target;
    loop {
        stations.push(current);
        if current == source {
            break;
        }
        if stations.len() > predecessors.len() {
            return Err(Error::InvalidData(format!(
                "predecessor chain from station {target} does not terminate"
            )));
        }
        current = predecessors[current].ok_or(Error::StationNotReached(current))?;
    }
    stations.reverse();
    Ok(stations)
}
