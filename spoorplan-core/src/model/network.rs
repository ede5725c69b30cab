//! Weighted connection matrix over the fixed station universe

use crate::{Error, StationId, Time};

/// Travel-time matrix of the rail network.
///
/// Connections are directed; the network is symmetric only by construction,
/// and callers disabling a bidirectional link must write both directions.
/// A travel time of zero encodes the absence of a connection, so a genuine
/// zero-minute hop cannot be represented.
#[derive(Debug, Clone)]
pub struct RailNetwork {
    station_count: usize,
    // Row-major station_count x station_count matrix, 0 = no connection
    travel_times: Vec<Time>,
}

impl RailNetwork {
    /// Creates a network of `station_count` stations with no connections.
    pub fn new(station_count: usize) -> Self {
        RailNetwork {
            station_count,
            travel_times: vec![0; station_count * station_count],
        }
    }

    /// Creates a network and loads an initial `(from, to, minutes)` edge list.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge references a station outside the universe.
    pub fn from_edges(
        station_count: usize,
        edges: impl IntoIterator<Item = (StationId, StationId, Time)>,
    ) -> Result<Self, Error> {
        let mut network = RailNetwork::new(station_count);
        for (from, to, minutes) in edges {
            network.set_travel_time(from, to, minutes)?;
        }
        Ok(network)
    }

    /// Number of stations in the fixed universe.
    pub fn station_count(&self) -> usize {
        self.station_count
    }

    /// Check that a station index lies within the universe.
    pub fn validate_station(&self, station: StationId) -> Result<(), Error> {
        if station >= self.station_count {
            Err(Error::InvalidStationIndex(station))
        } else {
            Ok(())
        }
    }

    /// Sets the directed travel time from one station to another.
    ///
    /// Writing zero disables the connection; this is how disruptions are
    /// applied to an already loaded network.
    pub fn set_travel_time(
        &mut self,
        from: StationId,
        to: StationId,
        minutes: Time,
    ) -> Result<(), Error> {
        self.validate_station(from)?;
        self.validate_station(to)?;
        self.travel_times[from * self.station_count + to] = minutes;
        Ok(())
    }

    /// Current directed travel time, zero meaning no connection.
    pub fn travel_time(&self, from: StationId, to: StationId) -> Result<Time, Error> {
        self.validate_station(from)?;
        self.validate_station(to)?;
        Ok(self.travel_times[from * self.station_count + to])
    }

    /// Iterates over the stations directly reachable from `from`, with the
    /// travel time of each connection. Disabled connections are skipped.
    ///
    /// # Panics
    ///
    /// Panics if `from` is outside the station universe.
    pub fn connections(&self, from: StationId) -> impl Iterator<Item = (StationId, Time)> + '_ {
        let row = &self.travel_times[from * self.station_count..(from + 1) * self.station_count];
        row.iter()
            .enumerate()
            .filter(|&(_, &minutes)| minutes > 0)
            .map(|(to, &minutes)| (to, minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_edges_and_reads_them_back() {
        let network = RailNetwork::from_edges(3, [(0, 1, 10), (1, 2, 5), (0, 2, 20)]).unwrap();
        assert_eq!(network.travel_time(0, 1).unwrap(), 10);
        assert_eq!(network.travel_time(1, 2).unwrap(), 5);
        // Directed: the reverse was never written
        assert_eq!(network.travel_time(1, 0).unwrap(), 0);
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let mut network = RailNetwork::new(2);
        assert!(matches!(
            network.set_travel_time(0, 2, 7),
            Err(Error::InvalidStationIndex(2))
        ));
        assert!(matches!(
            network.travel_time(5, 0),
            Err(Error::InvalidStationIndex(5))
        ));
    }

    #[test]
    fn connections_skip_disabled_links() {
        let mut network = RailNetwork::from_edges(3, [(0, 1, 10), (0, 2, 20)]).unwrap();
        network.set_travel_time(0, 1, 0).unwrap();
        let reachable: Vec<_> = network.connections(0).collect();
        assert_eq!(reachable, vec![(2, 20)]);
    }

    #[test]
    fn connections_restart_from_scratch() {
        let network = RailNetwork::from_edges(2, [(0, 1, 4)]).unwrap();
        assert_eq!(network.connections(0).count(), 1);
        assert_eq!(network.connections(0).count(), 1);
    }
}
