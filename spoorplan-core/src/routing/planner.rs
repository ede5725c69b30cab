//! Query façade tying the network, registry and estimator together

use log::{debug, info};

use crate::model::{RailNetwork, StationRegistry};
use crate::{Error, StationId};

use super::heuristic::DistanceEstimator;
use super::search::{SearchOutcome, shortest_path};

/// Search configuration for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Plain label-setting search ordered by tentative travel time
    Dijkstra,
    /// The same search, accelerated with the straight-line lower bound
    #[default]
    AStar,
}

/// Route planner over a fixed station universe.
///
/// The network is mutated only by disruptions, applied strictly before
/// queries; queries themselves are read-only and independent.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    stations: StationRegistry,
    network: RailNetwork,
    estimator: DistanceEstimator,
}

impl RoutePlanner {
    /// Creates a planner from a station registry and a loaded network.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry and the travel-time matrix disagree
    /// on the number of stations.
    pub fn new(stations: StationRegistry, network: RailNetwork) -> Result<Self, Error> {
        if stations.len() != network.station_count() {
            return Err(Error::InvalidData(format!(
                "{} stations in the registry but a matrix for {}",
                stations.len(),
                network.station_count()
            )));
        }
        let estimator = DistanceEstimator::new(&stations);
        Ok(RoutePlanner {
            stations,
            network,
            estimator,
        })
    }

    /// Disables the connection between two stations, in both directions.
    pub fn apply_disruption(&mut self, a: StationId, b: StationId) -> Result<(), Error> {
        self.network.set_travel_time(a, b, 0)?;
        self.network.set_travel_time(b, a, 0)?;
        info!(
            "disrupted connection between {} and {}",
            self.stations.name(a).unwrap_or("?"),
            self.stations.name(b).unwrap_or("?"),
        );
        Ok(())
    }

    /// Answers a single routing query.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is outside the station universe.
    pub fn plan(
        &self,
        source: StationId,
        target: StationId,
        algorithm: Algorithm,
    ) -> Result<SearchOutcome, Error> {
        debug!("planning {source} -> {target} with {algorithm:?}");
        let heuristic = match algorithm {
            Algorithm::Dijkstra => None,
            Algorithm::AStar => Some(&self.estimator),
        };
        shortest_path(&self.network, source, target, heuristic)
    }

    pub fn stations(&self) -> &StationRegistry {
        &self.stations
    }

    pub fn network(&self) -> &RailNetwork {
        &self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Station, netherlands};
    use crate::routing::search::Journey;

    fn tiny_registry() -> StationRegistry {
        StationRegistry::new(vec![
            Station::new("Noord", 53.0, 5.0),
            Station::new("Midden", 52.5, 5.0),
            Station::new("Zuid", 52.0, 5.0),
        ])
    }

    fn tiny_planner() -> RoutePlanner {
        // Noord <-> Midden <-> Zuid plus a slow direct link
        let network = RailNetwork::from_edges(
            3,
            [
                (0, 1, 60),
                (1, 0, 60),
                (1, 2, 60),
                (2, 1, 60),
                (0, 2, 150),
                (2, 0, 150),
            ],
        )
        .unwrap();
        RoutePlanner::new(tiny_registry(), network).unwrap()
    }

    #[test]
    fn registry_and_matrix_sizes_must_agree() {
        let network = RailNetwork::new(5);
        assert!(matches!(
            RoutePlanner::new(tiny_registry(), network),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn both_algorithms_agree_on_the_route() {
        let planner = tiny_planner();
        let plain = planner.plan(0, 2, Algorithm::Dijkstra).unwrap();
        let accelerated = planner.plan(0, 2, Algorithm::AStar).unwrap();
        assert_eq!(
            plain,
            SearchOutcome::Reached(Journey {
                stations: vec![0, 1, 2],
                total_time: 120,
            })
        );
        assert_eq!(plain, accelerated);
    }

    #[test]
    fn disruption_disables_both_directions() {
        let mut planner = tiny_planner();
        planner.apply_disruption(0, 1).unwrap();
        assert_eq!(planner.network().travel_time(0, 1).unwrap(), 0);
        assert_eq!(planner.network().travel_time(1, 0).unwrap(), 0);

        let outcome = planner.plan(0, 2, Algorithm::AStar).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Reached(Journey {
                stations: vec![0, 2],
                total_time: 150,
            })
        );
    }

    #[test]
    fn fully_cut_off_station_is_unreachable() {
        let mut planner = tiny_planner();
        planner.apply_disruption(0, 1).unwrap();
        planner.apply_disruption(0, 2).unwrap();
        assert_eq!(
            planner.plan(0, 2, Algorithm::Dijkstra).unwrap(),
            SearchOutcome::Unreachable
        );
    }

    #[test]
    fn netherlands_registry_builds_a_planner() {
        let registry = netherlands();
        let network = RailNetwork::new(registry.len());
        assert!(RoutePlanner::new(registry, network).is_ok());
    }
}
