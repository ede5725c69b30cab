//! Straight-line lower bound on the remaining travel time

use geo::{Distance, Euclidean, Point};

use crate::model::StationRegistry;
use crate::{StationId, Time};

/// Kilometres per degree of latitude. Straight-line kilometres are read as
/// minutes of travel, which keeps the estimate below the scheduled time of
/// every connection in the bundled network. Whether that holds for other
/// networks is not proven here; see the admissibility test.
const MINUTES_PER_DEGREE: f64 = 110.574;

/// Lower-bound travel-time estimator between station pairs.
///
/// Owns an immutable copy of the station coordinates, taken from the
/// registry at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DistanceEstimator {
    locations: Vec<Point<f64>>,
}

impl DistanceEstimator {
    pub fn new(registry: &StationRegistry) -> Self {
        DistanceEstimator {
            locations: registry.iter().map(|station| station.geometry).collect(),
        }
    }

    /// Estimated travel time between two stations, in whole minutes,
    /// truncated downwards. Never exceeds the straight-line bound itself.
    ///
    /// # Panics
    ///
    /// Panics if either station is outside the universe the estimator was
    /// built for.
    pub fn estimate(&self, from: StationId, to: StationId) -> Time {
        let degrees = Euclidean.distance(self.locations[from], self.locations[to]);
        (MINUTES_PER_DEGREE * degrees) as Time
    }

    /// Number of stations covered by the estimator.
    pub fn station_count(&self) -> usize {
        self.locations.len()
    }
}
