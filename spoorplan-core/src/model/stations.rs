//! Station registry - the bijective name/index mapping

use geo::Point;
use hashbrown::HashMap;

use crate::{Error, StationId};

/// A named station with its geographic location.
#[derive(Debug, Clone)]
pub struct Station {
    /// Display name
    pub name: String,
    /// Station coordinates (longitude, latitude)
    pub geometry: Point<f64>,
}

impl Station {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Station {
            name: name.into(),
            geometry: Point::new(longitude, latitude),
        }
    }
}

/// Immutable mapping between station indices and display names.
///
/// Built once at startup; station identity is the index into the table.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
    by_name: HashMap<String, StationId>,
}

impl StationRegistry {
    pub fn new(stations: Vec<Station>) -> Self {
        let by_name = stations
            .iter()
            .enumerate()
            .map(|(id, station)| (station.name.clone(), id))
            .collect();
        StationRegistry { stations, by_name }
    }

    /// Resolves a display name to its station index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStation`] for names outside the universe.
    pub fn resolve(&self, name: &str) -> Result<StationId, Error> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownStation(name.to_string()))
    }

    pub fn get(&self, station: StationId) -> Option<&Station> {
        self.stations.get(station)
    }

    /// Display name of a station, if the index is within the universe.
    pub fn name(&self, station: StationId) -> Option<&str> {
        self.stations.get(station).map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
