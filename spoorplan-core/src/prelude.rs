pub use crate::error::Error;
pub use crate::loading::{load_network, parse_edge_list};
pub use crate::model::{RailNetwork, Station, StationRegistry, netherlands};
pub use crate::routing::{
    Algorithm, DistanceEstimator, Journey, RoutePlanner, SearchOutcome, shortest_path,
};

// Core identifier and time types
pub use crate::StationId;
pub use crate::Time; // minutes
