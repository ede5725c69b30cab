//! Shortest travel-time routing over a small, statically known rail network.
//!
//! The network is a fixed universe of named stations connected by directed,
//! weighted links (travel time in whole minutes). Connections can be disabled
//! before queries run, modelling disruptions. Queries are answered by a
//! label-setting shortest-path search (Dijkstra), optionally accelerated with
//! a straight-line lower-bound heuristic (A*), and yield either the ordered
//! station sequence with its total travel time or an unreachable verdict.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{RailNetwork, Station, StationRegistry};
pub use routing::{Algorithm, DistanceEstimator, Journey, RoutePlanner, SearchOutcome};

/// Index of a station within the fixed network universe.
pub type StationId = usize;

/// Travel time in minutes.
pub type Time = u32;
