//! Shortest-path search over the rail network
//!
//! A single label-setting algorithm answers every query; the A* variant
//! feeds the frontier ordering with a straight-line lower bound on the
//! remaining travel time.

pub mod heuristic;
pub mod path;
pub mod planner;
pub mod search;
pub(crate) mod state;

pub use heuristic::DistanceEstimator;
pub use path::reconstruct_route;
pub use planner::{Algorithm, RoutePlanner};
pub use search::{Journey, SearchOutcome, shortest_path};
