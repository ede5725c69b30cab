//! Data model for the rail network
//!
//! Contains the weighted connection matrix and the station registry.

pub mod netherlands;
pub mod network;
pub mod stations;

pub use netherlands::netherlands;
pub use network::RailNetwork;
pub use stations::{Station, StationRegistry};
