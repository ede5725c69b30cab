//! Loading of the network definition from its textual source

mod edge_list;

pub use edge_list::{load_network, parse_edge_list};
