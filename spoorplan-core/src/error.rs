use thiserror::Error;

use crate::StationId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid station index {0}")]
    InvalidStationIndex(StationId),
    #[error("unknown station name: {0}")]
    UnknownStation(String),
    #[error("station {0} was not reached by the search")]
    StationNotReached(StationId),
    #[error("invalid network data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
