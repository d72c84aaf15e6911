use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the astrogation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Galaxy data file could not be located at the resolved path.
    #[error("galaxy data not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when the galaxy data file contains no planets at all.
    #[error("galaxy data at {path} contains no planets")]
    EmptyDataset { path: PathBuf },

    /// Raised at load time when a grid label does not parse as letter+digits.
    #[error("malformed grid label '{label}'")]
    MalformedGrid { label: String },

    /// Raised when a planet name could not be found in the galaxy data.
    #[error("unknown planet name: {name}")]
    UnknownPlanet { name: String },

    /// Raised when no route could be found between two planets.
    #[error("no route found between {start} and {destination}")]
    RouteNotFound { start: String, destination: String },

    /// Raised when a travel report is requested for an empty route.
    #[error("travel report requested for an empty route")]
    EmptyRoute,

    /// Raised when the hyperdrive rating is zero, negative, or not finite.
    #[error("hyperdrive rating must be a positive number, got {value}")]
    InvalidHyperdriveRating { value: f64 },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
