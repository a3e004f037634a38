use std::path::PathBuf;

/// Errors produced by the lookup API.
///
/// An empty match is not an error; every lookup function returns an empty
/// `Vec` when nothing qualifies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Latitude or longitude outside the valid WGS84 range.
    #[error("invalid WGS84 coordinate: {lat}, {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// A query argument that fails validation before any query runs.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The backing store could not be opened. The store is a required
    /// static asset; there is no retry or recovery path.
    #[error("address database unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// A query against an opened store failed.
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
