//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoProxError {
    /// A point representation could not be resolved to coordinates.
    #[error("invalid input point: {0}")]
    Conversion(String),
    /// The geodesic solver exhausted its iteration budget without reaching
    /// tolerance. Happens for near-antipodal point pairs.
    #[error("geodesic solution did not converge")]
    NotConverged,
    /// An operation that selects from candidate points was given none.
    #[error("no candidate points given")]
    EmptyCandidates,
}
