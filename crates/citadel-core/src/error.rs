//! Error types for match configuration.
//!
//! Gameplay-time failures (capacity exhaustion, rejected placement) are
//! absorbed locally and never surface as errors; only configuration-time
//! problems are fatal.

use thiserror::Error;

/// Ways a waypoint path can be unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// Steering looks two waypoints ahead, so fewer than three points
    /// leaves it undefined.
    #[error("a tank-bearing path needs at least 3 waypoints, got {0}")]
    TooFewWaypoints(usize),

    /// Zero-length segment at the given index.
    #[error("path segment {0} has zero length")]
    DegenerateSegment(usize),
}

/// Fatal errors when constructing a match.
#[derive(Debug, Error)]
pub enum MatchSetupError {
    #[error("invalid path: {0}")]
    InvalidPath(#[from] PathError),
}
