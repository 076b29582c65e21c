//! Error types for sightline operations.

use thiserror::Error;

/// Errors that can occur while building or transforming obstacle geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SightlineError {
    /// Too few distinct vertices remain to form a polygon.
    #[error("degenerate input: {vertices} distinct vertices, at least 3 required")]
    DegenerateInput {
        /// Number of vertices left after de-duplication.
        vertices: usize,
    },

    /// Two adjacent offset edges have the same slope and cannot be intersected.
    #[error("parallel lines")]
    ParallelLines,
}
