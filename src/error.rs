//! Error types for mesh generation.
//!
//! Two classes: invariant violations (a caller/topology bug, generation
//! stops immediately) and resource bounds (level/resolution checked
//! before any allocation happens).

use thiserror::Error;

/// Mesh generation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// An edge lookup used the same vertex for both endpoints. A
    /// self-edge cannot exist in a valid triangle mesh, so this is a
    /// topology bug in the caller, not a recoverable condition.
    #[error("degenerate edge: both endpoints are vertex {0}")]
    DegenerateEdge(u32),

    /// Requested subdivision level exceeds the allocation bound.
    #[error("subdivision level {level} exceeds maximum {max}")]
    SubdivisionTooDeep {
        /// Requested level
        level: u32,
        /// Largest supported level
        max: u32,
    },

    /// Requested grid resolution exceeds the allocation bound.
    #[error("grid resolution {resolution} exceeds maximum {max}")]
    ResolutionTooLarge {
        /// Requested resolution
        resolution: u32,
        /// Largest supported resolution
        max: u32,
    },

    /// Grid resolution of zero produces no cells.
    #[error("grid resolution must be at least 1")]
    ZeroResolution,
}
