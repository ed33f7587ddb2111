//! # terramesh
//!
//! Procedural mesh generation: closed, seamless triangle meshes built on
//! the CPU and handed to an external renderer as flat buffers.
//!
//! Two mesh families:
//!
//! - **Icospheres**: iterative 4-way subdivision of a canonical
//!   icosahedron with a vertex-welding edge-midpoint cache, optionally
//!   displaced per frame by a periodic blob waveform.
//! - **Terrain**: a multi-octave lattice-noise height field shaped into a
//!   grid mesh with UVs, height-derived vertex colors, and skirt walls
//!   whose tops exactly match the terrain boundary (no seam gap).
//!
//! Both families share smooth per-vertex normal synthesis by face-normal
//! accumulation over welded vertices.
//!
//! ## Example
//!
//! ```rust
//! use terramesh::prelude::*;
//!
//! // A unit icosphere, 3 subdivision passes (1280 triangles)
//! let mut sphere = icosphere(&IcosphereConfig::default()).unwrap();
//!
//! // Per-frame blob animation: displace positions, keep topology
//! apply_blob(&mut sphere, 0.5);
//!
//! // A terrain patch from fractal noise
//! let config = TerrainConfig {
//!     grid: HeightGridConfig { resolution: 64, ..Default::default() },
//!     ..Default::default()
//! };
//! let terrain = terrain_mesh(&config).unwrap();
//! assert!(terrain.triangle_count() > 0);
//! ```
//!
//! Rendering, camera, lighting, and input are deliberately not part of
//! this crate; generation is pure and deterministic for a given
//! configuration.

#![warn(missing_docs)]

pub mod error;
pub mod icosphere;
pub mod math;
pub mod mesh;
pub mod terrain;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::error::MeshError;
    pub use crate::icosphere::{
        apply_blob, blob_radius, icosphere, IcosphereConfig, MidpointCache, MAX_SUBDIVISIONS,
    };
    pub use crate::math::{midpoint_on_sphere, rescale};
    pub use crate::mesh::{accumulate_normals, Mesh};
    pub use crate::terrain::{
        terrain_mesh, terrain_mesh_from_grid, HeightGrid, HeightGridConfig, TerrainConfig,
        ValueNoise, MAX_RESOLUTION,
    };
    pub use glam::{Vec2, Vec3};
}

// Re-exports for convenience
pub use error::MeshError;
pub use icosphere::icosphere;
pub use mesh::Mesh;
pub use terrain::terrain_mesh;
