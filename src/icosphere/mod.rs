//! Geodesic icosphere generation.
//!
//! The sphere starts as a canonical 12-vertex, 20-face icosahedron.
//! Each subdivision pass splits every triangle into four by inserting
//! the three edge midpoints, welded through [`MidpointCache`] so shared
//! edges resolve to shared vertices, and rescaled onto the target
//! radius so the mesh stays spherical. Passes are iterative with
//! double-buffered triangle lists; the vertex list grows in place by
//! exactly the unique-edge count of the previous mesh.
//!
//! Counts after `k` passes: `T(k) = 20 * 4^k` triangles and
//! `V(k) = V(k-1) + 3 * T(k-1) / 2` vertices (12, 42, 162, ...).

pub mod blob;
pub mod midpoint;

pub use blob::{apply_blob, blob_radius};
pub use midpoint::MidpointCache;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::{accumulate_normals, Mesh};

/// Largest accepted subdivision level, checked before any allocation.
/// Level 8 is already 1.3M triangles; deeper levels exhaust memory long
/// before they add visible detail.
pub const MAX_SUBDIVISIONS: u32 = 8;

/// The 12 vertices of the canonical unit icosahedron: poles at +/-Z,
/// two staggered rings of five at z = +/-0.447.
pub const SEED_VERTICES: [Vec3; 12] = [
    Vec3::new(0.000, 0.000, 1.000),
    Vec3::new(0.894, 0.000, 0.447),
    Vec3::new(0.276, 0.851, 0.447),
    Vec3::new(-0.724, 0.526, 0.447),
    Vec3::new(-0.724, -0.526, 0.447),
    Vec3::new(0.276, -0.851, 0.447),
    Vec3::new(0.724, 0.526, -0.447),
    Vec3::new(-0.276, 0.851, -0.447),
    Vec3::new(-0.894, 0.000, -0.447),
    Vec3::new(-0.276, -0.851, -0.447),
    Vec3::new(0.724, -0.526, -0.447),
    Vec3::new(0.000, 0.000, -1.000),
];

/// The 20 seed faces: top cap, bottom cap, then the two mid rings.
/// Wound so the accumulated face normals point outward.
pub const SEED_FACES: [[u32; 3]; 20] = [
    [2, 1, 0],
    [3, 2, 0],
    [4, 3, 0],
    [5, 4, 0],
    [1, 5, 0],
    [11, 6, 7],
    [11, 7, 8],
    [11, 8, 9],
    [11, 9, 10],
    [11, 10, 6],
    [1, 2, 6],
    [2, 3, 7],
    [3, 4, 8],
    [4, 5, 9],
    [5, 1, 10],
    [2, 7, 6],
    [3, 8, 7],
    [4, 9, 8],
    [5, 10, 9],
    [1, 6, 10],
];

/// Configuration for icosphere generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IcosphereConfig {
    /// Number of 4-way subdivision passes over the seed icosahedron
    pub subdivisions: u32,
    /// Target sphere radius
    pub radius: f32,
    /// Fill `colors` with each vertex's undisplaced position, the
    /// classic debug coloring for welded spheres
    pub position_colors: bool,
}

impl Default for IcosphereConfig {
    fn default() -> Self {
        IcosphereConfig {
            subdivisions: 3,
            radius: 1.0,
            position_colors: false,
        }
    }
}

/// Generate an icosphere mesh.
///
/// `subdivisions == 0` returns the seed icosahedron unchanged (for the
/// unit radius, bit-exact seed constants). Fails with
/// [`MeshError::SubdivisionTooDeep`] above [`MAX_SUBDIVISIONS`] - the
/// caller validates its level against that bound rather than letting
/// allocation blow up.
pub fn icosphere(config: &IcosphereConfig) -> Result<Mesh, MeshError> {
    if config.subdivisions > MAX_SUBDIVISIONS {
        return Err(MeshError::SubdivisionTooDeep {
            level: config.subdivisions,
            max: MAX_SUBDIVISIONS,
        });
    }

    let mut positions: Vec<Vec3> = SEED_VERTICES.iter().map(|&v| v * config.radius).collect();
    let mut indices: Vec<u32> = SEED_FACES.iter().flatten().copied().collect();

    for _ in 0..config.subdivisions {
        indices = subdivide_once(&mut positions, &indices, config.radius)?;
    }

    let normals = accumulate_normals(&positions, &indices);
    let colors = if config.position_colors {
        positions.clone()
    } else {
        Vec::new()
    };

    Ok(Mesh {
        positions,
        normals,
        indices,
        uvs: Vec::new(),
        colors,
    })
}

/// One subdivision pass: split every triangle into four.
///
/// Midpoints are welded through a pass-scoped [`MidpointCache`]. For a
/// closed mesh every edge is shared by exactly two faces, so the pass
/// creates `3 * T / 2` new vertices; the vertex buffer is reserved for
/// exactly that many up front.
fn subdivide_once(
    positions: &mut Vec<Vec3>,
    indices: &[u32],
    radius: f32,
) -> Result<Vec<u32>, MeshError> {
    let triangle_count = indices.len() / 3;
    let edge_count = triangle_count * 3 / 2;

    positions.reserve_exact(edge_count);
    let mut cache = MidpointCache::with_capacity(radius, edge_count);
    let mut refined = Vec::with_capacity(indices.len() * 4);

    for tri in indices.chunks_exact(3) {
        let (v0, v1, v2) = (tri[0], tri[1], tri[2]);

        let m01 = cache.lookup(positions, v0, v1)?;
        let m12 = cache.lookup(positions, v1, v2)?;
        let m20 = cache.lookup(positions, v2, v0)?;

        // Three corner triangles plus the center one, preserving winding
        #[rustfmt::skip]
        refined.extend_from_slice(&[
            v0,  m01, m20,
            v1,  m12, m01,
            v2,  m20, m12,
            m01, m12, m20,
        ]);
    }

    debug_assert_eq!(cache.len(), edge_count, "mesh is not closed");
    Ok(refined)
}
