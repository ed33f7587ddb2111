//! Mesh buffers shared by the icosphere and terrain generators.
//!
//! A [`Mesh`] owns flat, parallel per-vertex attribute buffers plus a
//! triangle index list. The consuming renderer owns rasterization,
//! lighting, and camera transforms; this crate only produces the data.

pub mod normals;

pub use normals::accumulate_normals;

use glam::{Vec2, Vec3};

/// An indexed triangle mesh with parallel per-vertex attribute buffers.
///
/// `positions` and `normals` always have the same length. `uvs` and
/// `colors` are either empty (attribute absent) or parallel to
/// `positions`. Normals are the un-normalized sums of adjacent face
/// normals (see [`accumulate_normals`]); unit-length normalization is
/// deliberately left to the consuming rendering stage.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Per-vertex shading normals, parallel to `positions`
    pub normals: Vec<Vec3>,
    /// Triangle indices into `positions`, 3 per triangle
    pub indices: Vec<u32>,
    /// Texture coordinates, parallel to `positions` or empty
    pub uvs: Vec<Vec2>,
    /// Per-vertex colors, parallel to `positions` or empty
    pub colors: Vec<Vec3>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flat position buffer: 3 floats per vertex
    pub fn position_buffer(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Flat normal buffer: 3 floats per vertex, same ordering as positions
    pub fn normal_buffer(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Flat texture-coordinate buffer: 2 floats per vertex (empty if absent)
    pub fn uv_buffer(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            out.extend_from_slice(&[uv.x, uv.y]);
        }
        out
    }

    /// Flat color buffer: 3 floats per vertex (empty if absent)
    pub fn color_buffer(&self) -> Vec<f32> {
        flatten3(&self.colors)
    }

    /// Check the structural invariants: index count is a multiple of 3,
    /// every triangle has three distinct in-bound indices, and every
    /// non-empty attribute buffer is parallel to `positions`.
    pub fn is_well_formed(&self) -> bool {
        let n = self.positions.len();
        if self.normals.len() != n {
            return false;
        }
        if !self.uvs.is_empty() && self.uvs.len() != n {
            return false;
        }
        if !self.colors.is_empty() && self.colors.len() != n {
            return false;
        }
        if self.indices.len() % 3 != 0 {
            return false;
        }
        self.indices.chunks_exact(3).all(|t| {
            let bound = n as u32;
            t[0] < bound && t[1] < bound && t[2] < bound && t[0] != t[1] && t[1] != t[2] && t[0] != t[2]
        })
    }
}

fn flatten3(v: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::with_capacity(v.len() * 3);
    for p in v {
        out.extend_from_slice(&[p.x, p.y, p.z]);
    }
    out
}
