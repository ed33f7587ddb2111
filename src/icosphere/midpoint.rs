//! Edge-midpoint cache for vertex welding during subdivision.

use std::collections::HashMap;

use glam::Vec3;

use crate::error::MeshError;
use crate::math::midpoint_on_sphere;

/// Maps an undirected vertex-index pair to the welded midpoint vertex
/// created for that edge.
///
/// Keys are canonicalized with the smaller index first, so both
/// traversal orders of a shared edge resolve to the same vertex - this
/// is what makes the refined mesh watertight and its accumulated
/// normals continuous across edges. One cache instance is scoped to a
/// single subdivision pass and discarded afterward.
///
/// The map replaces the obvious two-dimensional lookup table indexed by
/// both endpoints, which grows O(V^2) with identical behavior.
#[derive(Debug)]
pub struct MidpointCache {
    midpoints: HashMap<(u32, u32), u32>,
    radius: f32,
}

impl MidpointCache {
    /// Create a cache producing midpoints on a sphere of `radius`.
    pub fn new(radius: f32) -> Self {
        MidpointCache {
            midpoints: HashMap::new(),
            radius,
        }
    }

    /// Create a cache pre-sized for a known unique-edge count.
    pub fn with_capacity(radius: f32, edges: usize) -> Self {
        MidpointCache {
            midpoints: HashMap::with_capacity(edges),
            radius,
        }
    }

    /// Return the midpoint vertex index for edge `(a, b)`, creating it
    /// on first access.
    ///
    /// A new midpoint is the average of the two parent positions
    /// rescaled onto the sphere, appended to `vertices`. Symmetric:
    /// `lookup(a, b)` and `lookup(b, a)` return the same index.
    ///
    /// A self-edge (`a == b`) is a topology bug in the caller and fails
    /// immediately with [`MeshError::DegenerateEdge`].
    pub fn lookup(&mut self, vertices: &mut Vec<Vec3>, a: u32, b: u32) -> Result<u32, MeshError> {
        if a == b {
            return Err(MeshError::DegenerateEdge(a));
        }
        let key = if a < b { (a, b) } else { (b, a) };

        if let Some(&mid) = self.midpoints.get(&key) {
            return Ok(mid);
        }

        let mid = vertices.len() as u32;
        let position =
            midpoint_on_sphere(vertices[key.0 as usize], vertices[key.1 as usize], self.radius);
        vertices.push(position);
        self.midpoints.insert(key, mid);
        Ok(mid)
    }

    /// Number of unique midpoints created so far.
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// True if no midpoint has been created yet.
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}
