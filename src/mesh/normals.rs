//! Smooth per-vertex normal synthesis by face-normal accumulation.
//!
//! For each triangle the un-normalized face normal is added to the
//! accumulator of all three vertices. A vertex welded across faces (by
//! the edge-midpoint cache, or by a shared grid index) therefore ends up
//! with the blended Gouraud normal of its neighborhood, while duplicated
//! per-face vertices would shade flat - vertex welding is what controls
//! shading smoothness here, not just memory.

use glam::Vec3;

/// Sum adjacent face normals into one normal per vertex.
///
/// The face normal of triangle `(a, b, c)` is `(pc - pb) x (pb - pa)`:
/// the cross of the second winding edge with the first. For the winding
/// this crate emits, that vector points out of the surface. The result
/// is not normalized - it is the plain vector sum of adjacent face
/// normals, independent of face processing order, and unit-length
/// normalization belongs to the consuming renderer.
///
/// Zero-area triangles contribute a zero vector; that is accepted, not
/// an error, since nothing downstream divides by it.
pub fn accumulate_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let a = tri[0] as usize;
        let b = tri[1] as usize;
        let c = tri[2] as usize;

        let face = (positions[c] - positions[b]).cross(positions[b] - positions[a]);

        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals
}
