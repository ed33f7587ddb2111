//! Periodic blob displacement for animated icospheres.
//!
//! A per-frame post-process: the sphere's topology and normals are built
//! once, then every frame each vertex is rescaled along its ray from the
//! origin to a waveform radius driven by the caller-owned animation
//! phase.

use glam::Vec3;

use crate::math::rescale;
use crate::mesh::Mesh;

/// Target radius of the blob waveform at `v` for animation phase
/// `phase` (radians; a full cycle is 2 pi).
///
/// At `sin(phase) == 0` every vertex lands on radius 0.44, so the blob
/// periodically passes through a plain sphere.
#[inline]
pub fn blob_radius(v: Vec3, phase: f32) -> f32 {
    (1.1 + v.y.sin() * (2.0 * v.x).cos() * phase.sin()) * 0.4
}

/// Rescale every vertex along its ray from the origin to the blob
/// radius of its undisplaced position.
///
/// Indices and normals are left untouched: shading keeps the normals of
/// the undisplaced sphere. That mismatch is an accepted approximation -
/// recomputing normals from the displaced geometry would change the
/// look and roughly double the per-frame cost, so any change here must
/// be deliberate, not a silent fix.
pub fn apply_blob(mesh: &mut Mesh, phase: f32) {
    for p in &mut mesh.positions {
        *p = rescale(*p, blob_radius(*p, phase));
    }
}
