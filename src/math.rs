//! Small vector helpers shared by both mesh families.
//!
//! All vector math is `glam`; the only operation it lacks is the radial
//! rescale both generators are built on.

use glam::Vec3;

/// Rescale `v` along its ray from the origin so `|result| == radius`.
///
/// The zero vector has no direction and produces a non-finite result;
/// callers must not pass it. Every vertex this crate produces is
/// off-origin.
#[inline]
pub fn rescale(v: Vec3, radius: f32) -> Vec3 {
    v * (radius / v.length())
}

/// Midpoint of two sphere vertices, pushed back onto the sphere.
///
/// The plain average of two points on a sphere lies inside it; rescaling
/// to the target radius is what keeps a subdivided mesh spherical
/// instead of drifting toward the flat seed polyhedron.
#[inline]
pub fn midpoint_on_sphere(a: Vec3, b: Vec3, radius: f32) -> Vec3 {
    rescale(a + b, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_length() {
        let v = rescale(Vec3::new(3.0, 4.0, 0.0), 2.0);
        assert!((v.length() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_rescale_preserves_direction() {
        let v = Vec3::new(1.0, 2.0, -2.0);
        let r = rescale(v, 5.0);
        let cos = r.dot(v) / (r.length() * v.length());
        assert!((cos - 1.0).abs() < 1e-6, "direction changed: {cos}");
    }

    #[test]
    fn test_midpoint_lands_on_sphere() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let m = midpoint_on_sphere(a, b, 1.0);
        assert!((m.length() - 1.0).abs() < 1e-6);
        // Equidistant from both parents
        assert!((m.distance(a) - m.distance(b)).abs() < 1e-6);
    }
}
