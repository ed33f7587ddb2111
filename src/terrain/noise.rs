//! Deterministic lattice value noise with a fractal octave sum.
//!
//! The field is a pure function of `(x, y, octaves, persistence, seed)`:
//! identical arguments always return bit-identical results, because the
//! lattice hash is plain wrapping integer arithmetic and the blend is
//! fixed-order floating point. The algorithm:
//!
//! 1. Hash: shift-xor bit mixing plus a multiply-add, masked to a
//!    positive range and rescaled to (-1, 1].
//! 2. Smooth value: bilinear blend of the four surrounding lattice
//!    hashes with a cosine ease per axis (a linear blend leaves visible
//!    grid-aligned creases).
//! 3. Fractal: sum the octaves, halving frequency and multiplying
//!    amplitude by the persistence after each term.

use serde::{Deserialize, Serialize};

/// Deterministic multi-octave lattice value noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueNoise {
    /// Seed mixed into every lattice hash
    pub seed: i32,
}

impl ValueNoise {
    /// Create a noise field for `seed`.
    pub fn new(seed: i32) -> Self {
        ValueNoise { seed }
    }

    /// Hash an integer into (-1, 1] by bit mixing.
    #[inline]
    fn raw(n: i32) -> f64 {
        let n = (n << 13) ^ n;
        let mixed = n
            .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789_221))
            .wrapping_add(1_376_312_589)
            & 0x7fff_ffff;
        1.0 - mixed as f64 / 1_073_741_824.0
    }

    /// Hashed value at an integer lattice point for one octave.
    #[inline]
    fn lattice(&self, x: i32, y: i32, octave: i32) -> f64 {
        Self::raw(
            x.wrapping_mul(1619)
                .wrapping_add(y.wrapping_mul(31337))
                .wrapping_add(octave.wrapping_mul(3463))
                .wrapping_add(self.seed.wrapping_mul(13397)),
        )
    }

    /// Smooth value at fractional coordinates: the four surrounding
    /// lattice hashes blended with a cosine ease per axis.
    pub fn smooth(&self, x: f64, y: f64, octave: i32) -> f64 {
        // Truncating cast, not floor: fractional parts go negative left
        // of zero and the cosine ease mirrors the cell there
        let ix = x as i32;
        let iy = y as i32;
        let fx = x - ix as f64;
        let fy = y - iy as f64;

        let v00 = self.lattice(ix, iy, octave);
        let v10 = self.lattice(ix + 1, iy, octave);
        let v01 = self.lattice(ix, iy + 1, octave);
        let v11 = self.lattice(ix + 1, iy + 1, octave);

        let x0 = ease(v00, v10, fx);
        let x1 = ease(v01, v11, fx);
        ease(x0, x1, fy)
    }

    /// Fractal sum of `octaves` smooth layers.
    ///
    /// Starts at frequency 1 and amplitude 1; after each octave the
    /// frequency halves and the amplitude is multiplied by
    /// `persistence`, so persistence above 1 weights the broader,
    /// lower-frequency layers more heavily.
    pub fn fractal(&self, x: f64, y: f64, octaves: u32, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for octave in 0..octaves as i32 {
            total += self.smooth(x * frequency, y * frequency, octave) * amplitude;
            frequency /= 2.0;
            amplitude *= persistence;
        }

        total
    }
}

/// Cosine ease between `a` and `b`: `t` is remapped through
/// `(1 - cos(pi t)) / 2`, which has zero slope at both lattice points.
#[inline]
fn ease(a: f64, b: f64, t: f64) -> f64 {
    let f = (1.0 - (t * std::f64::consts::PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}
