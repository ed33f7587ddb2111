//! Height grid: fractal noise sampled, normalized, and shaped.
//!
//! The grid is a pure function of its configuration - rebuilding with
//! the same parameters yields bit-identical heights, which is what lets
//! callers regenerate topology only when a structural parameter changes.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::terrain::noise::ValueNoise;

/// Largest accepted grid resolution, checked before any allocation.
/// The mesh built from a grid this size already carries ~16M vertices.
pub const MAX_RESOLUTION: u32 = 4096;

/// Parameters the height grid is a pure function of
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeightGridConfig {
    /// Cells per side; the grid stores `resolution + 1` samples per side
    pub resolution: u32,
    /// Number of fractal noise octaves
    pub octaves: u32,
    /// Amplitude multiplier applied between octaves
    pub persistence: f64,
    /// Noise seed
    pub seed: i32,
    /// Lattice units advanced per grid step (base-octave frequency)
    pub noise_scale: f64,
    /// Power-curve exponent (> 1): biases the normalized heights toward
    /// flat low regions and sharper peaks without reordering them
    pub exponent: f32,
    /// Global height multiplier applied after shaping
    pub height_scale: f32,
}

impl Default for HeightGridConfig {
    fn default() -> Self {
        HeightGridConfig {
            resolution: 512,
            octaves: 5,
            persistence: 2.0,
            seed: 2555,
            noise_scale: 0.5,
            exponent: 2.5,
            height_scale: 0.2,
        }
    }
}

/// Square grid of shaped terrain heights, `resolution + 1` samples per
/// side, stored flat as `x + z * side`.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    heights: Vec<f32>,
    side: u32,
    config: HeightGridConfig,
}

impl HeightGrid {
    /// Sample, normalize, and shape the grid described by `config`.
    ///
    /// Sampling is embarrassingly parallel and runs on the rayon pool;
    /// each sample depends only on its own coordinates, so the result
    /// is deterministic regardless of thread count.
    pub fn generate(config: &HeightGridConfig) -> Result<Self, MeshError> {
        if config.resolution == 0 {
            return Err(MeshError::ZeroResolution);
        }
        if config.resolution > MAX_RESOLUTION {
            return Err(MeshError::ResolutionTooLarge {
                resolution: config.resolution,
                max: MAX_RESOLUTION,
            });
        }

        let side = config.resolution + 1;
        let noise = ValueNoise::new(config.seed);
        let total = side as usize * side as usize;

        let mut heights: Vec<f32> = (0..total)
            .into_par_iter()
            .map(|i| {
                let x = (i % side as usize) as f64;
                let z = (i / side as usize) as f64;
                let nx = x * config.noise_scale - 0.5;
                let nz = z * config.noise_scale - 0.5;
                noise.fractal(nx, nz, config.octaves, config.persistence) as f32
            })
            .collect();

        normalize_and_shape(&mut heights, config.exponent, config.height_scale);

        Ok(HeightGrid {
            heights,
            side,
            config: *config,
        })
    }

    /// Samples per side (`resolution + 1`)
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Shaped height at grid coordinates
    #[inline]
    pub fn get(&self, x: u32, z: u32) -> f32 {
        self.heights[(x + z * self.side) as usize]
    }

    /// The parameters this grid was generated from
    pub fn config(&self) -> &HeightGridConfig {
        &self.config
    }

    /// Flat height storage, indexed `x + z * side`
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }
}

/// Shift the minimum to 0, scale to [0, 1], raise to the power-curve
/// exponent, then apply the global height scale.
///
/// Every step is monotonic on the raw values, so relative ordering from
/// the noise is preserved. A flat field (max == min) maps to all zeros
/// rather than dividing by zero.
fn normalize_and_shape(heights: &mut [f32], exponent: f32, height_scale: f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &h in heights.iter() {
        min = min.min(h);
        max = max.max(h);
    }

    let magnitude = max - min;
    if magnitude <= 0.0 {
        heights.fill(0.0);
        return;
    }

    let rescale = 1.0 / magnitude;
    for h in heights.iter_mut() {
        *h = ((*h - min) * rescale).powf(exponent) * height_scale;
    }
}
