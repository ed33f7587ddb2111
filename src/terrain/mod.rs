//! Noise-driven terrain meshes with seam-matched skirt walls.
//!
//! # Architecture
//!
//! - [`ValueNoise`]: deterministic multi-octave lattice noise
//! - [`HeightGrid`]: noise samples normalized and shaped into heights
//! - [`terrain_mesh`]: grid mesh + UVs + height colors + skirt walls
//!
//! The terrain surface spans `[0, 1]` in X and Z with heights along Y.
//! Skirt walls close the patch down to a base plane; their top vertices
//! reuse the exact boundary positions of the surface, so no seam can
//! open between terrain and skirt.

pub mod height_grid;
pub mod noise;

pub use height_grid::{HeightGrid, HeightGridConfig, MAX_RESOLUTION};
pub use noise::ValueNoise;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::{accumulate_normals, Mesh};

/// Vertex color for the water band
const WATER_COLOR: Vec3 = Vec3::new(0.05, 0.05, 0.25);

/// Vertex color for the skirt walls
const STONE_COLOR: Vec3 = Vec3::new(0.45, 0.42, 0.40);

/// Configuration for terrain mesh generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Height-field parameters
    pub grid: HeightGridConfig,
    /// Texture repeats across the unit patch
    pub uv_repeat: f32,
    /// How far below y = 0 the skirt walls reach
    pub skirt_depth: f32,
    /// Normalized height (0..1) below which vertices take the water color
    pub water_level: f32,
    /// Whether to emit per-vertex colors derived from height
    pub vertex_colors: bool,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            grid: HeightGridConfig::default(),
            uv_repeat: 8.0,
            skirt_depth: 0.5,
            water_level: 0.05,
            vertex_colors: true,
        }
    }
}

/// Generate a terrain mesh from noise parameters.
///
/// Builds the height grid, the surface mesh with accumulated normals,
/// UVs and optional height colors, then appends the four skirt walls.
pub fn terrain_mesh(config: &TerrainConfig) -> Result<Mesh, MeshError> {
    let grid = HeightGrid::generate(&config.grid)?;
    Ok(terrain_mesh_from_grid(&grid, config))
}

/// Build the surface + skirt mesh from an already-generated grid.
///
/// Useful when the same grid feeds several meshes (or when the caller
/// wants to keep the grid for height queries).
pub fn terrain_mesh_from_grid(grid: &HeightGrid, config: &TerrainConfig) -> Mesh {
    let side = grid.side();
    let resolution = side - 1;
    let cell = 1.0 / resolution as f32;
    let height_scale = grid.config().height_scale;

    let vertex_count = side as usize * side as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut colors = if config.vertex_colors {
        Vec::with_capacity(vertex_count)
    } else {
        Vec::new()
    };

    // Surface vertices, row-major: index z * side + x
    for z in 0..side {
        for x in 0..side {
            let h = grid.get(x, z);
            let tx = x as f32 * cell;
            let tz = z as f32 * cell;
            positions.push(Vec3::new(tx, h, tz));
            uvs.push(Vec2::new(tx * config.uv_repeat, tz * config.uv_repeat));
            if config.vertex_colors {
                colors.push(height_color(h, height_scale, config.water_level));
            }
        }
    }

    // Two triangles per cell with a fixed diagonal, wound so the
    // accumulated normals point up
    let mut indices = Vec::with_capacity(resolution as usize * resolution as usize * 6);
    for z in 0..resolution {
        for x in 0..resolution {
            let v00 = z * side + x;
            let v10 = v00 + 1;
            let v01 = v00 + side;
            let v11 = v00 + side + 1;
            indices.extend_from_slice(&[v00, v11, v01, v00, v10, v11]);
        }
    }

    let normals = accumulate_normals(&positions, &indices);

    let mut mesh = Mesh {
        positions,
        normals,
        indices,
        uvs,
        colors,
    };
    append_skirts(&mut mesh, grid, config);
    mesh
}

/// Height-derived vertex color: a water band below `water_level`, then
/// a ramp that greens the valleys and washes out toward the peaks.
fn height_color(height: f32, height_scale: f32, water_level: f32) -> Vec3 {
    let h = if height_scale > 0.0 {
        height / height_scale
    } else {
        0.0
    };
    if h < water_level {
        WATER_COLOR
    } else {
        Vec3::new(h, 0.75 * h + 0.25, h)
    }
}

/// Close the four sides of the patch with vertical quad strips.
///
/// Each wall segment's top vertices are copies of the surface boundary
/// positions (bit-equal, never recomputed from the grid) and its bottom
/// vertices sit at `-skirt_depth`. Wall vertices are appended, not
/// welded to the surface: each wall carries one constant outward normal
/// so it shades flat while the surface above stays smooth.
fn append_skirts(mesh: &mut Mesh, grid: &HeightGrid, config: &TerrainConfig) {
    let side = grid.side();
    let resolution = side - 1;
    let cell = 1.0 / resolution as f32;

    // Boundary rows, copied out before the walls start appending
    let back: Vec<Vec3> = (0..side).map(|x| mesh.positions[x as usize]).collect();
    let front: Vec<Vec3> = (0..side)
        .map(|x| mesh.positions[((side - 1) * side + x) as usize])
        .collect();
    let left: Vec<Vec3> = (0..side)
        .map(|z| mesh.positions[(z * side) as usize])
        .collect();
    let right: Vec<Vec3> = (0..side)
        .map(|z| mesh.positions[(z * side + side - 1) as usize])
        .collect();

    // Segment order per wall keeps the winding consistent with the
    // surface so every accumulated-style normal faces outward
    for i in 0..resolution as usize {
        let (ua, ub) = ((i + 1) as f32 * cell, i as f32 * cell);
        push_skirt_quad(mesh, back[i + 1], back[i], ua, ub, Vec3::NEG_Z, config);
        let (ua, ub) = (i as f32 * cell, (i + 1) as f32 * cell);
        push_skirt_quad(mesh, front[i], front[i + 1], ua, ub, Vec3::Z, config);
        push_skirt_quad(mesh, left[i], left[i + 1], ua, ub, Vec3::NEG_X, config);
        let (ua, ub) = ((i + 1) as f32 * cell, i as f32 * cell);
        push_skirt_quad(mesh, right[i + 1], right[i], ua, ub, Vec3::X, config);
    }
}

/// Append one vertical wall quad: tops at the given boundary positions,
/// bottoms straight below at `-skirt_depth`.
fn push_skirt_quad(
    mesh: &mut Mesh,
    top_a: Vec3,
    top_b: Vec3,
    u_a: f32,
    u_b: f32,
    normal: Vec3,
    config: &TerrainConfig,
) {
    let depth = config.skirt_depth;
    let bot_a = Vec3::new(top_a.x, -depth, top_a.z);
    let bot_b = Vec3::new(top_b.x, -depth, top_b.z);

    let base = mesh.positions.len() as u32;
    mesh.positions
        .extend_from_slice(&[bot_a, top_a, top_b, bot_b]);
    mesh.normals.extend_from_slice(&[normal; 4]);
    // Wall V follows the terrain height so the texture is not squashed
    // where the boundary rises
    mesh.uvs.extend_from_slice(&[
        Vec2::new(u_a, 1.0 - depth),
        Vec2::new(u_a, top_a.y + 1.0),
        Vec2::new(u_b, top_b.y + 1.0),
        Vec2::new(u_b, 1.0 - depth),
    ]);
    if config.vertex_colors {
        mesh.colors.extend_from_slice(&[STONE_COLOR; 4]);
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> TerrainConfig {
        TerrainConfig {
            grid: HeightGridConfig {
                resolution: 8,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_buffer_sizes() {
        let config = small_config();
        let mesh = terrain_mesh(&config).unwrap();

        let side = 9usize;
        let surface_vertices = side * side;
        let skirt_vertices = 4 * 8 * 4;
        assert_eq!(mesh.vertex_count(), surface_vertices + skirt_vertices);

        let surface_triangles = 8 * 8 * 2;
        let skirt_triangles = 4 * 8 * 2;
        assert_eq!(mesh.triangle_count(), surface_triangles + skirt_triangles);

        assert!(mesh.is_well_formed());
        assert_eq!(mesh.uvs.len(), mesh.vertex_count());
        assert_eq!(mesh.colors.len(), mesh.vertex_count());
    }

    #[test]
    fn test_surface_normals_point_up() {
        let config = small_config();
        let grid = HeightGrid::generate(&config.grid).unwrap();
        let mesh = terrain_mesh_from_grid(&grid, &config);

        let side = grid.side() as usize;
        for n in &mesh.normals[..side * side] {
            assert!(n.y > 0.0, "surface normal not upward: {n:?}");
        }
    }

    #[test]
    fn test_water_band_color() {
        let color = height_color(0.0, 0.2, 0.05);
        assert_eq!(color, WATER_COLOR);

        let land = height_color(0.1, 0.2, 0.05);
        assert_ne!(land, WATER_COLOR);
        // The valley ramp adds green
        assert!(land.y > land.x);
    }

    #[test]
    fn test_colors_optional() {
        let mut config = small_config();
        config.vertex_colors = false;
        let mesh = terrain_mesh(&config).unwrap();
        assert!(mesh.colors.is_empty());
        assert!(mesh.is_well_formed());
    }
}
