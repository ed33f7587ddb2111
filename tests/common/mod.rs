//! Common test helpers for terramesh integration tests

use std::collections::HashMap;

use terramesh::prelude::*;

// ============================================================================
// Standard configurations
// ============================================================================

/// Default-radius icosphere at the given level
pub fn sphere_at(level: u32) -> Mesh {
    icosphere(&IcosphereConfig {
        subdivisions: level,
        ..Default::default()
    })
    .expect("icosphere generation failed")
}

/// Small terrain patch, fast enough for every test
pub fn small_terrain_config() -> TerrainConfig {
    TerrainConfig {
        grid: HeightGridConfig {
            resolution: 16,
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Mesh inspection
// ============================================================================

/// Count how many faces reference each undirected edge
pub fn edge_use_counts(indices: &[u32]) -> HashMap<(u32, u32), u32> {
    let mut edges = HashMap::new();
    for tri in indices.chunks_exact(3) {
        for i in 0..3 {
            let (a, b) = (tri[i], tri[(i + 1) % 3]);
            let key = if a < b { (a, b) } else { (b, a) };
            *edges.entry(key).or_insert(0u32) += 1;
        }
    }
    edges
}

/// A mesh is closed when every edge is shared by exactly two faces
pub fn is_closed(indices: &[u32]) -> bool {
    edge_use_counts(indices).values().all(|&count| count == 2)
}
