//! Integration tests for icosphere generation and blob displacement

mod common;

use common::{edge_use_counts, is_closed, sphere_at};
use terramesh::prelude::*;
use terramesh::MeshError;

#[test]
fn test_triangle_count_per_level() {
    for level in 0..=4u32 {
        let mesh = sphere_at(level);
        assert_eq!(
            mesh.triangle_count(),
            20 * 4usize.pow(level),
            "level {level}"
        );
    }
}

#[test]
fn test_vertex_count_recurrence() {
    // V(k) = V(k-1) + 3 * T(k-1) / 2, starting from the 12 seed vertices
    let mut expected = 12usize;
    for level in 0..=4u32 {
        let mesh = sphere_at(level);
        assert_eq!(mesh.vertex_count(), expected, "level {level}");
        expected += mesh.triangle_count() * 3 / 2;
    }
}

#[test]
fn test_every_level_is_closed() {
    for level in 0..=3u32 {
        let mesh = sphere_at(level);
        assert!(is_closed(&mesh.indices), "level {level} has boundary edges");
        assert!(mesh.is_well_formed(), "level {level} mesh malformed");
    }
}

#[test]
fn test_midpoints_are_welded() {
    // Welding means no two vertices coincide; an unwelded subdivision
    // would duplicate every shared-edge midpoint
    let mesh = sphere_at(3);
    for (i, a) in mesh.positions.iter().enumerate() {
        for b in mesh.positions.iter().skip(i + 1) {
            assert!(
                a.distance_squared(*b) > 1e-8,
                "duplicate vertex at {a:?}"
            );
        }
    }
}

#[test]
fn test_vertices_on_radius() {
    for radius in [1.0f32, 0.25, 7.5] {
        let mesh = icosphere(&IcosphereConfig {
            subdivisions: 3,
            radius,
            ..Default::default()
        })
        .unwrap();
        for p in &mesh.positions {
            assert!(
                (p.length() - radius).abs() < radius * 1e-3,
                "vertex {p:?} off radius {radius}"
            );
        }
    }
}

#[test]
fn test_cache_is_symmetric() {
    let mut positions = vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let mut cache = MidpointCache::new(1.0);

    let forward = cache.lookup(&mut positions, 0, 1).unwrap();
    let reverse = cache.lookup(&mut positions, 1, 0).unwrap();
    assert_eq!(forward, reverse);
    assert_eq!(positions.len(), 4, "reverse lookup must not allocate");
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_rejects_degenerate_edge() {
    let mut positions = vec![Vec3::X, Vec3::Y];
    let mut cache = MidpointCache::new(1.0);
    assert_eq!(
        cache.lookup(&mut positions, 1, 1).unwrap_err(),
        MeshError::DegenerateEdge(1)
    );
}

#[test]
fn test_normal_accumulation_is_order_independent() {
    let mesh = sphere_at(2);

    // Reverse the face order (keeping each face's winding) and re-run
    let mut shuffled: Vec<u32> = Vec::with_capacity(mesh.indices.len());
    for tri in mesh.indices.chunks_exact(3).rev() {
        shuffled.extend_from_slice(tri);
    }
    let reference = accumulate_normals(&mesh.positions, &mesh.indices);
    let reordered = accumulate_normals(&mesh.positions, &shuffled);

    for (a, b) in reference.iter().zip(&reordered) {
        assert!(a.distance(*b) < 1e-5, "{a:?} vs {b:?}");
    }
}

#[test]
fn test_blob_preserves_topology_and_normals() {
    let mut mesh = sphere_at(3);
    let indices = mesh.indices.clone();
    let normals = mesh.normals.clone();
    let edges = edge_use_counts(&indices);

    apply_blob(&mut mesh, 1.1);

    assert_eq!(mesh.indices, indices);
    assert_eq!(mesh.normals, normals);
    assert_eq!(edge_use_counts(&mesh.indices), edges);
}

#[test]
fn test_blob_neutral_phase() {
    // sin(0) = 0 collapses the waveform to a constant radius of 0.44
    let mut mesh = sphere_at(2);
    apply_blob(&mut mesh, 0.0);
    for p in &mesh.positions {
        assert!((p.length() - 0.44).abs() < 1e-5);
    }
}

#[test]
fn test_subdivision_bound() {
    let result = icosphere(&IcosphereConfig {
        subdivisions: MAX_SUBDIVISIONS + 1,
        ..Default::default()
    });
    assert_eq!(
        result.unwrap_err(),
        MeshError::SubdivisionTooDeep {
            level: MAX_SUBDIVISIONS + 1,
            max: MAX_SUBDIVISIONS,
        }
    );
}
