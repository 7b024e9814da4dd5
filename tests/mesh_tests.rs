// Host-side tests for UV-sphere tessellation.

use sphere_core::*;

#[test]
fn default_mesh_has_expected_counts() {
    let mesh = SphereMesh::uv_sphere(SPHERE_LATITUDE_BANDS, SPHERE_LONGITUDE_BANDS);
    assert_eq!(mesh.vertex_count(), 31 * 31);
    assert_eq!(mesh.normals.len(), mesh.positions.len());
    assert_eq!(mesh.indices.len(), 30 * 30 * 6);
}

#[test]
fn indices_stay_inside_vertex_buffer() {
    let mesh = SphereMesh::uv_sphere(12, 7);
    let n = mesh.vertex_count();
    assert!(mesh.indices.iter().all(|&i| (i as usize) < n));
    assert_eq!(mesh.indices.len() % 3, 0);
}

#[test]
fn vertices_lie_on_unit_sphere() {
    let mesh = SphereMesh::uv_sphere(8, 8);
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
        assert_eq!(p, n);
    }
}

#[test]
fn poles_are_first_and_last_rows() {
    let mesh = SphereMesh::uv_sphere(4, 4);
    let north = mesh.positions[0];
    let south = mesh.positions[mesh.vertex_count() - 1];
    assert!((north[1] - 1.0).abs() < 1e-6);
    assert!((south[1] + 1.0).abs() < 1e-6);
}

#[test]
fn smallest_mesh_builds_two_triangles_per_quad() {
    let mesh = SphereMesh::uv_sphere(1, 1);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices, vec![0, 2, 1, 2, 3, 1]);
}

#[test]
fn interleaved_pairs_position_and_normal() {
    let mesh = SphereMesh::uv_sphere(3, 3);
    let v = mesh.interleaved();
    assert_eq!(v.len(), mesh.vertex_count());
    assert_eq!(v[5], [mesh.positions[5], mesh.normals[5]]);
}

#[test]
fn dense_mesh_indices_do_not_overflow() {
    let mesh = SphereMesh::uv_sphere(256, 256);
    let n = mesh.vertex_count();
    assert_eq!(n, 257 * 257);
    assert_eq!(mesh.indices.len(), 256 * 256 * 6);
    assert!(n > u16::MAX as usize);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < n));
    assert_eq!(mesh.indices.iter().max().copied(), Some(n as u32 - 1));
}
