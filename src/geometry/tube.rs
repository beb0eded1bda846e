//! Tube surface extrusion around a sampled centerline.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::spline::CurvePoint;

/// Mesh vertex for tube surfaces.
///
/// `repr(C)` and Pod so callers can hand the vertex array straight to a
/// GPU vertex buffer without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Outward surface normal.
    pub normal: [f32; 3],
    /// Vertex color (RGB, 0-1 range).
    pub color: [f32; 3],
}

/// A triangulated tube surface.
#[derive(Debug, Clone, Default)]
pub struct TubeMesh {
    /// Vertex array, one ring of `ring_verts` per centerline sample.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`, counter-clockwise winding.
    pub indices: Vec<u32>,
}

impl TubeMesh {
    /// Number of triangles in the mesh.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Extrude a circular cross-section of `radius` along `centerline`.
///
/// Each sample contributes one ring of `ring_verts` vertices lying in
/// the plane perpendicular to the local tangent; adjacent rings are
/// stitched with two triangles per sector. Ends are left open, matching
/// the reference tube geometry. Every vertex carries `color`.
#[must_use]
pub fn extrude_tube(
    centerline: &[CurvePoint],
    radius: f32,
    ring_verts: usize,
    color: [f32; 3],
) -> TubeMesh {
    if centerline.len() < 2 {
        return TubeMesh::default();
    }
    let ring_verts = ring_verts.max(3);

    let mut mesh = TubeMesh {
        vertices: Vec::with_capacity(centerline.len() * ring_verts),
        indices: Vec::with_capacity((centerline.len() - 1) * ring_verts * 6),
    };

    for sample in centerline {
        for k in 0..ring_verts {
            let angle =
                (k as f32 / ring_verts as f32) * std::f32::consts::TAU;
            let offset: Vec3 =
                sample.normal * angle.cos() + sample.binormal * angle.sin();
            mesh.vertices.push(MeshVertex {
                position: (sample.position + offset * radius).into(),
                normal: offset.into(),
                color,
            });
        }
    }

    for i in 0..centerline.len() - 1 {
        let ring_a = (i * ring_verts) as u32;
        let ring_b = ((i + 1) * ring_verts) as u32;
        for k in 0..ring_verts {
            let k_next = (k + 1) % ring_verts;
            let v0 = ring_a + k as u32;
            let v1 = ring_a + k_next as u32;
            let v2 = ring_b + k as u32;
            let v3 = ring_b + k_next as u32;
            mesh.indices.extend_from_slice(&[v0, v2, v1]);
            mesh.indices.extend_from_slice(&[v1, v2, v3]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::spline::{orient_frames, sample_centerline};

    fn straight_centerline(len: usize) -> Vec<CurvePoint> {
        let points: Vec<Vec3> =
            (0..len).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let mut samples = sample_centerline(&points, 1);
        orient_frames(&mut samples);
        samples
    }

    #[test]
    fn empty_or_single_sample_produces_no_geometry() {
        let mesh = extrude_tube(&[], 0.8, 8, [1.0, 0.0, 0.0]);
        assert!(mesh.vertices.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn ring_and_triangle_counts() {
        let centerline = straight_centerline(4);
        let mesh = extrude_tube(&centerline, 0.5, 8, [0.0, 0.0, 1.0]);
        assert_eq!(mesh.vertices.len(), centerline.len() * 8);
        assert_eq!(
            mesh.triangle_count(),
            (centerline.len() - 1) * 8 * 2
        );
    }

    #[test]
    fn ring_vertices_lie_on_the_radius() {
        let centerline = straight_centerline(3);
        let radius = 0.8;
        let mesh = extrude_tube(&centerline, radius, 8, [1.0, 0.0, 0.0]);
        for (i, v) in mesh.vertices.iter().enumerate() {
            let center = centerline[i / 8].position;
            let d = (Vec3::from(v.position) - center).length();
            assert!((d - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn normals_are_unit_and_perpendicular_to_tangent() {
        let centerline = straight_centerline(3);
        let mesh = extrude_tube(&centerline, 0.5, 6, [0.0, 0.0, 1.0]);
        for (i, v) in mesh.vertices.iter().enumerate() {
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(centerline[i / 6].tangent).abs() < 1e-4);
        }
    }

    #[test]
    fn indices_stay_in_bounds() {
        let centerline = straight_centerline(5);
        let mesh = extrude_tube(&centerline, 0.5, 8, [1.0, 0.0, 0.0]);
        let max = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn degenerate_ring_count_is_clamped() {
        let centerline = straight_centerline(2);
        let mesh = extrude_tube(&centerline, 0.5, 0, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices.len(), centerline.len() * 3);
    }
}
