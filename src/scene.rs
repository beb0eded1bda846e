//! Renderable geometry output types.
//!
//! A [`SceneGeometry`] is the pipeline's end product: a backbone
//! polyline group plus zero or more tube-mesh groups. The caller owns
//! the value outright — nothing here refers back into the pipeline.

use glam::Vec3;

use crate::geometry::tube::TubeMesh;
use crate::secondary_structure::SSType;

/// Backbone polyline geometry: positions with aligned per-vertex colors
/// and explicit line-segment connectivity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGroup {
    /// Segment endpoint positions. Two entries per segment.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex colors, aligned with `positions` by index.
    pub colors: Vec<[f32; 3]>,
    /// Index pairs into `positions`, one per line segment.
    pub segments: Vec<[u32; 2]>,
}

/// One tube surface for a helix or sheet run.
#[derive(Debug, Clone)]
pub struct TubeGroup {
    /// Label of the run this tube represents.
    pub ss: SSType,
    /// Triangulated surface.
    pub mesh: TubeMesh,
}

/// Complete renderable geometry for one document.
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    /// The backbone polyline, always present (possibly empty).
    pub backbone: LineGroup,
    /// Tube meshes for helix and sheet runs.
    pub tubes: Vec<TubeGroup>,
}

impl SceneGeometry {
    /// Midpoint of the axis-aligned bounding box over every emitted
    /// position, so a camera can frame the structure. Zero when the
    /// scene is empty.
    #[must_use]
    pub fn bounding_center(&self) -> Vec3 {
        self.bounds()
            .map_or(Vec3::ZERO, |(min, max)| (min + max) * 0.5)
    }

    /// Radius of a sphere centered on [`Self::bounding_center`]
    /// enclosing every emitted position. Zero when the scene is empty.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.bounds()
            .map_or(0.0, |(min, max)| ((max - min) * 0.5).length())
    }

    fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }

    fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.backbone
            .positions
            .iter()
            .copied()
            .map(Vec3::from)
            .chain(self.tubes.iter().flat_map(|t| {
                t.mesh.vertices.iter().map(|v| Vec3::from(v.position))
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_has_zero_bounds() {
        let scene = SceneGeometry::default();
        assert_eq!(scene.bounding_center(), Vec3::ZERO);
        assert_eq!(scene.bounding_radius(), 0.0);
    }

    #[test]
    fn bounds_cover_backbone_positions() {
        let scene = SceneGeometry {
            backbone: LineGroup {
                positions: vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]],
                colors: vec![[0.0; 3]; 2],
                segments: vec![[0, 1]],
            },
            tubes: Vec::new(),
        };
        assert_eq!(scene.bounding_center(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(scene.bounding_radius(), 5.0);
    }
}
