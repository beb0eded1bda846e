//! Ribbon mesh generation for secondary-structure runs.
//!
//! Partitions each backbone path into maximal runs of equal label, fits
//! a smooth centerline through every run of two or more points, and
//! emits a tube surface with label-dependent radius and color. Coil runs
//! are never meshed — they are represented by the backbone polyline
//! alone, and the polyline also overlaps the tubes where those exist.

pub mod spline;
pub mod tube;

use glam::Vec3;

use crate::backbone::BackbonePath;
use crate::options::RibbonOptions;
use crate::scene::TubeGroup;
use crate::secondary_structure::SSType;
use spline::{orient_frames, sample_centerline};
use tube::extrude_tube;

/// A maximal run of consecutive backbone points sharing one label.
#[derive(Debug, Clone)]
pub struct RibbonSegment {
    /// Label shared by every point in the run.
    pub ss: SSType,
    /// Alpha-carbon positions of the run, in file order.
    pub positions: Vec<Vec3>,
}

/// Partition one backbone path into maximal same-label runs.
#[must_use]
pub fn segment_runs(path: &BackbonePath) -> Vec<RibbonSegment> {
    let mut runs: Vec<RibbonSegment> = Vec::new();

    for point in &path.points {
        match runs.last_mut() {
            Some(run) if run.ss == point.ss => {
                run.positions.push(point.position);
            }
            _ => runs.push(RibbonSegment {
                ss: point.ss,
                positions: vec![point.position],
            }),
        }
    }

    runs
}

/// Generate tube meshes for every helix and sheet run across `paths`.
///
/// Runs shorter than two points are skipped silently — a curve needs at
/// least two control points — as are all coil runs. Returns nothing when
/// tubes are disabled in `options`.
#[must_use]
pub fn generate_tubes(
    paths: &[BackbonePath],
    options: &RibbonOptions,
) -> Vec<TubeGroup> {
    if !options.tube_enabled {
        return Vec::new();
    }

    let mut groups = Vec::new();
    for path in paths {
        for run in segment_runs(path) {
            let radius = match run.ss {
                SSType::Helix => options.helix_radius,
                SSType::Sheet => options.sheet_radius,
                SSType::Coil => continue,
            };
            if run.positions.len() < 2 {
                continue;
            }

            let mut centerline = sample_centerline(
                &run.positions,
                options.segments_per_point,
            );
            orient_frames(&mut centerline);
            let mesh = extrude_tube(
                &centerline,
                radius,
                options.cross_section_verts,
                run.ss.color(),
            );
            groups.push(TubeGroup { ss: run.ss, mesh });
        }
    }

    log::debug!("generated {} tube meshes", groups.len());
    groups
}
