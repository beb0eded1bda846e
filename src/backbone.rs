//! Backbone path extraction from classified residues.
//!
//! One representative point per residue — the alpha-carbon — in file
//! order. Residues without an alpha-carbon are skipped, not padded.

use glam::Vec3;

use crate::options::ChainBreaks;
use crate::residue::Residue;
use crate::scene::LineGroup;
use crate::secondary_structure::SSType;

/// The alpha-carbon position of one residue plus its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackbonePoint {
    /// Alpha-carbon position in angstroms.
    pub position: Vec3,
    /// Secondary-structure label of the owning residue.
    pub ss: SSType,
    /// Chain identifier of the owning residue.
    pub chain_id: char,
}

/// An ordered run of backbone points with no internal break.
#[derive(Debug, Clone, Default)]
pub struct BackbonePath {
    /// Points in file order.
    pub points: Vec<BackbonePoint>,
}

/// Build backbone paths from classified residues.
///
/// With [`ChainBreaks::Split`] a new path starts whenever the chain
/// identifier changes, so no geometry bridges two chains. With
/// [`ChainBreaks::Connect`] every point lands in one path regardless of
/// chain, matching the source material.
#[must_use]
pub fn build_paths(
    residues: &[Residue],
    breaks: ChainBreaks,
) -> Vec<BackbonePath> {
    let mut paths: Vec<BackbonePath> = Vec::new();
    let mut current = BackbonePath::default();

    for residue in residues {
        let Some(ca) = residue.alpha_carbon() else {
            continue;
        };
        let point = BackbonePoint {
            position: ca.position,
            ss: residue.ss,
            chain_id: residue.chain_id,
        };

        let chain_changed = breaks == ChainBreaks::Split
            && current
                .points
                .last()
                .is_some_and(|prev| prev.chain_id != point.chain_id);
        if chain_changed {
            paths.push(std::mem::take(&mut current));
        }
        current.points.push(point);
    }
    if !current.points.is_empty() {
        paths.push(current);
    }

    paths
}

/// Emit the backbone polyline for a set of paths.
///
/// Consecutive points within a path become one line segment each. Both
/// segment vertices take the leading point's label color, so a segment
/// leaving a helix is still helix-colored. Paths with fewer than two
/// points contribute nothing.
#[must_use]
pub fn polyline(paths: &[BackbonePath]) -> LineGroup {
    let mut group = LineGroup::default();

    for path in paths {
        for pair in path.points.windows(2) {
            let color = pair[0].ss.color();
            let base = group.positions.len() as u32;
            group.positions.push(pair[0].position.into());
            group.positions.push(pair[1].position.into());
            group.colors.push(color);
            group.colors.push(color);
            group.segments.push([base, base + 1]);
        }
    }

    group
}
