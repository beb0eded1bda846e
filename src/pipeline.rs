//! End-to-end scene construction from raw structural text.
//!
//! Wires the stages together: decode → assemble → classify → backbone →
//! mesh. Owns the minimal format check; everything past that check
//! degrades per-element rather than failing the document.

use crate::backbone;
use crate::error::PlicoError;
use crate::geometry;
use crate::options::RibbonOptions;
use crate::record;
use crate::residue;
use crate::scene::SceneGeometry;
use crate::secondary_structure;

/// Counts describing one processed document, for status displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureSummary {
    /// ATOM records decoded.
    pub atoms: usize,
    /// Residues assembled from the atom stream.
    pub residues: usize,
    /// Well-formed HELIX ranges.
    pub helix_ranges: usize,
    /// Well-formed SHEET ranges.
    pub sheet_ranges: usize,
    /// Backbone points (residues with an alpha-carbon).
    pub backbone_points: usize,
    /// Tube meshes emitted.
    pub tubes: usize,
}

/// Build renderable geometry from a complete structural text buffer.
///
/// # Errors
///
/// [`PlicoError::UnrecognizedFormat`] when no line begins with `ATOM`,
/// `HETATM`, or `HEADER`. Everything else degrades gracefully: malformed
/// lines, cross-chain ranges, and sub-two-point runs each contribute
/// nothing, biasing toward producing *some* visualization.
pub fn build_scene(
    text: &str,
    options: &RibbonOptions,
) -> Result<SceneGeometry, PlicoError> {
    build_scene_with_summary(text, options).map(|(scene, _)| scene)
}

/// Like [`build_scene`], but also returns document statistics.
///
/// # Errors
///
/// Same as [`build_scene`].
pub fn build_scene_with_summary(
    text: &str,
    options: &RibbonOptions,
) -> Result<(SceneGeometry, StructureSummary), PlicoError> {
    if !record::is_recognized_format(text) {
        return Err(PlicoError::UnrecognizedFormat);
    }

    let doc = record::decode(text);
    let atoms = doc.atoms.len();
    let helices = secondary_structure::retain_valid(doc.helices);
    let sheets = secondary_structure::retain_valid(doc.sheets);

    let mut residues = residue::assemble(doc.atoms);
    secondary_structure::classify(&mut residues, &helices, &sheets);

    let paths = backbone::build_paths(&residues, options.chain_breaks);
    let backbone_points: usize =
        paths.iter().map(|p| p.points.len()).sum();

    let scene = SceneGeometry {
        backbone: backbone::polyline(&paths),
        tubes: geometry::generate_tubes(&paths, options),
    };
    let summary = StructureSummary {
        atoms,
        residues: residues.len(),
        helix_ranges: helices.len(),
        sheet_ranges: sheets.len(),
        backbone_points,
        tubes: scene.tubes.len(),
    };
    log::debug!(
        "built scene: {} residues, {} backbone points, {} tubes",
        summary.residues,
        summary.backbone_points,
        summary.tubes
    );

    Ok((scene, summary))
}
