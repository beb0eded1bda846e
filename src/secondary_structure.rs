//! Secondary structure classification from annotation records.
//!
//! Labels residues as helix, sheet, or coil using the HELIX/SHEET ranges
//! declared alongside the coordinates. No geometric detection happens
//! here; the source file's own annotations are authoritative.

use crate::residue::Residue;

/// Q3 secondary structure classification for a single residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SSType {
    /// Alpha helix.
    Helix,
    /// Beta sheet strand.
    Sheet,
    /// Unstructured loop.
    Coil,
}

impl SSType {
    /// Get the color for this SS type (RGB, 0-1 range).
    #[must_use]
    pub fn color(self) -> [f32; 3] {
        match self {
            Self::Helix => [1.0, 0.0, 0.0],
            Self::Sheet => [0.0, 0.0, 1.0],
            Self::Coil => [0.0, 0.667, 0.0],
        }
    }
}

/// Which annotation record a [`StructureRange`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// A HELIX record.
    Helix,
    /// A SHEET record.
    Sheet,
}

/// An inclusive residue range declared by a HELIX or SHEET record.
#[derive(Debug, Clone)]
pub struct StructureRange {
    /// Record kind this range was decoded from.
    pub kind: RangeKind,
    /// Chain identifier of the first residue in the range.
    pub start_chain: char,
    /// Sequence number of the first residue in the range.
    pub start_seq: i32,
    /// Chain identifier of the last residue in the range.
    pub end_chain: char,
    /// Sequence number of the last residue in the range.
    pub end_seq: i32,
    /// Helix type or sheet sense code, carried through unparsed.
    pub aux: i32,
}

impl StructureRange {
    /// Whether this range is well-formed. Ranges spanning two different
    /// chains carry no usable classification and are dropped.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start_chain == self.end_chain
    }

    /// Label assigned to residues covered by this range.
    #[must_use]
    pub fn label(&self) -> SSType {
        match self.kind {
            RangeKind::Helix => SSType::Helix,
            RangeKind::Sheet => SSType::Sheet,
        }
    }

    fn covers(&self, chain_id: char, res_seq: i32) -> bool {
        chain_id == self.start_chain
            && res_seq >= self.start_seq
            && res_seq <= self.end_seq
    }
}

/// Drop ranges whose start and end chains disagree.
#[must_use]
pub fn retain_valid(ranges: Vec<StructureRange>) -> Vec<StructureRange> {
    let mut valid = Vec::with_capacity(ranges.len());
    for range in ranges {
        if range.is_valid() {
            valid.push(range);
        } else {
            log::warn!(
                "dropping cross-chain range {:?}-{:?}",
                range.start_chain,
                range.end_chain
            );
        }
    }
    valid
}

/// Assign a label to every residue.
///
/// Helix ranges are evaluated before sheet ranges and the first covering
/// range wins, so a residue inside both a helix and a sheet range
/// resolves to helix. Residues covered by no range stay coil.
pub fn classify(
    residues: &mut [Residue],
    helices: &[StructureRange],
    sheets: &[StructureRange],
) {
    for residue in residues.iter_mut() {
        for range in helices.iter().chain(sheets) {
            if range.covers(residue.chain_id, residue.res_seq) {
                residue.ss = range.label();
                break;
            }
        }
    }
}
