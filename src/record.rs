//! Fixed-column record decoding for PDB-format text.
//!
//! Record kinds are identified by a case-sensitive, left-anchored literal
//! prefix; fields live at fixed byte offsets per the PDB v3.3 layout.
//! Lines matching no known prefix are ignored. Lines matching a prefix
//! but failing field extraction (too short, non-numeric digits) are
//! skipped with a warning — one bad line never aborts the document.

use std::ops::Range;

use glam::Vec3;

use crate::secondary_structure::{RangeKind, StructureRange};

/// A single decoded ATOM record. Immutable once decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Atom serial number.
    pub serial: i32,
    /// Atom name with surrounding whitespace trimmed, e.g. `CA`.
    pub name: String,
    /// Three-letter residue name, e.g. `MET`.
    pub res_name: String,
    /// Single-character chain identifier.
    pub chain_id: char,
    /// Residue sequence number within the chain.
    pub res_seq: i32,
    /// Cartesian coordinates in angstroms.
    pub position: Vec3,
}

impl AtomRecord {
    /// Whether this atom is the residue's alpha-carbon.
    #[must_use]
    pub fn is_alpha_carbon(&self) -> bool {
        self.name == "CA"
    }
}

/// All records decoded from one document, in file order.
///
/// Order matters downstream: residue boundaries are detected by scanning
/// the atom stream left to right, so these are sequences, not maps.
#[derive(Debug, Default)]
pub struct DecodedDocument {
    /// ATOM records in file order.
    pub atoms: Vec<AtomRecord>,
    /// HELIX ranges in file order.
    pub helices: Vec<StructureRange>,
    /// SHEET ranges in file order.
    pub sheets: Vec<StructureRange>,
}

/// Minimal validity check for the whole buffer: at least one line must
/// begin with `ATOM`, `HETATM`, or `HEADER`.
#[must_use]
pub fn is_recognized_format(text: &str) -> bool {
    text.lines().any(|line| {
        line.starts_with("ATOM")
            || line.starts_with("HETATM")
            || line.starts_with("HEADER")
    })
}

/// Decode a complete text buffer into ordered record sequences.
#[must_use]
pub fn decode(text: &str) -> DecodedDocument {
    let mut doc = DecodedDocument::default();

    for (idx, line) in text.lines().enumerate() {
        if line.starts_with("ATOM") {
            match parse_atom(line) {
                Some(atom) => doc.atoms.push(atom),
                None => {
                    log::warn!("skipping malformed ATOM record on line {}", idx + 1);
                }
            }
        } else if line.starts_with("HELIX") {
            match parse_helix(line) {
                Some(range) => doc.helices.push(range),
                None => {
                    log::warn!("skipping malformed HELIX record on line {}", idx + 1);
                }
            }
        } else if line.starts_with("SHEET") {
            match parse_sheet(line) {
                Some(range) => doc.sheets.push(range),
                None => {
                    log::warn!("skipping malformed SHEET record on line {}", idx + 1);
                }
            }
        }
    }

    log::debug!(
        "decoded {} atoms, {} helix ranges, {} sheet ranges",
        doc.atoms.len(),
        doc.helices.len(),
        doc.sheets.len()
    );
    doc
}

// ── Field extraction ──

/// Byte slice of `line`, or `None` if the line is too short (or the
/// range splits a multi-byte character).
fn field(line: &str, range: Range<usize>) -> Option<&str> {
    line.get(range)
}

fn char_field(line: &str, at: usize) -> Option<char> {
    field(line, at..at + 1)?.chars().next()
}

fn int_field(line: &str, range: Range<usize>) -> Option<i32> {
    field(line, range)?.trim().parse().ok()
}

fn float_field(line: &str, range: Range<usize>) -> Option<f32> {
    field(line, range)?.trim().parse().ok()
}

// ── Per-record layouts ──

fn parse_atom(line: &str) -> Option<AtomRecord> {
    Some(AtomRecord {
        serial: int_field(line, 6..11)?,
        name: field(line, 12..16)?.trim().to_owned(),
        res_name: field(line, 17..20)?.trim().to_owned(),
        chain_id: char_field(line, 21)?,
        res_seq: int_field(line, 22..26)?,
        position: Vec3::new(
            float_field(line, 30..38)?,
            float_field(line, 38..46)?,
            float_field(line, 46..54)?,
        ),
    })
}

fn parse_helix(line: &str) -> Option<StructureRange> {
    Some(StructureRange {
        kind: RangeKind::Helix,
        start_chain: char_field(line, 19)?,
        start_seq: int_field(line, 21..25)?,
        end_chain: char_field(line, 31)?,
        end_seq: int_field(line, 33..37)?,
        aux: int_field(line, 38..40)?,
    })
}

fn parse_sheet(line: &str) -> Option<StructureRange> {
    Some(StructureRange {
        kind: RangeKind::Sheet,
        start_chain: char_field(line, 21)?,
        start_seq: int_field(line, 22..26)?,
        end_chain: char_field(line, 32)?,
        end_seq: int_field(line, 33..37)?,
        aux: int_field(line, 38..40)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom_line(
        serial: i32,
        name: &str,
        res: &str,
        chain: char,
        seq: i32,
        x: f32,
        y: f32,
        z: f32,
    ) -> String {
        format!(
            "ATOM  {serial:>5} {name:<4} {res:>3} {chain}{seq:>4}    {x:>8.3}{y:>8.3}{z:>8.3}  1.00  0.00           C"
        )
    }

    fn helix_line(sc: char, ss: i32, ec: char, es: i32, class: i32) -> String {
        format!(
            "HELIX    1  H1 ALA {sc} {ss:>4}  GLY {ec} {es:>4} {class:>2}"
        )
    }

    fn sheet_line(sc: char, ss: i32, ec: char, es: i32, sense: i32) -> String {
        format!(
            "SHEET    1   A 2 VAL {sc}{ss:>4}  SER {ec}{es:>4} {sense:>2}"
        )
    }

    #[test]
    fn atom_fields_decode() {
        let line = atom_line(7, "CA", "MET", 'A', 1, 38.428, 13.104, -23.991);
        let doc = decode(&line);
        assert_eq!(doc.atoms.len(), 1);
        let atom = &doc.atoms[0];
        assert_eq!(atom.serial, 7);
        assert_eq!(atom.name, "CA");
        assert!(atom.is_alpha_carbon());
        assert_eq!(atom.res_name, "MET");
        assert_eq!(atom.chain_id, 'A');
        assert_eq!(atom.res_seq, 1);
        assert_eq!(atom.position, Vec3::new(38.428, 13.104, -23.991));
    }

    #[test]
    fn coordinates_round_trip_at_printed_precision() {
        let coords = [(1.5, -0.25, 103.125), (-99.999, 0.001, 12.0)];
        for (i, &(x, y, z)) in coords.iter().enumerate() {
            let line = atom_line(i as i32 + 1, "CA", "GLY", 'A', i as i32 + 1, x, y, z);
            let doc = decode(&line);
            let p = doc.atoms[0].position;
            assert_eq!(format!("{:.3}", p.x), format!("{x:.3}"));
            assert_eq!(format!("{:.3}", p.y), format!("{y:.3}"));
            assert_eq!(format!("{:.3}", p.z), format!("{z:.3}"));
        }
    }

    #[test]
    fn helix_fields_decode() {
        let doc = decode(&helix_line('A', 2, 'A', 14, 1));
        assert_eq!(doc.helices.len(), 1);
        let range = &doc.helices[0];
        assert_eq!(range.kind, RangeKind::Helix);
        assert_eq!(range.start_chain, 'A');
        assert_eq!(range.start_seq, 2);
        assert_eq!(range.end_chain, 'A');
        assert_eq!(range.end_seq, 14);
        assert_eq!(range.aux, 1);
    }

    #[test]
    fn sheet_fields_decode() {
        let doc = decode(&sheet_line('B', 20, 'B', 25, -1));
        assert_eq!(doc.sheets.len(), 1);
        let range = &doc.sheets[0];
        assert_eq!(range.kind, RangeKind::Sheet);
        assert_eq!(range.start_chain, 'B');
        assert_eq!(range.start_seq, 20);
        assert_eq!(range.end_seq, 25);
        assert_eq!(range.aux, -1);
    }

    #[test]
    fn short_line_is_skipped_not_fatal() {
        let text = format!(
            "ATOM      1  CA\n{}\n",
            atom_line(2, "CA", "GLY", 'A', 2, 1.0, 2.0, 3.0)
        );
        let doc = decode(&text);
        assert_eq!(doc.atoms.len(), 1);
        assert_eq!(doc.atoms[0].serial, 2);
    }

    #[test]
    fn garbled_numeric_field_is_skipped() {
        let mut line = atom_line(3, "CA", "GLY", 'A', 3, 1.0, 2.0, 3.0);
        line.replace_range(30..38, "  xx.xxx");
        let doc = decode(&line);
        assert!(doc.atoms.is_empty());
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let doc = decode("atom      1  CA  GLY A   1       1.0     2.0     3.0\nREMARK nothing\n");
        assert!(doc.atoms.is_empty());
        assert!(doc.helices.is_empty());
    }

    #[test]
    fn final_line_without_terminator_is_processed() {
        let line = atom_line(1, "CA", "GLY", 'A', 1, 1.0, 2.0, 3.0);
        let doc = decode(&line);
        assert_eq!(doc.atoms.len(), 1);
    }

    #[test]
    fn format_check_accepts_each_token() {
        assert!(is_recognized_format("HEADER    HYDROLASE\n"));
        assert!(is_recognized_format("HETATM 1234  O   HOH A 401\n"));
        assert!(is_recognized_format(&atom_line(1, "N", "MET", 'A', 1, 0.0, 0.0, 0.0)));
        assert!(!is_recognized_format("REMARK   2\nSEQRES\n"));
        assert!(!is_recognized_format(""));
    }
}
