//! Residue assembly from the ordered atom stream.

use crate::record::AtomRecord;
use crate::secondary_structure::SSType;

/// A contiguous group of atoms belonging to one monomer unit.
#[derive(Debug, Clone)]
pub struct Residue {
    /// Three-letter residue name from the first atom in the group.
    pub res_name: String,
    /// Chain identifier.
    pub chain_id: char,
    /// Residue sequence number.
    pub res_seq: i32,
    /// Member atoms in file order.
    pub atoms: Vec<AtomRecord>,
    /// Secondary-structure label. Starts as coil; the classifier
    /// overwrites it at most once from the HELIX/SHEET ranges.
    pub ss: SSType,
}

impl Residue {
    fn open(atom: AtomRecord) -> Self {
        Self {
            res_name: atom.res_name.clone(),
            chain_id: atom.chain_id,
            res_seq: atom.res_seq,
            ss: SSType::Coil,
            atoms: vec![atom],
        }
    }

    fn accepts(&self, atom: &AtomRecord) -> bool {
        self.chain_id == atom.chain_id && self.res_seq == atom.res_seq
    }

    /// First alpha-carbon in file order, if the residue has one.
    #[must_use]
    pub fn alpha_carbon(&self) -> Option<&AtomRecord> {
        self.atoms.iter().find(|a| a.is_alpha_carbon())
    }
}

/// Group the decoded atom stream into ordered residues.
///
/// A new residue starts whenever the (chain, seq) pair differs from the
/// currently open one. This is a boundary rule on the stream, not a
/// lookup by key: if the same pair recurs after a gap it opens a fresh
/// residue rather than merging into the earlier one. Single left-to-right
/// pass, O(1) auxiliary state.
#[must_use]
pub fn assemble(atoms: Vec<AtomRecord>) -> Vec<Residue> {
    let mut residues = Vec::new();
    let mut open: Option<Residue> = None;

    for atom in atoms {
        match open.take() {
            Some(mut current) if current.accepts(&atom) => {
                current.atoms.push(atom);
                open = Some(current);
            }
            closed => {
                if let Some(done) = closed {
                    residues.push(done);
                }
                open = Some(Residue::open(atom));
            }
        }
    }
    if let Some(done) = open {
        residues.push(done);
    }

    residues
}
