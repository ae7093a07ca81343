//! Molecular graph model: atoms, bonds, and adjacency queries.

/// Bond order classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Numeric order used in valence arithmetic.
    pub fn as_f64(self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }

    /// Sigma-framework contribution: aromatic bonds count as one.
    pub fn sigma(self) -> usize {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

/// One atom of the graph. Hydrogens are usually implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom {
    pub number: u8,
    pub charge: i8,
    pub isotope: Option<u16>,
    pub aromatic: bool,
    pub implicit_h: u8,
}

/// An edge between two atom indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub order: BondOrder,
}

/// A parsed molecule. Construction builds the adjacency index once;
/// atoms and bonds are immutable afterwards.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// adj[i] = (neighbor atom index, bond index) pairs
    adj: Vec<Vec<(usize, usize)>>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        let mut adj = vec![Vec::new(); atoms.len()];
        for (bi, bond) in bonds.iter().enumerate() {
            adj[bond.a].push((bond.b, bi));
            adj[bond.b].push((bond.a, bi));
        }
        Molecule { atoms, bonds, adj }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Atoms other than hydrogen.
    pub fn heavy_atom_count(&self) -> usize {
        self.atoms.iter().filter(|a| a.number != 1).count()
    }

    /// `(neighbor, bond index)` pairs for one atom.
    pub fn neighbors(&self, atom: usize) -> &[(usize, usize)] {
        &self.adj[atom]
    }

    /// Number of explicit bonds at an atom.
    pub fn degree(&self, atom: usize) -> usize {
        self.adj[atom].len()
    }

    /// Hydrogens attached to an atom: implicit plus explicit `[H]` neighbors.
    pub fn hydrogens_at(&self, atom: usize) -> usize {
        let explicit = self.adj[atom]
            .iter()
            .filter(|&&(n, _)| self.atoms[n].number == 1)
            .count();
        self.atoms[atom].implicit_h as usize + explicit
    }

    /// Total hydrogen count over the whole molecule.
    pub fn total_hydrogens(&self) -> usize {
        let explicit = self.atoms.iter().filter(|a| a.number == 1).count();
        let implicit: usize = self.atoms.iter().map(|a| a.implicit_h as usize).sum();
        explicit + implicit
    }

    /// True if the atom has at least one double or triple bond.
    pub fn has_multiple_bond(&self, atom: usize) -> bool {
        self.adj[atom].iter().any(|&(_, bi)| {
            matches!(self.bonds[bi].order, BondOrder::Double | BondOrder::Triple)
        })
    }

    /// True if the atom is bonded to a heteroatom (not C, not H).
    pub fn has_hetero_neighbor(&self, atom: usize) -> bool {
        self.adj[atom]
            .iter()
            .any(|&(n, _)| self.atoms[n].number != 6 && self.atoms[n].number != 1)
    }
}
