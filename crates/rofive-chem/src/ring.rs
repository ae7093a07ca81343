//! Ring perception.
//!
//! A bond is a ring bond iff its endpoints remain connected after the
//! bond is removed. Quadratic in bond count, which is fine at the
//! molecule sizes SMILES inputs reach.

use std::collections::VecDeque;

use crate::molecule::Molecule;

/// Per-bond flags: true when the bond is part of some cycle.
pub fn ring_bonds(mol: &Molecule) -> Vec<bool> {
    (0..mol.bond_count())
        .map(|bi| {
            let bond = mol.bonds()[bi];
            connected_without(mol, bond.a, bond.b, bi)
        })
        .collect()
}

/// Per-atom flags: true when the atom sits on at least one ring bond.
pub fn ring_atoms(mol: &Molecule) -> Vec<bool> {
    let bonds = ring_bonds(mol);
    let mut member = vec![false; mol.atom_count()];
    for (bi, in_ring) in bonds.iter().enumerate() {
        if *in_ring {
            let bond = mol.bonds()[bi];
            member[bond.a] = true;
            member[bond.b] = true;
        }
    }
    member
}

/// BFS from `from` to `to`, skipping bond `skip`.
fn connected_without(mol: &Molecule, from: usize, to: usize, skip: usize) -> bool {
    let mut seen = vec![false; mol.atom_count()];
    let mut queue = VecDeque::from([from]);
    seen[from] = true;
    while let Some(here) = queue.pop_front() {
        for &(next, bi) in mol.neighbors(here) {
            if bi == skip || seen[next] {
                continue;
            }
            if next == to {
                return true;
            }
            seen[next] = true;
            queue.push_back(next);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn chains_have_no_rings() {
        let mol = parse_smiles("CCCC").unwrap();
        assert!(ring_bonds(&mol).iter().all(|&b| !b));
        assert!(ring_atoms(&mol).iter().all(|&a| !a));
    }

    #[test]
    fn cyclohexane_is_all_ring() {
        let mol = parse_smiles("C1CCCCC1").unwrap();
        assert!(ring_bonds(&mol).iter().all(|&b| b));
        assert!(ring_atoms(&mol).iter().all(|&a| a));
    }

    #[test]
    fn substituent_stays_acyclic() {
        // Toluene: ring atoms 1..=6, methyl carbon 0 outside
        let mol = parse_smiles("Cc1ccccc1").unwrap();
        let atoms = ring_atoms(&mol);
        assert!(!atoms[0]);
        assert!(atoms[1..].iter().all(|&a| a));
        let bonds = ring_bonds(&mol);
        assert_eq!(bonds.iter().filter(|&&b| b).count(), 6);
    }
}
