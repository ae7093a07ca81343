//! Lipophilicity estimate: simplified Wildman-Crippen atom contributions.
//!
//! Each heavy atom is classified from its element, aromaticity, bonding
//! and ring membership, and contributes a published increment; attached
//! hydrogens contribute separately. The classification is coarser than
//! the full 68-type scheme but uses its values, so common functional
//! groups land close to reference implementations (ethanol: -0.0014).

use crate::molecule::{BondOrder, Molecule};
use crate::ring;

/// Sum of atom and hydrogen contributions over the molecule.
pub fn crippen_logp(mol: &Molecule) -> f64 {
    let in_ring = ring::ring_atoms(mol);

    let mut logp = 0.0;
    for i in 0..mol.atom_count() {
        if mol.atoms()[i].number == 1 {
            continue; // explicit hydrogens are priced with their heavy atom
        }
        logp += atom_contribution(mol, i, &in_ring);
        logp += mol.hydrogens_at(i) as f64 * hydrogen_contribution(mol.atoms()[i].number);
    }
    logp
}

/// Hydrogens on carbon vs. on a heteroatom.
fn hydrogen_contribution(heavy_atom: u8) -> f64 {
    if heavy_atom == 6 {
        0.1230
    } else {
        -0.2677
    }
}

fn atom_contribution(mol: &Molecule, i: usize, in_ring: &[bool]) -> f64 {
    let atom = mol.atoms()[i];
    let degree = mol.degree(i);

    match atom.number {
        // Carbon
        6 => {
            if atom.aromatic {
                if mol.has_hetero_neighbor(i) {
                    0.0
                } else if degree == 2 {
                    0.1581 // unsubstituted aromatic CH
                } else {
                    0.1360
                }
            } else if multiple_bond_to_hetero(mol, i) {
                -0.2783 // carbonyl and friends
            } else if mol.has_multiple_bond(i) {
                0.1551
            } else if mol.has_hetero_neighbor(i) {
                if degree <= 2 {
                    -0.2035
                } else {
                    -0.2051
                }
            } else if in_ring[i] || degree <= 2 {
                0.1441
            } else {
                0.0
            }
        }
        // Nitrogen
        7 => {
            if atom.aromatic {
                -0.3187
            } else if atom.charge > 0 {
                -1.0190
            } else if mol.has_multiple_bond(i) {
                -0.5262
            } else {
                -0.4458
            }
        }
        // Oxygen
        8 => {
            if atom.charge < 0 {
                -1.1890
            } else if atom.aromatic {
                0.1552
            } else if mol.has_multiple_bond(i) {
                -0.3339 // carbonyl oxygen
            } else {
                -0.2893 // hydroxyl / ether
            }
        }
        // Sulfur
        16 => {
            if atom.charge != 0 {
                -0.5188
            } else if mol.has_multiple_bond(i) {
                -0.1084
            } else {
                0.6237
            }
        }
        9 => 0.4118,   // F
        15 => 0.2836,  // P
        17 => 0.6895,  // Cl
        35 => 0.8813,  // Br
        53 => 1.0500,  // I
        _ => 0.0,
    }
}

/// Double or triple bond whose far end is a heteroatom.
fn multiple_bond_to_hetero(mol: &Molecule, i: usize) -> bool {
    mol.neighbors(i).iter().any(|&(n, bi)| {
        let far = mol.atoms()[n].number;
        far != 6
            && far != 1
            && matches!(mol.bonds()[bi].order, BondOrder::Double | BondOrder::Triple)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn ethanol_matches_reference() {
        let mol = parse_smiles("CCO").unwrap();
        let logp = crippen_logp(&mol);
        assert!((logp - (-0.0014)).abs() < 0.01, "got {logp}");
    }

    #[test]
    fn benzene_matches_reference() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        let logp = crippen_logp(&mol);
        assert!((logp - 1.6866).abs() < 0.01, "got {logp}");
    }

    #[test]
    fn longer_chains_are_more_lipophilic() {
        let ethanol = crippen_logp(&parse_smiles("CCO").unwrap());
        let octanol = crippen_logp(&parse_smiles("CCCCCCCCO").unwrap());
        assert!(octanol > ethanol + 1.5, "octanol {octanol} vs ethanol {ethanol}");
    }

    #[test]
    fn aspirin_in_plausible_band() {
        let logp = crippen_logp(&parse_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap());
        assert!(logp.is_finite());
        assert!((-2.0..3.0).contains(&logp), "got {logp}");
    }

    #[test]
    fn deterministic_across_calls() {
        let a = crippen_logp(&parse_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap());
        let b = crippen_logp(&parse_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap());
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
