//! Scalar molecular properties: weight, H-bond donors/acceptors, formula.

use std::collections::BTreeMap;

use crate::element;
use crate::molecule::Molecule;

/// Molecular weight: sum of atomic weights over all atoms plus implicit
/// hydrogens.
pub fn molecular_weight(mol: &Molecule) -> f64 {
    let h = element::by_number(1).expect("hydrogen is in the table").weight;
    mol.atoms()
        .iter()
        .map(|a| {
            let heavy = element::by_number(a.number).map_or(0.0, |e| e.weight);
            heavy + a.implicit_h as f64 * h
        })
        .sum()
}

/// Hydrogen-bond donors: nitrogen or oxygen atoms carrying at least one
/// hydrogen (Lipinski's NHOH count).
pub fn h_donor_count(mol: &Molecule) -> u32 {
    (0..mol.atom_count())
        .filter(|&i| {
            let a = mol.atoms()[i];
            (a.number == 7 || a.number == 8) && mol.hydrogens_at(i) > 0
        })
        .count() as u32
}

/// Hydrogen-bond acceptors: nitrogen and oxygen atoms (Lipinski's NO count).
pub fn h_acceptor_count(mol: &Molecule) -> u32 {
    mol.atoms()
        .iter()
        .filter(|a| a.number == 7 || a.number == 8)
        .count() as u32
}

/// Molecular formula in Hill order: C, then H, then the rest alphabetically.
pub fn molecular_formula(mol: &Molecule) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for atom in mol.atoms() {
        if let Some(e) = element::by_number(atom.number) {
            *counts.entry(e.symbol).or_insert(0) += 1;
        }
        if atom.implicit_h > 0 {
            *counts.entry("H").or_insert(0) += atom.implicit_h as usize;
        }
    }

    let mut out = String::new();
    let mut write = |symbol: &str, n: usize| {
        out.push_str(symbol);
        if n > 1 {
            out.push_str(&n.to_string());
        }
    };
    if let Some(c) = counts.remove("C") {
        write("C", c);
        if let Some(h) = counts.remove("H") {
            write("H", h);
        }
    }
    for (symbol, n) in counts {
        write(symbol, n);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn weight_of_ethanol() {
        let mol = parse_smiles("CCO").unwrap();
        let mw = molecular_weight(&mol);
        assert!((mw - 46.07).abs() < 0.01, "got {mw}");
    }

    #[test]
    fn weight_of_benzene() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        let mw = molecular_weight(&mol);
        assert!((mw - 78.11).abs() < 0.01, "got {mw}");
    }

    #[test]
    fn donors_and_acceptors_of_ethanol() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(h_donor_count(&mol), 1);
        assert_eq!(h_acceptor_count(&mol), 1);
    }

    #[test]
    fn benzene_has_neither() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        assert_eq!(h_donor_count(&mol), 0);
        assert_eq!(h_acceptor_count(&mol), 0);
    }

    #[test]
    fn aspirin_counts() {
        let mol = parse_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap();
        assert_eq!(h_donor_count(&mol), 1); // the carboxylic OH
        assert_eq!(h_acceptor_count(&mol), 4); // four oxygens
        let mw = molecular_weight(&mol);
        assert!((mw - 180.16).abs() < 0.05, "got {mw}");
    }

    #[test]
    fn formula_hill_order() {
        let glucose = parse_smiles("OC(CO)C(O)C(O)C(O)C=O").unwrap();
        assert_eq!(molecular_formula(&glucose), "C6H12O6");

        let salt = parse_smiles("[Na+].[Cl-]").unwrap();
        assert_eq!(molecular_formula(&salt), "ClNa");
    }

    #[test]
    fn quaternary_nitrogen_is_not_a_donor() {
        let mol = parse_smiles("C[N+](C)(C)C").unwrap();
        assert_eq!(h_donor_count(&mol), 0);
        assert_eq!(h_acceptor_count(&mol), 1);
    }
}
