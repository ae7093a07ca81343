//! The seam between orchestration and chemistry.
//!
//! The evaluator only ever talks to a [`DescriptorEngine`]: parse a string,
//! then ask four pure questions about the parsed molecule. [`GraphEngine`]
//! is the production implementation over `rofive-chem`; tests substitute
//! their own.

use rofive_chem::{self as chem, Molecule};

/// The string did not denote a recognizable molecular structure.
/// Expected and recoverable for arbitrary user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub reason: String,
}

/// Molecule parsing plus the four descriptor calculations, all pure and
/// deterministic.
pub trait DescriptorEngine {
    type Molecule;

    fn parse(&self, smiles: &str) -> Result<Self::Molecule, ParseFailure>;
    fn molecular_weight(&self, mol: &Self::Molecule) -> f64;
    fn logp(&self, mol: &Self::Molecule) -> f64;
    fn h_donor_count(&self, mol: &Self::Molecule) -> u32;
    fn h_acceptor_count(&self, mol: &Self::Molecule) -> u32;
}

/// Production engine backed by the rofive-chem molecular graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphEngine;

impl DescriptorEngine for GraphEngine {
    type Molecule = Molecule;

    fn parse(&self, smiles: &str) -> Result<Molecule, ParseFailure> {
        chem::parse_smiles(smiles).map_err(|e| ParseFailure { reason: e.to_string() })
    }

    fn molecular_weight(&self, mol: &Molecule) -> f64 {
        chem::molecular_weight(mol)
    }

    fn logp(&self, mol: &Molecule) -> f64 {
        chem::crippen_logp(mol)
    }

    fn h_donor_count(&self, mol: &Molecule) -> u32 {
        chem::h_donor_count(mol)
    }

    fn h_acceptor_count(&self, mol: &Molecule) -> u32 {
        chem::h_acceptor_count(mol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_engine_parses_and_reports_failures() {
        let engine = GraphEngine;
        assert!(engine.parse("CCO").is_ok());

        let failure = engine.parse("???").unwrap_err();
        assert!(!failure.reason.is_empty());
    }
}
