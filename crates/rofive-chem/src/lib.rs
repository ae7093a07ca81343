//! rofive-chem — Minimal cheminformatics toolkit for descriptor calculation.
//!
//! Parses SMILES strings into a molecular graph and computes the four
//! descriptors the rest of the system consumes:
//! 1. Molecular weight
//! 2. LogP lipophilicity estimate (simplified Wildman-Crippen)
//! 3. Hydrogen-bond donor count
//! 4. Hydrogen-bond acceptor count
//!
//! All functions are pure and deterministic; the same SMILES string always
//! yields the same molecule and the same descriptor values.

pub mod crippen;
pub mod element;
pub mod error;
pub mod molecule;
pub mod properties;
pub mod ring;
pub mod smiles;

pub use crippen::crippen_logp;
pub use error::ChemError;
pub use molecule::{Atom, Bond, BondOrder, Molecule};
pub use properties::{h_acceptor_count, h_donor_count, molecular_formula, molecular_weight};
pub use smiles::parse_smiles;

pub type Result<T> = std::result::Result<T, ChemError>;
