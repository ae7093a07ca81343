use thiserror::Error;

/// Errors produced while turning a SMILES string into a molecule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChemError {
    #[error("invalid SMILES: {0}")]
    Parse(String),

    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),
}
