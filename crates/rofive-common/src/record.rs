//! The data model shared by the core and both front ends.
//!
//! Everything here is plain immutable data: evaluation produces these
//! values, rendering decides how to show them. Formatting (two-decimal
//! display of the floating-point fields) is a presentation concern and
//! never changes the stored values.

use serde::{Deserialize, Serialize};

/// The four Lipinski descriptors of one valid compound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptorRecord {
    /// Molecular weight in daltons; positive for any real molecule.
    pub molecular_weight: f64,
    /// Lipophilicity estimate (octanol/water partition, signed).
    pub logp: f64,
    /// Hydrogen-bond donor count.
    pub h_donors: u32,
    /// Hydrogen-bond acceptor count.
    pub h_acceptors: u32,
}

/// Result of evaluating one SMILES string. Exactly one variant per input;
/// malformed input is a value, not an error path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Valid { descriptors: DescriptorRecord },
    Invalid { reason: String },
}

impl EvaluationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, EvaluationOutcome::Valid { .. })
    }

    pub fn descriptors(&self) -> Option<&DescriptorRecord> {
        match self {
            EvaluationOutcome::Valid { descriptors } => Some(descriptors),
            EvaluationOutcome::Invalid { .. } => None,
        }
    }
}

/// One batch row: the input string exactly as supplied, plus its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub smiles: String,
    pub outcome: EvaluationOutcome,
}

/// Positional mirror of the batch input: one row per input, same order,
/// regardless of how many rows failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub rows: Vec<BatchRow>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|r| r.outcome.is_valid()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DescriptorRecord {
        DescriptorRecord {
            molecular_weight: 46.07,
            logp: -0.0014,
            h_donors: 1,
            h_acceptors: 1,
        }
    }

    #[test]
    fn outcome_accessors() {
        let valid = EvaluationOutcome::Valid { descriptors: record() };
        assert!(valid.is_valid());
        assert_eq!(valid.descriptors().unwrap().h_donors, 1);

        let invalid = EvaluationOutcome::Invalid { reason: "no atoms".into() };
        assert!(!invalid.is_valid());
        assert!(invalid.descriptors().is_none());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(EvaluationOutcome::Valid { descriptors: record() }).unwrap();
        assert_eq!(json["status"], "valid");
        assert_eq!(json["descriptors"]["h_acceptors"], 1);

        let json = serde_json::to_value(EvaluationOutcome::Invalid { reason: "x".into() }).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["reason"], "x");
    }

    #[test]
    fn batch_counts() {
        let batch = BatchResult {
            rows: vec![
                BatchRow { smiles: "CCO".into(), outcome: EvaluationOutcome::Valid { descriptors: record() } },
                BatchRow { smiles: "junk".into(), outcome: EvaluationOutcome::Invalid { reason: "r".into() } },
            ],
        };
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.valid_count(), 1);
        assert!(!batch.is_empty());
        assert!(BatchResult::default().is_empty());
    }
}
