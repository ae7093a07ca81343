//! Single-compound evaluation.

use rofive_common::{DescriptorRecord, EvaluationOutcome};
use tracing::debug;

use crate::engine::{DescriptorEngine, GraphEngine};

/// Evaluates one SMILES string to an [`EvaluationOutcome`].
///
/// Malformed input is an expected condition: it becomes the `Invalid`
/// outcome variant, never an error or panic. Evaluation is pure, so the
/// same input always yields bit-identical descriptor values.
#[derive(Debug, Clone, Default)]
pub struct DescriptorEvaluator<E = GraphEngine> {
    engine: E,
}

impl DescriptorEvaluator<GraphEngine> {
    pub fn new() -> Self {
        Self { engine: GraphEngine }
    }
}

impl<E: DescriptorEngine> DescriptorEvaluator<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub fn evaluate(&self, smiles: &str) -> EvaluationOutcome {
        let mol = match self.engine.parse(smiles) {
            Ok(mol) => mol,
            Err(failure) => {
                debug!(smiles, reason = %failure.reason, "rejected input");
                return EvaluationOutcome::Invalid { reason: failure.reason };
            }
        };

        EvaluationOutcome::Valid {
            descriptors: DescriptorRecord {
                molecular_weight: self.engine.molecular_weight(&mol),
                logp: self.engine.logp(&mol),
                h_donors: self.engine.h_donor_count(&mol),
                h_acceptors: self.engine.h_acceptor_count(&mol),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_compound_yields_descriptors() {
        let outcome = DescriptorEvaluator::new().evaluate("CCO");
        let d = outcome.descriptors().expect("ethanol is valid");
        assert!((d.molecular_weight - 46.07).abs() < 0.01);
        assert!((d.logp - (-0.0014)).abs() < 0.01);
        assert_eq!(d.h_donors, 1);
        assert_eq!(d.h_acceptors, 1);
    }

    #[test]
    fn invalid_compound_yields_invalid_outcome() {
        for bad in ["", "not-a-smiles", "XQZ123???"] {
            let outcome = DescriptorEvaluator::new().evaluate(bad);
            match outcome {
                EvaluationOutcome::Invalid { reason } => assert!(!reason.is_empty()),
                EvaluationOutcome::Valid { .. } => panic!("{bad:?} must not parse"),
            }
        }
    }

    #[test]
    fn descriptors_are_well_formed_for_valid_inputs() {
        let evaluator = DescriptorEvaluator::new();
        for smiles in ["C", "CCO", "c1ccccc1", "CC(=O)Oc1ccccc1C(=O)O", "[NH4+]"] {
            let d = *evaluator
                .evaluate(smiles)
                .descriptors()
                .unwrap_or_else(|| panic!("{smiles} should parse"));
            assert!(d.molecular_weight > 0.0, "{smiles}");
            assert!(d.logp.is_finite(), "{smiles}");
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let evaluator = DescriptorEvaluator::new();
        let a = evaluator.evaluate("CC(=O)Oc1ccccc1C(=O)O");
        let b = evaluator.evaluate("CC(=O)Oc1ccccc1C(=O)O");
        assert_eq!(a, b);
        let (da, db) = (a.descriptors().unwrap(), b.descriptors().unwrap());
        assert_eq!(da.molecular_weight.to_bits(), db.molecular_weight.to_bits());
        assert_eq!(da.logp.to_bits(), db.logp.to_bits());
    }
}
