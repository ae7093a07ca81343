//! Batch evaluation: fan out over rows, fan results back in positionally.

use rofive_common::{BatchResult, BatchRow};
use tracing::debug;

use crate::engine::{DescriptorEngine, GraphEngine};
use crate::evaluator::DescriptorEvaluator;

/// Runs the evaluator over a sequence of inputs.
///
/// The result is a strict positional mirror: one row per input, input
/// order, independent of how many rows fail. A failed row never aborts
/// the rest of the batch.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner<E = GraphEngine> {
    evaluator: DescriptorEvaluator<E>,
}

impl BatchRunner<GraphEngine> {
    pub fn new() -> Self {
        Self { evaluator: DescriptorEvaluator::new() }
    }
}

impl<E: DescriptorEngine> BatchRunner<E> {
    pub fn with_evaluator(evaluator: DescriptorEvaluator<E>) -> Self {
        Self { evaluator }
    }

    pub fn run<I, S>(&self, inputs: I) -> BatchResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = Vec::new();
        for input in inputs {
            let smiles = input.into();
            let outcome = self.evaluator.evaluate(&smiles);
            rows.push(BatchRow { smiles, outcome });
        }
        let result = BatchResult { rows };
        debug!(rows = result.len(), valid = result.valid_count(), "batch evaluated");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_result() {
        let result = BatchRunner::new().run(Vec::<String>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn mixed_batch_preserves_length_and_order() {
        let inputs = ["CCO", "not-a-smiles", "c1ccccc1"];
        let result = BatchRunner::new().run(inputs);

        assert_eq!(result.len(), 3);
        assert_eq!(result.rows[0].smiles, "CCO");
        assert_eq!(result.rows[1].smiles, "not-a-smiles");
        assert_eq!(result.rows[2].smiles, "c1ccccc1");
        assert!(result.rows[0].outcome.is_valid());
        assert!(!result.rows[1].outcome.is_valid());
        assert!(result.rows[2].outcome.is_valid());
        assert_eq!(result.valid_count(), 2);
    }

    #[test]
    fn all_invalid_batch_still_full_length() {
        let result = BatchRunner::new().run(["???", "", "!!"]);
        assert_eq!(result.len(), 3);
        assert_eq!(result.valid_count(), 0);
    }
}
