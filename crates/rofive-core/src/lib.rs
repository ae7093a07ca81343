//! rofive-core — Orchestration around the chemistry toolkit:
//!   - Single-compound descriptor evaluation (parse-or-invalid, then the
//!     four descriptors)
//!   - Order-preserving batch evaluation with per-row error isolation
//!   - Rule-of-Five verdicts over computed descriptors
//!   - The thin CSV wrapper both front ends feed batches through

pub mod batch;
pub mod engine;
pub mod evaluator;
pub mod lipinski;
pub mod table;

pub use batch::BatchRunner;
pub use engine::{DescriptorEngine, GraphEngine, ParseFailure};
pub use evaluator::DescriptorEvaluator;
pub use lipinski::RuleOfFiveReport;
pub use table::read_smiles_column;
