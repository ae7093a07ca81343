//! rofive-common — Shared types and errors used across all Rofive crates.

pub mod error;
pub mod record;

// Re-export commonly used types
pub use error::{Result, RofiveError};
pub use record::{BatchResult, BatchRow, DescriptorRecord, EvaluationOutcome};
