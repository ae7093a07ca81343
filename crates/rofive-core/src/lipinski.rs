//! Lipinski's Rule of Five.
//!
//! Poor oral bioavailability is flagged when a compound violates more
//! than one of: MW > 500, LogP > 5, H-bond donors > 5, H-bond
//! acceptors > 10.

use rofive_common::DescriptorRecord;
use serde::{Deserialize, Serialize};

pub const MW_LIMIT: f64 = 500.0;
pub const LOGP_LIMIT: f64 = 5.0;
pub const DONOR_LIMIT: u32 = 5;
pub const ACCEPTOR_LIMIT: u32 = 10;

/// Verdict of the rule over one descriptor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOfFiveReport {
    pub mw_over_limit: bool,
    pub logp_over_limit: bool,
    pub donors_over_limit: bool,
    pub acceptors_over_limit: bool,
    pub violations: u8,
    /// One violation is tolerated; more than one fails the rule.
    pub passes: bool,
}

impl RuleOfFiveReport {
    pub fn evaluate(d: &DescriptorRecord) -> Self {
        let mw_over_limit = d.molecular_weight > MW_LIMIT;
        let logp_over_limit = d.logp > LOGP_LIMIT;
        let donors_over_limit = d.h_donors > DONOR_LIMIT;
        let acceptors_over_limit = d.h_acceptors > ACCEPTOR_LIMIT;

        let violations = [mw_over_limit, logp_over_limit, donors_over_limit, acceptors_over_limit]
            .iter()
            .filter(|&&v| v)
            .count() as u8;

        RuleOfFiveReport {
            mw_over_limit,
            logp_over_limit,
            donors_over_limit,
            acceptors_over_limit,
            violations,
            passes: violations <= 1,
        }
    }
}
