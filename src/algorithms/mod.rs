// src/algorithms/mod.rs
//
// Strategy catalogue: every algorithm for producing a factorization,
// selectable by the wire token callers send.
//
// Method              Token                 Behavior
// ─────────────────────────────────────────────────────────────────────
// TrialDivision       trial-division        exhaustive, O(sqrt(n))
// PollardRho          pollard-rho           randomized cycle detection
// QuadraticSieve      quadratic-sieve       size-gated fallback policy
// ExternalLookup      external-lookup       remote oracle delegation

pub mod trial_division;
pub mod pollard_rho;
pub mod quadratic_sieve;

use std::fmt;
use std::str::FromStr;
use crate::error::EngineError;

/// Enumeration of the selectable factorization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorizationMethod {
    /// Exhaustive small-factor extraction; the default and the universal
    /// fallback.
    TrialDivision,

    /// Randomized Floyd cycle detection with recursive splitting.
    PollardRho,

    /// Policy strategy that delegates by input size and reports itself as
    /// degraded.
    QuadraticSieve,

    /// Remote oracle; accepted only when the oracle reports a complete
    /// factorization.
    ExternalLookup,
}

impl FactorizationMethod {
    /// The wire token and source label for this method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TrialDivision => "trial-division",
            Self::PollardRho => "pollard-rho",
            Self::QuadraticSieve => "quadratic-sieve",
            Self::ExternalLookup => "external-lookup",
        }
    }
}

impl Default for FactorizationMethod {
    fn default() -> Self {
        // An unspecified method maps to trial division
        Self::TrialDivision
    }
}

impl fmt::Display for FactorizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FactorizationMethod {
    type Err = EngineError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "trial-division" => Ok(Self::TrialDivision),
            "pollard-rho" => Ok(Self::PollardRho),
            "quadratic-sieve" => Ok(Self::QuadraticSieve),
            "external-lookup" => Ok(Self::ExternalLookup),
            other => Err(EngineError::UnsupportedMethod(other.to_string())),
        }
    }
}
