// src/oracle/mod.rs
//
// Remote factorization oracle client.
//
// The oracle is a factordb-style HTTP service queried with the decimal
// value of n. It answers with a completion-status token and a list of
// (base, exponent) pairs. Only a fully-factored answer is accepted;
// anything else surfaces as a recoverable failure, never as a partial
// factor list passed off as complete.

use std::time::Duration;
use num::BigInt;
use log::{debug, warn};
use serde::Deserialize;
use reqwest::blocking::Client;
use crate::error::EngineError;

/// Status token the oracle uses for a fully-factored composite.
const STATUS_FULLY_FACTORED: &str = "FF";
/// Status token the oracle uses for a proven prime (its report is complete).
const STATUS_PRIME: &str = "P";

#[derive(Debug, Deserialize)]
struct OracleResponse {
    status: String,
    factors: Vec<(FactorBase, u32)>,
}

/// Factor bases arrive as decimal strings for large values and plain
/// numbers for small ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FactorBase {
    Text(String),
    Numeric(u64),
}

impl FactorBase {
    fn to_bigint(&self) -> Option<BigInt> {
        match self {
            FactorBase::Text(s) => BigInt::parse_bytes(s.as_bytes(), 10),
            FactorBase::Numeric(v) => Some(BigInt::from(*v)),
        }
    }
}

/// Blocking HTTP client for the remote oracle, with a bounded timeout so a
/// stalled service cannot stall the caller indefinitely.
pub struct FactorOracle {
    client: Client,
    base_url: String,
}

impl FactorOracle {
    /// Builds an oracle client against `base_url` (e.g. "http://factordb.com").
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::ExternalService(format!("failed to build HTTP client: {}", e)))?;

        Ok(FactorOracle {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Asks the oracle for the factorization of n.
    ///
    /// Succeeds only when the oracle reports the factorization as complete
    /// and the expanded factor list multiplies back to n; every other
    /// outcome (unreachable service, malformed body, incomplete status,
    /// inconsistent factors) is an `ExternalService` error.
    pub fn lookup(&self, n: &BigInt) -> Result<Vec<BigInt>, EngineError> {
        let url = format!("{}/api", self.base_url);
        debug!("Oracle lookup: {} for n = {}", url, n);

        let response = self
            .client
            .get(&url)
            .query(&[("query", n.to_string())])
            .send()
            .map_err(|e| EngineError::ExternalService(format!("oracle unreachable: {}", e)))?
            .error_for_status()
            .map_err(|e| EngineError::ExternalService(format!("oracle rejected request: {}", e)))?;

        let body: OracleResponse = response
            .json()
            .map_err(|e| EngineError::ExternalService(format!("malformed oracle response: {}", e)))?;

        if body.status != STATUS_FULLY_FACTORED && body.status != STATUS_PRIME {
            warn!("Oracle reported status {:?} for {}", body.status, n);
            return Err(EngineError::ExternalService(format!(
                "oracle factorization is incomplete (status {})",
                body.status
            )));
        }

        let mut factors = Vec::new();
        for (base, exponent) in &body.factors {
            let prime = base.to_bigint().ok_or_else(|| {
                EngineError::ExternalService("oracle returned an unparseable factor".to_string())
            })?;
            for _ in 0..*exponent {
                factors.push(prime.clone());
            }
        }
        factors.sort();

        let product: BigInt = factors.iter().product();
        if &product != n {
            return Err(EngineError::ExternalService(format!(
                "oracle factors multiply to {}, expected {}",
                product, n
            )));
        }

        debug!("Oracle lookup succeeded: {} factors for {}", factors.len(), n);
        Ok(factors)
    }
}
