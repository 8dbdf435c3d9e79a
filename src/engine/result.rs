// src/engine/result.rs

use std::time::Duration;
use num::BigInt;
use serde::{Deserialize, Serialize};

/// Outcome of one factorization call.
///
/// On success the factors are prime, sorted ascending, and multiply back to
/// `number`. On failure `factors` is empty and `error` carries the message.
/// `success` is the authoritative indicator; transport layers return their
/// own OK status either way.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorizationResult {
    pub success: bool,
    pub number: BigInt,
    pub factors: Vec<BigInt>,
    pub source: String,
    pub execution_time: Duration,
    pub error: Option<String>,
    pub cached: bool,
}

impl FactorizationResult {
    pub fn solved(
        number: BigInt,
        factors: Vec<BigInt>,
        source: String,
        execution_time: Duration,
        cached: bool,
    ) -> Self {
        FactorizationResult {
            success: true,
            number,
            factors,
            source,
            execution_time,
            error: None,
            cached,
        }
    }

    pub fn failed(number: BigInt, error: String, execution_time: Duration) -> Self {
        FactorizationResult {
            success: false,
            number,
            factors: Vec::new(),
            source: String::new(),
            execution_time,
            error: Some(error),
            cached: false,
        }
    }

    /// JSON wire form with lossless decimal-string numbers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&SerializableFactorization::from(self))
    }
}

/// Wire representation: `number` and every factor as decimal strings so
/// values beyond 64 bits survive JSON round trips, execution time as float
/// seconds.
#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableFactorization {
    pub success: bool,
    pub number: String,
    pub factors: Vec<String>,
    pub source: String,
    pub execution_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub cached: bool,
}

impl From<&FactorizationResult> for SerializableFactorization {
    fn from(result: &FactorizationResult) -> Self {
        SerializableFactorization {
            success: result.success,
            number: result.number.to_string(),
            factors: result.factors.iter().map(|f| f.to_string()).collect(),
            source: result.source.clone(),
            execution_time: result.execution_time.as_secs_f64(),
            error: result.error.clone(),
            cached: result.cached,
        }
    }
}
