// src/engine/request.rs

use num::BigInt;
use crate::algorithms::FactorizationMethod;
use crate::error::EngineError;

/// A factorization job: the number to factor and the strategy to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorizationRequest {
    pub number: BigInt,
    pub method: FactorizationMethod,
}

impl FactorizationRequest {
    /// Request with the default method (trial division).
    pub fn new(number: BigInt) -> Self {
        FactorizationRequest {
            number,
            method: FactorizationMethod::default(),
        }
    }

    pub fn with_method(number: BigInt, method: FactorizationMethod) -> Self {
        FactorizationRequest { number, method }
    }

    /// Parses the wire form of a request: a decimal number string and an
    /// optional method token. An absent token selects the default method;
    /// an unknown token is an error rather than a silent fallback.
    pub fn parse(number: &str, method: Option<&str>) -> Result<Self, EngineError> {
        let trimmed = number.trim();
        let number = BigInt::parse_bytes(trimmed.as_bytes(), 10)
            .ok_or_else(|| EngineError::InvalidInput(format!("not an integer: {:?}", trimmed)))?;

        let method = match method {
            Some(token) if !token.trim().is_empty() => token.parse()?,
            _ => FactorizationMethod::default(),
        };

        Ok(FactorizationRequest { number, method })
    }
}
