// src/engine/dispatcher.rs
//
// The dispatcher: single public entry point of the engine.
//
// factorize() validates the input, consults the persistent cache, runs the
// requested strategy on a miss, annotates the outcome with wall-clock time,
// and writes successful factorizations back through the cache. Strategy
// errors are converted into failure results at this one boundary; a broken
// cache or oracle degrades the engine instead of crashing it.

use std::time::{Duration, Instant};
use log::{info, warn};
use num::{BigInt, One};
use crate::algorithms::{pollard_rho, quadratic_sieve, trial_division, FactorizationMethod};
use crate::cache::ResultCache;
use crate::config::EngineConfig;
use crate::engine::request::FactorizationRequest;
use crate::engine::result::FactorizationResult;
use crate::error::EngineError;
use crate::oracle::FactorOracle;

pub struct FactorizationEngine {
    config: EngineConfig,
    cache: Option<ResultCache>,
    oracle: Option<FactorOracle>,
}

impl FactorizationEngine {
    /// Builds an engine from configuration. The cache handle is constructed
    /// here, once, and owned by the engine for its whole lifetime; if the
    /// backing store or the oracle client cannot be set up the engine still
    /// works, minus that capability.
    pub fn new(config: EngineConfig) -> Self {
        let cache = match ResultCache::open(&config.cache.path) {
            Ok(cache) => Some(cache),
            Err(e) => {
                warn!("Result cache unavailable, computing without memoization: {}", e);
                None
            }
        };

        let oracle = match FactorOracle::new(
            &config.oracle.base_url,
            Duration::from_secs(config.oracle.timeout_secs),
        ) {
            Ok(oracle) => Some(oracle),
            Err(e) => {
                warn!("Oracle client unavailable: {}", e);
                None
            }
        };

        FactorizationEngine { config, cache, oracle }
    }

    /// Factorizes the requested number.
    ///
    /// Never panics and never returns a raw error: every outcome, including
    /// invalid input and strategy faults, arrives as a `FactorizationResult`
    /// whose `success` flag is the authoritative indicator.
    pub fn factorize(&self, request: &FactorizationRequest) -> FactorizationResult {
        let started = Instant::now();
        let number = request.number.clone();

        if number <= BigInt::one() {
            let err = EngineError::InvalidInput("number must be greater than 1".to_string());
            return FactorizationResult::failed(number, err.to_string(), started.elapsed());
        }

        if let Some(cache) = &self.cache {
            match cache.lookup(&number) {
                Ok(Some(record)) => {
                    info!("Cache hit for {} (stored by {})", number, record.method);
                    return FactorizationResult::solved(
                        number,
                        record.factors,
                        record.method,
                        started.elapsed(),
                        true,
                    );
                }
                Ok(None) => {}
                Err(e) => warn!("Cache lookup failed, computing anyway: {}", e),
            }
        }

        info!("Factorizing {} via {}", number, request.method);
        match self.dispatch(&number, request.method) {
            Ok((factors, source)) => {
                if let Some(cache) = &self.cache {
                    if let Err(e) = cache.store(&number, &factors, &source) {
                        warn!("Cache write failed, returning uncached result: {}", e);
                    }
                }
                FactorizationResult::solved(number, factors, source, started.elapsed(), false)
            }
            Err(err) => {
                warn!("Factorization of {} failed: {}", number, err);
                FactorizationResult::failed(number, err.to_string(), started.elapsed())
            }
        }
    }

    fn dispatch(
        &self,
        n: &BigInt,
        method: FactorizationMethod,
    ) -> Result<(Vec<BigInt>, String), EngineError> {
        match method {
            FactorizationMethod::TrialDivision => {
                Ok((trial_division::factor(n), method.name().to_string()))
            }
            FactorizationMethod::PollardRho => {
                let factors = pollard_rho::factor(
                    n,
                    self.config.pollard.max_iterations,
                    self.config.pollard.max_restarts,
                )?;
                Ok((factors, method.name().to_string()))
            }
            FactorizationMethod::QuadraticSieve => quadratic_sieve::factor(
                n,
                self.config.sieve.delegation_threshold,
                self.config.pollard.max_iterations,
                self.config.pollard.max_restarts,
            ),
            FactorizationMethod::ExternalLookup => match &self.oracle {
                Some(oracle) => {
                    let factors = oracle.lookup(n)?;
                    Ok((factors, method.name().to_string()))
                }
                None => Err(EngineError::ExternalService(
                    "oracle client is not available".to_string(),
                )),
            },
        }
    }
}
