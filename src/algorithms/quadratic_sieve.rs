// src/algorithms/quadratic_sieve.rs
//
// Quadratic Sieve policy: size-gated graceful degradation
//
// This is deliberately not a full sieve. The strategy exists so callers can
// request "quadratic-sieve" and always get a correct answer from a cheaper
// delegate, with the source label marking the result as degraded:
//   - even inputs peel a 2 and hand the remainder to trial division
//   - inputs below the delegation threshold go entirely to trial division
//   - everything else goes to Pollard's Rho
// Perfect squares short-circuit: factor the root once, double every
// multiplicity.

use num::{BigInt, Integer, One};
use log::{debug, info};
use crate::algorithms::{pollard_rho, trial_division};
use crate::error::EngineError;
use crate::integer_math::primality::PrimalityTester;

/// Inputs below this delegate to trial division instead of Pollard's Rho.
pub const DEFAULT_DELEGATION_THRESHOLD: u64 = 1_000_000;

const TRIAL_DIVISION_LABEL: &str = "quadratic-sieve (fallback: trial-division)";
const POLLARD_RHO_LABEL: &str = "quadratic-sieve (fallback: pollard-rho)";

/// Factors n through the sieve's delegation policy.
///
/// Returns the ascending prime factors together with the source label that
/// names which delegate produced them, so a degraded result is never
/// mistaken for a genuine sieve run.
///
/// # Arguments
/// * `n` - The number to factor (must be > 1; the dispatcher validates this)
/// * `threshold` - Size gate between trial division and Pollard's Rho
/// * `max_iterations` / `max_restarts` - Bounds forwarded to Pollard's Rho
pub fn factor(
    n: &BigInt,
    threshold: u64,
    max_iterations: usize,
    max_restarts: usize,
) -> Result<(Vec<BigInt>, String), EngineError> {
    if n.is_even() {
        debug!("Quadratic sieve policy: even input, peeling 2");
        let half = n / 2;
        let mut factors = vec![BigInt::from(2)];
        if half > BigInt::one() {
            factors.extend(trial_division::factor(&half));
        }
        return Ok((factors, TRIAL_DIVISION_LABEL.to_string()));
    }

    if let Some(root) = PrimalityTester::perfect_square_root(n) {
        info!("Quadratic sieve policy: {} is a perfect square of {}", n, root);
        let (root_factors, source) = factor(&root, threshold, max_iterations, max_restarts)?;
        let mut factors = Vec::with_capacity(root_factors.len() * 2);
        for prime in root_factors {
            factors.push(prime.clone());
            factors.push(prime);
        }
        return Ok((factors, source));
    }

    if n < &BigInt::from(threshold) {
        debug!("Quadratic sieve policy: {} below threshold {}, delegating to trial division", n, threshold);
        return Ok((trial_division::factor(n), TRIAL_DIVISION_LABEL.to_string()));
    }

    debug!("Quadratic sieve policy: {} above threshold {}, delegating to Pollard's Rho", n, threshold);
    let factors = pollard_rho::factor(n, max_iterations, max_restarts)?;
    Ok((factors, POLLARD_RHO_LABEL.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: u64) -> (Vec<BigInt>, String) {
        factor(
            &BigInt::from(n),
            DEFAULT_DELEGATION_THRESHOLD,
            pollard_rho::DEFAULT_MAX_ITERATIONS,
            pollard_rho::DEFAULT_MAX_RESTARTS,
        )
        .unwrap()
    }

    #[test]
    fn test_even_input_delegates_to_trial_division() {
        let (factors, source) = run(100);
        let expected: Vec<BigInt> = [2, 2, 5, 5].iter().map(|&f| BigInt::from(f)).collect();
        assert_eq!(factors, expected);
        assert!(source.contains("fallback"));
        assert!(source.contains("trial-division"));
    }

    #[test]
    fn test_small_input_delegates_to_trial_division() {
        let (factors, source) = run(8051);
        assert_eq!(factors, vec![BigInt::from(83), BigInt::from(97)]);
        assert_eq!(source, TRIAL_DIVISION_LABEL);
    }

    #[test]
    fn test_large_input_delegates_to_pollard_rho() {
        let (factors, source) = run(1000730021); // 31193 × 32069
        assert_eq!(factors, vec![BigInt::from(31193), BigInt::from(32069)]);
        assert_eq!(source, POLLARD_RHO_LABEL);
    }

    #[test]
    fn test_perfect_square_doubles_multiplicities() {
        // 1018081 = 1009² and sits above the threshold
        let (factors, _) = run(1018081);
        assert_eq!(factors, vec![BigInt::from(1009), BigInt::from(1009)]);
    }

    #[test]
    fn test_product_invariant_across_paths() {
        for n in [100u64, 3599, 999983, 1000730021] {
            let (factors, _) = run(n);
            let product: BigInt = factors.iter().product();
            assert_eq!(product, BigInt::from(n), "product mismatch for {}", n);
        }
    }
}
