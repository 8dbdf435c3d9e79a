// src/algorithms/pollard_rho.rs
//
// Pollard's Rho: probabilistic factorization using Floyd cycle detection
// Complexity: O(n^(1/4)) expected time per extracted factor
//
// The pseudo-random walk x_i = (x_{i-1}² + c) mod n cycles modulo an unknown
// factor p much sooner than it cycles modulo n. Comparing the tortoise and
// hare positions through gcd(|x - y|, n) surfaces that factor. A poorly
// chosen offset c can collapse the walk to the trivial divisor n, so the
// walk restarts with a fresh random c. Restarts are capped by an explicit
// bound so the strategy always terminates.

use num::bigint::Sign;
use num::{BigInt, Integer, One};
use log::debug;
use rand::RngCore;
use crate::error::EngineError;
use crate::integer_math::gcd::GCD;
use crate::integer_math::primality::PrimalityTester;

/// Upper bound on tortoise/hare steps within a single walk.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Upper bound on fresh-offset restarts before reporting failure.
pub const DEFAULT_MAX_RESTARTS: usize = 24;

/// Completely factors n with Pollard's Rho, returning the prime factors in
/// ascending order with multiplicity.
///
/// Even inputs peel a factor 2 and recurse on the half; prime inputs return
/// themselves. Otherwise a proper divisor is located by the cycle-finding
/// walk and both the divisor and the cofactor are factored recursively
/// through this same function, so no call re-enters the dispatcher.
///
/// # Arguments
/// * `n` - The number to factor (must be > 1; the dispatcher validates this)
/// * `max_iterations` - Step bound per random walk
/// * `max_restarts` - Fresh-offset budget before giving up
///
/// # Examples
/// ```
/// use num::BigInt;
/// use factorizer::algorithms::pollard_rho;
///
/// let n = BigInt::from(8051); // 83 × 97
/// let factors = pollard_rho::factor(&n, 100000, 24).unwrap();
/// assert_eq!(factors, vec![BigInt::from(83), BigInt::from(97)]);
/// ```
pub fn factor(
    n: &BigInt,
    max_iterations: usize,
    max_restarts: usize,
) -> Result<Vec<BigInt>, EngineError> {
    if n <= &BigInt::one() {
        return Ok(Vec::new());
    }

    if n.is_even() {
        let two = BigInt::from(2);
        let half = n / &two;
        let mut factors = vec![two];
        factors.extend(factor(&half, max_iterations, max_restarts)?);
        factors.sort();
        return Ok(factors);
    }

    if PrimalityTester::is_prime(n) {
        return Ok(vec![n.clone()]);
    }

    let divisor = find_factor(n, max_iterations, max_restarts)?;
    let cofactor = n / &divisor;
    debug!("Pollard's Rho: split {} into {} × {}", n, divisor, cofactor);

    let mut factors = factor(&divisor, max_iterations, max_restarts)?;
    factors.extend(factor(&cofactor, max_iterations, max_restarts)?);
    factors.sort();
    Ok(factors)
}

/// Locates one prime divisor of the odd composite n.
///
/// Each attempt draws a random polynomial offset c in [1, n-1] and runs the
/// tortoise/hare walk. A walk that collapses (d = n) or runs out of steps
/// burns one restart; a composite divisor is split further by recursion.
fn find_factor(
    n: &BigInt,
    max_iterations: usize,
    max_restarts: usize,
) -> Result<BigInt, EngineError> {
    let mut rng = rand::rng();

    for restart in 0..max_restarts {
        let c = random_offset(&mut rng, n);
        debug!("Pollard's Rho: walk {} with c = {}", restart + 1, c);

        match rho_walk(n, &c, max_iterations) {
            Some(d) if &d == n => {
                // Cycle collapsed without a proper divisor; retry with fresh c
                debug!("Pollard's Rho: walk collapsed to n, restarting");
            }
            Some(d) => {
                if PrimalityTester::is_prime(&d) {
                    return Ok(d);
                }
                return find_factor(&d, max_iterations, max_restarts);
            }
            None => {
                debug!("Pollard's Rho: no divisor within {} steps, restarting", max_iterations);
            }
        }
    }

    Err(EngineError::StrategyFailure(format!(
        "Pollard's Rho gave up on {} after {} restarts of {} iterations",
        n, max_restarts, max_iterations
    )))
}

/// One Floyd tortoise/hare walk: x ← f(x), y ← f(f(y)), d = gcd(|x - y|, n).
/// Returns Some(d) for the first d ≠ 1 (which may be n itself), or None when
/// the step budget runs out.
fn rho_walk(n: &BigInt, c: &BigInt, max_iterations: usize) -> Option<BigInt> {
    let one = BigInt::one();
    let mut x = BigInt::from(2);
    let mut y = BigInt::from(2);

    for iteration in 0..max_iterations {
        x = (&x * &x + c) % n;
        y = (&y * &y + c) % n;
        y = (&y * &y + c) % n;

        let diff = if &x > &y { &x - &y } else { &y - &x };
        let d = GCD::find_gcd_pair(&diff, n);

        if &d != &one {
            return Some(d);
        }

        if (iteration + 1) % 10000 == 0 {
            debug!("Pollard's Rho: {} iterations without a divisor", iteration + 1);
        }
    }

    None
}

/// Uniform-enough random offset c in [1, n-1], built from raw random bytes
/// sized to n so large moduli still see large offsets.
fn random_offset(rng: &mut dyn RngCore, n: &BigInt) -> BigInt {
    let span = n - 1u32;
    let byte_len = ((span.bits() + 7) / 8) as usize;
    let mut buf = vec![0u8; byte_len.max(1)];
    rng.fill_bytes(&mut buf);
    BigInt::from_bytes_be(Sign::Plus, &buf) % &span + 1u32
}
