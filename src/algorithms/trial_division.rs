// src/algorithms/trial_division.rs
//
// Trial Division: exhaustive small-factor extraction
// Complexity: O(sqrt(n))
// Guaranteed correct and terminating for every n > 1; also the universal
// fallback the other strategies use to finish off residual cofactors.

use num::{BigInt, Integer, One};
use log::debug;

/// Completely factors n by trial division, returning the prime factors in
/// ascending order with multiplicity.
///
/// Extracts factor 2 repeatedly, then odd candidates 3, 5, 7, ... while the
/// candidate squared is no larger than the remaining cofactor. Whatever
/// survives above 2 is itself prime and is appended last.
///
/// # Arguments
/// * `n` - The number to factor (must be > 1; the dispatcher validates this)
///
/// # Examples
/// ```
/// use num::BigInt;
/// use factorizer::algorithms::trial_division::factor;
///
/// let factors = factor(&BigInt::from(360));
/// assert_eq!(factors.iter().product::<BigInt>(), BigInt::from(360));
/// ```
pub fn factor(n: &BigInt) -> Vec<BigInt> {
    let mut factors = Vec::new();
    if n <= &BigInt::one() {
        return factors;
    }

    let mut remaining = n.clone();
    let two = BigInt::from(2);

    while remaining.is_even() {
        factors.push(two.clone());
        remaining /= &two;
    }

    let mut divisor = BigInt::from(3);
    while &(&divisor * &divisor) <= &remaining {
        while remaining.is_multiple_of(&divisor) {
            factors.push(divisor.clone());
            remaining /= &divisor;
        }
        divisor += &two;
    }

    if remaining > BigInt::one() {
        factors.push(remaining);
    }

    debug!("Trial division: {} -> {} prime factors", n, factors.len());
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_360() {
        let factors = factor(&BigInt::from(360));
        let expected: Vec<BigInt> = [2, 2, 2, 3, 3, 5].iter().map(|&f| BigInt::from(f)).collect();
        assert_eq!(factors, expected);
    }

    #[test]
    fn test_factor_semiprime() {
        let factors = factor(&BigInt::from(143)); // 11 × 13
        assert_eq!(factors, vec![BigInt::from(11), BigInt::from(13)]);
    }

    #[test]
    fn test_factor_prime() {
        let factors = factor(&BigInt::from(97));
        assert_eq!(factors, vec![BigInt::from(97)]);
    }

    #[test]
    fn test_factor_power_of_two() {
        let factors = factor(&BigInt::from(64));
        assert_eq!(factors.len(), 6);
        assert!(factors.iter().all(|f| f == &BigInt::from(2)));
    }

    #[test]
    fn test_factor_two() {
        assert_eq!(factor(&BigInt::from(2)), vec![BigInt::from(2)]);
    }

    #[test]
    fn test_factors_sorted_with_large_survivor() {
        // 2 × 2 × 1000003: the surviving cofactor is a prime above sqrt
        let n = BigInt::from(4000012u64);
        let factors = factor(&n);
        assert_eq!(
            factors,
            vec![BigInt::from(2), BigInt::from(2), BigInt::from(1000003)]
        );
    }
}
