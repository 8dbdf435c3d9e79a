// src/integer_math/primality.rs

use num::{BigInt, Integer, One, ToPrimitive};

pub struct PrimalityTester;

impl PrimalityTester {
    /// Deterministic primality check by exhaustive trial division.
    ///
    /// Returns false for n <= 1, true for 2 and 3, false for multiples of
    /// 2 or 3, and otherwise tests divisors of the form 6k±1 up to sqrt(n).
    /// Exact for every input it is given (no probabilistic witnesses), at
    /// the cost of O(sqrt(n)) work in the worst case.
    ///
    /// # Examples
    /// ```
    /// use num::BigInt;
    /// use factorizer::integer_math::primality::PrimalityTester;
    ///
    /// assert!(PrimalityTester::is_prime(&BigInt::from(97)));
    /// assert!(!PrimalityTester::is_prime(&BigInt::from(8051)));
    /// ```
    pub fn is_prime(n: &BigInt) -> bool {
        if n <= &BigInt::one() {
            return false;
        }

        let two = BigInt::from(2);
        let three = BigInt::from(3);
        if n == &two || n == &three {
            return true;
        }
        if n.is_multiple_of(&two) || n.is_multiple_of(&three) {
            return false;
        }

        // Fast path: fits in u64, iterate with native arithmetic
        if let Some(value) = n.to_u64() {
            return Self::is_prime_u64(value);
        }

        let sqrt_n = n.sqrt();
        let mut candidate = BigInt::from(5);
        let six = BigInt::from(6);

        while &candidate <= &sqrt_n {
            if n.is_multiple_of(&candidate) || n.is_multiple_of(&(&candidate + &two)) {
                return false;
            }
            candidate += &six;
        }

        true
    }

    fn is_prime_u64(n: u64) -> bool {
        // Divide instead of squaring so the bound cannot overflow near u64::MAX
        let mut i = 5u64;
        while i <= n / i {
            if n % i == 0 || n % (i + 2) == 0 {
                return false;
            }
            i += 6;
        }
        true
    }

    /// Returns the integer square root of n when n is a perfect square.
    pub fn perfect_square_root(n: &BigInt) -> Option<BigInt> {
        if n.sign() == num::bigint::Sign::Minus {
            return None;
        }
        let root = n.sqrt();
        if &(&root * &root) == n {
            Some(root)
        } else {
            None
        }
    }
}
