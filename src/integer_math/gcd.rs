// src/integer_math/gcd.rs

use num::BigInt;
use num::Signed;
use num::Integer;

pub struct GCD;

impl GCD {
    pub fn find_gcd_pair(left: &BigInt, right: &BigInt) -> BigInt {
        left.abs().gcd(&right.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_pair() {
        assert_eq!(GCD::find_gcd_pair(&BigInt::from(12), &BigInt::from(18)), BigInt::from(6));
        assert_eq!(GCD::find_gcd_pair(&BigInt::from(17), &BigInt::from(5)), BigInt::from(1));
    }

    #[test]
    fn test_gcd_handles_difference_sign() {
        // The shape Pollard's Rho relies on: gcd(|x - y|, n)
        let x = BigInt::from(2);
        let y = BigInt::from(26);
        let n = BigInt::from(8051);
        assert_eq!(GCD::find_gcd_pair(&(&x - &y), &n), GCD::find_gcd_pair(&(&y - &x), &n));
    }
}
