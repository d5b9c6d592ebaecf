//! Residue arithmetic shared by the group law and the signature protocol.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::CurveError;

/// Reduces `x` into the canonical residue range `[0, n)`.
///
/// Negative inputs are lifted by multiples of `n` until non-negative, so
/// `canonical_mod(17, -3) == 14`. `n` must be positive.
#[inline]
pub fn canonical_mod(n: &BigInt, x: &BigInt) -> BigInt {
    debug_assert!(n > &BigInt::zero(), "modulus must be positive");
    x.mod_floor(n)
}

/// Computes `y` with `x * y ≡ 1 (mod n)` using the extended Euclidean algorithm.
///
/// The remainder sequence starts at `(n, x mod n)` and carries the Bézout
/// coefficient of `x`. Reaching remainder `1` yields the inverse; reaching
/// `0` first means `gcd(n, x) != 1`.
///
/// # Errors
///
/// Returns [`CurveError::NoInverse`] when `x` and `n` are not coprime.
pub fn modular_inverse(n: &BigInt, x: &BigInt) -> Result<BigInt, CurveError> {
    let mut a = n.clone();
    let mut b = canonical_mod(n, x);
    let mut r0 = BigInt::zero();
    let mut r1 = BigInt::one();

    loop {
        if b.is_zero() {
            return Err(CurveError::NoInverse {
                modulus: n.clone(),
                value: x.clone(),
            });
        }
        if b.is_one() {
            return Ok(canonical_mod(n, &r1));
        }

        let (quotient, remainder) = a.div_rem(&b);
        let next = &r0 - &r1 * quotient;
        a = b;
        b = remainder;
        r0 = r1;
        r1 = next;
    }
}
