// Textbook curve E(GF(17)) : y^2 = x^3 + 2*x + 2
// Generator (5, 1) spans a cyclic subgroup of prime order 19, which is the
// full group of 19 points (cofactor 1).

use core::fmt::{self, Display, Formatter};
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::modular::canonical_mod;

/// Affine point `(x, y)` with coordinates in canonical residue form `[0, p)`.
///
/// The point at infinity is never stored as a `Point`; operations that can
/// produce it return [`AddResult::Identity`](crate::AddResult) instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate of the point
    pub x: BigInt,
    /// The y-coordinate of the point
    pub y: BigInt,
}

impl Point {
    /// Create a new affine point from coordinates that are already reduced.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coefficients of the short Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`.
///
/// Primality of `p` and non-singularity (`4a^3 + 27b^2 != 0 mod p`) are the
/// caller's responsibility and are not checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveParams {
    /// Prime modulus of the coordinate field
    pub p: BigInt,
    /// Linear coefficient
    pub a: BigInt,
    /// Constant coefficient
    pub b: BigInt,
}

impl CurveParams {
    pub fn new(p: impl Into<BigInt>, a: impl Into<BigInt>, b: impl Into<BigInt>) -> Self {
        CurveParams {
            p: p.into(),
            a: a.into(),
            b: b.into(),
        }
    }

    /// The textbook curve `y^2 = x^3 + 2x + 2` over `GF(17)`.
    pub fn textbook() -> Self {
        Self::new(17, 2, 2)
    }
}

/// A curve instance; the group law lives in the `group` module.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Curve {
    params: CurveParams,
}

impl Curve {
    pub fn new(params: CurveParams) -> Self {
        Curve { params }
    }

    #[inline]
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    #[inline]
    pub fn p(&self) -> &BigInt {
        &self.params.p
    }

    #[inline]
    pub fn a(&self) -> &BigInt {
        &self.params.a
    }

    #[inline]
    pub fn b(&self) -> &BigInt {
        &self.params.b
    }

    /// Reduce arbitrary coordinates into `[0, p)` and build a point.
    pub fn point(&self, x: impl Into<BigInt>, y: impl Into<BigInt>) -> Point {
        Point {
            x: canonical_mod(self.p(), &x.into()),
            y: canonical_mod(self.p(), &y.into()),
        }
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn contains(&self, point: &Point) -> bool {
        let p = self.p();
        let lhs = canonical_mod(p, &(&point.y * &point.y));
        let rhs = canonical_mod(
            p,
            &(&point.x * &point.x * &point.x + self.a() * &point.x + self.b()),
        );
        lhs == rhs
    }

    /// Negate a point: (x, -y).
    pub fn negate(&self, point: &Point) -> Point {
        if point.y.is_zero() {
            return point.clone();
        }
        Point {
            x: point.x.clone(),
            y: canonical_mod(self.p(), &(self.p() - &point.y)),
        }
    }
}

impl From<CurveParams> for Curve {
    fn from(params: CurveParams) -> Self {
        Curve::new(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_on_curve() {
        let curve = Curve::new(CurveParams::textbook());
        assert!(curve.contains(&Point::new(5, 1)));
        assert!(curve.contains(&Point::new(5, 16)));
        assert!(!curve.contains(&Point::new(5, 2)));
    }

    #[test]
    fn test_point_reduces_coordinates() {
        let curve = Curve::new(CurveParams::textbook());
        assert_eq!(curve.point(22, -16), Point::new(5, 1));
    }

    #[test]
    fn test_point_negation() {
        let curve = Curve::new(CurveParams::textbook());
        let g = Point::new(5, 1);
        let neg_g = curve.negate(&g);

        assert_eq!(neg_g, Point::new(5, 16));
        assert!(curve.contains(&neg_g));
        assert_eq!(curve.negate(&neg_g), g);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(7, 11).to_string(), "(7, 11)");
    }
}
