use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::modular::{canonical_mod, modular_inverse};
use crate::{Curve, Point};

/// Outcome of a group operation: an affine point or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddResult {
    Sum(Point),
    Identity,
}

impl AddResult {
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, AddResult::Identity)
    }

    /// The affine point, or `None` for the identity.
    #[inline]
    pub fn point(&self) -> Option<&Point> {
        match self {
            AddResult::Sum(point) => Some(point),
            AddResult::Identity => None,
        }
    }

    pub fn into_point(self) -> Option<Point> {
        match self {
            AddResult::Sum(point) => Some(point),
            AddResult::Identity => None,
        }
    }
}

impl From<Point> for AddResult {
    fn from(point: Point) -> Self {
        AddResult::Sum(point)
    }
}

impl Curve {
    /// Adds two affine points with the short Weierstrass chord-and-tangent law.
    ///
    /// Returns [`AddResult::Identity`] when `q == -p`. Doubling a point with
    /// `y = 0` is that same case, since such a point is its own negation.
    ///
    /// # Errors
    ///
    /// [`CurveError::NoInverse`] if a slope denominator is not invertible mod
    /// `p`, which happens only for inputs that are off the curve or for a
    /// composite modulus.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<AddResult, CurveError> {
        let p = self.p();

        let slope = if lhs.x == rhs.x {
            if lhs.y != rhs.y || lhs.y.is_zero() {
                return Ok(AddResult::Identity);
            }
            // λ = (3x^2 + a) / (2y)
            let numerator = canonical_mod(p, &(BigInt::from(3u32) * &lhs.x * &lhs.x + self.a()));
            let denominator = canonical_mod(p, &(BigInt::from(2u32) * &lhs.y));
            numerator * modular_inverse(p, &denominator)?
        } else {
            // λ = (y2 - y1) / (x2 - x1)
            let numerator = canonical_mod(p, &(&rhs.y - &lhs.y));
            let denominator = canonical_mod(p, &(&rhs.x - &lhs.x));
            numerator * modular_inverse(p, &denominator)?
        };
        let slope = canonical_mod(p, &slope);

        // x_r = λ^2 - x1 - x2
        let x = canonical_mod(p, &(&slope * &slope - &lhs.x - &rhs.x));
        // y_r = λ(x1 - x_r) - y1
        let y = canonical_mod(p, &(&slope * (&lhs.x - &x) - &lhs.y));

        Ok(AddResult::Sum(Point { x, y }))
    }

    /// Point doubling: 2*P.
    #[inline]
    pub fn double(&self, point: &Point) -> Result<AddResult, CurveError> {
        self.add(point, point)
    }

    /// Adds two group elements where either side may be the identity.
    pub fn combine(&self, lhs: &AddResult, rhs: &AddResult) -> Result<AddResult, CurveError> {
        match (lhs, rhs) {
            (AddResult::Identity, other) | (other, AddResult::Identity) => Ok(other.clone()),
            (AddResult::Sum(a), AddResult::Sum(b)) => self.add(a, b),
        }
    }

    /// Scalar multiplication `k * P` by binary double-and-add.
    ///
    /// Negative scalars multiply the negated point.
    pub fn mul(&self, point: &Point, scalar: &BigInt) -> Result<AddResult, CurveError> {
        let base = if scalar.is_negative() {
            self.negate(point)
        } else {
            point.clone()
        };
        let magnitude = scalar.magnitude();

        let mut result = AddResult::Identity;
        let mut temp = AddResult::Sum(base);
        for i in 0..magnitude.bits() {
            if magnitude.bit(i) {
                result = self.combine(&result, &temp)?;
            }
            temp = match &temp {
                AddResult::Sum(t) => self.double(t)?,
                AddResult::Identity => break,
            };
        }

        Ok(result)
    }
}

/// Scalar multiplication oracle `k ↦ k·G` for a fixed generator `G`.
///
/// The signature protocol only talks to this trait, so the enumerated
/// [`SubgroupTable`](crate::SubgroupTable) and the on-demand [`DoubleAndAdd`]
/// are interchangeable.
pub trait ScalarTable: Sized {
    /// The curve the generator lives on.
    fn curve(&self) -> &Curve;

    /// The generator `G`.
    fn generator(&self) -> &Point;

    /// Order `n` of the cyclic subgroup generated by `G`.
    fn order(&self) -> &BigInt;

    /// Returns `k·G` for `1 <= k <= n - 1`.
    ///
    /// # Errors
    ///
    /// [`CurveError::IndexOutOfRange`] for `k = 0` or `k >= n`, both of
    /// which would be the identity or outside the table.
    fn lookup(&self, k: &BigInt) -> Result<Point, CurveError>;

    /// Builds a table of the same kind for another generator of the same
    /// subgroup.
    fn sibling(&self, generator: Point) -> Result<Self, CurveError>;

    /// Returns `k·G` for any integer `k`, reducing `k` modulo the order first.
    ///
    /// Multiples of the order map to [`AddResult::Identity`].
    fn multiple(&self, k: &BigInt) -> Result<AddResult, CurveError> {
        let index = canonical_mod(self.order(), k);
        if index.is_zero() {
            return Ok(AddResult::Identity);
        }
        self.lookup(&index).map(AddResult::from)
    }

    /// Rejects indices outside `1..=n-1`.
    fn check_index(&self, k: &BigInt) -> Result<(), CurveError> {
        if k < &BigInt::one() || k >= self.order() {
            return Err(CurveError::IndexOutOfRange {
                index: k.clone(),
                order: self.order().clone(),
            });
        }
        Ok(())
    }
}

/// A [`ScalarTable`] that computes `k·G` on demand instead of enumerating
/// the subgroup. The order must be known up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoubleAndAdd {
    curve: Curve,
    generator: Point,
    order: BigInt,
}

impl DoubleAndAdd {
    pub fn new(curve: Curve, generator: Point, order: BigInt) -> Self {
        DoubleAndAdd {
            curve,
            generator,
            order,
        }
    }
}

impl ScalarTable for DoubleAndAdd {
    fn curve(&self) -> &Curve {
        &self.curve
    }

    fn generator(&self) -> &Point {
        &self.generator
    }

    fn order(&self) -> &BigInt {
        &self.order
    }

    fn lookup(&self, k: &BigInt) -> Result<Point, CurveError> {
        self.check_index(k)?;
        self.curve
            .mul(&self.generator, k)?
            .into_point()
            .ok_or_else(|| CurveError::UnexpectedIdentity { index: k.clone() })
    }

    /// Rejects a generator `G'` with `n·G' != O`. For prime `n` this pins
    /// the order of `G'` to exactly `n`.
    fn sibling(&self, generator: Point) -> Result<Self, CurveError> {
        if !self.curve.mul(&generator, &self.order)?.is_identity() {
            return Err(CurveError::OrderMismatch {
                generator,
                order: self.order.clone(),
            });
        }
        Ok(DoubleAndAdd::new(
            self.curve.clone(),
            generator,
            self.order.clone(),
        ))
    }
}
