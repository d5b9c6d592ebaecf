//! Error types for curve arithmetic and subgroup enumeration.

use num_bigint::BigInt;
use thiserror::Error;

use crate::Point;

/// Errors raised by the modular arithmetic, the group law and the scalar tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// `value` has no multiplicative inverse modulo `modulus` (`gcd != 1`).
    ///
    /// Within the group law this means a zero denominator, which only happens
    /// for a singular curve or a point that does not lie on the curve.
    #[error("no multiplicative inverse of {value} modulo {modulus}")]
    NoInverse { modulus: BigInt, value: BigInt },

    /// A scalar table was indexed outside `1..=order-1`.
    ///
    /// Index `0` and index `order` both denote the point at infinity, which
    /// has no affine representation.
    #[error("scalar index {index} outside the subgroup range [1, {order})")]
    IndexOutOfRange { index: BigInt, order: BigInt },

    /// Subgroup enumeration ran for `cap` steps without reaching the identity.
    ///
    /// The generator is not a finite-order point of the given curve.
    #[error("subgroup enumeration did not close within {cap} steps")]
    EnumerationDivergence { cap: BigInt },

    /// `generator` does not satisfy `order·generator = O`.
    #[error("{order}·{generator} is not the point at infinity")]
    OrderMismatch { generator: Point, order: BigInt },

    /// A scalar multiple that should be an affine point came out as the identity.
    #[error("{index}·G is the point at infinity, the stated order is wrong")]
    UnexpectedIdentity { index: BigInt },
}
