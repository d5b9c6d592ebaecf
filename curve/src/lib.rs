//! Elliptic curve group over a small prime field.
//!
//! This crate provides residue arithmetic, the short Weierstrass group law on
//! affine points, and scalar multiplication oracles for a fixed generator:
//! an enumerated [`SubgroupTable`] and an on-demand [`DoubleAndAdd`]. None of
//! it is constant time; the intended curves have a handful of points.

mod affine;
mod errors;
mod group;
mod modular;
mod msm;
mod random;
mod subgroup;

pub use affine::{Curve, CurveParams, Point};
pub use errors::CurveError;
pub use group::{AddResult, DoubleAndAdd, ScalarTable};
pub use modular::{canonical_mod, modular_inverse};
pub use msm::double_scalar_mul;
pub use num_bigint::BigInt;
pub use random::random_scalar;
pub use subgroup::SubgroupTable;
