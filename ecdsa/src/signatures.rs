//! Signature values and the verification transcript.

use core::fmt::{self, Display, Formatter};
use curve::AddResult;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::errors::EcdsaError;

/// An ECDSA signature `(r, s)`, both reduced modulo the subgroup order `q`.
///
/// # Structure
///
/// With `R = k·A` for the ephemeral scalar `k`:
/// - `r = R.x mod q`
/// - `s = k^-1 (hash + d·r) mod q`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub r: BigInt,
    pub s: BigInt,
}

impl Signature {
    pub fn new(r: impl Into<BigInt>, s: impl Into<BigInt>) -> Self {
        Signature {
            r: r.into(),
            s: s.into(),
        }
    }

    /// Encodes the signature with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EcdsaError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a signature produced by [`Signature::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.s)
    }
}

/// Intermediate values of a verification, kept for diagnostic display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    /// `w = s^-1 mod q`
    pub w: BigInt,
    /// `u1 = hash·w mod q`
    pub u1: BigInt,
    /// `u2 = r·w mod q`
    pub u2: BigInt,
    /// `P = u1·A + u2·B`
    pub point: AddResult,
    /// Whether `P.x ≡ r (mod q)`. False when `P` is the identity.
    pub valid: bool,
}
