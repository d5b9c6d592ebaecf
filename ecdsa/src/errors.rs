//! Error types for the ECDSA signature scheme.

use core::fmt::{self, Display, Formatter};
use curve::CurveError;
use num_bigint::BigInt;
use thiserror::Error;

/// The scalar a range check was applied to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScalarKind {
    PrivateKey,
    Ephemeral,
    SignatureR,
    SignatureS,
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScalarKind::PrivateKey => "private key",
            ScalarKind::Ephemeral => "ephemeral scalar",
            ScalarKind::SignatureR => "signature component r",
            ScalarKind::SignatureS => "signature component s",
        })
    }
}

/// Errors that can occur during key derivation, signing and verification.
///
/// A signature that simply does not verify is not an error: verification
/// returns `Ok(false)` for it.
#[derive(Debug, Error)]
pub enum EcdsaError {
    /// Curve arithmetic failed: no modular inverse, a table index outside the
    /// subgroup, or a generator whose subgroup never closes.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A scalar lies outside `[1, q - 1]`. Checked before any arithmetic.
    #[error("{kind} {value} outside the subgroup range [1, {order})")]
    ScalarOutOfRange {
        kind: ScalarKind,
        value: BigInt,
        order: BigInt,
    },

    /// Signing produced `r = 0` or `s = 0`.
    ///
    /// The caller may retry with a different ephemeral scalar; nothing is
    /// retried internally.
    #[error("degenerate signature: {component} is zero")]
    DegenerateSignature { component: ScalarKind },

    /// A public key's subgroup order does not match the order obtained by
    /// enumerating its generator or its public point.
    #[error("public key declares subgroup order {expected} but its points generate order {actual}")]
    OrderMismatch { expected: BigInt, actual: BigInt },

    /// A signing key was asked to verify against a public key it does not own.
    #[error("public key does not belong to this signing key")]
    ForeignPublicKey,

    /// Binary encoding or decoding of a key or signature failed.
    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}
