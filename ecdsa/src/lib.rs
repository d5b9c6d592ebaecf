//! ECDSA over a small short Weierstrass curve.
//!
//! This library walks through the Elliptic Curve Digital Signature Algorithm
//! on toy parameters:
//! - Key derivation: `B = d·A` for a generator `A` of prime order `q`
//! - Signing: `r = (k·A).x mod q`, `s = k^-1 (hash + d·r) mod q`
//! - Verification: `P = (hash·s^-1)·A + (r·s^-1)·B`, accept iff `P.x ≡ r`
//!
//! Scalar multiplication is answered by the tables from the `curve` crate,
//! by default a fully enumerated [`SubgroupTable`](curve::SubgroupTable).
//!
//! # Example
//!
//! ```
//! use curve::{BigInt, Curve, CurveParams, Point};
//! use ecdsa::{SigningKey, VerifyingKey};
//!
//! // y^2 = x^3 + 2x + 2 over GF(17), generator (5, 1)
//! let curve = Curve::new(CurveParams::textbook());
//! let signing_key = SigningKey::derive(&curve, Point::new(5, 1), BigInt::from(7)).unwrap();
//!
//! // Sign a message hash with an explicit ephemeral scalar
//! let hash = BigInt::from(26);
//! let signature = signing_key.sign(&hash, &BigInt::from(10)).expect("signing failed");
//!
//! // Verify against the exported public key
//! let public_key = signing_key.public_key().clone();
//! let verifying_key = VerifyingKey::from_public_key(&public_key).unwrap();
//! assert!(verifying_key.verify(&signature, &hash).expect("verification failed"));
//! ```
//!
//! # Security Considerations
//!
//! None of this is fit for real use:
//! - Curve parameters are tiny and are not validated
//! - Arithmetic is not constant time
//! - The ephemeral scalar is supplied by the caller; reusing one across two
//!   messages reveals the private key

pub mod constants;
mod errors;
mod keys;
mod signatures;


pub use errors::{EcdsaError, ScalarKind};
pub use keys::{PublicKey, SigningKey, VerifyingKey, verify};
pub use signatures::{Signature, Verification};
