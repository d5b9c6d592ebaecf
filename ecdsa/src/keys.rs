//! Signing and verifying keys for the ECDSA signature scheme.

use core::fmt::{self, Display, Formatter};
use curve::{
    BigInt, Curve, CurveParams, Point, ScalarTable, SubgroupTable, canonical_mod,
    double_scalar_mul, modular_inverse, random_scalar,
};
use num_traits::{One, Zero};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{EcdsaError, ScalarKind};
use crate::signatures::{Signature, Verification};

/// The exported public key `(p, a, b, q, A, B)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    pub p: BigInt,
    pub a: BigInt,
    pub b: BigInt,
    /// Order of the subgroup generated by `generator`
    pub q: BigInt,
    /// The generator `A`
    pub generator: Point,
    /// The public point `B = d·A`
    pub public_point: Point,
}

impl PublicKey {
    /// The curve coefficients `(p, a, b)`.
    pub fn curve_params(&self) -> CurveParams {
        CurveParams::new(self.p.clone(), self.a.clone(), self.b.clone())
    }

    /// Encodes the public key with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EcdsaError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a public key produced by [`PublicKey::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{},{},({},{}),({},{}))",
            self.p,
            self.a,
            self.b,
            self.q,
            self.generator.x,
            self.generator.y,
            self.public_point.x,
            self.public_point.y
        )
    }
}

/// A secret signing key together with the scalar tables for `A` and `B`.
///
/// Holding a `SigningKey` means the key pair has been derived: both tables
/// are built and the private key is known to lie in `[1, q - 1]`.
///
/// # Example
///
/// ```
/// use curve::{BigInt, Curve, CurveParams, Point};
/// use ecdsa::SigningKey;
///
/// let curve = Curve::new(CurveParams::textbook());
/// let signing_key = SigningKey::derive(&curve, Point::new(5, 1), BigInt::from(7)).unwrap();
///
/// assert_eq!(signing_key.public_key().q, BigInt::from(19));
/// assert_eq!(signing_key.public_key().public_point, Point::new(0, 6));
/// ```
#[derive(Clone, Debug)]
pub struct SigningKey<T: ScalarTable = SubgroupTable> {
    private_key: BigInt,
    verifying_key: VerifyingKey<T>,
}

/// A public verifying key with the scalar tables needed to check signatures.
///
/// Verification computes `u1·A + u2·B` by table lookup, which is only sound
/// because `B` generates a subgroup of the same order as `A`. Both
/// constructors check that.
#[derive(Clone, Debug)]
pub struct VerifyingKey<T: ScalarTable = SubgroupTable> {
    public_key: PublicKey,
    table_a: T,
    table_b: T,
}

impl SigningKey<SubgroupTable> {
    /// Derives the key pair for `private_key` on the subgroup generated by
    /// `generator`.
    ///
    /// Enumerates `<A>` to find `q`, checks `1 <= d <= q - 1`, looks up
    /// `B = d·A` and enumerates `<B>`.
    ///
    /// # Errors
    ///
    /// - [`EcdsaError::ScalarOutOfRange`] if `d` is outside `[1, q - 1]`.
    /// - [`EcdsaError::Curve`] if either subgroup cannot be enumerated.
    pub fn derive(
        curve: &Curve,
        generator: Point,
        private_key: BigInt,
    ) -> Result<Self, EcdsaError> {
        let table_a = SubgroupTable::build(curve, generator)?;
        Self::from_table(table_a, private_key)
    }

    /// Derives a key pair with a private key drawn uniformly from `[1, q - 1]`.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        curve: &Curve,
        generator: Point,
    ) -> Result<Self, EcdsaError> {
        let table_a = SubgroupTable::build(curve, generator)?;
        let private_key = draw_scalar(rng, table_a.order(), ScalarKind::PrivateKey)?;
        Self::from_table(table_a, private_key)
    }
}

impl<T: ScalarTable> SigningKey<T> {
    /// Derives the key pair from an existing table for the generator `A`.
    ///
    /// The table for `B` is built with [`ScalarTable::sibling`], so it has the
    /// same kind as `table_a`.
    pub fn from_table(table_a: T, private_key: BigInt) -> Result<Self, EcdsaError> {
        check_scalar(&private_key, table_a.order(), ScalarKind::PrivateKey)?;

        let public_point = table_a.lookup(&private_key)?;
        let table_b = table_a.sibling(public_point)?;
        let verifying_key = VerifyingKey::from_tables(table_a, table_b)?;

        debug!(
            q = %verifying_key.public_key.q,
            public_point = %verifying_key.public_key.public_point,
            "derived ECDSA key pair"
        );

        Ok(SigningKey {
            private_key,
            verifying_key,
        })
    }

    /// The exported public key `(p, a, b, q, A, B)`.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.verifying_key.public_key
    }

    #[inline]
    pub fn verifying_key(&self) -> &VerifyingKey<T> {
        &self.verifying_key
    }

    /// Signs a message hash with a caller-supplied ephemeral scalar `k`.
    ///
    /// Computes `R = k·A`, `r = R.x mod q` and `s = k^-1 (hash + d·r) mod q`.
    /// The hash may be any integer; it is reduced modulo `q`.
    ///
    /// # Errors
    ///
    /// - [`EcdsaError::ScalarOutOfRange`] if `k` is outside `[1, q - 1]`.
    /// - [`EcdsaError::DegenerateSignature`] if `r` or `s` is zero. Retry with
    ///   another `k`.
    /// - [`EcdsaError::Curve`] if `k` has no inverse modulo `q`, which only
    ///   happens when `q` is composite.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::{BigInt, Curve, CurveParams, Point};
    /// use ecdsa::{Signature, SigningKey};
    ///
    /// let curve = Curve::new(CurveParams::textbook());
    /// let signing_key = SigningKey::derive(&curve, Point::new(5, 1), BigInt::from(7)).unwrap();
    ///
    /// let signature = signing_key.sign(&BigInt::from(26), &BigInt::from(10)).unwrap();
    /// assert_eq!(signature, Signature::new(7, 17));
    /// ```
    pub fn sign(&self, hash: &BigInt, ephemeral: &BigInt) -> Result<Signature, EcdsaError> {
        let table_a = &self.verifying_key.table_a;
        let q = table_a.order();
        check_scalar(ephemeral, q, ScalarKind::Ephemeral)?;

        let commitment = table_a.lookup(ephemeral)?;
        let r = canonical_mod(q, &commitment.x);
        if r.is_zero() {
            warn!(%commitment, "ephemeral scalar produced r = 0");
            return Err(EcdsaError::DegenerateSignature {
                component: ScalarKind::SignatureR,
            });
        }

        let k_inv = modular_inverse(q, ephemeral)?;
        let s = canonical_mod(q, &(k_inv * (hash + &self.private_key * &r)));
        if s.is_zero() {
            warn!(%r, "signature produced s = 0");
            return Err(EcdsaError::DegenerateSignature {
                component: ScalarKind::SignatureS,
            });
        }

        debug!(%r, %s, "signed message hash");
        Ok(Signature { r, s })
    }

    /// Signs with an ephemeral scalar drawn from `rng`.
    ///
    /// This is a single attempt; a degenerate result is returned as an error
    /// rather than redrawn.
    pub fn sign_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        hash: &BigInt,
    ) -> Result<Signature, EcdsaError> {
        let q = self.verifying_key.table_a.order();
        let ephemeral = draw_scalar(rng, q, ScalarKind::Ephemeral)?;
        self.sign(hash, &ephemeral)
    }

    /// Verifies a signature against `public_key` using this key's tables.
    ///
    /// # Errors
    ///
    /// [`EcdsaError::ForeignPublicKey`] if `public_key` is not this key's
    /// public key; use [`VerifyingKey::from_public_key`] for other keys.
    pub fn verify(
        &self,
        public_key: &PublicKey,
        sig: &Signature,
        hash: &BigInt,
    ) -> Result<bool, EcdsaError> {
        if public_key != self.public_key() {
            return Err(EcdsaError::ForeignPublicKey);
        }
        self.verifying_key.verify(sig, hash)
    }
}

impl VerifyingKey<SubgroupTable> {
    /// Rebuilds the scalar tables for an exported public key.
    ///
    /// # Errors
    ///
    /// [`EcdsaError::OrderMismatch`] if enumerating `A` does not give `q`, or if
    /// `B` does not generate a subgroup of the same order.
    pub fn from_public_key(public_key: &PublicKey) -> Result<Self, EcdsaError> {
        let curve = Curve::new(public_key.curve_params());
        let table_a = SubgroupTable::build(&curve, public_key.generator.clone())?;
        if table_a.order() != &public_key.q {
            return Err(EcdsaError::OrderMismatch {
                expected: public_key.q.clone(),
                actual: table_a.order().clone(),
            });
        }
        let table_b = table_a.sibling(public_key.public_point.clone())?;
        Self::from_tables(table_a, table_b)
    }
}

impl<T: ScalarTable> VerifyingKey<T> {
    /// Pairs the tables for `A` and `B`, checking that their orders agree.
    pub fn from_tables(table_a: T, table_b: T) -> Result<Self, EcdsaError> {
        if table_a.order() != table_b.order() {
            return Err(EcdsaError::OrderMismatch {
                expected: table_a.order().clone(),
                actual: table_b.order().clone(),
            });
        }

        let params = table_a.curve().params();
        let public_key = PublicKey {
            p: params.p.clone(),
            a: params.a.clone(),
            b: params.b.clone(),
            q: table_a.order().clone(),
            generator: table_a.generator().clone(),
            public_point: table_b.generator().clone(),
        };

        Ok(VerifyingKey {
            public_key,
            table_a,
            table_b,
        })
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Table for the generator `A`.
    #[inline]
    pub fn table_a(&self) -> &T {
        &self.table_a
    }

    /// Table for the public point `B`.
    #[inline]
    pub fn table_b(&self) -> &T {
        &self.table_b
    }

    /// Verifies a signature on a message hash.
    ///
    /// Returns `Ok(true)` if the signature is valid and `Ok(false)` if it is not.
    ///
    /// # Errors
    ///
    /// [`EcdsaError::ScalarOutOfRange`] if `r` or `s` is outside `[1, q - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::{BigInt, Curve, CurveParams, Point};
    /// use ecdsa::{SigningKey, VerifyingKey};
    ///
    /// let curve = Curve::new(CurveParams::textbook());
    /// let signing_key = SigningKey::derive(&curve, Point::new(5, 1), BigInt::from(7)).unwrap();
    /// let hash = BigInt::from(26);
    /// let signature = signing_key.sign(&hash, &BigInt::from(10)).unwrap();
    ///
    /// let verifying_key = VerifyingKey::from_public_key(signing_key.public_key()).unwrap();
    /// assert!(verifying_key.verify(&signature, &hash).unwrap());
    /// assert!(!verifying_key.verify(&signature, &BigInt::from(27)).unwrap());
    /// ```
    pub fn verify(&self, sig: &Signature, hash: &BigInt) -> Result<bool, EcdsaError> {
        self.verification(sig, hash).map(|v| v.valid)
    }

    /// Verifies a signature and returns every intermediate value.
    pub fn verification(&self, sig: &Signature, hash: &BigInt) -> Result<Verification, EcdsaError> {
        let q = self.table_a.order();
        check_scalar(&sig.r, q, ScalarKind::SignatureR)?;
        check_scalar(&sig.s, q, ScalarKind::SignatureS)?;

        let w = modular_inverse(q, &sig.s)?;
        let u1 = canonical_mod(q, &(hash * &w));
        let u2 = canonical_mod(q, &(&sig.r * &w));

        // u1 or u2 may be zero; those terms contribute the identity
        let point = double_scalar_mul(&self.table_a, &u1, &self.table_b, &u2)?;
        if point.is_identity() {
            debug!(%w, %u1, %u2, "verification point is the identity");
        }
        let valid = point
            .point()
            .is_some_and(|p| canonical_mod(q, &p.x) == canonical_mod(q, &sig.r));

        debug!(%w, %u1, %u2, valid, "verified signature");
        Ok(Verification {
            w,
            u1,
            u2,
            point,
            valid,
        })
    }
}

impl<T: ScalarTable> From<&SigningKey<T>> for VerifyingKey<T>
where
    T: Clone,
{
    /// Converts a reference to a signing key into a verifying key.
    ///
    /// This clones the signing key's tables.
    fn from(sk: &SigningKey<T>) -> Self {
        sk.verifying_key.clone()
    }
}

/// Verifies a signature against an exported public key.
///
/// Rebuilds the scalar tables from `public_key`; keep a [`VerifyingKey`] to
/// check several signatures against the same key.
pub fn verify(public_key: &PublicKey, sig: &Signature, hash: &BigInt) -> Result<bool, EcdsaError> {
    VerifyingKey::from_public_key(public_key)?.verify(sig, hash)
}

fn check_scalar(value: &BigInt, order: &BigInt, kind: ScalarKind) -> Result<(), EcdsaError> {
    if value < &BigInt::one() || value >= order {
        return Err(EcdsaError::ScalarOutOfRange {
            kind,
            value: value.clone(),
            order: order.clone(),
        });
    }
    Ok(())
}

fn draw_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    order: &BigInt,
    kind: ScalarKind,
) -> Result<BigInt, EcdsaError> {
    random_scalar(rng, order).ok_or_else(|| EcdsaError::ScalarOutOfRange {
        kind,
        value: BigInt::zero(),
        order: order.clone(),
    })
}
