//! Textbook demo inputs for the ECDSA walkthrough.
//!
//! Curve `y^2 = x^3 + 2x + 2` over `GF(17)`, generator `(5, 1)` of order 19.

/// Prime modulus of the demo curve.
pub const DEMO_P: i64 = 17;

/// Linear coefficient of the demo curve.
pub const DEMO_A: i64 = 2;

/// Constant coefficient of the demo curve.
pub const DEMO_B: i64 = 2;

/// Generator `(x, y)` of the demo subgroup.
pub const DEMO_GENERATOR: (i64, i64) = (5, 1);

/// Demo private key `d`.
pub const DEMO_PRIVATE_KEY: i64 = 7;

/// Demo message hash.
pub const DEMO_HASH: i64 = 26;

/// Demo ephemeral scalar `kE`. Never reuse an ephemeral scalar outside a demo.
pub const DEMO_EPHEMERAL: i64 = 10;
