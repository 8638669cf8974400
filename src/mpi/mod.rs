//! Arbitrary-precision signed integers
//!
//! This module defines the [`Mpi`] type, a variable-width sign-magnitude
//! integer used as the numeric foundation for public-key cryptography
//! (RSA, DH, DSA).
//!
//! `Mpi` is designed as a low-level arithmetic primitive rather than a
//! general-purpose number tower. It provides exactly the operations those
//! cryptosystems need (ring arithmetic, modular exponentiation, GCD and
//! modular inverse, primality testing and prime generation, binary and
//! ASCII import/export) with explicit semantics and predictable error
//! behavior.
//!
//! The layers build strictly upward:
//! - `limb` — single-word multiply-accumulate and borrow chains
//! - `core` — the value itself: lifecycle, growth, comparison
//! - `bits`, `conv` — shifts and wire formats
//! - `add`, `mul`, `div` — ring arithmetic
//! - `mont`, `exp` — Montgomery machinery and exponentiation
//! - `gcd`, `prime` — number theory on top of the rest
//!
//! Buffers holding limb data are wiped before every release; see the
//! crate documentation for the threat model behind that choice.

pub mod conv;

mod add;
mod bits;
mod core;
mod div;
mod exp;
mod gcd;
mod limb;
mod mont;
mod mul;
mod prime;

pub use self::core::{MAX_LIMBS, Mpi};
pub use self::exp::{ExpModCache, MAX_WINDOW};
pub use self::limb::{LIMB_BITS, LIMB_BYTES, Limb};
