//! Multi-precision integer arithmetic for Nebula's public-key cryptography
//!
//! This crate provides the arbitrary-precision signed integers underneath
//! RSA, Diffie-Hellman, and DSA: ring arithmetic with full carry/borrow
//! propagation, long division, Montgomery modular multiplication with
//! sliding-window exponentiation, binary GCD and modular inversion, and
//! probabilistic primality testing with random prime generation.
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than on raw speed or a broad numeric API. Every operation has explicit
//! `Result`-based error behavior, and every released limb buffer is wiped
//! first: intermediate values in key generation are exactly the secrets
//! a memory disclosure would otherwise hand over.
//!
//! # Module overview
//!
//! - `mpi`
//!   The [`Mpi`] type and all arithmetic: lifecycle, comparison, bit
//!   operations, addition through division, Montgomery exponentiation,
//!   GCD/inverse, primality, and import/export in raw big-endian bytes or
//!   ASCII radix 2..=16.
//!
//! - `rng`
//!   The [`SecureRng`] trait. This crate consumes randomness (Miller-Rabin
//!   witnesses, prime candidates) but never produces it; callers plug in
//!   their own generator.
//!
//! - `error`
//!   The crate-wide [`Error`] enum and [`Result`] alias. The variants are
//!   stable and coarse-grained: argument validation, parse failures,
//!   buffer sizing, structural rejections, and the size cap.
//!
//! # Design goals
//!
//! - Explicit sign-magnitude representation with stable invariants
//! - No panics on input errors; `Result` everywhere
//! - Zeroization of every released buffer
//! - Minimal dependency surface
//!
//! # Timing
//!
//! Only the final subtraction inside Montgomery multiplication is
//! balanced against timing observation. Everything else, including the
//! exponentiation window schedule, is data-dependent. Callers needing
//! full side-channel resistance must add blinding at the protocol layer.

pub mod error;
pub mod mpi;
pub mod rng;

pub use error::{Error, Result};
pub use mpi::{ExpModCache, Mpi};
pub use rng::SecureRng;
