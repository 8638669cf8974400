//! Random number source boundary
//!
//! This crate never generates randomness itself. Operations that need
//! random bytes (Miller-Rabin witness selection, prime candidate
//! generation, random fill) take a caller-supplied generator through the
//! [`SecureRng`] trait.
//!
//! The trait is intentionally minimal: a single in-place byte fill,
//! matching the interface of the Nebula CSPRNG. Any generator with that
//! shape (an OS-seeded DRBG, a hardware source, a deterministic generator
//! in tests) can be plugged in without the crate knowing which it is.
//!
//! The generator is trusted to be cryptographically secure when the
//! surrounding use is security-critical; nothing in this crate can detect
//! a weak source.

/// A cryptographically secure source of random bytes.
///
/// Implementations must fill the entire buffer with bytes that are
/// uniformly distributed and unpredictable to an attacker.
pub trait SecureRng {
    /// Fills `out` with random bytes.
    fn fill_bytes(&mut self, out: &mut [u8]);
}

impl<R: SecureRng + ?Sized> SecureRng for &mut R {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        (**self).fill_bytes(out)
    }
}
