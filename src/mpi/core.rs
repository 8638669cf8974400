//! The multi-precision integer value
//!
//! This module defines the [`Mpi`] type, an arbitrary-precision signed
//! integer in sign-magnitude form, together with its lifecycle: growth,
//! assignment, swapping, and the zeroizing release of its limb buffer.
//!
//! Representation:
//! - `sign` is +1 or −1; a numerically zero value always carries sign +1
//! - `limbs` stores the magnitude little-endian (limb 0 least significant)
//! - trailing zero limbs are tolerated everywhere; operations that compare
//!   or measure work on the *effective* length, the index of the top
//!   non-zero limb plus one
//!
//! The limb buffer may hold key material. It is wiped before every release:
//! on drop, on reallocation during growth, and when an assignment shrinks
//! the value. The wipe goes through the `zeroize` crate so the compiler
//! cannot elide it.

use crate::error::{Error, Result};
use crate::mpi::limb::{Limb, LIMB_BITS, cmp_limbs};

use std::cmp::Ordering;
use zeroize::Zeroize;

/// Hard cap on the number of limbs a value may occupy.
///
/// At 64 bits per limb this allows magnitudes up to 640,000 bits, far
/// beyond any RSA/DH/DSA parameter in use. The cap bounds the damage of a
/// corrupt length read from untrusted input.
pub const MAX_LIMBS: usize = 10_000;

/// An arbitrary-precision signed integer.
///
/// The value is stored in sign-magnitude form with 64-bit limbs. All
/// arithmetic lives in inherent methods that return `Result`; the only
/// panics are contract violations caught by debug assertions.
#[derive(Debug)]
pub struct Mpi {
    /// +1 or −1. Zero is stored with sign +1.
    pub(crate) sign: i8,
    /// Magnitude, least significant limb first.
    pub(crate) limbs: Vec<Limb>,
}

impl Mpi {
    /// Creates the value zero, owning no limbs.
    pub fn new() -> Self {
        Mpi {
            sign: 1,
            limbs: Vec::new(),
        }
    }

    /// Creates a value from a native signed integer.
    ///
    /// The result occupies a single limb holding `|z|`, with the sign of
    /// `z`. This is also the transient view used internally by the
    /// scalar (`*_int`) operations.
    pub fn from_int(z: i64) -> Self {
        Mpi {
            sign: if z < 0 { -1 } else { 1 },
            limbs: vec![z.unsigned_abs()],
        }
    }

    /// Resets `self` to a native signed integer, wiping the old content.
    pub fn set_int(&mut self, z: i64) {
        self.limbs.zeroize();
        self.limbs.push(z.unsigned_abs());
        self.sign = if z < 0 { -1 } else { 1 };
    }

    /// Ensures the limb buffer holds at least `n` limbs.
    ///
    /// Already-large buffers are left alone. Otherwise a fresh zeroed
    /// buffer is allocated, the old content copied over, and the old
    /// buffer wiped before release.
    ///
    /// # Errors
    /// `AllocFailed` if `n` exceeds [`MAX_LIMBS`].
    pub fn grow(&mut self, n: usize) -> Result<()> {
        if n > MAX_LIMBS {
            return Err(Error::AllocFailed);
        }

        if self.limbs.len() >= n {
            return Ok(());
        }

        let mut bigger = vec![0 as Limb; n];
        bigger[..self.limbs.len()].copy_from_slice(&self.limbs);

        self.limbs.zeroize();
        self.limbs = bigger;

        Ok(())
    }

    /// Copies `other` into `self`, trimming to `other`'s effective length.
    ///
    /// Copying zero releases `self`'s buffer entirely.
    pub fn assign(&mut self, other: &Mpi) -> Result<()> {
        let n = other.used();

        if n == 0 {
            self.limbs.zeroize();
            self.limbs = Vec::new();
            self.sign = 1;
            return Ok(());
        }

        self.grow(n)?;
        self.limbs[n..].fill(0);
        self.limbs[..n].copy_from_slice(&other.limbs[..n]);
        self.sign = other.sign;

        Ok(())
    }

    /// Exchanges the contents of two values without copying limbs.
    pub fn swap(&mut self, other: &mut Mpi) {
        std::mem::swap(self, other);
    }

    /// The sign of the value: +1 for positive or zero, −1 for negative.
    pub fn sign(&self) -> i32 {
        if self.is_zero() { 1 } else { self.sign as i32 }
    }

    /// Whether the value is numerically zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Whether the magnitude is odd.
    pub fn is_odd(&self) -> bool {
        self.limbs.first().is_some_and(|&l| l & 1 == 1)
    }

    /// Effective length: the index of the top non-zero limb plus one,
    /// or 0 for zero.
    pub(crate) fn used(&self) -> usize {
        for (i, &l) in self.limbs.iter().enumerate().rev() {
            if l != 0 {
                return i + 1;
            }
        }

        0
    }

    /// Forces the canonical sign on a zero magnitude.
    ///
    /// Called after operations whose sign bookkeeping can leave a −0.
    pub(crate) fn fix_zero_sign(&mut self) {
        if self.sign < 0 && self.is_zero() {
            self.sign = 1;
        }
    }

    /// Compares magnitudes, ignoring signs.
    pub fn cmp_abs(&self, other: &Mpi) -> Ordering {
        let i = self.used();
        let j = other.used();

        if i != j {
            return i.cmp(&j);
        }

        cmp_limbs(&self.limbs[..i], &other.limbs[..j])
    }

    /// Compares against a native signed integer.
    pub fn cmp_int(&self, z: i64) -> Ordering {
        self.cmp(&Mpi::from_int(z))
    }
}

impl Default for Mpi {
    fn default() -> Self {
        Mpi::new()
    }
}

impl Clone for Mpi {
    /// Clones the value, trimming the copy to the effective length.
    fn clone(&self) -> Self {
        let n = self.used();

        Mpi {
            sign: if n == 0 { 1 } else { self.sign },
            limbs: self.limbs[..n].to_vec(),
        }
    }
}

impl Drop for Mpi {
    fn drop(&mut self) {
        self.limbs.zeroize();
    }
}

impl Zeroize for Mpi {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
        self.sign = 1;
    }
}

impl PartialEq for Mpi {
    fn eq(&self, other: &Mpi) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Mpi {}

impl PartialOrd for Mpi {
    fn partial_cmp(&self, other: &Mpi) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mpi {
    /// Signed comparison. Zero compares equal regardless of how it was
    /// produced; equal magnitudes of opposite sign order by sign.
    fn cmp(&self, other: &Mpi) -> Ordering {
        let self_zero = self.is_zero();
        let other_zero = other.is_zero();

        if self_zero && other_zero {
            return Ordering::Equal;
        }
        if self_zero {
            return if other.sign > 0 {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        if other_zero {
            return if self.sign > 0 {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        match (self.sign > 0, other.sign > 0) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.cmp_abs(other),
            (false, false) => other.cmp_abs(self),
        }
    }
}

/// Number of limbs needed to hold `bits` bits.
pub(crate) fn bits_to_limbs(bits: usize) -> usize {
    bits.div_ceil(LIMB_BITS)
}

/// Number of limbs needed to hold `bytes` bytes.
pub(crate) fn bytes_to_limbs(bytes: usize) -> usize {
    bytes.div_ceil(crate::mpi::limb::LIMB_BYTES)
}
