//! Bit-level views and in-place shifts
//!
//! Bit positions are zero-based from the least significant bit of the
//! magnitude. [`Mpi::bitlen`] is one-based (the count of significant
//! bits), so `bitlen` of zero is 0 and `bitlen` of 1 is 1; buffer sizing
//! throughout the crate derives from it.

use crate::error::{Error, Result};
use crate::mpi::Mpi;
use crate::mpi::core::bits_to_limbs;
use crate::mpi::limb::{Limb, LIMB_BITS};

impl Mpi {
    /// Zero-based index of the least significant set bit, or 0 for zero.
    pub fn lsb(&self) -> usize {
        for (i, &l) in self.limbs.iter().enumerate() {
            if l != 0 {
                return i * LIMB_BITS + l.trailing_zeros() as usize;
            }
        }

        0
    }

    /// Number of significant bits in the magnitude; 0 for zero.
    pub fn bitlen(&self) -> usize {
        let n = self.used();

        if n == 0 {
            return 0;
        }

        let top = self.limbs[n - 1];
        (n - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
    }

    /// Number of bytes needed to hold the magnitude.
    pub fn byte_len(&self) -> usize {
        self.bitlen().div_ceil(8)
    }

    /// The bit at `pos`, as 0 or 1. Positions beyond the buffer read 0.
    pub fn bit(&self, pos: usize) -> u8 {
        let limb = pos / LIMB_BITS;

        if limb >= self.limbs.len() {
            return 0;
        }

        ((self.limbs[limb] >> (pos % LIMB_BITS)) & 1) as u8
    }

    /// Sets the bit at `pos` to `val`, growing the buffer if needed.
    ///
    /// # Errors
    /// `BadInput` if `val` is not 0 or 1; `AllocFailed` if growing past
    /// the size cap.
    pub fn set_bit(&mut self, pos: usize, val: u8) -> Result<()> {
        if val > 1 {
            return Err(Error::BadInput);
        }

        let limb = pos / LIMB_BITS;
        let off = pos % LIMB_BITS;

        if limb >= self.limbs.len() {
            if val == 0 {
                return Ok(());
            }
            self.grow(limb + 1)?;
        }

        self.limbs[limb] &= !(1 << off);
        self.limbs[limb] |= (val as Limb) << off;

        Ok(())
    }

    /// Shifts the magnitude left by `count` bits in place, growing to fit.
    pub fn shift_left(&mut self, count: usize) -> Result<()> {
        let whole = count / LIMB_BITS;
        let rest = count % LIMB_BITS;

        let need = self.bitlen() + count;
        if self.limbs.len() * LIMB_BITS < need {
            self.grow(bits_to_limbs(need))?;
        }

        if whole > 0 {
            for i in (whole..self.limbs.len()).rev() {
                self.limbs[i] = self.limbs[i - whole];
            }
            self.limbs[..whole].fill(0);
        }

        if rest > 0 {
            let mut carry: Limb = 0;

            for l in self.limbs[whole..].iter_mut() {
                let next = *l >> (LIMB_BITS - rest);
                *l = (*l << rest) | carry;
                carry = next;
            }
        }

        Ok(())
    }

    /// Shifts the magnitude right by `count` bits in place.
    ///
    /// Shifting everything out leaves zero.
    pub fn shift_right(&mut self, count: usize) {
        let whole = count / LIMB_BITS;
        let rest = count % LIMB_BITS;
        let n = self.limbs.len();

        if whole > n || (whole == n && rest > 0) {
            self.limbs.fill(0);
            self.sign = 1;
            return;
        }

        if whole > 0 {
            for i in 0..n - whole {
                self.limbs[i] = self.limbs[i + whole];
            }
            self.limbs[n - whole..].fill(0);
        }

        if rest > 0 {
            let mut carry: Limb = 0;

            for l in self.limbs.iter_mut().rev() {
                let next = *l << (LIMB_BITS - rest);
                *l = (*l >> rest) | carry;
                carry = next;
            }
        }

        self.fix_zero_sign();
    }
}
