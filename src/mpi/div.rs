//! Long division and modular reduction
//!
//! Division follows Algorithm 14.20 of the Handbook of Applied
//! Cryptography: normalize the divisor so its top bit is set, estimate
//! each quotient digit from the top two limbs with a double-width divide,
//! correct the estimate with a three-limb probe, multiply-subtract, and
//! add back on the rare overshoot. Normalization keeps the estimate within
//! two of the true digit, so the correction loop runs at most twice.
//!
//! Signs: `A = Q·B + R` with `sign(Q) = sign(A)·sign(B)` and `R` carrying
//! the sign of `A`. The Euclidean [`Mpi::modulo`] then folds `R` into
//! `[0, |B|)`.

use crate::error::{Error, Result};
use crate::mpi::Mpi;
use crate::mpi::limb::{DoubleLimb, LIMB_BITS, Limb, div_two_by_one};

use std::cmp::Ordering;

impl Mpi {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    /// `DivisionByZero` if the divisor is zero.
    pub fn div_rem(&self, divisor: &Mpi) -> Result<(Mpi, Mpi)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.cmp_abs(divisor) == Ordering::Less {
            let q = Mpi::new();
            let r = self.clone();
            return Ok((q, r));
        }

        let mut x = self.clone();
        let mut y = divisor.clone();
        x.sign = 1;
        y.sign = 1;

        let mut q = Mpi::new();
        q.grow(x.limbs.len() + 2)?;

        // Knuth normalization: slide the divisor's top bit to the limb
        // boundary, shifting the dividend by the same amount.
        let k = {
            let top = y.bitlen() % LIMB_BITS;
            if top != 0 { LIMB_BITS - top } else { 0 }
        };
        x.shift_left(k)?;
        y.shift_left(k)?;

        let n = x.used() - 1;
        let t = y.used() - 1;

        y.shift_left(LIMB_BITS * (n - t))?;
        while x.cmp_abs(&y) != Ordering::Less {
            q.limbs[n - t] += 1;
            x.sub_abs_assign(&y)?;
        }
        y.shift_right(LIMB_BITS * (n - t));

        for i in (t + 1..=n).rev() {
            let x_i = *x.limbs.get(i).unwrap_or(&0);
            let x_i1 = *x.limbs.get(i - 1).unwrap_or(&0);

            let mut qhat = if x_i >= y.limbs[t] {
                Limb::MAX
            } else {
                div_two_by_one(x_i, x_i1, y.limbs[t])
            };

            // Correct the estimate: y[t..t-1]·qhat must not exceed the top
            // three limbs of the running dividend.
            let probe_hi = x_i;
            let probe_lo = ((x_i1 as DoubleLimb) << LIMB_BITS)
                | (*x.limbs.get(i.wrapping_sub(2)).unwrap_or(&0) as DoubleLimb);
            let y_t1 = if t >= 1 { y.limbs[t - 1] } else { 0 };

            // the estimate may already be Limb::MAX; the increment is
            // undone by the first probe, so wraparound is harmless
            qhat = qhat.wrapping_add(1);
            loop {
                qhat = qhat.wrapping_sub(1);

                // t1 := (y[t] << W | y[t-1]) * qhat, 3 limbs
                let lo = (y_t1 as DoubleLimb) * (qhat as DoubleLimb);
                let hi = (y.limbs[t] as DoubleLimb) * (qhat as DoubleLimb)
                    + (lo >> LIMB_BITS);
                let t1_hi = (hi >> LIMB_BITS) as Limb;
                let t1_lo = ((hi as Limb as DoubleLimb) << LIMB_BITS)
                    | (lo as Limb as DoubleLimb);

                if t1_hi < probe_hi || (t1_hi == probe_hi && t1_lo <= probe_lo) {
                    break;
                }
            }

            // x -= qhat · y << W(i-t-1); the probe can still be one too
            // high, in which case the true subtraction would go negative
            // and the digit is dropped by one instead.
            let mut t1 = y.mul_int(qhat)?;
            t1.shift_left(LIMB_BITS * (i - t - 1))?;

            if x.cmp_abs(&t1) == Ordering::Less {
                qhat -= 1;
                t1 = y.mul_int(qhat)?;
                t1.shift_left(LIMB_BITS * (i - t - 1))?;
            }

            x.sub_abs_assign(&t1)?;
            q.limbs[i - t - 1] = qhat;
        }

        q.sign = self.sign * divisor.sign;
        q.fix_zero_sign();

        x.shift_right(k);
        x.sign = self.sign;
        x.fix_zero_sign();

        Ok((q, x))
    }

    /// Divides by a native signed integer, returning `(quotient, remainder)`.
    pub fn div_rem_int(&self, z: i64) -> Result<(Mpi, Mpi)> {
        self.div_rem(&Mpi::from_int(z))
    }

    /// Euclidean reduction: the unique `R` in `[0, |modulus|)` with
    /// `self ≡ R (mod modulus)`.
    ///
    /// # Errors
    /// `NegativeValue` for a negative modulus, `DivisionByZero` for zero.
    pub fn modulo(&self, modulus: &Mpi) -> Result<Mpi> {
        if modulus.sign() < 0 {
            return Err(Error::NegativeValue);
        }

        let (_, mut r) = self.div_rem(modulus)?;

        while r.cmp_int(0) == Ordering::Less {
            r.add_assign_mpi(modulus)?;
        }
        while r.cmp_abs(modulus) != Ordering::Less {
            r.sub_assign_mpi(modulus)?;
        }

        Ok(r)
    }

    /// Reduces by a limb-sized modulus without allocating.
    ///
    /// For negative `self` the result is still the Euclidean residue in
    /// `[0, b)`. `b == 2` degenerates to a parity test.
    ///
    /// # Errors
    /// `DivisionByZero` if `b` is zero.
    pub fn modulo_int(&self, b: u64) -> Result<u64> {
        if b == 0 {
            return Err(Error::DivisionByZero);
        }
        if b == 1 {
            return Ok(0);
        }

        let mut r: Limb = 0;

        if b == 2 {
            r = self.limbs.first().copied().unwrap_or(0) & 1;
        } else {
            for &l in self.limbs.iter().rev() {
                let acc = ((r as DoubleLimb) << LIMB_BITS) | (l as DoubleLimb);
                r = (acc % (b as DoubleLimb)) as Limb;
            }
        }

        if self.sign < 0 && r != 0 {
            r = b - r;
        }

        Ok(r)
    }
}
