//! Greatest common divisor and modular inverse
//!
//! Both use binary (Stein) algorithms: only shifts, parity tests, and
//! subtractions, no division. The inverse is the extended form with four
//! bookkeeping values whose parity corrections keep every halving exact.

use crate::error::{Error, Result};
use crate::mpi::Mpi;

use std::cmp::Ordering;

impl Mpi {
    /// Returns `gcd(|self|, |other|)`.
    pub fn gcd(&self, other: &Mpi) -> Result<Mpi> {
        let mut ta = self.clone();
        let mut tb = other.clone();
        ta.sign = 1;
        tb.sign = 1;

        // factor out the common power of two up front
        let lz = ta.lsb().min(tb.lsb());
        ta.shift_right(lz);
        tb.shift_right(lz);

        while !ta.is_zero() {
            ta.shift_right(ta.lsb());
            tb.shift_right(tb.lsb());

            if ta.cmp_abs(&tb) != Ordering::Less {
                ta.sub_abs_assign(&tb)?;
                ta.shift_right(1);
            } else {
                tb.sub_abs_assign(&ta)?;
                tb.shift_right(1);
            }
        }

        tb.shift_left(lz)?;
        tb.fix_zero_sign();

        Ok(tb)
    }

    /// Returns the multiplicative inverse of `self` modulo `modulus`:
    /// the unique `X` in `[1, modulus)` with `self·X ≡ 1 (mod modulus)`.
    ///
    /// # Errors
    /// `BadInput` for a modulus ≤ 1; `NotAcceptable` when `self` and the
    /// modulus are not coprime.
    pub fn inv_mod(&self, modulus: &Mpi) -> Result<Mpi> {
        if modulus.cmp_int(1) != Ordering::Greater {
            return Err(Error::BadInput);
        }

        if self.gcd(modulus)?.cmp_int(1) != Ordering::Equal {
            return Err(Error::NotAcceptable);
        }

        let ta = self.modulo(modulus)?;
        let mut tu = ta.clone();
        let tb = modulus.clone();
        let mut tv = modulus.clone();

        let mut u1 = Mpi::from_int(1);
        let mut u2 = Mpi::from_int(0);
        let mut v1 = Mpi::from_int(0);
        let mut v2 = Mpi::from_int(1);

        loop {
            while !tu.is_odd() && !tu.is_zero() {
                tu.shift_right(1);

                if u1.is_odd() || u2.is_odd() {
                    u1.add_assign_mpi(&tb)?;
                    u2.sub_assign_mpi(&ta)?;
                }
                u1.shift_right(1);
                u2.shift_right(1);
            }

            while !tv.is_odd() && !tv.is_zero() {
                tv.shift_right(1);

                if v1.is_odd() || v2.is_odd() {
                    v1.add_assign_mpi(&tb)?;
                    v2.sub_assign_mpi(&ta)?;
                }
                v1.shift_right(1);
                v2.shift_right(1);
            }

            if tu.cmp(&tv) != Ordering::Less {
                tu.sub_assign_mpi(&tv)?;
                u1.sub_assign_mpi(&v1)?;
                u2.sub_assign_mpi(&v2)?;
            } else {
                tv.sub_assign_mpi(&tu)?;
                v1.sub_assign_mpi(&u1)?;
                v2.sub_assign_mpi(&u2)?;
            }

            if tu.is_zero() {
                break;
            }
        }

        while v1.cmp_int(0) == Ordering::Less {
            v1.add_assign_mpi(modulus)?;
        }
        while v1.cmp_abs(modulus) != Ordering::Less {
            v1.sub_assign_mpi(modulus)?;
        }

        Ok(v1)
    }
}
