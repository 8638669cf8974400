//! Addition and subtraction
//!
//! The unsigned (`*_abs`) forms work on magnitudes only and are the
//! workhorses; the signed forms dispatch on the operand signs and reduce
//! to an unsigned add or subtract with the right orientation.
//!
//! Public methods return fresh values. The `*_assign` forms mutate in
//! place and are what the division and exponentiation inner loops use to
//! avoid churning allocations.

use crate::error::{Error, Result};
use crate::mpi::Mpi;
use crate::mpi::limb::{Limb, sub_borrow};

use std::cmp::Ordering;

impl Mpi {
    /// Returns `|self| + |other|`. The result is always positive.
    pub fn add_abs(&self, other: &Mpi) -> Result<Mpi> {
        let mut x = self.clone();
        x.sign = 1;
        x.add_abs_assign(other)?;

        Ok(x)
    }

    /// Returns `|self| − |other|`.
    ///
    /// # Errors
    /// `NegativeValue` if `|self| < |other|`.
    pub fn sub_abs(&self, other: &Mpi) -> Result<Mpi> {
        let mut x = self.clone();
        x.sign = 1;
        x.sub_abs_assign(other)?;

        Ok(x)
    }

    /// Returns `self + other` with signs.
    pub fn add(&self, other: &Mpi) -> Result<Mpi> {
        let mut x = self.clone();
        x.add_assign_mpi(other)?;

        Ok(x)
    }

    /// Returns `self − other` with signs.
    pub fn sub(&self, other: &Mpi) -> Result<Mpi> {
        let mut x = self.clone();
        x.sub_assign_mpi(other)?;

        Ok(x)
    }

    /// Returns `self + z`.
    pub fn add_int(&self, z: i64) -> Result<Mpi> {
        self.add(&Mpi::from_int(z))
    }

    /// Returns `self − z`.
    pub fn sub_int(&self, z: i64) -> Result<Mpi> {
        self.sub(&Mpi::from_int(z))
    }

    /// Magnitude add: `|self| += |other|`, sign untouched.
    pub(crate) fn add_abs_assign(&mut self, other: &Mpi) -> Result<()> {
        let j = other.used();
        self.grow(j)?;

        let mut carry: Limb = 0;
        let mut i = 0;

        while i < j {
            let (t, c1) = self.limbs[i].overflowing_add(carry);
            let (t, c2) = t.overflowing_add(other.limbs[i]);

            self.limbs[i] = t;
            carry = (c1 as Limb) + (c2 as Limb);
            i += 1;
        }

        while carry != 0 {
            if i >= self.limbs.len() {
                self.grow(i + 1)?;
            }

            let (t, c) = self.limbs[i].overflowing_add(carry);
            self.limbs[i] = t;
            carry = c as Limb;
            i += 1;
        }

        Ok(())
    }

    /// Magnitude subtract: `|self| -= |other|`, sign untouched.
    ///
    /// # Errors
    /// `NegativeValue` if `|self| < |other|`.
    pub(crate) fn sub_abs_assign(&mut self, other: &Mpi) -> Result<()> {
        if self.cmp_abs(other) == Ordering::Less {
            return Err(Error::NegativeValue);
        }

        let j = other.used();
        let borrow = sub_borrow(&mut self.limbs, &other.limbs[..j]);
        debug_assert_eq!(borrow, 0);

        self.fix_zero_sign();

        Ok(())
    }

    /// Signed add in place.
    pub(crate) fn add_assign_mpi(&mut self, other: &Mpi) -> Result<()> {
        self.signed_combine(other, other.sign)
    }

    /// Signed subtract in place.
    pub(crate) fn sub_assign_mpi(&mut self, other: &Mpi) -> Result<()> {
        self.signed_combine(other, -other.sign)
    }

    /// Shared signed add/sub core; `other_sign` is the sign `other`
    /// contributes after the operation's own sign flip.
    fn signed_combine(&mut self, other: &Mpi, other_sign: i8) -> Result<()> {
        if self.sign == other_sign {
            // same effective sign: magnitudes add, sign survives
            self.add_abs_assign(other)?;
        } else if self.cmp_abs(other) != Ordering::Less {
            // larger magnitude keeps its sign
            self.sub_abs_assign(other)?;
        } else {
            let mut t = other.clone();
            t.sub_abs_assign(self)?;
            t.sign = other_sign;
            self.swap(&mut t);
        }

        self.fix_zero_sign();

        Ok(())
    }
}
