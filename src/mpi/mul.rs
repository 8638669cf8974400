//! Schoolbook multiplication
//!
//! The baseline O(n·m) algorithm: one multiply-accumulate pass of the
//! whole of A per limb of B, walking B's limbs from the top so each pass
//! lands on the correctly shifted window of the result. Effective lengths
//! keep the work proportional to the significant limbs, not the allocated
//! buffers.

use crate::error::Result;
use crate::mpi::Mpi;
use crate::mpi::limb::muladdc;

impl Mpi {
    /// Returns `self · other`. The sign is the product of the signs.
    pub fn mul(&self, other: &Mpi) -> Result<Mpi> {
        let i = self.used();
        let j = other.used();

        let mut x = Mpi::new();
        x.grow(i + j)?;

        for w in (0..j).rev() {
            muladdc(&mut x.limbs[w..], &self.limbs[..i], other.limbs[w]);
        }

        x.sign = self.sign * other.sign;
        x.fix_zero_sign();

        Ok(x)
    }

    /// Returns `self · b` for an unsigned scalar. The result keeps
    /// `self`'s sign.
    pub fn mul_int(&self, b: u64) -> Result<Mpi> {
        let scalar = Mpi {
            sign: 1,
            limbs: vec![b],
        };

        self.mul(&scalar)
    }
}
