//! Big-endian binary import and export

use crate::error::{Error, Result};
use crate::mpi::Mpi;
use crate::mpi::core::bytes_to_limbs;
use crate::mpi::limb::{LIMB_BYTES, Limb};

impl Mpi {
    /// Imports a big-endian octet string as a non-negative value.
    ///
    /// Leading zero bytes are stripped; the empty string is zero.
    pub fn from_binary(buf: &[u8]) -> Result<Mpi> {
        let start = buf.iter().position(|&b| b != 0).unwrap_or(buf.len());
        let sig = &buf[start..];

        let mut x = Mpi::new();
        x.grow(bytes_to_limbs(sig.len()))?;

        for (i, &byte) in sig.iter().rev().enumerate() {
            x.limbs[i / LIMB_BYTES] |= (byte as Limb) << ((i % LIMB_BYTES) * 8);
        }

        Ok(x)
    }

    /// Exports the magnitude as a big-endian octet string filling all of
    /// `buf`, zero-padded on the left.
    ///
    /// # Errors
    /// `BufferTooSmall` if the magnitude does not fit.
    pub fn write_binary(&self, buf: &mut [u8]) -> Result<()> {
        let need = self.byte_len();

        if buf.len() < need {
            return Err(Error::BufferTooSmall);
        }

        buf.fill(0);

        let top = buf.len();
        for i in 0..need {
            buf[top - 1 - i] =
                (self.limbs[i / LIMB_BYTES] >> ((i % LIMB_BYTES) * 8)) as u8;
        }

        Ok(())
    }

    /// Exports the magnitude as a minimal-width big-endian octet string.
    ///
    /// Zero exports as the empty vector.
    pub fn to_binary(&self) -> Vec<u8> {
        let need = self.byte_len();
        let mut out = vec![0u8; need];

        for i in 0..need {
            out[need - 1 - i] =
                (self.limbs[i / LIMB_BYTES] >> ((i % LIMB_BYTES) * 8)) as u8;
        }

        out
    }
}
