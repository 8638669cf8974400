//! Sliding-window modular exponentiation
//!
//! `A^E mod N` for odd N, computed over Montgomery form. The exponent is
//! scanned from its most significant bit through a three-state machine:
//! skipping leading zeros, squaring through zero runs between windows, and
//! collecting up to `w` bits into a window whose value selects one of the
//! precomputed odd powers `A^(2^(w-1))..A^(2^w − 1)`.
//!
//! The window width follows the exponent size: wider windows amortize
//! more precomputation over longer exponents. The `R² mod N` constant is
//! the only quantity worth caching across calls with the same modulus;
//! callers that exponentiate repeatedly (Miller-Rabin does) pass an
//! [`ExpModCache`] and the constant is computed once.

use crate::error::{Error, Result};
use crate::mpi::Mpi;
use crate::mpi::limb::LIMB_BITS;
use crate::mpi::mont::{mont_init, mont_mul, mont_red, mont_sq, rr_mod_n};

use std::cmp::Ordering;

/// Widest exponentiation window supported; 2^(w−1) odd powers are tabled.
pub const MAX_WINDOW: usize = 6;

/// Caller-owned cache for the `R² mod N` constant of a fixed modulus.
///
/// The cache is opaque and tied to the modulus it was first used with;
/// reusing it with a different modulus computes wrong results. Drop it (or
/// create a fresh one) when the modulus changes.
#[derive(Default)]
pub struct ExpModCache {
    rr: Option<Mpi>,
}

impl ExpModCache {
    /// Creates an empty cache; the first `exp_mod` call through it fills it.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Window width for an exponent of `bits` significant bits.
fn window_size(bits: usize) -> usize {
    let w = if bits > 671 {
        6
    } else if bits > 239 {
        5
    } else if bits > 79 {
        4
    } else if bits > 23 {
        3
    } else {
        1
    };

    w.min(MAX_WINDOW)
}

impl Mpi {
    /// Computes `self ^ exponent mod modulus`.
    ///
    /// The modulus must be positive and odd, the exponent non-negative. A
    /// negative base is reduced as its absolute value and the result fixed
    /// up to `N − X` when the exponent is odd.
    ///
    /// # Errors
    /// `BadInput` for an even or non-positive modulus or a negative
    /// exponent.
    pub fn exp_mod(
        &self,
        exponent: &Mpi,
        modulus: &Mpi,
        cache: Option<&mut ExpModCache>,
    ) -> Result<Mpi> {
        if modulus.sign() < 0 || modulus.is_zero() || !modulus.is_odd() {
            return Err(Error::BadInput);
        }
        if exponent.sign() < 0 {
            return Err(Error::BadInput);
        }

        let n = modulus.used();
        let n_limbs = &modulus.limbs[..n];
        let mm = mont_init(n_limbs[0]);

        let wsize = window_size(exponent.bitlen());

        // R² mod N: computed once per modulus when the caller caches.
        let rr = match cache {
            Some(c) => match &c.rr {
                Some(cached) => cached.clone(),
                None => {
                    let fresh = rr_mod_n(modulus)?;
                    c.rr = Some(fresh.clone());
                    fresh
                }
            },
            None => rr_mod_n(modulus)?,
        };

        // scratch register for the Montgomery loop; lives in an Mpi so it
        // is wiped on every exit path
        let mut scratch = Mpi::new();
        scratch.grow(2 * (n + 1))?;

        // w1 = A·R mod N, the base in Montgomery form
        let negative = self.sign() < 0;
        let mut abs = self.clone();
        abs.sign = 1;

        let mut w1 = if abs.cmp_abs(modulus) != Ordering::Less {
            abs.modulo(modulus)?
        } else {
            abs
        };
        w1.grow(n + 1)?;
        mont_mul(&mut w1, &rr, n_limbs, mm, &mut scratch.limbs)?;

        // x = R mod N, the identity in Montgomery form
        let mut x = rr.clone();
        x.grow(n + 1)?;
        mont_red(&mut x, n_limbs, mm, &mut scratch.limbs)?;

        // precompute the odd powers w1^(2^(w-1)) .. w1^(2^w − 1)
        let table_len = 1usize << wsize;
        let mut table: Vec<Mpi> = Vec::new();

        if wsize > 1 {
            table = vec![Mpi::new(); table_len];

            let half = table_len / 2;
            table[half].assign(&w1)?;
            table[half].grow(n + 1)?;
            for _ in 0..wsize - 1 {
                let entry = &mut table[half];
                mont_sq(entry, n_limbs, mm, &mut scratch.limbs)?;
            }

            for idx in half + 1..table_len {
                let mut entry = table[idx - 1].clone();
                entry.grow(n + 1)?;
                mont_mul(&mut entry, &w1, n_limbs, mm, &mut scratch.limbs)?;
                table[idx] = entry;
            }
        }

        // scan the exponent MSB → LSB
        let mut state = 0u8; // 0: leading zeros, 1: between windows, 2: in window
        let mut nbits = 0usize;
        let mut wbits = 0usize;

        let e_used = exponent.used();
        for limb_idx in (0..e_used).rev() {
            let limb = exponent.limbs[limb_idx];

            for bit in (0..LIMB_BITS).rev() {
                let ei = ((limb >> bit) & 1) as usize;

                if ei == 0 && state == 0 {
                    continue;
                }

                if ei == 0 && state == 1 {
                    mont_sq(&mut x, n_limbs, mm, &mut scratch.limbs)?;
                    continue;
                }

                state = 2;
                nbits += 1;
                wbits |= ei << (wsize - nbits);

                if nbits == wsize {
                    for _ in 0..wsize {
                        mont_sq(&mut x, n_limbs, mm, &mut scratch.limbs)?;
                    }

                    if wsize > 1 {
                        mont_mul(&mut x, &table[wbits], n_limbs, mm, &mut scratch.limbs)?;
                    } else {
                        mont_mul(&mut x, &w1, n_limbs, mm, &mut scratch.limbs)?;
                    }

                    state = 1;
                    nbits = 0;
                    wbits = 0;
                }
            }
        }

        // flush a partial window
        for _ in 0..nbits {
            mont_sq(&mut x, n_limbs, mm, &mut scratch.limbs)?;

            wbits <<= 1;
            if wbits & (1 << wsize) != 0 {
                mont_mul(&mut x, &w1, n_limbs, mm, &mut scratch.limbs)?;
            }
        }

        // leave Montgomery form
        mont_red(&mut x, n_limbs, mm, &mut scratch.limbs)?;

        if negative && exponent.is_odd() && !x.is_zero() {
            let mut fixed = modulus.sub(&x)?;
            x.swap(&mut fixed);
        }

        x.fix_zero_sign();

        Ok(x)
    }
}
