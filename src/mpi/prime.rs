//! Probabilistic primality testing and prime generation
//!
//! The test is the classic two-stage construction: a cheap trial division
//! by every odd prime below 1000, then Miller-Rabin with a round count
//! chosen from the candidate's bit length (the HAC table 4.4 counts,
//! giving a 2⁻⁸⁰ error bound). Witnesses come from the caller's RNG.
//!
//! Prime generation walks candidates from a random starting point with a
//! stride that preserves the invariants already established (oddness, and
//! for safe primes the residues mod 3 and 4), so the expensive test never
//! runs on a candidate that a congruence already rules out.

use crate::error::{Error, Result};
use crate::mpi::Mpi;
use crate::mpi::core::{MAX_LIMBS, bits_to_limbs};
use crate::mpi::exp::ExpModCache;
use crate::mpi::limb::{LIMB_BITS, LIMB_BYTES};
use crate::rng::SecureRng;

use std::cmp::Ordering;
use zeroize::Zeroize;

/// Odd primes below 1000, the trial-division sieve.
const SMALL_PRIMES: [u64; 167] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
    73, 79, 83, 89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149,
    151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223, 227,
    229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389,
    397, 401, 409, 419, 421, 431, 433, 439, 443, 449, 457, 461, 463, 467,
    479, 487, 491, 499, 503, 509, 521, 523, 541, 547, 557, 563, 569, 571,
    577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653,
    659, 661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751,
    757, 761, 769, 773, 787, 797, 809, 811, 821, 823, 827, 829, 839, 853,
    857, 859, 863, 877, 881, 883, 887, 907, 911, 919, 929, 937, 941, 947,
    953, 967, 971, 977, 983, 991, 997,
];

/// Outcome of the trial-division stage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Sieve {
    /// The candidate *is* one of the table primes.
    Prime,
    /// A table prime divides the candidate.
    Composite,
    /// The sieve found nothing; Miller-Rabin decides.
    Unknown,
}

/// Miller-Rabin round count for a candidate of `bits` bits, per the
/// error-probability table in HAC 4.4.
fn round_count(bits: usize) -> usize {
    if bits >= 1300 {
        2
    } else if bits >= 850 {
        3
    } else if bits >= 650 {
        4
    } else if bits >= 350 {
        8
    } else if bits >= 250 {
        12
    } else if bits >= 150 {
        18
    } else {
        27
    }
}

impl Mpi {
    /// Fills `self` with `byte_len` random bytes interpreted big-endian.
    ///
    /// The value is positive; its bit length is at most `8·byte_len`.
    pub fn fill_random<R: SecureRng + ?Sized>(
        &mut self,
        byte_len: usize,
        rng: &mut R,
    ) -> Result<()> {
        let limbs = byte_len.div_ceil(LIMB_BYTES);
        if limbs > MAX_LIMBS {
            return Err(Error::AllocFailed);
        }

        let mut buf = vec![0u8; byte_len];
        rng.fill_bytes(&mut buf);

        let drawn = Mpi::from_binary(&buf)?;
        buf.zeroize();

        self.assign(&drawn)?;
        // keep the full drawn width even when the top bytes came up zero
        self.grow(limbs)?;

        Ok(())
    }

    /// Trial division by the small-prime table.
    fn check_small_factors(&self) -> Result<Sieve> {
        if !self.is_odd() {
            return Ok(Sieve::Composite);
        }

        for &p in SMALL_PRIMES.iter() {
            if self.cmp_int(p as i64) != Ordering::Greater {
                return Ok(Sieve::Prime);
            }

            if self.modulo_int(p)? == 0 {
                return Ok(Sieve::Composite);
            }
        }

        Ok(Sieve::Unknown)
    }

    /// Miller-Rabin on an odd candidate that survived the sieve.
    fn miller_rabin<R: SecureRng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        // X − 1 = R · 2^s with R odd
        let w = self.sub_int(1)?;
        let s = w.lsb();
        let mut r = w.clone();
        r.shift_right(s);

        let rounds = round_count(self.bitlen());
        let mut cache = ExpModCache::new();

        for _ in 0..rounds {
            // witness in [2, X − 2]
            let mut a = Mpi::new();
            a.fill_random(self.limbs.len() * LIMB_BYTES, rng)?;

            if a.cmp(&w) != Ordering::Less {
                let excess = a.bitlen() - w.bitlen();
                a.shift_right(excess + 1);
            }
            a.limbs[0] |= 3;

            let mut y = a.exp_mod(&r, self, Some(&mut cache))?;

            if y.cmp(&w) == Ordering::Equal || y.cmp_int(1) == Ordering::Equal {
                continue;
            }

            let mut j = 1;
            while j < s && y.cmp(&w) != Ordering::Equal {
                y = y.mul(&y)?.modulo(self)?;

                // reaching 1 without passing through X − 1 proves
                // compositeness
                if y.cmp_int(1) == Ordering::Equal {
                    break;
                }
                j += 1;
            }

            if y.cmp(&w) != Ordering::Equal || y.cmp_int(1) == Ordering::Equal {
                return Err(Error::NotAcceptable);
            }
        }

        Ok(())
    }

    /// Tests whether `|self|` is (probably) prime.
    ///
    /// Returns `Ok(())` for a probable prime. The error probability after
    /// the built-in round count is below 2⁻⁸⁰.
    ///
    /// # Errors
    /// `NotAcceptable` for a composite (or 0 or 1); any RNG-independent
    /// failure of the underlying arithmetic is passed through.
    pub fn is_prime<R: SecureRng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        let mut x = self.clone();
        x.sign = 1;

        if x.cmp_int(0) == Ordering::Equal || x.cmp_int(1) == Ordering::Equal {
            return Err(Error::NotAcceptable);
        }
        if x.cmp_int(2) == Ordering::Equal {
            return Ok(());
        }

        match x.check_small_factors()? {
            Sieve::Prime => Ok(()),
            Sieve::Composite => Err(Error::NotAcceptable),
            Sieve::Unknown => x.miller_rabin(rng),
        }
    }

    /// Generates a random probable prime of exactly `nbits` bits.
    ///
    /// With `safe` set, the result `X` additionally has `(X − 1)/2` prime
    /// (a safe prime), which costs considerably more candidates.
    ///
    /// # Errors
    /// `BadInput` unless `3 ≤ nbits ≤ 64·MAX_LIMBS`.
    pub fn gen_prime<R: SecureRng + ?Sized>(
        nbits: usize,
        safe: bool,
        rng: &mut R,
    ) -> Result<Mpi> {
        if nbits < 3 || nbits > MAX_LIMBS * LIMB_BITS {
            return Err(Error::BadInput);
        }

        let mut x = Mpi::new();
        x.fill_random(bits_to_limbs(nbits) * LIMB_BYTES, rng)?;

        // pin the bit length to exactly nbits, then force odd and 3 mod 4
        let k = x.bitlen();
        if k < nbits {
            x.shift_left(nbits - k)?;
            x.set_bit(nbits - 1, 1)?;
        } else if k > nbits {
            x.shift_right(k - nbits);
        }
        x.limbs[0] |= 3;

        if !safe {
            loop {
                match x.is_prime(rng) {
                    Ok(()) => break,
                    Err(Error::NotAcceptable) => x.add_assign_mpi(&Mpi::from_int(2))?,
                    Err(e) => return Err(e),
                }
            }

            return Ok(x);
        }

        // safe prime: keep X ≡ 3 (mod 4) and X ≡ 2 (mod 3) so that both
        // X and (X−1)/2 stay odd and coprime to 3 along the walk
        match x.modulo_int(3)? {
            0 => x.add_assign_mpi(&Mpi::from_int(8))?,
            1 => x.add_assign_mpi(&Mpi::from_int(4))?,
            _ => (),
        }

        let mut y = x.clone();
        y.shift_right(1);

        let step_x = Mpi::from_int(12);
        let step_y = Mpi::from_int(6);

        loop {
            let pair_ok = (|| -> Result<()> {
                let x_sieve = x.check_small_factors()?;
                if x_sieve == Sieve::Composite {
                    return Err(Error::NotAcceptable);
                }

                match y.check_small_factors()? {
                    Sieve::Prime => (),
                    Sieve::Composite => return Err(Error::NotAcceptable),
                    Sieve::Unknown => y.miller_rabin(rng)?,
                }

                if x_sieve == Sieve::Unknown {
                    x.miller_rabin(rng)?;
                }

                Ok(())
            })();

            match pair_ok {
                Ok(()) => break,
                Err(Error::NotAcceptable) => {
                    x.add_assign_mpi(&step_x)?;
                    y.add_assign_mpi(&step_y)?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(x)
    }
}
