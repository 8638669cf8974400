//! Montgomery multiplication
//!
//! For an odd modulus N of `n` limbs, values are carried in Montgomery
//! form `x̄ = x·R mod N` with `R = 2^(64n)`. Multiplication of two
//! Montgomery-form values interleaves the product with reductions by N,
//! one limb at a time, so the working register never exceeds `2(n+1)`
//! limbs and the division by R degenerates into a sliding base index.
//!
//! The final comparison against N always executes a subtraction of the
//! same shape (against the result when the reduction is needed, into the
//! scratch buffer when it is not), so the branch is balanced for timing.

use crate::error::Result;
use crate::mpi::Mpi;
use crate::mpi::limb::{Limb, LIMB_BITS, cmp_limbs, muladdc, sub_borrow};

/// Computes `−N⁻¹ mod 2^64` for odd `n0 = N[0]`.
///
/// The 2-adic inverse is obtained by Newton iteration: starting from a
/// seed correct to 3 bits, each step `x ← x·(2 − n0·x)` doubles the number
/// of correct low bits.
pub(crate) fn mont_init(n0: Limb) -> Limb {
    debug_assert!(n0 & 1 == 1);

    let mut x = n0;
    x = x.wrapping_add(((n0.wrapping_add(2)) & 4) << 1);

    let mut bits = 8;
    while bits < LIMB_BITS {
        x = x.wrapping_mul(2u64.wrapping_sub(n0.wrapping_mul(x)));
        bits *= 2;
    }
    x = x.wrapping_mul(2u64.wrapping_sub(n0.wrapping_mul(x)));

    debug_assert_eq!(n0.wrapping_mul(x), 1);

    x.wrapping_neg()
}

/// Montgomery multiplication: `a ← a·b·R⁻¹ mod N`.
///
/// `n_limbs` is the modulus magnitude over its effective length, `mm` the
/// constant from [`mont_init`], and `t` a scratch register of at least
/// `2(n+1)` limbs. `a` must be reduced below N and hold `n+1` limbs on
/// entry; the same holds on exit.
pub(crate) fn mont_mul(
    a: &mut Mpi,
    b: &Mpi,
    n_limbs: &[Limb],
    mm: Limb,
    t: &mut [Limb],
) -> Result<()> {
    mont_core(t, &a.limbs, &b.limbs, n_limbs, mm);
    mont_finish(a, n_limbs, t)
}

/// Montgomery squaring: `a ← a²·R⁻¹ mod N`.
pub(crate) fn mont_sq(a: &mut Mpi, n_limbs: &[Limb], mm: Limb, t: &mut [Limb]) -> Result<()> {
    mont_core(t, &a.limbs, &a.limbs, n_limbs, mm);
    mont_finish(a, n_limbs, t)
}

/// Montgomery reduction: `a ← a·R⁻¹ mod N`, i.e. multiplication by the
/// one-limb value 1.
pub(crate) fn mont_red(a: &mut Mpi, n_limbs: &[Limb], mm: Limb, t: &mut [Limb]) -> Result<()> {
    let one: [Limb; 1] = [1];

    mont_core(t, &a.limbs, &one, n_limbs, mm);
    mont_finish(a, n_limbs, t)
}

/// The interleaved multiply-reduce loop.
///
/// After iteration `i` the partial result lives at base index `i + 1`;
/// when the loop ends the `n+1` significant limbs sit at `t[n..=2n]`.
fn mont_core(t: &mut [Limb], a: &[Limb], b: &[Limb], n_limbs: &[Limb], mm: Limb) {
    let n = n_limbs.len();
    let m = b.len().min(n);

    debug_assert!(t.len() >= 2 * (n + 1));
    debug_assert!(a.len() >= n);

    t.fill(0);

    for i in 0..n {
        // u1 cancels the low limb: t[i] + u0·b[0] + u1·N[0] ≡ 0 (mod 2^64)
        let u0 = a[i];
        let u1 = t[i]
            .wrapping_add(u0.wrapping_mul(*b.first().unwrap_or(&0)))
            .wrapping_mul(mm);

        muladdc(&mut t[i..], &b[..m], u0);
        muladdc(&mut t[i..], n_limbs, u1);
    }
}

/// Copies the reduced value back into `a` and performs the balanced final
/// subtraction.
fn mont_finish(a: &mut Mpi, n_limbs: &[Limb], t: &mut [Limb]) -> Result<()> {
    let n = n_limbs.len();

    a.grow(n + 1)?;
    a.limbs[..n + 1].copy_from_slice(&t[n..2 * n + 1]);
    a.limbs[n + 1..].fill(0);
    a.sign = 1;

    let ge_n = a.limbs[n] != 0
        || cmp_limbs(&a.limbs[..n], n_limbs) != std::cmp::Ordering::Less;

    if ge_n {
        let borrow = sub_borrow(&mut a.limbs[..n + 1], n_limbs);
        debug_assert_eq!(borrow, 0);
    } else {
        // dummy subtraction of the same shape, discarded with the scratch
        let _ = sub_borrow(&mut t[..n + 1], n_limbs);
    }

    Ok(())
}

/// Montgomery base squared: `R² mod N`, the constant that moves a value
/// into Montgomery form via one [`mont_mul`].
pub(crate) fn rr_mod_n(n: &Mpi) -> Result<Mpi> {
    let mut rr = Mpi::from_int(1);
    rr.shift_left(n.used() * 2 * LIMB_BITS)?;

    rr.modulo(n)
}
