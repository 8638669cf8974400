use bignum::{Error, Mpi, SecureRng};

use std::cmp::Ordering;

struct TestRng(u64);

impl SecureRng for TestRng {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        for b in out.iter_mut() {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            *b = self.0 as u8;
        }
    }
}

fn random_mpi(rng: &mut TestRng, bytes: usize) -> Mpi {
    let mut x = Mpi::new();
    x.fill_random(bytes, rng).unwrap();
    x
}

#[test]
fn div_by_zero_is_rejected() {
    let a = Mpi::from_int(10);

    assert_eq!(a.div_rem(&Mpi::new()), Err(Error::DivisionByZero));
    assert_eq!(a.modulo_int(0), Err(Error::DivisionByZero));
}

#[test]
fn small_dividend_short_circuits() {
    let a = Mpi::from_int(5);
    let b = Mpi::from_int(7);

    let (q, r) = a.div_rem(&b).unwrap();
    assert!(q.is_zero());
    assert_eq!(r.cmp_int(5), Ordering::Equal);
}

#[test]
fn known_quotient_and_remainder() {
    let a = Mpi::from_str_radix(
        "EFE021C2645FD1DC586E69184AF4A31E\
         D5F53E93B5F123FA41680867BA110131\
         944FE7952E2517337780CB0DB80E61AA\
         E7C8DDC6C5C6AADEB34EB38A2F40D5E6",
        16,
    )
    .unwrap();
    let n = Mpi::from_str_radix(
        "0066A198186C18C10B2F5ED9B522752A\
         9830B69916E535C8F047518A889A43A5\
         94B6BED27A168D31D4A52F88925AA8F5",
        16,
    )
    .unwrap();

    let (q, r) = a.div_rem(&n).unwrap();

    assert_eq!(
        q,
        Mpi::from_str_radix("256567336059E52CAE22925474705F39A94", 16).unwrap()
    );
    assert_eq!(
        r,
        Mpi::from_str_radix(
            "6613F26162223DF488E9CD48CC132C7A\
             0AC93C701B001B092E4E5B9F73BCD27B\
             9EE50D0657C77F374E903CDFA4C642",
            16,
        )
        .unwrap()
    );
}

#[test]
fn division_identity_random() {
    let mut rng = TestRng(0xC0FF_EE00_1234_5678);

    for _ in 0..40 {
        let a = random_mpi(&mut rng, 64);
        let b = random_mpi(&mut rng, 20);
        if b.is_zero() {
            continue;
        }

        let (q, r) = a.div_rem(&b).unwrap();

        // a = q*b + r with 0 <= r < |b|
        let rebuilt = q.mul(&b).unwrap().add(&r).unwrap();
        assert_eq!(rebuilt, a);
        assert_eq!(r.cmp_abs(&b), Ordering::Less);
        assert_ne!(r.sign(), -1);
    }
}

#[test]
fn quotient_and_remainder_signs() {
    for &(a, b) in &[(7i64, 3i64), (-7, 3), (7, -3), (-7, -3)] {
        let (q, r) = Mpi::from_int(a).div_rem(&Mpi::from_int(b)).unwrap();

        assert_eq!(q.cmp_int(a / b), Ordering::Equal, "{a}/{b}");
        assert_eq!(r.cmp_int(a % b), Ordering::Equal, "{a}%{b}");
    }

    // exact division normalizes the remainder to +0
    let (q, r) = Mpi::from_int(-9).div_rem(&Mpi::from_int(3)).unwrap();
    assert_eq!(q.cmp_int(-3), Ordering::Equal);
    assert!(r.is_zero());
    assert_eq!(r.sign(), 1);
}

#[test]
fn divisor_with_trailing_zero_limbs() {
    // force the normalization shift to cross a limb boundary
    let mut b = Mpi::from_int(1);
    b.shift_left(200).unwrap();

    let mut a = Mpi::from_int(1);
    a.shift_left(300).unwrap();
    let a = a.add_int(12345).unwrap();

    let (q, r) = a.div_rem(&b).unwrap();

    let rebuilt = q.mul(&b).unwrap().add(&r).unwrap();
    assert_eq!(rebuilt, a);
    assert_eq!(r.cmp_abs(&b), Ordering::Less);
}

#[test]
fn modulo_is_euclidean() {
    let n = Mpi::from_int(7);

    assert_eq!(Mpi::from_int(20).modulo(&n).unwrap().cmp_int(6), Ordering::Equal);
    assert_eq!(
        Mpi::from_int(-20).modulo(&n).unwrap().cmp_int(1),
        Ordering::Equal
    );
    assert!(Mpi::from_int(14).modulo(&n).unwrap().is_zero());

    assert_eq!(
        Mpi::from_int(20).modulo(&Mpi::from_int(-7)),
        Err(Error::NegativeValue)
    );
}

#[test]
fn modulo_int_matches_modulo() {
    let mut rng = TestRng(99);

    for &m in &[3u64, 5, 97, 2, 1, 0x7FFF_FFFF_FFFF_FFFF] {
        let a = random_mpi(&mut rng, 40);

        let fast = a.modulo_int(m).unwrap();
        let slow = a.modulo(&Mpi::from_int(m as i64)).unwrap();

        assert_eq!(slow.cmp_int(fast as i64), Ordering::Equal, "mod {m}");
    }
}

#[test]
fn modulo_int_negative_operand() {
    let a = Mpi::from_int(-20);

    assert_eq!(a.modulo_int(7).unwrap(), 1);
    assert_eq!(a.modulo_int(2).unwrap(), 0);
    assert_eq!(Mpi::from_int(-21).modulo_int(2).unwrap(), 1);
}

#[test]
fn div_rem_int_agrees_with_div_rem() {
    let a = Mpi::from_str_radix("123456789ABCDEF0123456789ABCDEF", 16).unwrap();

    let (q1, r1) = a.div_rem_int(1000).unwrap();
    let (q2, r2) = a.div_rem(&Mpi::from_int(1000)).unwrap();

    assert_eq!(q1, q2);
    assert_eq!(r1, r2);
}
