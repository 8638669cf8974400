use bignum::{Error, Mpi, SecureRng};

use std::cmp::Ordering;

/// Deterministic generator: primality outcomes must not depend on the
/// run, only the witnesses drawn along the way do.
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

const SMALL_PRIMES: [i64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67,
    71, 73, 79, 83, 89, 97,
];

#[test]
fn trivial_values_are_not_prime() {
    let mut rng = TestRng(1);

    assert_eq!(Mpi::new().is_prime(&mut rng), Err(Error::NotAcceptable));
    assert_eq!(
        Mpi::from_int(1).is_prime(&mut rng),
        Err(Error::NotAcceptable)
    );
    assert!(Mpi::from_int(2).is_prime(&mut rng).is_ok());
}

#[test]
fn small_primes_pass() {
    let mut rng = TestRng(2);

    for &p in &SMALL_PRIMES {
        assert!(Mpi::from_int(p).is_prime(&mut rng).is_ok(), "{p}");
    }
}

#[test]
fn products_of_small_primes_fail() {
    let mut rng = TestRng(3);

    for &p in &SMALL_PRIMES {
        for &q in &SMALL_PRIMES {
            let composite = Mpi::from_int(p * q);
            assert_eq!(
                composite.is_prime(&mut rng),
                Err(Error::NotAcceptable),
                "{p}*{q}"
            );
        }
    }
}

#[test]
fn sign_is_ignored() {
    let mut rng = TestRng(4);

    assert!(Mpi::from_int(-97).is_prime(&mut rng).is_ok());
}

#[test]
fn known_large_prime_and_neighbor() {
    let mut rng = TestRng(5);

    // 2^127 - 1 is a Mersenne prime; its even neighbor is obviously not
    let mut m127 = Mpi::from_int(1);
    m127.shift_left(127).unwrap();
    let m127 = m127.sub_int(1).unwrap();

    assert!(m127.is_prime(&mut rng).is_ok());
    assert_eq!(
        m127.sub_int(2).unwrap().is_prime(&mut rng),
        Err(Error::NotAcceptable)
    );
}

#[test]
fn carmichael_numbers_are_rejected() {
    let mut rng = TestRng(6);

    // Fermat liars for every coprime base; these must still be rejected
    for &c in &[561i64, 1105, 1729, 41041, 825265] {
        assert_eq!(
            Mpi::from_int(c).is_prime(&mut rng),
            Err(Error::NotAcceptable),
            "{c}"
        );
    }
}

#[test]
fn rsa_sized_semiprime_is_rejected() {
    let mut rng = TestRng(7);

    let p = Mpi::from_str_radix(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        16,
    )
    .unwrap();
    let product = p.mul(&p).unwrap();

    assert_eq!(product.is_prime(&mut rng), Err(Error::NotAcceptable));
}

#[test]
fn gen_prime_produces_primes_of_requested_size() {
    let mut rng = TestRng(0xA5A5_A5A5_0000_0001);

    for bits in [128usize, 192, 256] {
        let x = Mpi::gen_prime(bits, false, &mut rng).unwrap();

        assert_eq!(x.bitlen(), bits);
        assert!(x.is_odd());
        assert!(x.is_prime(&mut rng).is_ok());
    }
}

#[test]
fn gen_prime_rejects_bad_sizes() {
    let mut rng = TestRng(8);

    assert_eq!(Mpi::gen_prime(2, false, &mut rng), Err(Error::BadInput));
    assert_eq!(
        Mpi::gen_prime(10_000 * 64 + 1, false, &mut rng),
        Err(Error::BadInput)
    );
}

#[test]
fn gen_safe_prime_small() {
    let mut rng = TestRng(0x5AFE_5AFE_5AFE_5AFE);

    let x = Mpi::gen_prime(96, true, &mut rng).unwrap();

    assert_eq!(x.bitlen(), 96);
    assert!(x.is_prime(&mut rng).is_ok());

    // (x - 1) / 2 must also be prime
    let mut y = x.sub_int(1).unwrap();
    y.shift_right(1);
    assert!(y.is_prime(&mut rng).is_ok());

    // the walk keeps x = 3 (mod 4), so both halves stay odd
    assert_eq!(x.modulo_int(4).unwrap(), 3);
}

#[test]
#[ignore = "long-haul: 512-bit safe prime"]
fn gen_safe_prime_512() {
    let mut rng = TestRng(0x0123_4567_89AB_CDEF);

    let x = Mpi::gen_prime(512, true, &mut rng).unwrap();

    assert_eq!(x.bitlen(), 512);
    assert!(x.is_prime(&mut rng).is_ok());

    let mut y = x.sub_int(1).unwrap();
    y.shift_right(1);
    assert!(y.is_prime(&mut rng).is_ok());
}

#[test]
fn fill_random_width_and_range() {
    let mut rng = TestRng(9);

    let mut x = Mpi::new();
    x.fill_random(32, &mut rng).unwrap();

    assert!(x.bitlen() <= 256);
    assert_eq!(x.sign(), 1);

    // drawing zero bytes yields zero
    let mut z = Mpi::new();
    z.fill_random(0, &mut rng).unwrap();
    assert!(z.is_zero());
}

#[test]
fn miller_rabin_agrees_with_sieve_range() {
    let mut rng = TestRng(10);

    // every odd number in a window above the sieve limit, checked against
    // a trial-division oracle
    for n in (100_003i64..100_103).step_by(2) {
        let mut composite = false;
        let mut d = 3;
        while d * d <= n {
            if n % d == 0 {
                composite = true;
                break;
            }
            d += 2;
        }

        let verdict = Mpi::from_int(n).is_prime(&mut rng);
        if composite {
            assert_eq!(verdict, Err(Error::NotAcceptable), "{n}");
        } else {
            assert!(verdict.is_ok(), "{n}");
        }
    }
}
