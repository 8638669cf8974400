use bignum::{ExpModCache, Mpi};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_exp_mod(c: &mut Criterion) {
    let a = Mpi::from_str_radix(
        "EFE021C2645FD1DC586E69184AF4A31ED5F53E93B5F123FA41680867BA110131\
         944FE7952E2517337780CB0DB80E61AAE7C8DDC6C5C6AADEB34EB38A2F40D5E6",
        16,
    )
    .unwrap();
    let e = Mpi::from_str_radix(
        "B2E7EFD37075B9F03FF989C7C5051C2034D2A323810251127E7BF8625A4F49A5\
         F3E27F4DA8BD59C47D6DAABA4C8127BD5B5C25763222FEFCCFC38B832366C29E",
        16,
    )
    .unwrap();
    let n = Mpi::from_str_radix(
        "0066A198186C18C10B2F5ED9B522752A9830B69916E535C8F047518A889A43A5\
         94B6BED27A168D31D4A52F88925AA8F5",
        16,
    )
    .unwrap();

    c.bench_function("exp_mod 512-bit exponent", |bench| {
        bench.iter(|| {
            black_box(&a)
                .exp_mod(black_box(&e), black_box(&n), None)
                .unwrap()
        })
    });

    c.bench_function("exp_mod cached R^2", |bench| {
        let mut cache = ExpModCache::new();
        let _ = a.exp_mod(&e, &n, Some(&mut cache)).unwrap();

        bench.iter(|| {
            black_box(&a)
                .exp_mod(black_box(&e), black_box(&n), Some(&mut cache))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_exp_mod);
criterion_main!(benches);
