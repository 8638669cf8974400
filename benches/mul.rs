use bignum::Mpi;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_mul(c: &mut Criterion) {
    let a = Mpi::from_str_radix(
        "EFE021C2645FD1DC586E69184AF4A31ED5F53E93B5F123FA41680867BA110131\
         944FE7952E2517337780CB0DB80E61AAE7C8DDC6C5C6AADEB34EB38A2F40D5E6",
        16,
    )
    .unwrap();
    let b = Mpi::from_str_radix(
        "0066A198186C18C10B2F5ED9B522752A9830B69916E535C8F047518A889A43A5\
         94B6BED27A168D31D4A52F88925AA8F5",
        16,
    )
    .unwrap();

    c.bench_function("mul 512x384 bits", |bench| {
        bench.iter(|| black_box(&a).mul(black_box(&b)).unwrap())
    });

    c.bench_function("div_rem 512/384 bits", |bench| {
        bench.iter(|| black_box(&a).div_rem(black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_mul);
criterion_main!(benches);
