use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve::{random_scalar, BigInt, Curve, CurveParams, DoubleAndAdd, Point, ScalarTable, SubgroupTable};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn textbook() -> (Curve, Point) {
    (Curve::new(CurveParams::textbook()), Point::new(5, 1))
}

fn bench_affine_double(c: &mut Criterion) {
    let (curve, g) = textbook();
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(curve.double(black_box(&g)).expect("double")))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let (curve, g) = textbook();
    let h = Point::new(6, 3);
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(curve.add(black_box(&g), black_box(&h)).expect("add")))
    });
}

fn bench_subgroup_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("subgroup_build");

    // (p, a, b, generator)
    let cases = [
        (17, 2, 2, (5, 1)),
        (97, 2, 3, (3, 6)),
        (1009, 2, 3, (10, 425)),
    ];
    for (p, a, b, (x, y)) in cases {
        let curve = Curve::new(CurveParams::new(p, a, b));
        let g = Point::new(x, y);
        group.bench_with_input(BenchmarkId::from_parameter(p), &p, |bencher, _| {
            bencher.iter(|| black_box(SubgroupTable::build(&curve, g.clone()).expect("build")))
        });
    }

    group.finish();
}

fn bench_scalar_lookup(c: &mut Criterion) {
    let (curve, g) = textbook();
    let table = SubgroupTable::build(&curve, g.clone()).expect("build");
    let ladder = DoubleAndAdd::new(curve, g, table.order().clone());
    let mut rng = StdRng::seed_from_u64(42);
    let k = random_scalar(&mut rng, table.order()).expect("scalar");

    c.bench_function("subgroup_table_lookup", |bencher| {
        bencher.iter(|| black_box(table.lookup(black_box(&k)).expect("lookup")))
    });
    c.bench_function("double_and_add_lookup", |bencher| {
        bencher.iter(|| black_box(ladder.lookup(black_box(&k)).expect("lookup")))
    });
}

fn bench_scalar_mul_bits(c: &mut Criterion) {
    let (curve, g) = textbook();
    let mut group = c.benchmark_group("affine_scalar_mul");

    for bits in [8u32, 64, 256] {
        let scalar = (BigInt::from(1u32) << bits) - 1u32;
        group.bench_with_input(BenchmarkId::from_parameter(bits), &scalar, |bencher, k| {
            bencher.iter(|| black_box(curve.mul(black_box(&g), black_box(k)).expect("mul")))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_affine_add,
    bench_subgroup_build,
    bench_scalar_lookup,
    bench_scalar_mul_bits
);
criterion_main!(benches);
