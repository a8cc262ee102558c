use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use morille::prelude::*;

fn build_params(n: u64) -> Params {
    let mut params = Params::new().set_string("body", "bench order");
    for i in 0..n {
        params = params.set_int64(&format!("field_{}", i), i as i64);
    }
    params
}

fn bench_marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Marshal");
    for i in [4u64, 16u64, 64u64].iter() {
        let params = build_params(*i);
        group.bench_with_input(BenchmarkId::new("to_xml", i), i, |b, _i| {
            b.iter(|| params.to_xml().unwrap())
        });
    }
    group.finish();
}

fn bench_unmarshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Unmarshal");
    for i in [4u64, 16u64, 64u64].iter() {
        let xml = build_params(*i).to_xml().unwrap();
        group.bench_with_input(BenchmarkId::new("from_xml", i), i, |b, _i| {
            b.iter(|| Params::from_xml(&xml).unwrap())
        });
    }
    group.finish();
}

criterion_group!(name = benches;config = Criterion::default(); targets= bench_marshal, bench_unmarshal);
criterion_main!(benches);
