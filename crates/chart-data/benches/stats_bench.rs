use chart_data::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_sets(sets: usize, points: usize) -> DataSets<LineDataPoint> {
    let data = (0..sets)
        .map(|s| {
            let pts = (0..points)
                // simple waveform with per-set offset
                .map(|i| LineDataPoint::new((i as f64 * 0.01).sin() * 10.0 + s as f64))
                .collect();
            DataSet::new(pts)
        })
        .collect();
    DataSets::new(data)
}

fn gen_stacks(stacks: usize, segments: usize) -> StackedDataSets {
    let data = (0..stacks)
        .map(|s| {
            let pts = (0..segments)
                .map(|i| MultiBarDataPoint::new((i + s) as f64, format!("g{i}")))
                .collect();
            StackedDataSet::new(pts, format!("s{s}"))
        })
        .collect();
    StackedDataSets::new(data)
}

fn bench_multi_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_set");
    for &n in &[10_000usize, 100_000usize] {
        let sets = gen_sets(8, n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("max_n{n}")), &sets, |b, s| {
            b.iter(|| black_box(s.max_value()));
        });
        group.bench_with_input(BenchmarkId::from_parameter(format!("average_n{n}")), &sets, |b, s| {
            b.iter(|| black_box(s.average()));
        });
    }
    group.finish();
}

fn bench_stacked(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacked");
    for &n in &[1_000usize, 10_000usize] {
        let stacks = gen_stacks(n, 6);
        group.bench_with_input(BenchmarkId::from_parameter(format!("max_n{n}")), &stacks, |b, s| {
            b.iter(|| black_box(s.max_value()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multi_set, bench_stacked);
criterion_main!(benches);
