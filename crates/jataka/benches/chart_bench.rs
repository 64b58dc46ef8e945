use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jataka::{BirthDetails, ChartOptions, NatalChart, compare_charts};

fn sample_details() -> BirthDetails {
    BirthDetails {
        name: "bench".into(),
        datetime: "2000-01-01T00:00:00".into(),
        latitude: 27.7172,
        longitude: 85.3240,
        utc_offset_hours: 5.75,
    }
}

fn chart_bench(c: &mut Criterion) {
    let details = sample_details();
    let full = ChartOptions::default();
    let rashi_only = ChartOptions {
        divisional_charts: Vec::new(),
        ..ChartOptions::default()
    };

    let mut group = c.benchmark_group("natal_chart");
    group.bench_function("compute_full", |b| {
        b.iter(|| NatalChart::compute(black_box(&details), black_box(&full)))
    });
    group.bench_function("compute_rashi_only", |b| {
        b.iter(|| NatalChart::compute(black_box(&details), black_box(&rashi_only)))
    });
    group.finish();
}

fn compare_bench(c: &mut Criterion) {
    let groom = sample_details();
    let bride = BirthDetails {
        datetime: "1995-06-15T12:30:00".into(),
        ..sample_details()
    };
    let opts = ChartOptions::default();

    let mut group = c.benchmark_group("comparison");
    group.bench_function("compare_charts", |b| {
        b.iter(|| compare_charts(black_box(&groom), black_box(&bride), black_box(&opts)))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, compare_bench);
criterion_main!(benches);
