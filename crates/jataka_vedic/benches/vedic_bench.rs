use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jataka_vedic::dasha::vimshottari;
use jataka_vedic::{
    ElementKind, Varga, element_at, lahiri_ayanamsha_deg, nakshatra_from_longitude,
    rashi_from_longitude, varga_longitude,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;
    let t = 0.24;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("lahiri_ayanamsha", |b| {
        b.iter(|| lahiri_ayanamsha_deg(black_box(t)))
    });
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.finish();
}

fn varga_bench(c: &mut Criterion) {
    let lon = 211.75;

    let mut group = c.benchmark_group("varga");
    group.bench_function("navamsha", |b| {
        b.iter(|| varga_longitude(Varga::D9, black_box(lon)))
    });
    group.bench_function("shashtiamsha", |b| {
        b.iter(|| varga_longitude(Varga::D60, black_box(lon)))
    });
    group.finish();
}

fn panchang_bench(c: &mut Criterion) {
    let jd = 2_451_544.5;

    let mut group = c.benchmark_group("panchang");
    group.sample_size(20);
    group.bench_function("tithi_at", |b| {
        b.iter(|| element_at(ElementKind::Tithi, black_box(jd)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let moon = 95.25;
    let jd = 2_451_544.5;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari", |b| {
        b.iter(|| vimshottari(black_box(moon), black_box(jd)))
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, varga_bench, panchang_bench, dasha_bench);
criterion_main!(benches);
