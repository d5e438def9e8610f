use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::{
    CelestialBody, GeoLocation, LunarNode, ayanamsha_deg, lagna_longitude_deg, lunar_node_deg,
    moon_longitude_deg, planet_longitude_deg, rashi_from_tropical, sun_longitude_deg,
};

fn positions_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("positions");
    group.bench_function("sun", |b| b.iter(|| sun_longitude_deg(black_box(jd))));
    group.bench_function("moon", |b| b.iter(|| moon_longitude_deg(black_box(jd))));
    group.bench_function("jupiter", |b| {
        b.iter(|| planet_longitude_deg(CelestialBody::Jupiter, black_box(jd)))
    });
    group.bench_function("rahu", |b| {
        b.iter(|| lunar_node_deg(LunarNode::Rahu, black_box(0.23)))
    });
    group.finish();
}

fn lagna_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;
    let Ok(loc) = GeoLocation::new(28.6139, 77.209) else {
        return;
    };

    c.bench_function("lagna_new_delhi", |b| {
        b.iter(|| lagna_longitude_deg(black_box(jd), &loc))
    });
}

fn zodiac_bench(c: &mut Criterion) {
    let tropical_lon = 123.456;
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("ayanamsha", |b| b.iter(|| ayanamsha_deg(black_box(jd))));
    group.bench_function("rashi_from_tropical", |b| {
        b.iter(|| rashi_from_tropical(black_box(tropical_lon), black_box(jd)))
    });
    group.finish();
}

criterion_group!(benches, positions_bench, lagna_bench, zodiac_bench);
criterion_main!(benches);
