use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_chart::{LocalDateTime, compute_natal_chart};

fn natal_chart_bench(c: &mut Criterion) {
    let birth = LocalDateTime::new(1984, 7, 15, 6, 45, 0.0);

    c.bench_function("natal_chart_new_delhi", |b| {
        b.iter(|| {
            compute_natal_chart(
                black_box(&birth),
                black_box(28.6139),
                black_box(77.209),
                black_box(5.5),
            )
        })
    });
}

criterion_group!(benches, natal_chart_bench);
criterion_main!(benches);
