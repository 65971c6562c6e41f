use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sudba_rs::{
    CalendarDate, Timestamp, birth_chart, compute_matrix, illumination_percent, moon_age,
    moon_sample, recommendations, reduce, sign_for,
};

fn numerology_bench(c: &mut Criterion) {
    let date = CalendarDate::new(1990, 6, 15).unwrap();

    let mut group = c.benchmark_group("numerology");
    group.bench_function("reduce_9992", |b| b.iter(|| reduce(black_box(9992))));
    group.bench_function("compute_matrix", |b| {
        b.iter(|| compute_matrix(black_box(&date)))
    });
    group.bench_function("birth_chart", |b| b.iter(|| birth_chart(black_box(&date))));
    group.finish();
}

fn lunar_bench(c: &mut Criterion) {
    let ts = Timestamp::from_unix_millis(1_700_000_000_000.0);

    let mut group = c.benchmark_group("lunar");
    group.bench_function("moon_age", |b| b.iter(|| moon_age(black_box(ts))));
    group.bench_function("illumination_percent", |b| {
        b.iter(|| illumination_percent(black_box(11.3)))
    });
    group.bench_function("moon_sample", |b| b.iter(|| moon_sample(black_box(ts))));
    group.bench_function("recommendations_day_15", |b| {
        let s = moon_sample(ts);
        b.iter(|| recommendations(black_box(s.phase), black_box(15)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("zodiac");
    group.bench_function("sign_for_year_end", |b| {
        b.iter(|| sign_for(black_box(31), black_box(12)))
    });
    group.finish();
}

criterion_group!(benches, numerology_bench, lunar_bench, zodiac_bench);
criterion_main!(benches);
