use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::{
    ALL_ZODIACS, Gender, analyze_elements, civil_date, compute_chart, deterministic_slice,
    lunar_date, peach_periods, seeded_random, zodiac_score,
};

fn chart_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(1990), black_box(1), black_box(1), Some(12)))
    });
    let chart = compute_chart(1990, 1, 1, Some(12));
    group.bench_function("analyze_elements", |b| {
        b.iter(|| analyze_elements(black_box(&chart)))
    });
    group.finish();
}

fn lunar_bench(c: &mut Criterion) {
    let table_date = civil_date(2025, 10, 6).unwrap();
    let fallback_date = civil_date(1990, 10, 6).unwrap();

    let mut group = c.benchmark_group("lunar");
    group.bench_function("table", |b| b.iter(|| lunar_date(black_box(table_date))));
    group.bench_function("fallback", |b| {
        b.iter(|| lunar_date(black_box(fallback_date)))
    });
    group.finish();
}

fn scoring_bench(c: &mut Criterion) {
    let items: Vec<u32> = (0..24).collect();

    let mut group = c.benchmark_group("scoring");
    group.bench_function("seeded_random", |b| {
        b.iter(|| seeded_random(black_box(20_250_129)))
    });
    group.bench_function("deterministic_slice_24_take_4", |b| {
        b.iter(|| deterministic_slice(black_box(&items), 4, black_box(20_250_129)))
    });
    group.bench_function("zodiac_score_all_pairs", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for a in ALL_ZODIACS {
                for z in ALL_ZODIACS {
                    total += zodiac_score(a, z) as u32;
                }
            }
            total
        })
    });
    group.bench_function("peach_periods", |b| {
        b.iter(|| peach_periods(black_box(1990), 6, 15, Gender::Female))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, lunar_bench, scoring_bench);
criterion_main!(benches);
