use chrono::{Duration, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use sparkline_rs::core::{
    ChartArea, PricePoint, RangeKey, available_price_ranges, build_polyline, project_series,
    slice_price_history,
};
use std::hint::black_box;

fn daily_history(points: usize) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid date");
    (0..points)
        .map(|i| {
            let wobble = if i % 2 == 0 { 3 } else { -2 };
            PricePoint::new(
                start + Duration::days(i as i64),
                Decimal::from(1_000 + (i as i64 % 200) + wobble),
            )
        })
        .collect()
}

fn bench_series_projection_10k(c: &mut Criterion) {
    let area = ChartArea::new(640.0, 240.0, 12.0).expect("valid chart area");
    let values: Vec<f64> = (0..10_000)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 25.0)
        .collect();

    c.bench_function("series_projection_10k", |b| {
        b.iter(|| {
            let _ = project_series(black_box(&values), black_box(area));
        })
    });
}

fn bench_polyline_formatting_10k(c: &mut Criterion) {
    let area = ChartArea::new(640.0, 240.0, 12.0).expect("valid chart area");
    let values: Vec<f64> = (0..10_000)
        .map(|i| 100.0 + (i as f64 * 0.7).cos() * 25.0)
        .collect();

    c.bench_function("polyline_formatting_10k", |b| {
        b.iter(|| {
            let _ = build_polyline(black_box(&values), black_box(area));
        })
    });
}

fn bench_catalog_and_slice_multi_year(c: &mut Criterion) {
    let history = daily_history(3_000);

    c.bench_function("catalog_and_slice_multi_year", |b| {
        b.iter(|| {
            let available = available_price_ranges(black_box(&history));
            let _ = black_box(available);
            let _ = slice_price_history(black_box(&history), black_box(RangeKey::ThreeMonths));
        })
    });
}

criterion_group!(
    benches,
    bench_series_projection_10k,
    bench_polyline_formatting_10k,
    bench_catalog_and_slice_multi_year
);
criterion_main!(benches);
