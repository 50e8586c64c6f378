use chart_core::{area_path, line_path, map_line, pie_slices, Insets, PieLayout, Point, Series, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_series(n: usize) -> Series {
    Series::from_pairs((0..n).map(|i| {
        let v = (i as f64 * 0.01).sin() * 10.0 + 12.0;
        (format!("d{i}"), v)
    }))
}

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_geometry");
    for &n in &[30usize, 365, 5_000] {
        let series = build_series(n);
        group.bench_function(format!("map_and_path_{n}"), |b| {
            b.iter(|| {
                let pts = map_line(black_box(&series), Size::default(), Insets::default()).unwrap_or_default();
                let line = line_path(&pts, 1.0);
                let area = area_path(&pts, 280.0, 1.0);
                black_box((line.to_string(), area.to_string()));
            });
        });
    }
    group.finish();
}

fn bench_pie(c: &mut Criterion) {
    let series = build_series(12);
    let layout = PieLayout::new(Point::new(150.0, 150.0), 110.0).donut(40.0);
    c.bench_function("pie_slices_12", |b| {
        b.iter(|| black_box(pie_slices(black_box(&series), &layout, 1.0)));
    });
}

criterion_group!(benches, bench_line, bench_pie);
criterion_main!(benches);
