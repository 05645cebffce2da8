use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::prelude::*;
use windrose::{coerce_bucket, partition, shared_scale, ColumnSelection, IntervalScheme};

fn synthetic_frame(rows: usize) -> DataFrame {
    let stamps: Vec<String> = (0..rows)
        .map(|i| format!("2015-{:02}-{:02} {:02}:00", i % 12 + 1, i % 28 + 1, i % 24))
        .collect();
    let directions: Vec<String> = (0..rows).map(|i| ((i * 37) % 360).to_string()).collect();
    let speeds: Vec<String> = (0..rows).map(|i| format!("{:.2}", (i % 400) as f64 / 10.0)).collect();
    df!("date_time" => stamps, "direction" => directions, "speed" => speeds).unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let frame = synthetic_frame(50_000);
    let columns = ColumnSelection::builder()
        .radial("speed")
        .direction("direction")
        .timestamp("date_time")
        .build();

    for scheme in [IntervalScheme::Months, IntervalScheme::Seasons] {
        c.bench_function(&format!("prepare_{scheme}"), |b| {
            b.iter(|| {
                let partition = partition(black_box(&frame), scheme, Some("date_time")).unwrap();
                let series: Vec<_> = partition
                    .buckets
                    .iter()
                    .map(|bucket| coerce_bucket(bucket, &columns).unwrap())
                    .collect();
                shared_scale(&series).unwrap()
            })
        });
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
