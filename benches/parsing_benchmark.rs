use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use station_normalizer::models::Station;
use station_normalizer::processors::StationImporter;
use station_normalizer::readers::{GhcndStationParser, RecordParser};
use station_normalizer::schema::Tabular;
use station_normalizer::utils::parse::{parse_float, parse_float_bounded, parse_int};
use std::sync::Arc;

const STATION_LINES: [&str; 4] = [
    "USW00023234  37.6197 -122.3656    3.0 CA SAN FRANCISCO INTL AP                  72494",
    "USW00094728  40.7789  -73.9692   39.6 NY NEW YORK CNTRL PK TWR              HCN 72506",
    "AYM00089606 -66.2830  110.5170 -999.9    CASEY                          GSN     89611",
    "USC00049999               junk    abc CA NOWHERE                                     ",
];

// Synthetic registry of `count` lines cycling through the samples above
fn create_test_lines(count: usize) -> Vec<String> {
    STATION_LINES
        .iter()
        .cycle()
        .take(count)
        .map(|line| line.to_string())
        .collect()
}

fn benchmark_numeric_parsing(c: &mut Criterion) {
    let inputs = ["111", "  -73.9692", "6.02e23", "soccer", "", "NaN", "-999.9"];

    c.bench_function("numeric_parsing", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for input in &inputs {
                total += parse_int(black_box(input), 0) as f64;
                total += parse_float(black_box(input), 0.0);
                total += parse_float_bounded(black_box(input), -90.0, 90.0, 0.0);
            }
            black_box(total)
        })
    });
}

fn benchmark_line_parsing(c: &mut Criterion) {
    let parser = GhcndStationParser::new();

    c.bench_function("ghcnd_station_line", |b| {
        b.iter(|| {
            let parsed = STATION_LINES
                .iter()
                .filter_map(|line| parser.parse_line(black_box(line)))
                .count();
            black_box(parsed)
        })
    });
}

fn benchmark_row_serialization(c: &mut Criterion) {
    let parser = GhcndStationParser::new();
    let stations: Vec<Station> = STATION_LINES
        .iter()
        .filter_map(|line| parser.parse_line(line))
        .collect();

    c.bench_function("station_csv_row", |b| {
        b.iter(|| {
            let bytes: usize = stations.iter().map(|s| s.csv(",").len()).sum();
            black_box(bytes)
        })
    });
}

fn benchmark_varying_data_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("import_by_size");

    for &size in &[1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("lines", size), &size, |b, &count| {
            let lines = create_test_lines(count);
            let importer = StationImporter::new(Arc::new(GhcndStationParser::new()));

            b.iter(|| {
                let outcome = importer.import_lines(&lines, None).unwrap();
                black_box(outcome.stats.stations_emitted)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_numeric_parsing,
    benchmark_line_parsing,
    benchmark_row_serialization,
    benchmark_varying_data_sizes
);
criterion_main!(benches);
