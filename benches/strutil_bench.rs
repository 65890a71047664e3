use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strutil::size::{format_size, parse_size};
use strutil::text::{ellipt_left, ellipt_right, truncate_output};

fn make_output(lines: usize) -> Vec<u8> {
    (0..lines)
        .flat_map(|i| format!("line {i}: some captured process output\n").into_bytes())
        .collect()
}

fn make_text(chars: usize) -> String {
    "héllo wörld 🐧 ".chars().cycle().take(chars).collect()
}

fn bench_truncate_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncate_output_1k_10k_100k");

    for lines in [1_000usize, 10_000, 100_000] {
        let data = make_output(lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &data, |b, data| {
            b.iter(|| {
                let out = truncate_output(black_box(data), black_box(20), black_box(10_000));
                black_box(out);
            })
        });
    }

    group.finish();
}

fn bench_ellipt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ellipt_64_1k_16k");

    for chars in [64usize, 1_000, 16_000] {
        let text = make_text(chars);
        group.bench_with_input(BenchmarkId::from_parameter(chars), &text, |b, text| {
            b.iter(|| {
                black_box(ellipt_right(black_box(text), 40));
                black_box(ellipt_left(black_box(text), 40));
            })
        });
    }

    group.finish();
}

fn bench_size_round_trip(c: &mut Criterion) {
    let values: Vec<u64> = (0..64).map(|i| 7u64.pow(i % 22) + i as u64).collect();

    c.bench_function("size_format_parse_64", |b| {
        b.iter(|| {
            for &bytes in black_box(&values) {
                let text = format_size(bytes);
                black_box(parse_size(&text).ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_truncate_output,
    bench_ellipt,
    bench_size_round_trip
);
criterion_main!(benches);
