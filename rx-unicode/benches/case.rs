use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rx_unicode::case::CharCaseExt;

pub fn criterion_benchmark(c: &mut Criterion) {
    {
        assert_eq!('A'.to_mono_lowercase(), 'a');
        c.bench_function("mono_lowercase/ascii_hit", |b| {
            b.iter(|| black_box('A').to_mono_lowercase())
        });

        assert_eq!('!'.to_mono_lowercase(), '!');
        c.bench_function("mono_lowercase/ascii_miss", |b| {
            b.iter(|| black_box('!').to_mono_lowercase())
        });

        assert_eq!('Σ'.to_mono_lowercase(), 'σ');
        c.bench_function("mono_lowercase/uni_hit", |b| {
            b.iter(|| black_box('Σ').to_mono_lowercase())
        });

        assert_eq!('う'.to_mono_lowercase(), 'う');
        c.bench_function("mono_lowercase/uni_miss", |b| {
            b.iter(|| black_box('う').to_mono_lowercase())
        });
    }
    {
        assert_eq!('a'.to_mono_uppercase(), 'A');
        c.bench_function("mono_uppercase/ascii_hit", |b| {
            b.iter(|| black_box('a').to_mono_uppercase())
        });

        assert_eq!('σ'.to_mono_uppercase(), 'Σ');
        c.bench_function("mono_uppercase/uni_hit", |b| {
            b.iter(|| black_box('σ').to_mono_uppercase())
        });

        assert_eq!('う'.to_mono_uppercase(), 'う');
        c.bench_function("mono_uppercase/uni_miss", |b| {
            b.iter(|| black_box('う').to_mono_uppercase())
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
