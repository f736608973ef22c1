use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use decfix::Fixed;

fn bench_addition(c: &mut Criterion) {
    c.bench_function("fixed_addition", |b| {
        let x = Fixed::must_parse("123.4567891");
        let y = Fixed::must_parse("987.6543219");
        b.iter(|| black_box(black_box(x) + black_box(y)));
    });
}

fn bench_subtraction(c: &mut Criterion) {
    c.bench_function("fixed_subtraction", |b| {
        let x = Fixed::must_parse("987.6543219");
        let y = Fixed::must_parse("123.4567891");
        b.iter(|| black_box(black_box(x) - black_box(y)));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    c.bench_function("fixed_multiplication", |b| {
        let x = Fixed::must_parse("123.4567891");
        let y = Fixed::must_parse("9.8765432");
        b.iter(|| black_box(black_box(x) * black_box(y)));
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("fixed_division", |b| {
        let x = Fixed::must_parse("123.4567891");
        let y = Fixed::must_parse("9.8765432");
        b.iter(|| black_box(black_box(x) / black_box(y)));
    });
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("fixed_parsing", |b| {
        b.iter(|| black_box("123.4567891".parse::<Fixed>().unwrap()));
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("fixed_formatting", |b| {
        let f = Fixed::must_parse("123.4567891");
        b.iter(|| black_box(format!("{}", f)));
    });
}

fn bench_round(c: &mut Criterion) {
    c.bench_function("fixed_round_2dp", |b| {
        let f = Fixed::must_parse("2234.5651234");
        b.iter(|| black_box(black_box(f).round(2)));
    });
}

fn bench_sum(c: &mut Criterion) {
    c.bench_function("fixed_sum_1000_values", |b| {
        let values: Vec<Fixed> = (0..1000).map(Fixed::from_i64).collect();
        b.iter(|| black_box(values.iter().sum::<Fixed>()));
    });
}

criterion_group!(
    benches,
    bench_addition,
    bench_subtraction,
    bench_multiplication,
    bench_division,
    bench_parsing,
    bench_formatting,
    bench_round,
    bench_sum
);
criterion_main!(benches);
