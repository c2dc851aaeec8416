use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jataka::vedic::{nakshatra_for_longitude, Nakshatra};
use jataka::{rajju_match, Rasi};

fn bench_bucketing(c: &mut Criterion) {
    c.bench_function("nakshatra_for_longitude", |b| {
        b.iter(|| nakshatra_for_longitude(black_box(359.9997)))
    });
    c.bench_function("rasi_from_longitude", |b| {
        b.iter(|| Rasi::from_longitude(black_box(-12.5)))
    });
}

fn bench_rajju(c: &mut Criterion) {
    let names: Vec<&str> = Nakshatra::all().map(|n| n.name()).collect();
    c.bench_function("rajju_match_all_pairs", |b| {
        b.iter(|| {
            for boy in &names {
                for girl in &names {
                    black_box(rajju_match(boy, girl));
                }
            }
        })
    });
}

criterion_group!(benches, bench_bucketing, bench_rajju);
criterion_main!(benches);
