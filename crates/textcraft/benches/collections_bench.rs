//! DNS 集計・ファイル名リネームのベンチマーク
//!
//! 目的: 逐次版と rayon 並列版の差を小さな入力で確認する。

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use textcraft::{get_dns_stats, get_dns_stats_parallel, rename_file_batches, rename_files};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(8))
}

fn make_domains(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("host{}.team{}.corp{}.example.com", i % 97, i % 13, i % 5))
        .collect()
}

fn make_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 3 {
            0 => "file".to_string(),
            1 => format!("file({})", i % 7),
            _ => format!("image{}", i % 11),
        })
        .collect()
}

fn bench_dns(c: &mut Criterion) {
    let mut group = c.benchmark_group("dns_stats");
    let domains = make_domains(50_000);

    group.bench_function("sequential_50000", |b| {
        b.iter(|| get_dns_stats(black_box(&domains)))
    });

    group.bench_function("parallel_50000", |b| {
        b.iter(|| get_dns_stats_parallel(black_box(&domains)))
    });

    group.finish();
}

fn bench_rename(c: &mut Criterion) {
    let mut group = c.benchmark_group("rename_files");
    let names = make_names(5_000);
    let lists: Vec<Vec<String>> = (0..64).map(|_| make_names(500)).collect();

    group.bench_function("single_list_5000", |b| {
        b.iter(|| rename_files(black_box(&names)))
    });

    group.bench_function("batches_64x500", |b| {
        b.iter(|| rename_file_batches(black_box(&lists)))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets =
        bench_dns,
        bench_rename,
}

criterion_main!(benches);
