//! Vigenere 暗号ベンチマーク
//!
//! 目的: 単発の暗号化と並列バッチ処理のスループットを比較する。

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use textcraft::{VigenereCipheringMachine, decrypt_batch, encrypt_batch};

const KEY: &str = "alphonse";

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(8))
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("cipher");
    let direct = VigenereCipheringMachine::new(true);
    let reverse = VigenereCipheringMachine::new(false);
    let message = "attack at dawn! ".repeat(256);

    group.bench_function("encrypt_direct_4k", |b| {
        b.iter(|| direct.encrypt(black_box(&message), KEY))
    });

    group.bench_function("encrypt_reverse_4k", |b| {
        b.iter(|| reverse.encrypt(black_box(&message), KEY))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("cipher_batch");
    let machine = VigenereCipheringMachine::default();
    let messages: Vec<String> = (0..10_000)
        .map(|i| format!("message {} attack at dawn!", i))
        .collect();
    let encrypted = encrypt_batch(&machine, &messages, KEY).unwrap_or_default();

    group.bench_function("encrypt_sequential_10000", |b| {
        b.iter(|| {
            messages
                .iter()
                .map(|m| machine.encrypt(black_box(m), KEY))
                .collect::<Result<Vec<_>, _>>()
        })
    });

    group.bench_function("encrypt_parallel_10000", |b| {
        b.iter(|| encrypt_batch(&machine, black_box(&messages), KEY))
    });

    group.bench_function("decrypt_parallel_10000", |b| {
        b.iter(|| decrypt_batch(&machine, black_box(&encrypted), KEY))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets =
        bench_single,
        bench_batch,
}

criterion_main!(benches);
