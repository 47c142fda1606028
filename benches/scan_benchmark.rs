use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use telofinder::common::models::SequenceStore;
use telofinder::telomere::{find_telomeres, scan_strand, G_STRAND};

/// Alternating telomere-capped and interstitial reads, newline separated.
fn generate_reads(n_reads: usize) -> String {
    let mut text = String::new();
    for i in 0..n_reads {
        if i % 2 == 0 {
            text.push_str("CATCAN");
            text.push_str(&"TTGGG".repeat(11));
            text.push_str("AAACCCTTTT");
        } else {
            text.push_str(&"GATTACA".repeat(9));
        }
        text.push('\n');
    }

    text
}

fn benchmark_scan_strand(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_strand");
    for n_reads in [100, 1_000, 10_000] {
        let text = generate_reads(n_reads);
        let store = SequenceStore::from(text.as_str());

        group.bench_with_input(BenchmarkId::from_parameter(n_reads), &store, |b, store| {
            b.iter(|| scan_strand(store.as_bytes(), &G_STRAND, 50))
        });
    }
    group.finish();
}

fn benchmark_find_telomeres(c: &mut Criterion) {
    let text = generate_reads(1_000);
    let store = SequenceStore::from(text.as_str());

    c.bench_function("find_telomeres_1k_reads", |b| {
        b.iter(|| find_telomeres(&store, 50))
    });
}

criterion_group!(benches, benchmark_scan_strand, benchmark_find_telomeres);
criterion_main!(benches);
