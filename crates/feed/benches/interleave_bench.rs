//! Benchmarks for feed interleaving.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fromagio_feed::{interleave, FeedItem, FeedKind, FeedStreams};

fn create_test_streams(primary: usize) -> FeedStreams {
    FeedStreams {
        primary: (0..primary as i64)
            .map(|id| FeedItem::new(id, FeedKind::Cheese))
            .collect(),
        editorial: (0..primary as i64 / 6)
            .map(|id| FeedItem::new(10_000 + id, FeedKind::Article))
            .collect(),
        sponsored: (0..primary as i64 / 6)
            .map(|id| FeedItem::new(20_000 + id, FeedKind::Sponsored))
            .collect(),
    }
}

fn bench_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleave");

    for size in [50, 200, 1000].iter() {
        let streams = create_test_streams(*size);

        group.bench_with_input(BenchmarkId::new("streams", size), size, |b, _| {
            b.iter(|| interleave(black_box(&streams)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_interleave);
criterion_main!(benches);
