//! Publish fan-out and fetch-and-clear benchmarks.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use thialfi_core::{MemStore, NotificationService};

fn service_with_registrants(count: usize) -> NotificationService {
    let service = NotificationService::new(Arc::new(MemStore::new()));
    for i in 0..count {
        service.register(&format!("client-{i}"), "object");
    }
    service
}

fn bench_publish_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish/fanout");

    for registrants in [1, 10, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(registrants),
            &registrants,
            |b, &registrants| {
                let service = service_with_registrants(registrants);
                let mut version = 0i64;
                b.iter(|| {
                    version += 1;
                    black_box(service.publish("object", version));
                    // Keep queues from growing across iterations
                    for i in 0..registrants {
                        black_box(service.fetch(&format!("client-{i}")));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_fetch_and_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch/batch");

    for queued in [1, 100, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(queued), &queued, |b, &queued| {
            let service = service_with_registrants(1);
            b.iter_batched(
                || {
                    for version in 0..queued {
                        service.publish("object", version);
                    }
                },
                |()| black_box(service.fetch("client-0")),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    group.bench_function("register_unregister", |b| {
        let service = NotificationService::new(Arc::new(MemStore::new()));
        b.iter(|| {
            service.register(black_box("client"), black_box("object"));
            service.unregister(black_box("client"), black_box("object"));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_publish_fanout,
    bench_fetch_and_clear,
    bench_registration
);
criterion_main!(benches);
