//! Lock-guarded vs atomic counter throughput

use concurrency_primers::{counter::run_counter, AtomicCounter, Counter, CounterConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use tokio::runtime::Runtime;

fn bench_counters(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("shared_counter");

    for tasks in [1usize, 4, 10] {
        let config = CounterConfig {
            tasks,
            increments_per_task: 1000,
        };
        group.throughput(Throughput::Elements(config.expected_total() as u64));

        group.bench_with_input(BenchmarkId::new("mutex", tasks), &config, |b, config| {
            b.iter(|| rt.block_on(run_counter(Arc::new(Counter::new()), config)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("atomic", tasks), &config, |b, config| {
            b.iter(|| {
                rt.block_on(run_counter(Arc::new(AtomicCounter::new()), config))
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_counters);
criterion_main!(benches);
