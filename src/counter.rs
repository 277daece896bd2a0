//! Shared counters incremented concurrently by many tasks
//!
//! [`Counter`] guards its integer with an async mutex; [`AtomicCounter`] uses
//! hardware fetch-and-add. Both are driven by [`run_counter`], which joins all
//! tasks through a [`WaitGroup`] before reading the final value.

use crate::config::CounterConfig;
use crate::console::Console;
use crate::error::Result;
use crate::wait_group::WaitGroup;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::task;
use tracing::{debug, info};

/// A counter that many tasks may increment at once
#[async_trait]
pub trait SharedCounter: Send + Sync {
    /// Short name used in logs and reports
    fn variant(&self) -> &'static str;

    /// Add one
    async fn increment(&self);

    /// Read the current value
    async fn value(&self) -> i64;
}

/// Lock-guarded counter. The count is only touched while the lock is held.
#[derive(Debug, Default)]
pub struct Counter {
    count: Mutex<i64>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SharedCounter for Counter {
    fn variant(&self) -> &'static str {
        "mutex"
    }

    async fn increment(&self) {
        let mut count = self.count.lock().await;
        *count += 1;
    }

    async fn value(&self) -> i64 {
        *self.count.lock().await
    }
}

/// Lock-free counter. The count is only touched through atomic operations.
#[derive(Debug, Default)]
pub struct AtomicCounter {
    count: AtomicI64,
}

impl AtomicCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SharedCounter for AtomicCounter {
    fn variant(&self) -> &'static str {
        "atomic"
    }

    async fn increment(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    async fn value(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }
}

/// Result of one counter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterReport {
    pub variant: &'static str,
    pub tasks: usize,
    pub increments_per_task: usize,
    pub value: i64,
    pub elapsed: Duration,
}

impl CounterReport {
    /// Value a run without lost updates must reach
    pub fn expected(&self) -> i64 {
        CounterConfig {
            tasks: self.tasks,
            increments_per_task: self.increments_per_task,
        }
        .expected_total()
    }

    pub fn is_exact(&self) -> bool {
        self.value == self.expected()
    }
}

/// Spawn `config.tasks` tasks that each increment `counter`
/// `config.increments_per_task` times, wait for all of them, then read it.
pub async fn run_counter<C>(counter: Arc<C>, config: &CounterConfig) -> Result<CounterReport>
where
    C: SharedCounter + 'static,
{
    let started = Instant::now();
    let group = WaitGroup::new();
    group.add(config.tasks);

    let mut handles = Vec::with_capacity(config.tasks);
    for worker in 0..config.tasks {
        let guard = group.guard();
        let counter = Arc::clone(&counter);
        let increments = config.increments_per_task;
        handles.push(task::spawn(async move {
            let _guard = guard;
            for _ in 0..increments {
                counter.increment().await;
            }
            debug!(worker, increments, "counter task finished");
        }));
    }

    group.wait().await;
    let value = counter.value().await;

    // A panicked worker still signals through its guard; its join error surfaces here
    try_join_all(handles).await?;

    let report = CounterReport {
        variant: counter.variant(),
        tasks: config.tasks,
        increments_per_task: config.increments_per_task,
        value,
        elapsed: started.elapsed(),
    };
    info!(
        variant = report.variant,
        value = report.value,
        expected = report.expected(),
        elapsed_us = report.elapsed.as_micros() as u64,
        "counter run complete"
    );
    Ok(report)
}

/// Run the lock-guarded counter and print its final value
pub async fn count_with_lock(console: &Console, config: &CounterConfig) -> Result<CounterReport> {
    let report = run_counter(Arc::new(Counter::new()), config).await?;
    console.line(report.value.to_string());
    Ok(report)
}

/// Run the atomic counter and print its final value
pub async fn count_with_atomic(console: &Console, config: &CounterConfig) -> Result<CounterReport> {
    let report = run_counter(Arc::new(AtomicCounter::new()), config).await?;
    console.line(report.value.to_string());
    Ok(report)
}
