//! Producer/consumer pipelines over unbuffered and bounded channels

use crate::channel::{self, Receiver, Sender};
use crate::config::PipelineConfig;
use crate::console::Console;
use crate::error::Result;
use crate::wait_group::WaitGroup;
use futures::future::try_join_all;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task;
use tracing::{debug, info};

/// Outcome of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Capacity of the channel (zero for the handoff)
    pub capacity: usize,
    /// Values the producer wrote
    pub produced: usize,
    /// Values received, one list per consumer in receive order
    pub consumers: Vec<Vec<i64>>,
}

impl PipelineReport {
    /// Values seen by the first consumer
    pub fn received(&self) -> &[i64] {
        self.consumers.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total values received across all consumers
    pub fn total_received(&self) -> usize {
        self.consumers.iter().map(Vec::len).sum()
    }

    /// Every received value, sorted
    pub fn merged(&self) -> Vec<i64> {
        let mut all: Vec<i64> = self.consumers.iter().flatten().copied().collect();
        all.sort_unstable();
        all
    }
}

async fn produce(tx: Sender<i64>, count: i64) -> Result<usize> {
    for value in 0..count {
        tx.send(value).await?;
    }
    tx.close();
    debug!(count, "producer finished and closed the channel");
    Ok(count.max(0) as usize)
}

/// Unbuffered handoff: one producer writes `0..count`, one consumer reads until close.
///
/// The consumer prints each value and then `receive ending`.
pub async fn handoff(console: &Console, count: i64) -> Result<PipelineReport> {
    info!(count, "starting unbuffered handoff");
    let (tx, mut rx) = channel::unbuffered::<i64>();

    let producer = task::spawn(produce(tx, count));

    let out = console.clone();
    let consumer = task::spawn(async move {
        let mut received = Vec::new();
        while let Some(value) = rx.recv().await {
            out.line(value.to_string());
            received.push(value);
        }
        out.line("receive ending");
        received
    });

    let (produced, received) = tokio::try_join!(producer, consumer)?;
    let produced = produced?;
    info!(produced, received = received.len(), "unbuffered handoff complete");

    Ok(PipelineReport {
        capacity: 0,
        produced,
        consumers: vec![received],
    })
}

async fn drain_shared(rx: Arc<Mutex<Receiver<i64>>>, console: Console) -> Vec<i64> {
    let mut received = Vec::new();
    loop {
        let next = rx.lock().await.recv().await;
        match next {
            Some(value) => {
                console.line(value.to_string());
                received.push(value);
            },
            None => break,
        }
    }
    received
}

/// Bounded-buffer handoff: the producer writes `0..buffered_count` into a channel
/// of `buffer_capacity`, `consumers` tasks drain it, and every task is joined
/// through a [`WaitGroup`] before `END!` is printed.
pub async fn buffered(console: &Console, config: &PipelineConfig) -> Result<PipelineReport> {
    info!(
        count = config.buffered_count,
        capacity = config.buffer_capacity,
        consumers = config.consumers,
        "starting bounded-buffer pipeline"
    );
    let (tx, rx) = channel::bounded::<i64>(config.buffer_capacity);
    let rx = Arc::new(Mutex::new(rx));
    let group = WaitGroup::new();

    group.add(1);
    let guard = group.guard();
    let count = config.buffered_count;
    let producer = task::spawn(async move {
        let _guard = guard;
        produce(tx, count).await
    });

    let mut consumers = Vec::with_capacity(config.consumers);
    for id in 0..config.consumers {
        group.add(1);
        let guard = group.guard();
        let rx = Arc::clone(&rx);
        let out = console.clone();
        consumers.push(task::spawn(async move {
            let _guard = guard;
            let received = drain_shared(rx, out).await;
            debug!(consumer = id, received = received.len(), "consumer drained");
            received
        }));
    }

    group.wait().await;
    console.line("END!");

    // Every task has already signalled; these joins only collect results
    let produced = producer.await??;
    let lanes = try_join_all(consumers).await?;

    let report = PipelineReport {
        capacity: config.buffer_capacity,
        produced,
        consumers: lanes,
    };
    info!(
        produced,
        received = report.total_received(),
        "bounded-buffer pipeline complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handoff_prints_values_then_ending() {
        let console = Console::capture();
        let report = handoff(&console, 3).await.unwrap();
        assert_eq!(report.received(), &[0, 1, 2]);
        assert_eq!(console.lines(), vec!["0", "1", "2", "receive ending"]);
    }

    #[tokio::test]
    async fn test_buffered_ends_with_end_marker() {
        let console = Console::capture();
        let config = PipelineConfig {
            buffered_count: 5,
            buffer_capacity: 2,
            ..PipelineConfig::default()
        };
        let report = buffered(&console, &config).await.unwrap();
        assert_eq!(report.produced, 5);
        assert_eq!(report.received(), &[0, 1, 2, 3, 4]);
        assert_eq!(console.lines().last().map(String::as_str), Some("END!"));
    }

    #[tokio::test]
    async fn test_empty_sequence() {
        let console = Console::capture();
        let report = handoff(&console, 0).await.unwrap();
        assert_eq!(report.produced, 0);
        assert!(report.received().is_empty());
        assert_eq!(console.lines(), vec!["receive ending"]);
    }
}
