use concurrency_primers::{
    channel,
    pipeline::{buffered, handoff},
    Console, PipelineConfig,
};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_handoff_delivers_zero_to_nine_in_order() {
    let console = Console::capture();
    let report = handoff(&console, 10).await.unwrap();

    let expected: Vec<i64> = (0..10).collect();
    assert_eq!(report.capacity, 0);
    assert_eq!(report.produced, 10);
    assert_eq!(report.received(), expected.as_slice());

    let lines = console.lines();
    assert_eq!(lines.last().map(String::as_str), Some("receive ending"));
    assert_eq!(lines.len(), 11);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_buffered_delivers_zero_to_ninety_nine_in_order() {
    let console = Console::capture();
    let report = buffered(&console, &PipelineConfig::default()).await.unwrap();

    let expected: Vec<i64> = (0..100).collect();
    assert_eq!(report.capacity, 10);
    assert_eq!(report.produced, 100);
    assert_eq!(report.consumers.len(), 1);
    assert_eq!(report.received(), expected.as_slice());

    // Everything was printed before the join released the caller
    let lines = console.lines();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[100], "END!");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_buffered_with_several_consumers_delivers_each_value_once() {
    let console = Console::capture();
    let config = PipelineConfig {
        consumers: 4,
        ..PipelineConfig::default()
    };
    let report = buffered(&console, &config).await.unwrap();

    assert_eq!(report.consumers.len(), 4);
    assert_eq!(report.total_received(), 100);
    assert_eq!(report.merged(), (0..100).collect::<Vec<i64>>());
    for lane in &report.consumers {
        assert!(lane.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[tokio::test]
async fn test_handoff_order_is_stable_across_runs() {
    for _ in 0..20 {
        let report = handoff(&Console::capture(), 10).await.unwrap();
        assert_eq!(report.received(), (0..10).collect::<Vec<i64>>().as_slice());
    }
}

#[tokio::test]
async fn test_bounded_producer_only_blocks_when_full() {
    let (tx, mut rx) = channel::bounded::<i64>(10);

    // Ten sends fit without any reader
    let filled = timeout(Duration::from_millis(200), async {
        for value in 0..10 {
            tx.send(value).await.unwrap();
        }
    })
    .await;
    assert!(filled.is_ok());

    // The eleventh has to wait for space
    let blocked = timeout(Duration::from_millis(50), tx.send(10)).await;
    assert!(blocked.is_err());

    assert_eq!(rx.recv().await, Some(0));
    timeout(Duration::from_millis(200), tx.send(10))
        .await
        .expect("space was freed")
        .unwrap();
}

#[tokio::test]
async fn test_unbuffered_reader_without_writer_never_completes() {
    let (tx, mut rx) = channel::unbuffered::<i64>();
    let result = timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(result.is_err());
    drop(tx);
}
