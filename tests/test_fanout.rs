use concurrency_primers::{
    fanout::{print_odd_even, spawn_odd_even},
    Console,
};
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Poll the console until it holds `expected` lines or the timeout elapses
async fn wait_for_lines(console: &Console, expected: usize, timeout: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if console.lines().len() >= expected {
            return true;
        }
        sleep(Duration::from_millis(5)).await;
    }
    false
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_fire_and_forget_output_arrives_eventually() {
    let console = Console::capture();
    spawn_odd_even(&console, 10);

    assert!(wait_for_lines(&console, 10, Duration::from_secs(2)).await);

    let mut lines = console.lines();
    lines.sort();
    let mut expected: Vec<String> = (1..10)
        .step_by(2)
        .map(|n| format!("odd {}", n))
        .chain((2..=10).step_by(2).map(|n| format!("even {}", n)))
        .collect();
    expected.sort();
    assert_eq!(lines, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_each_printer_keeps_its_own_order() {
    let console = Console::capture();
    print_odd_even(&console, 10).await.unwrap();

    let lines = console.lines();
    let odds: Vec<&String> = lines.iter().filter(|l| l.starts_with("odd")).collect();
    let evens: Vec<&String> = lines.iter().filter(|l| l.starts_with("even")).collect();
    assert_eq!(odds, vec!["odd 1", "odd 3", "odd 5", "odd 7", "odd 9"]);
    assert_eq!(evens, vec!["even 2", "even 4", "even 6", "even 8", "even 10"]);
}

#[tokio::test]
async fn test_joined_variant_is_complete_on_return() {
    let console = Console::capture();
    let report = print_odd_even(&console, 20).await.unwrap();
    assert_eq!(report.odds.len(), 10);
    assert_eq!(report.evens.len(), 10);
    assert_eq!(console.lines().len(), 20);
}
