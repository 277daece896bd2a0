//! Two unsynchronized printer tasks (odds and evens)

use crate::console::Console;
use crate::error::Result;
use tokio::task::{self, JoinHandle};
use tracing::{debug, info};

/// Odd integers in `[1, limit)`
pub fn odd_numbers(limit: i64) -> Vec<i64> {
    (1..limit).step_by(2).collect()
}

/// Even integers in `[2, limit]`
pub fn even_numbers(limit: i64) -> Vec<i64> {
    (2..=limit).step_by(2).collect()
}

/// What each printer emitted, in its own order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanOutReport {
    pub odds: Vec<i64>,
    pub evens: Vec<i64>,
}

fn spawn_printer(console: Console, label: &'static str, values: Vec<i64>) -> JoinHandle<Vec<i64>> {
    task::spawn(async move {
        debug!(label, count = values.len(), "printer started");
        for value in &values {
            console.line(format!("{} {}", label, value));
        }
        values
    })
}

/// Launch both printers and return immediately without joining them.
///
/// The caller has to wait (or sleep) before assuming the output is complete;
/// the interleaving between the two printers is unspecified.
pub fn spawn_odd_even(console: &Console, limit: i64) {
    info!(limit, "launching odd/even printers without a join");
    spawn_printer(console.clone(), "odd", odd_numbers(limit));
    spawn_printer(console.clone(), "even", even_numbers(limit));
}

/// Launch both printers and wait for both to finish
pub async fn print_odd_even(console: &Console, limit: i64) -> Result<FanOutReport> {
    let odds = spawn_printer(console.clone(), "odd", odd_numbers(limit));
    let evens = spawn_printer(console.clone(), "even", even_numbers(limit));
    let (odds, evens) = tokio::try_join!(odds, evens)?;
    info!(odds = odds.len(), evens = evens.len(), "odd/even printers joined");
    Ok(FanOutReport { odds, evens })
}
