//! Named demonstrations and their dispatcher

use crate::config::PrimersConfig;
use crate::console::Console;
use crate::error::Result;
use crate::staff::{Employee, Person};
use crate::{counter, fanout, pipeline, pointer};
use std::fmt;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

/// Every demonstration the crate ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Demo {
    Pointers,
    OddEven,
    OddEvenJoined,
    Handoff,
    Buffered,
    MutexCounter,
    AtomicCounter,
    Employee,
    All,
}

impl Demo {
    /// Each individual demo, in presentation order
    pub const ALL: [Demo; 8] = [
        Demo::Pointers,
        Demo::OddEven,
        Demo::OddEvenJoined,
        Demo::Handoff,
        Demo::Buffered,
        Demo::MutexCounter,
        Demo::AtomicCounter,
        Demo::Employee,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Pointers => "pointers",
            Demo::OddEven => "odd-even",
            Demo::OddEvenJoined => "odd-even-joined",
            Demo::Handoff => "handoff",
            Demo::Buffered => "buffered",
            Demo::MutexCounter => "mutex-counter",
            Demo::AtomicCounter => "atomic-counter",
            Demo::Employee => "employee",
            Demo::All => "all",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Demo::Pointers => "add ten to an integer and double a list in place",
            Demo::OddEven => "two printer tasks launched without a join",
            Demo::OddEvenJoined => "two printer tasks joined before returning",
            Demo::Handoff => "unbuffered producer/consumer handoff of 0..9",
            Demo::Buffered => "bounded-buffer pipeline of 0..99 joined by a wait group",
            Demo::MutexCounter => "ten tasks x 1000 increments under a lock",
            Demo::AtomicCounter => "ten tasks x 1000 atomic increments",
            Demo::Employee => "print an employee record",
            Demo::All => "run every demo in order",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run one demo (or all of them) against `console`
pub async fn run_demo(demo: Demo, config: &PrimersConfig, console: &Console) -> Result<()> {
    info!(demo = demo.name(), "running demo");
    match demo {
        Demo::Pointers => {
            let mut value = 1;
            pointer::add_ten(&mut value);
            console.line(value.to_string());

            let mut values = vec![1, 2, 3];
            pointer::double_all(&mut values);
            let rendered: Vec<String> = values.iter().map(i64::to_string).collect();
            console.line(format!("[{}]", rendered.join(" ")));
        },
        Demo::OddEven => {
            fanout::spawn_odd_even(console, config.fan_out.limit);
            sleep(Duration::from_millis(config.fan_out.settle_ms)).await;
        },
        Demo::OddEvenJoined => {
            fanout::print_odd_even(console, config.fan_out.limit).await?;
        },
        Demo::Handoff => {
            pipeline::handoff(console, config.pipeline.handoff_count).await?;
        },
        Demo::Buffered => {
            pipeline::buffered(console, &config.pipeline).await?;
        },
        Demo::MutexCounter => {
            let report = counter::count_with_lock(console, &config.counter).await?;
            if !report.is_exact() {
                warn!(
                    value = report.value,
                    expected = report.expected(),
                    "mutex counter lost updates"
                );
            }
        },
        Demo::AtomicCounter => {
            let report = counter::count_with_atomic(console, &config.counter).await?;
            if !report.is_exact() {
                warn!(
                    value = report.value,
                    expected = report.expected(),
                    "atomic counter lost updates"
                );
            }
        },
        Demo::Employee => {
            Employee::new(Person::new("Bob", 21), 1001).print_info(console);
        },
        Demo::All => {
            for demo in Demo::ALL {
                console.line(format!("== {}", demo));
                Box::pin(run_demo(demo, config, console)).await?;
            }
        },
    }
    Ok(())
}
