//! Concurrency primers - task, channel, lock and atomic demonstrations on tokio

// Modules
pub mod channel;
pub mod config;
pub mod console;
pub mod counter;
pub mod demo;
pub mod error;
pub mod fanout;
pub mod pipeline;
pub mod pointer;
pub mod staff;
pub mod wait_group;

// Re-exports
pub use config::{CounterConfig, FanOutConfig, PipelineConfig, PrimersConfig};
pub use console::Console;
pub use counter::{AtomicCounter, Counter, CounterReport, SharedCounter};
pub use demo::{run_demo, Demo};
pub use error::{ChannelError, PrimersError, Result};
pub use pipeline::PipelineReport;
pub use wait_group::{WaitGroup, WaitGuard};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
