//! Configuration for the demonstrations

use crate::error::{PrimersError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fan-out printer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanOutConfig {
    /// Upper bound of the printed sequences (odds below it, evens up to it)
    pub limit: i64,
    /// How long the caller waits after a fire-and-forget launch (milliseconds)
    pub settle_ms: u64,
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            settle_ms: 200,
        }
    }
}

/// Producer/consumer pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Values sent through the unbuffered handoff
    pub handoff_count: i64,
    /// Values sent through the bounded buffer
    pub buffered_count: i64,
    /// Capacity of the bounded buffer
    pub buffer_capacity: usize,
    /// Consumers draining the bounded buffer
    pub consumers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            handoff_count: 10,
            buffered_count: 100,
            buffer_capacity: 10,
            consumers: 1,
        }
    }
}

/// Shared counter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Number of incrementing tasks
    pub tasks: usize,
    /// Increments performed by each task
    pub increments_per_task: usize,
}

impl CounterConfig {
    /// Final value once every task has finished
    pub fn expected_total(&self) -> i64 {
        (self.tasks * self.increments_per_task) as i64
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            tasks: 10,
            increments_per_task: 1000,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimersConfig {
    /// Worker threads for the multi-threaded runtime
    pub worker_threads: usize,
    pub fan_out: FanOutConfig,
    pub pipeline: PipelineConfig,
    pub counter: CounterConfig,
}

impl Default for PrimersConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus::get(),
            fan_out: FanOutConfig::default(),
            pipeline: PipelineConfig::default(),
            counter: CounterConfig::default(),
        }
    }
}

impl PrimersConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> PrimersConfigBuilder {
        PrimersConfigBuilder::new()
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: PrimersConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Reject settings the runtime or channels cannot be built with
    pub fn validate(&self) -> Result<()> {
        if self.worker_threads == 0 {
            return Err(PrimersError::config("worker_threads must be at least 1"));
        }
        if self.pipeline.buffer_capacity == 0 {
            return Err(PrimersError::config(
                "pipeline.buffer_capacity must be at least 1; use the handoff demo for an unbuffered channel",
            ));
        }
        if self.pipeline.consumers == 0 {
            return Err(PrimersError::config("pipeline.consumers must be at least 1"));
        }
        Ok(())
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for [`PrimersConfig`]
#[derive(Debug, Clone, Default)]
pub struct PrimersConfigBuilder {
    config: PrimersConfig,
}

impl PrimersConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker thread count
    pub fn worker_threads(mut self, worker_threads: usize) -> Self {
        self.config.worker_threads = worker_threads;
        self
    }

    /// Set the bounded buffer capacity
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.config.pipeline.buffer_capacity = capacity;
        self
    }

    /// Set the number of buffered-pipeline consumers
    pub fn consumers(mut self, consumers: usize) -> Self {
        self.config.pipeline.consumers = consumers;
        self
    }

    /// Set the counter workload
    pub fn counter(mut self, tasks: usize, increments_per_task: usize) -> Self {
        self.config.counter = CounterConfig {
            tasks,
            increments_per_task,
        };
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<PrimersConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
