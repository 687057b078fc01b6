// crates/integral-core/src/config.rs

use std::fmt;
use std::thread;

/// Fork-join primitive used by the parallel build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParallelStrategy {
    /// One scoped OS thread per block, spawned and joined per phase.
    #[default]
    Threads,
    /// Data-parallel loops on a rayon pool sized to the worker count.
    Rayon,
}

impl ParallelStrategy {
    pub const ALL: [ParallelStrategy; 2] = [ParallelStrategy::Threads, ParallelStrategy::Rayon];

    pub fn name(self) -> &'static str {
        match self {
            ParallelStrategy::Threads => "threads",
            ParallelStrategy::Rayon => "rayon",
        }
    }
}

impl fmt::Display for ParallelStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Worker count; 0 is treated as 1.
    pub workers: usize,
    pub strategy: ParallelStrategy,
}

impl BuildConfig {
    pub fn new(workers: usize, strategy: ParallelStrategy) -> Self {
        Self { workers, strategy }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            strategy: ParallelStrategy::Threads,
        }
    }
}

/// Hardware concurrency, or 1 when it cannot be queried.
pub fn default_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}
