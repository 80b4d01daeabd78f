//! Bounded worker pool for per-component extraction.
//!
//! Sizing is a pure function of its inputs ([`pool_size`]); reading them from
//! the running system is kept separate in [`PoolProbe::detect`].

use std::env;

use anyhow::{Context, Result};
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

/// Memory one extraction worker may need, in bytes (1.1 GiB).
pub const WORKER_MEMORY_BUDGET: f64 = 1.1 * 1024.0 * 1024.0 * 1024.0;

/// Forces a single worker when set to anything but empty or `0`.
pub const INSPECT_ENV: &str = "APIGEN_INSPECT";

/// Number of concurrent extraction workers.
///
/// One worker while a debugger is attached, so diagnostics stay
/// deterministic. Otherwise half the CPUs, capped by how many workers fit in
/// free memory, and never less than one.
pub fn pool_size(inspecting: bool, cpus: usize, free_memory: u64) -> usize {
    if inspecting {
        return 1;
    }

    let by_cpu = cpus as f64 / 2.0;
    let by_memory = free_memory as f64 / WORKER_MEMORY_BUDGET;
    (by_cpu.min(by_memory).floor() as usize).max(1)
}

/// System facts that feed [`pool_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolProbe {
    pub inspecting: bool,
    pub cpus: usize,
    pub free_memory: u64,
}

impl PoolProbe {
    pub fn detect() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        Self {
            inspecting: inspector_attached(),
            cpus: rayon::current_num_threads(),
            free_memory: system.available_memory(),
        }
    }

    pub fn pool_size(&self) -> usize {
        pool_size(self.inspecting, self.cpus, self.free_memory)
    }
}

/// Whether a debugger is attached or inspection was requested through
/// [`INSPECT_ENV`].
pub fn inspector_attached() -> bool {
    let requested = env::var(INSPECT_ENV)
        .map(|value| !value.is_empty() && value != "0")
        .unwrap_or(false);

    requested || tracer_attached()
}

#[cfg(target_os = "linux")]
fn tracer_attached() -> bool {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| {
            status
                .lines()
                .find_map(|line| line.strip_prefix("TracerPid:"))
                .map(|pid| pid.trim() != "0")
        })
        .unwrap_or(false)
}

#[cfg(not(target_os = "linux"))]
fn tracer_attached() -> bool {
    false
}

/// Whether `name` survives the optional `--components` allow-list.
pub fn is_allowed(name: &str, allow_list: Option<&[String]>) -> bool {
    allow_list.is_none_or(|allowed| allowed.iter().any(|a| a == name))
}

/// Runs one task per job on a dedicated pool of fixed size.
pub struct Dispatcher {
    pool: ThreadPool,
    size: usize,
}

impl Dispatcher {
    pub fn new(size: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(size)
            .thread_name(|index| format!("apigen-worker-{}", index))
            .build()
            .context("Failed to start extraction worker pool")?;

        debug!("Extraction pool started with {} worker(s)", size);
        Ok(Self { pool, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Run `task` for every job and return the results in job order.
    ///
    /// The first failing task fails the whole batch; no partial results are
    /// returned.
    pub fn run<J, T, F>(&self, jobs: &[J], task: F) -> Result<Vec<T>>
    where
        J: Sync,
        T: Send,
        F: Fn(&J) -> Result<T> + Sync,
    {
        self.pool
            .install(|| jobs.par_iter().map(&task).collect())
    }
}
