//! stream/parallelism.rs
//! Worker-pool sizing.

/// Parallelism configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelismProfile {
    /// 1 runs chunks inline on the calling thread.
    pub worker_count: usize,
    /// Capacity of the job queue feeding the workers.
    pub inflight_chunks: usize,
}

impl ParallelismProfile {
    pub fn single_threaded() -> Self {
        Self {
            worker_count: 1,
            inflight_chunks: 1,
        }
    }

    pub fn fixed(worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        Self {
            worker_count,
            inflight_chunks: worker_count * 4,
        }
    }

    /// Size from available cores and memory.
    ///
    /// Queued chunks share the current window's buffer, but each worker holds
    /// codec scratch space on the order of one chunk; the queue is capped so
    /// that `inflight * chunk_size` stays within `mem_fraction` of free memory.
    pub fn dynamic(chunk_size: usize, mem_fraction: f64, hard_cap: usize) -> Self {
        let cores = num_cpus::get();
        let worker_count = cores.saturating_sub(1).max(1); // leave one core free

        let mut sys = sysinfo::System::new();
        sys.refresh_memory();
        let avail_bytes = sys.available_memory();

        let budget = (avail_bytes as f64 * mem_fraction) as u64;
        let per_chunk = chunk_size.max(1) as u64;
        let max_inflight = (budget / per_chunk).max(worker_count as u64);

        let profile = Self {
            worker_count,
            inflight_chunks: max_inflight.min(hard_cap.max(worker_count) as u64) as usize,
        };
        tracing::debug!(
            workers = profile.worker_count,
            inflight = profile.inflight_chunks,
            avail_bytes,
            "dynamic parallelism profile"
        );
        profile
    }

    pub fn is_parallel(&self) -> bool {
        self.worker_count > 1
    }
}

impl Default for ParallelismProfile {
    fn default() -> Self {
        Self::single_threaded()
    }
}
