//! stream/worker.rs
//! Chunk execution: inline on the caller's thread, or on a crossbeam-channel
//! worker pool.
//!
//! Each pool worker owns its own `CodecAdapter`. Results come back unordered
//! and are folded into the run's accumulator; only distributional statistics
//! are reported, so order does not matter.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread::JoinHandle;

use bytes::Bytes;
use crossbeam::channel::{self, Receiver, Sender};
use tracing::warn;

use crate::compression::{ChunkMeasurement, CodecAdapter, CodecKind, CompressionError, Direction};
use crate::stream::parallelism::ParallelismProfile;
use crate::telemetry::SizeAccumulator;
use crate::types::BenchError;

pub type ChunkResult = Result<ChunkMeasurement, CompressionError>;

/// Single worker loop.
///
/// A codec error is reported and the loop carries on. A panic is reported as
/// `WorkerPanicked` for the chunk that caused it and ends this worker.
pub fn run_chunk_worker<F>(rx: Receiver<Bytes>, tx: Sender<ChunkResult>, mut measure: F)
where
    F: FnMut(&[u8]) -> ChunkResult,
{
    while let Ok(chunk) = rx.recv() {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| measure(&chunk)));
        drop(chunk);
        let (result, panicked) = match outcome {
            Ok(result) => (result, false),
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                (Err(CompressionError::WorkerPanicked { msg }), true)
            }
        };
        if let Err(e) = &result {
            warn!("chunk failed: {e}");
        }
        if tx.send(result).is_err() || panicked {
            break;
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

pub struct WorkerPool {
    job_tx: Option<Sender<Bytes>>,
    result_rx: Receiver<ChunkResult>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `profile.worker_count` workers. Adapters are built up front so
    /// a bad level fails here rather than inside a thread.
    pub fn spawn(
        profile: &ParallelismProfile,
        codec: CodecKind,
        level: Option<i32>,
        direction: Direction,
    ) -> Result<Self, BenchError> {
        Self::spawn_with(profile, |_| {
            let mut adapter = CodecAdapter::new(codec, level)?;
            Ok(move |chunk: &[u8]| adapter.measure_chunk(direction, chunk))
        })
    }

    /// Spawn workers whose per-chunk measurement comes from `make_measure`,
    /// called once per worker index before that worker starts.
    pub fn spawn_with<F, M>(profile: &ParallelismProfile, mut make_measure: F) -> Result<Self, BenchError>
    where
        F: FnMut(usize) -> Result<M, BenchError>,
        M: FnMut(&[u8]) -> ChunkResult + Send + 'static,
    {
        let (job_tx, job_rx) = channel::bounded::<Bytes>(profile.inflight_chunks.max(1));
        let (result_tx, result_rx) = channel::unbounded::<ChunkResult>();

        let mut handles = Vec::with_capacity(profile.worker_count);
        for i in 0..profile.worker_count {
            let measure = make_measure(i)?;
            let rx = job_rx.clone();
            let tx = result_tx.clone();
            let handle = std::thread::Builder::new()
                .name(format!("chunk-worker-{i}"))
                .spawn(move || run_chunk_worker(rx, tx, measure))?;
            handles.push(handle);
        }

        Ok(Self { job_tx: Some(job_tx), result_rx, handles })
    }

    pub fn worker_count(&self) -> usize {
        self.handles.len()
    }

    /// Process every chunk and wait for all of them before returning, so no
    /// chunk outlives the call. The first codec error is returned after the
    /// remaining results have drained.
    pub fn process<I>(&mut self, chunks: I, acc: &mut SizeAccumulator) -> Result<(), BenchError>
    where
        I: IntoIterator<Item = Bytes>,
    {
        let job_tx = self.job_tx.as_ref().ok_or(BenchError::Pipeline("worker pool already shut down"))?;

        let mut sent = 0usize;
        let mut received = 0usize;
        let mut first_err: Option<CompressionError> = None;

        for chunk in chunks {
            // Drain what is ready so results never pile up behind a full queue.
            while let Ok(res) = self.result_rx.try_recv() {
                received += 1;
                fold(res, acc, &mut first_err);
            }
            if job_tx.send(chunk).is_err() {
                while let Ok(res) = self.result_rx.try_recv() {
                    fold(res, acc, &mut first_err);
                }
                return Err(first_err.map_or(BenchError::Pipeline("all chunk workers exited"), BenchError::from));
            }
            sent += 1;
        }

        while received < sent {
            // Disconnects once every worker has exited and its results are drained.
            let Ok(res) = self.result_rx.recv() else {
                return Err(first_err.map_or(
                    BenchError::Pipeline("chunk workers exited before finishing"),
                    BenchError::from,
                ));
            };
            received += 1;
            fold(res, acc, &mut first_err);
        }

        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

fn fold(res: ChunkResult, acc: &mut SizeAccumulator, first_err: &mut Option<CompressionError>) {
    match res {
        Ok(m) => acc.record(&m),
        Err(e) => {
            if first_err.is_none() {
                *first_err = Some(e);
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the job channel ends every worker loop.
        self.job_tx.take();
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                warn!("chunk worker panicked");
            }
        }
    }
}

/// Where chunks run.
pub enum Executor {
    Inline { adapter: CodecAdapter, direction: Direction },
    Pool(WorkerPool),
}

impl Executor {
    pub fn new(
        profile: &ParallelismProfile,
        codec: CodecKind,
        level: Option<i32>,
        direction: Direction,
    ) -> Result<Self, BenchError> {
        if profile.is_parallel() {
            Ok(Executor::Pool(WorkerPool::spawn(profile, codec, level, direction)?))
        } else {
            Ok(Executor::Inline { adapter: CodecAdapter::new(codec, level)?, direction })
        }
    }

    pub fn worker_count(&self) -> usize {
        match self {
            Executor::Inline { .. } => 1,
            Executor::Pool(pool) => pool.worker_count(),
        }
    }

    /// Process chunks in order (inline) or concurrently (pool). Stops at the
    /// first codec error inline; the pool finishes the batch first.
    pub fn process<I>(&mut self, chunks: I, acc: &mut SizeAccumulator) -> Result<(), BenchError>
    where
        I: IntoIterator<Item = Bytes>,
    {
        match self {
            Executor::Inline { adapter, direction } => {
                for chunk in chunks {
                    let m = adapter.measure_chunk(*direction, &chunk)?;
                    acc.record(&m);
                }
                Ok(())
            }
            Executor::Pool(pool) => pool.process(chunks, acc),
        }
    }
}
