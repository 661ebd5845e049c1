//! Parallel clique enumeration on static partitions.
//!
//! The candidate list is split into one contiguous range per worker.
//! Each worker runs as a task on a dedicated rayon pool and reports the
//! global index of every clique it finds, followed by exactly one
//! terminal message. The calling thread collects messages until every
//! worker has reported its terminal message, so the number of matches
//! never has to be known up front.
use std::{
    any::Any,
    num::NonZeroUsize,
    ops::Range,
    panic::{self, AssertUnwindSafe},
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use crate::{
    combinatoric::{generate_combinations, partition_ranges},
    debug::{ValidationError, WorkerError},
    graph::{AdjacencyMatrix, Candidate, GraphError},
    time, Error,
};

use super::verify_clique;

#[derive(Debug, Clone, Default)]
pub struct ParallelSettings {
    /// Number of workers and thus partitions.
    pub workers: usize,
    /// Upper bound for the time the caller waits for messages of the workers.
    /// Once it expires the workers are stopped, but the call still returns
    /// only after every running worker has finished its current candidate.
    pub timeout: Option<Duration>,
    /// Raising this flag makes the workers stop after their current candidate.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl ParallelSettings {
    #[cfg(test)]
    pub fn new(workers: usize) -> Self {
        ParallelSettings {
            workers,
            ..Default::default()
        }
    }
}

/// What a single worker did with its range.
#[derive(Debug, Clone)]
pub struct WorkerReport {
    pub worker: usize,
    pub range: Range<usize>,
    pub verified: usize,
    pub matches: usize,
    pub elapsed: Duration,
    /// Set if the worker left its range before the end.
    pub stopped_early: bool,
}

#[derive(Debug)]
pub struct ParallelOutcome {
    /// Cliques in the order of the candidate list.
    pub cliques: Vec<Candidate>,
    pub number_of_candidates: usize,
    pub reports: Vec<WorkerReport>,
    pub generation_time: Duration,
    pub aggregation_time: Duration,
}

enum WorkerMessage {
    Match { index: usize },
    Done(WorkerReport),
    Failed { worker: usize, reason: String },
}

struct StopSignal<'a> {
    internal: &'a AtomicBool,
    external: Option<&'a AtomicBool>,
}

impl StopSignal<'_> {
    fn is_raised(&self) -> bool {
        self.internal.load(Ordering::Relaxed)
            || self
                .external
                .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

/// All cliques of size `k`, verified by `workers` concurrent workers.
/// The result is in the same order as the serial enumeration.
#[cfg(test)]
pub fn enumerate_parallel(
    graph: &AdjacencyMatrix,
    k: usize,
    workers: usize,
) -> Result<Vec<Candidate>, Error> {
    let outcome = enumerate_parallel_with(graph, k, &ParallelSettings::new(workers))?;
    Ok(outcome.cliques)
}

pub fn enumerate_parallel_with(
    graph: &AdjacencyMatrix,
    k: usize,
    settings: &ParallelSettings,
) -> Result<ParallelOutcome, Error> {
    if settings.workers == 0 {
        return Err(ValidationError::InvalidWorkerCount(0).into());
    }

    time!(generation_time, candidates, generate_combinations(k, graph.size())?);

    let mut outcome = enumerate_candidates(graph, candidates, settings, verify_clique)?;
    outcome.generation_time = generation_time;
    Ok(outcome)
}

/// Distributes the given candidates among the workers and
/// keeps those accepted by `verify`.
fn enumerate_candidates<F>(
    graph: &AdjacencyMatrix,
    mut candidates: Vec<Candidate>,
    settings: &ParallelSettings,
    verify: F,
) -> Result<ParallelOutcome, Error>
where
    F: Fn(&AdjacencyMatrix, &[usize]) -> Result<bool, GraphError> + Sync,
{
    let workers = settings.workers;
    let ranges = partition_ranges(candidates.len(), workers)?;

    // Partitions are tasks, not threads.
    let threads = thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(workers);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("clique-worker-{}", index))
        .build()
        .map_err(|e| WorkerError::PoolCreation(e.to_string()))?;

    let internal_stop = AtomicBool::new(false);
    let stop = StopSignal {
        internal: &internal_stop,
        external: settings.cancel.as_deref(),
    };
    let (sender, receiver) = mpsc::channel();
    let start_time = Instant::now();

    let aggregated = {
        let candidates = &candidates[..];
        let stop = &stop;
        let verify = &verify;

        pool.in_place_scope(|scope| {
            for (worker, range) in ranges.into_iter().enumerate() {
                let sender = sender.clone();
                scope.spawn(move |_| {
                    run_worker(worker, range, graph, candidates, verify, stop, sender)
                });
            }
            drop(sender);

            let aggregated = aggregate(&receiver, workers, settings.timeout, start_time);
            if aggregated.is_err() {
                internal_stop.store(true, Ordering::Relaxed);
            }
            aggregated
        })
    };
    let aggregation_time = start_time.elapsed();

    let (mut matches, mut reports) = aggregated?;
    if reports.iter().any(|report| report.stopped_early) {
        return Err(WorkerError::Cancelled.into());
    }

    matches.sort_unstable();
    reports.sort_unstable_by_key(|report| report.worker);
    let cliques = matches
        .into_iter()
        .map(|index| std::mem::take(&mut candidates[index]))
        .collect();

    Ok(ParallelOutcome {
        cliques,
        number_of_candidates: candidates.len(),
        reports,
        generation_time: Duration::ZERO,
        aggregation_time,
    })
}

fn run_worker<F>(
    worker: usize,
    range: Range<usize>,
    graph: &AdjacencyMatrix,
    candidates: &[Candidate],
    verify: &F,
    stop: &StopSignal<'_>,
    sender: Sender<WorkerMessage>,
) where
    F: Fn(&AdjacencyMatrix, &[usize]) -> Result<bool, GraphError>,
{
    let start_time = Instant::now();
    let mut verified = 0;
    let mut matches = 0;
    let mut stopped_early = false;

    let scan = panic::catch_unwind(AssertUnwindSafe(|| -> Result<(), GraphError> {
        for index in range.clone() {
            if stop.is_raised() {
                stopped_early = true;
                break;
            }
            if verify(graph, candidates[index].as_slice())? {
                matches += 1;
                // The receiver only disappears once the caller has given up.
                let _ = sender.send(WorkerMessage::Match { index });
            }
            verified += 1;
        }
        Ok(())
    }));

    let message = match scan {
        Ok(Ok(())) => WorkerMessage::Done(WorkerReport {
            worker,
            range,
            verified,
            matches,
            elapsed: start_time.elapsed(),
            stopped_early,
        }),
        Ok(Err(graph_error)) => WorkerMessage::Failed {
            worker,
            reason: graph_error.to_string(),
        },
        Err(payload) => WorkerMessage::Failed {
            worker,
            reason: panic_reason(payload),
        },
    };
    let _ = sender.send(message);
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(reason) = payload.downcast_ref::<&str>() {
        reason.to_string()
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Receives until every worker sent its terminal message.
fn aggregate(
    receiver: &Receiver<WorkerMessage>,
    workers: usize,
    timeout: Option<Duration>,
    start_time: Instant,
) -> Result<(Vec<usize>, Vec<WorkerReport>), WorkerError> {
    let mut matches = Vec::new();
    let mut reports = Vec::with_capacity(workers);
    let mut finished = 0;

    while finished < workers {
        let received = match timeout {
            Some(timeout) => {
                let remaining = (start_time + timeout).saturating_duration_since(Instant::now());
                receiver.recv_timeout(remaining)
            }
            None => receiver
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(WorkerMessage::Match { index }) => matches.push(index),
            Ok(WorkerMessage::Done(report)) => {
                reports.push(report);
                finished += 1;
            }
            Ok(WorkerMessage::Failed { worker, reason }) => {
                return Err(WorkerError::Failed { worker, reason });
            }
            Err(RecvTimeoutError::Timeout) => {
                return Err(WorkerError::TimedOut(timeout.unwrap_or_default()));
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(WorkerError::Disconnected {
                    finished,
                    expected: workers,
                });
            }
        }
    }

    Ok((matches, reports))
}
