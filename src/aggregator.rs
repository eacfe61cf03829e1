//! Concurrent place search over sampled route points.
//!
//! Each sampled point becomes one job on a bounded thread pool owned by the
//! call, so concurrent requests never share workers. Results are joined on
//! the calling thread through a channel and merged into a [`PlaceSet`], so
//! the set is never touched concurrently. The join stops at
//! the aggregation deadline: queued jobs are cancelled and points still
//! outstanding are reported as failures alongside whatever was collected.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::collector::PlaceSet;
use crate::error::TangentError;
use crate::geometry::RoutePoint;
use crate::place::Place;
use crate::request::TangentRequest;
use crate::sampler::SampledPoint;
use crate::traits::PlaceSearchProvider;

/// A sampled point whose search produced no places because it failed.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFailure {
    pub point: SampledPoint,
    pub error: TangentError,
}

/// Merged outcome of one fan-out.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Unique places in first-arrival order.
    pub places: Vec<Place>,
    /// Failed points, in arrival order followed by points cut off by the deadline.
    pub failures: Vec<QueryFailure>,
    /// Number of points queried.
    pub queried: usize,
}

impl Aggregation {
    pub fn all_failed(&self) -> bool {
        self.queried > 0 && self.failures.len() == self.queried
    }
}

type Outcome = (SampledPoint, Result<Vec<Place>, TangentError>);

/// Runs the place searches of one request at a time.
///
/// Every [`PlaceAggregator::aggregate`] call gets its own pool, so searches
/// of concurrent requests never queue behind each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceAggregator {
    max_concurrency: usize,
    deadline: Duration,
}

impl PlaceAggregator {
    /// Creates an aggregator running at most `max_concurrency` searches at once
    /// per request.
    pub fn new(max_concurrency: usize, deadline: Duration) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
            deadline,
        }
    }

    pub const fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    fn build_pool(&self, points: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
        ThreadPoolBuilder::new()
            .num_threads(self.max_concurrency.min(points))
            .thread_name(|index| format!("place-search-{index}"))
            .panic_handler(|_| tracing::error!("place search job panicked"))
            .build()
    }

    /// Searches around every point and merges the results.
    ///
    /// Returns once every job has reported or the deadline has passed.
    pub fn aggregate<S>(&self, search: &Arc<S>, request: &TangentRequest, points: &[SampledPoint]) -> Aggregation
    where
        S: PlaceSearchProvider + ?Sized + 'static,
    {
        if points.is_empty() {
            return Aggregation::default();
        }

        // Dropping the pool does not wait for jobs still in flight.
        let pool = match self.build_pool(points.len()) {
            Ok(pool) => pool,
            Err(err) => {
                tracing::error!(error = %err, "failed to start place search workers");
                let mut pending = pending_points(points);
                return Aggregation {
                    places: Vec::new(),
                    failures: drain_pending(&mut pending, &format!("could not start search workers: {err}")),
                    queried: points.len(),
                };
            }
        };

        let cancelled = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = mpsc::channel::<Outcome>();

        for &sampled in points {
            let search = Arc::clone(search);
            let cancelled = Arc::clone(&cancelled);
            let sender = sender.clone();
            let query = request.query_at(sampled.point);

            pool.spawn(move || {
                if cancelled.load(Ordering::Acquire) {
                    return;
                }
                let outcome = search.search(&query);
                if sender.send((sampled, outcome)).is_err() {
                    tracing::debug!(index = sampled.index, "place search finished after aggregation ended");
                }
            });
        }
        drop(sender);

        let mut pending = pending_points(points);
        let mut places = PlaceSet::new();
        let mut failures = Vec::new();
        // A deadline too far out to represent means waiting for every job.
        let deadline = Instant::now().checked_add(self.deadline);

        loop {
            let received = match deadline {
                Some(deadline) => receiver.recv_timeout(deadline.saturating_duration_since(Instant::now())),
                None => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok((sampled, Ok(found))) => {
                    pending.remove(&sampled.index);
                    let added = places.add_many(found);
                    tracing::debug!(index = sampled.index, added, "place search returned");
                }
                Ok((sampled, Err(error))) => {
                    pending.remove(&sampled.index);
                    tracing::warn!(index = sampled.index, %error, "place search failed");
                    failures.push(QueryFailure { point: sampled, error });
                }
                Err(RecvTimeoutError::Timeout) => {
                    cancelled.store(true, Ordering::Release);
                    tracing::warn!(
                        outstanding = pending.len(),
                        deadline = ?self.deadline,
                        "aggregation deadline elapsed"
                    );
                    let message = format!("no response within {:?}", self.deadline);
                    failures.extend(drain_pending(&mut pending, &message));
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    // Every job has finished; anything left never reported.
                    failures.extend(drain_pending(&mut pending, "search job ended without a result"));
                    break;
                }
            }
        }

        Aggregation {
            places: places.into_places(),
            failures,
            queried: points.len(),
        }
    }
}

fn pending_points(points: &[SampledPoint]) -> BTreeMap<usize, RoutePoint> {
    points.iter().map(|sampled| (sampled.index, sampled.point)).collect()
}

fn drain_pending(pending: &mut BTreeMap<usize, RoutePoint>, message: &str) -> Vec<QueryFailure> {
    std::mem::take(pending)
        .into_iter()
        .map(|(index, point)| QueryFailure {
            point: SampledPoint { index, point },
            error: TangentError::search(message),
        })
        .collect()
}
