//! Search orchestration: spawn workers, join, collect the best.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::McConfig;
use super::register::{BestSolution, SearchRegister};
use super::worker;
use crate::problem::Problem;

/// Result of a Monte Carlo search run.
#[derive(Debug, Clone)]
pub struct McResult {
    /// The best solution found, or `None` if no candidate was ever
    /// evaluated (zero iterations, or cancelled before the first pass).
    pub best: Option<BestSolution>,

    /// Total candidates evaluated across all workers.
    pub evaluations: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the parallel Monte Carlo search.
///
/// # Usage
///
/// ```
/// use roomfit::mc::{McConfig, McRunner};
/// use roomfit::problem::{Problem, Room};
///
/// let problem = Problem::new(vec![Room { capacity: 2 }; 3], 5, vec![]);
/// let config = McConfig::default()
///     .with_num_workers(2)
///     .with_iterations_per_worker(1_000)
///     .with_seed(42);
/// let result = McRunner::run(&problem, &config);
/// assert!(result.best.is_some());
/// ```
pub struct McRunner;

impl McRunner {
    /// Runs the search to completion.
    ///
    /// # Panics
    /// Panics if the configuration or problem is invalid (call
    /// [`McConfig::validate`] and [`Problem::validate`] first to get a
    /// descriptive error), or if a worker thread panics — a silently
    /// lost worker would bias the search with no symptom, so the whole
    /// run aborts instead.
    pub fn run(problem: &Problem, config: &McConfig) -> McResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// Workers check the flag once per iteration and wind down without
    /// blocking; the best solution found up to that point is still
    /// returned.
    pub fn run_with_cancel(
        problem: &Problem,
        config: &McConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> McResult {
        config.validate().expect("invalid McConfig");
        problem.validate().expect("invalid Problem");

        let register = SearchRegister::new();

        // One OS thread per worker, all borrowing the same problem and
        // register; the scope joins every worker before returning.
        let evaluations = thread::scope(|s| {
            let handles: Vec<_> = (0..config.num_workers)
                .map(|id| {
                    let mut rng = worker_rng(config.seed, id);
                    let register = &register;
                    let cancel = cancel.as_deref();
                    s.spawn(move || {
                        worker::run_worker(
                            problem,
                            config.iterations_per_worker,
                            &mut rng,
                            register,
                            cancel,
                        )
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("search worker panicked"))
                .sum()
        });

        let cancelled = cancel.is_some_and(|flag| flag.load(Ordering::Relaxed));

        McResult {
            best: register.into_best(),
            evaluations,
            cancelled,
        }
    }
}

/// Builds the private RNG for one worker.
///
/// With an explicit seed, each worker derives a distinct seed so runs
/// are reproducible without the workers mirroring each other; without
/// one, each worker is seeded from process entropy.
fn worker_rng(seed: Option<u64>, worker_id: usize) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s.wrapping_add(worker_id as u64)),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
