//! Search configuration.

/// Configuration for the Monte Carlo search.
///
/// # Examples
///
/// ```
/// use roomfit::mc::McConfig;
///
/// let config = McConfig::default()
///     .with_num_workers(8)
///     .with_iterations_per_worker(50_000);
/// ```
#[derive(Debug, Clone)]
pub struct McConfig {
    /// Number of worker threads. Each runs its full iteration budget;
    /// no upper bound is enforced.
    pub num_workers: usize,

    /// Candidates each worker generates and evaluates.
    pub iterations_per_worker: usize,

    /// Random seed for reproducibility.
    ///
    /// `Some(s)` derives a distinct seed per worker from `s`, making a
    /// single-worker run fully reproducible. `None` seeds each worker
    /// from process entropy.
    pub seed: Option<u64>,
}

impl Default for McConfig {
    fn default() -> Self {
        Self {
            num_workers: 4,
            iterations_per_worker: 100_000,
            seed: None,
        }
    }
}

impl McConfig {
    pub fn with_num_workers(mut self, n: usize) -> Self {
        self.num_workers = n;
        self
    }

    pub fn with_iterations_per_worker(mut self, n: usize) -> Self {
        self.iterations_per_worker = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Zero workers would silently search nothing, so it is rejected
    /// here rather than discovered after a no-op run.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_workers == 0 {
            return Err("num_workers must be at least 1".into());
        }
        Ok(())
    }
}
