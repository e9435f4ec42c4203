//! Parallel Monte Carlo search for constrained room assignment.
//!
//! Assigns a fixed population of students to a fixed set of rooms with
//! finite capacity, minimizing a penalty over capacity overflow and
//! pairwise incompatibilities. The search is pure random sampling:
//! worker threads independently draw uniform candidate assignments and
//! race to improve a single shared best-solution register.
//!
//! # Architecture
//!
//! - [`problem`] — the immutable problem instance shared read-only by
//!   all workers for the duration of a run.
//! - [`fitness`] — the pure penalty evaluator.
//! - [`mc`] — the search engine: configuration, candidate sampler,
//!   per-thread worker loop, shared best register, and the runner that
//!   spawns and joins the workers.
//!
//! The engine minimizes penalty but gives no satisfaction guarantee:
//! the reported assignment is the best the random search found, never
//! proven optimal.

pub mod fitness;
pub mod mc;
pub mod problem;
