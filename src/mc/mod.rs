//! Monte Carlo random search.
//!
//! Pure uniform sampling: every candidate is drawn independently, with
//! no trajectory, neighborhood, or acceptance criterion. Worker threads
//! race to improve a single mutex-guarded best-solution register; that
//! register is the only mutable shared state in a run.

mod config;
mod register;
mod runner;
mod sampler;
mod worker;

pub use config::McConfig;
pub use register::{BestSolution, SearchRegister};
pub use runner::{McResult, McRunner};
pub use sampler::sample_assignment;
