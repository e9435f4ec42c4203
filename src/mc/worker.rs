//! Per-thread search loop: generate, evaluate, attempt to improve.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;

use super::register::SearchRegister;
use super::sampler::sample_assignment;
use crate::fitness::evaluate;
use crate::problem::Problem;

/// Runs one worker for up to `iterations` candidates.
///
/// Each pass draws a fresh uniform candidate, scores it, and offers it
/// to the register; the compare against the current best happens inside
/// the register's critical section, never as a separate read. The only
/// state carried across passes is the RNG and the scratch buffer, and
/// every pass overwrites the buffer completely.
///
/// Returns the number of candidates actually evaluated (less than
/// `iterations` only when cancelled).
pub(crate) fn run_worker<R: Rng>(
    problem: &Problem,
    iterations: usize,
    rng: &mut R,
    register: &SearchRegister,
    cancel: Option<&AtomicBool>,
) -> usize {
    let mut candidate = vec![0usize; problem.num_students];
    let mut evaluated = 0;

    for _ in 0..iterations {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        sample_assignment(&mut candidate, problem.num_rooms(), rng);
        let fitness = evaluate(&candidate, &problem.rooms, &problem.incompatibilities);
        register.try_improve(fitness, &candidate);
        evaluated += 1;
    }

    evaluated
}
