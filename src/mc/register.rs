//! Shared best-solution register.

use std::sync::Mutex;

/// A fitness value paired with the assignment that produced it.
///
/// The two fields are only ever written together under the register's
/// lock, so a snapshot is always internally consistent: the assignment
/// scores exactly the stored fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSolution {
    pub fitness: u64,
    /// Room index per student.
    pub assignment: Vec<usize>,
}

/// Thread-safe holder of the best solution found so far.
///
/// All cross-worker coordination goes through [`try_improve`]: the
/// comparison and the conditional write happen inside one critical
/// section, so the stored fitness is monotonically non-increasing over
/// a run and no two updates can interleave. Workers spend the bulk of
/// their time generating and evaluating outside the lock; the critical
/// section is just a compare plus a conditional copy.
///
/// [`try_improve`]: SearchRegister::try_improve
#[derive(Debug, Default)]
pub struct SearchRegister {
    slot: Mutex<Option<BestSolution>>,
}

impl SearchRegister {
    /// Creates an empty register. The empty state compares worse than
    /// any real fitness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the candidate iff it is strictly better than the
    /// current best. Returns whether it was installed.
    ///
    /// Ties lose: the first solution found at a given fitness is kept,
    /// which makes the final fitness deterministic-in-value whenever a
    /// unique optimum exists (which assignment wins among equals still
    /// depends on worker timing).
    pub fn try_improve(&self, fitness: u64, assignment: &[usize]) -> bool {
        let mut slot = self.slot.lock().expect("register lock poisoned");
        match slot.as_mut() {
            Some(best) if fitness >= best.fitness => false,
            Some(best) => {
                best.fitness = fitness;
                best.assignment.clear();
                best.assignment.extend_from_slice(assignment);
                true
            }
            None => {
                *slot = Some(BestSolution {
                    fitness,
                    assignment: assignment.to_vec(),
                });
                true
            }
        }
    }

    /// Clones the current best, or `None` if nothing was ever accepted.
    ///
    /// Intended for use after all workers have joined; calling it while
    /// workers are still running is safe but returns a racy snapshot.
    pub fn snapshot(&self) -> Option<BestSolution> {
        self.slot.lock().expect("register lock poisoned").clone()
    }

    /// Consumes the register, returning the best without cloning.
    pub fn into_best(self) -> Option<BestSolution> {
        self.slot.into_inner().expect("register lock poisoned")
    }
}
