//! Static problem instance: rooms, students, incompatibilities.
//!
//! A [`Problem`] is built once by the caller and shared read-only by
//! every worker for the duration of a run. Nothing here is mutated
//! after construction, so no synchronization is needed beyond keeping
//! the instance alive until all workers have joined.

/// A room with a fixed capacity.
///
/// Capacity zero is legal; any occupant of such a room incurs the
/// overflow penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Maximum occupancy before the overflow penalty applies.
    pub capacity: usize,
}

/// An unordered pair of students that should not share a room.
///
/// Duplicate pairs are allowed and each contributes its own penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incompatibility {
    pub student1: usize,
    pub student2: usize,
}

/// A complete problem instance.
#[derive(Debug, Clone)]
pub struct Problem {
    /// The rooms students can be assigned to.
    pub rooms: Vec<Room>,

    /// Number of students to assign. Student indices are `0..num_students`.
    pub num_students: usize,

    /// Pairs of students penalized for sharing a room.
    pub incompatibilities: Vec<Incompatibility>,
}

impl Problem {
    pub fn new(
        rooms: Vec<Room>,
        num_students: usize,
        incompatibilities: Vec<Incompatibility>,
    ) -> Self {
        Self {
            rooms,
            num_students,
            incompatibilities,
        }
    }

    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// Validates the instance.
    ///
    /// Rejects instances with no rooms (nothing to sample from) and
    /// incompatibilities referencing students outside `0..num_students`.
    /// Must pass before any worker is spawned.
    pub fn validate(&self) -> Result<(), String> {
        if self.rooms.is_empty() {
            return Err("problem must have at least one room".into());
        }
        for inc in &self.incompatibilities {
            if inc.student1 >= self.num_students || inc.student2 >= self.num_students {
                return Err(format!(
                    "incompatibility ({}, {}) references a student outside 0..{}",
                    inc.student1, inc.student2, self.num_students
                ));
            }
        }
        Ok(())
    }
}
