//! Penalty evaluation for candidate assignments.
//!
//! Pure and deterministic: reads its arguments, allocates one local
//! occupancy buffer, and returns. Safe to call concurrently from any
//! number of workers.

use crate::problem::{Incompatibility, Room};

/// Penalty per student above a room's capacity. Linear, uncapped.
pub const OVERFLOW_WEIGHT: u64 = 10;

/// Flat penalty per incompatible pair sharing a room.
pub const CONFLICT_PENALTY: u64 = 5;

/// Scores a candidate assignment. Lower is better; zero means no
/// constraint is violated.
///
/// `assignment[i]` is the room index for student `i`. Room indices
/// outside `0..rooms.len()` are ignored in the occupancy count rather
/// than treated as an error, so a long-running search survives a buggy
/// candidate instead of crashing.
///
/// Incompatibility pairs must reference students within the assignment
/// ([`Problem::validate`](crate::problem::Problem::validate) enforces
/// this before a search starts).
pub fn evaluate(
    assignment: &[usize],
    rooms: &[Room],
    incompatibilities: &[Incompatibility],
) -> u64 {
    let mut occupancy = vec![0usize; rooms.len()];
    for &room in assignment {
        if let Some(count) = occupancy.get_mut(room) {
            *count += 1;
        }
    }

    let mut penalty = 0u64;
    for (room, &count) in rooms.iter().zip(&occupancy) {
        if count > room.capacity {
            penalty += (count - room.capacity) as u64 * OVERFLOW_WEIGHT;
        }
    }

    for inc in incompatibilities {
        if assignment[inc.student1] == assignment[inc.student2] {
            penalty += CONFLICT_PENALTY;
        }
    }

    penalty
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rooms(capacities: &[usize]) -> Vec<Room> {
        capacities.iter().map(|&c| Room { capacity: c }).collect()
    }

    fn pair(a: usize, b: usize) -> Incompatibility {
        Incompatibility {
            student1: a,
            student2: b,
        }
    }

    #[test]
    fn test_satisfying_assignment_scores_zero() {
        // Two students in separate rooms, both within capacity.
        let penalty = evaluate(&[0, 1], &rooms(&[1, 1]), &[pair(0, 1)]);
        assert_eq!(penalty, 0);
    }

    #[test]
    fn test_overflow_is_linear() {
        // Five students in a room of capacity two: 3 over, 30 penalty.
        let penalty = evaluate(&[0, 0, 0, 0, 0], &rooms(&[2]), &[]);
        assert_eq!(penalty, 30);
    }

    #[test]
    fn test_zero_capacity_room_penalizes_every_occupant() {
        let penalty = evaluate(&[0, 0, 0], &rooms(&[0]), &[]);
        assert_eq!(penalty, 30);
    }

    #[test]
    fn test_colocated_pair_costs_flat_five() {
        let penalty = evaluate(&[0, 0], &rooms(&[5]), &[pair(0, 1)]);
        assert_eq!(penalty, 5);
    }

    #[test]
    fn test_duplicate_pairs_each_count() {
        let penalty = evaluate(&[0, 0], &rooms(&[5]), &[pair(0, 1), pair(0, 1)]);
        assert_eq!(penalty, 10);
    }

    #[test]
    fn test_overflow_and_conflict_sum() {
        // Capacity 1 room holding both students of a pair: overflow 10
        // plus conflict 5.
        let penalty = evaluate(&[0, 0], &rooms(&[1]), &[pair(0, 1)]);
        assert_eq!(penalty, 15);
    }

    #[test]
    fn test_out_of_range_room_index_ignored() {
        // Student assigned to room 7 with only two rooms: not counted
        // toward any occupancy.
        let penalty = evaluate(&[7, 0], &rooms(&[1, 1]), &[]);
        assert_eq!(penalty, 0);
    }

    #[test]
    fn test_empty_assignment_scores_zero() {
        let penalty = evaluate(&[], &rooms(&[1, 1]), &[]);
        assert_eq!(penalty, 0);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let assignment = [0, 1, 0, 1, 1];
        let rooms = rooms(&[2, 2]);
        let pairs = [pair(0, 2), pair(1, 3)];
        let first = evaluate(&assignment, &rooms, &pairs);
        let second = evaluate(&assignment, &rooms, &pairs);
        assert_eq!(first, second);
    }

    proptest! {
        // Zero penalty exactly when no room overflows and no pair is
        // colocated.
        #[test]
        fn prop_zero_iff_satisfied(
            assignment in prop::collection::vec(0usize..5, 1..40),
            capacities in prop::collection::vec(0usize..10, 5),
            raw_pairs in prop::collection::vec((0usize..1000, 0usize..1000), 0..8),
        ) {
            let n = assignment.len();
            let rooms = rooms(&capacities);
            let pairs: Vec<Incompatibility> = raw_pairs
                .iter()
                .map(|&(a, b)| pair(a % n, b % n))
                .collect();

            let penalty = evaluate(&assignment, &rooms, &pairs);

            let overflowed = rooms.iter().enumerate().any(|(i, room)| {
                assignment.iter().filter(|&&r| r == i).count() > room.capacity
            });
            let colocated = pairs
                .iter()
                .any(|p| assignment[p.student1] == assignment[p.student2]);

            prop_assert_eq!(penalty == 0, !overflowed && !colocated);
        }

        // The conflict component is linear in the incompatibility list:
        // doubling the list doubles its contribution.
        #[test]
        fn prop_conflict_component_is_linear(
            assignment in prop::collection::vec(0usize..4, 1..30),
            raw_pairs in prop::collection::vec((0usize..1000, 0usize..1000), 0..8),
        ) {
            let n = assignment.len();
            let rooms = rooms(&[8, 8, 8, 8]);
            let pairs: Vec<Incompatibility> = raw_pairs
                .iter()
                .map(|&(a, b)| pair(a % n, b % n))
                .collect();
            let doubled: Vec<Incompatibility> =
                pairs.iter().chain(&pairs).copied().collect();

            let base = evaluate(&assignment, &rooms, &[]);
            let single = evaluate(&assignment, &rooms, &pairs);
            let double = evaluate(&assignment, &rooms, &doubled);

            prop_assert_eq!(double - single, single - base);
        }
    }
}
