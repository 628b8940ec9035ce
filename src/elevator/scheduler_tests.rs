/*
 * Unit tests for the LOOK ranking
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_look_up_visits_above_then_below
 * - test_look_down_visits_below_then_above
 * - test_look_equal_floor_tie_break
 * - test_look_empty_targets
 * - property tests for completeness, monotonic sweeps and no overshoot
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod scheduler_tests {
    use crate::elevator::scheduler::look_schedule;
    use crate::shared::Direction::{self, Down, Up};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn schedule(targets: &[u8], floor: u8, direction: Direction) -> Vec<u8> {
        let targets: BTreeSet<u8> = targets.iter().copied().collect();
        look_schedule(&targets, floor, direction)
    }

    #[test]
    fn test_look_up_visits_above_then_below() {
        // Purpose: Moving up at floor 3 with calls on 2 and 5 serves 5 before turning back to 2

        // Arrange
        let targets = [2, 5];

        // Act
        let result = schedule(&targets, 3, Up);

        // Assert
        assert_eq!(result, vec![5, 2]);
    }

    #[test]
    fn test_look_down_visits_below_then_above() {
        // Purpose: Moving down, the lower targets come first in descending order

        // Arrange
        let targets = [1, 2, 5, 8, 6];

        // Act
        let result = schedule(&targets, 4, Down);

        // Assert
        assert_eq!(result, vec![2, 1, 5, 6, 8]);
    }

    #[test]
    fn test_look_up_sorts_both_sweeps() {
        // Purpose: Both sweeps start at the target closest to the cabin

        // Arrange
        let targets = [9, 1, 6, 3, 7];

        // Act
        let result = schedule(&targets, 5, Up);

        // Assert
        assert_eq!(result, vec![6, 7, 9, 3, 1]);
    }

    #[test]
    fn test_look_equal_floor_tie_break() {
        // Purpose: A target on the cabin floor is served on the return sweep

        // Arrange
        let targets = [1, 3, 5];

        // Act
        let up = schedule(&targets, 3, Up);
        let down = schedule(&targets, 3, Down);

        // Assert
        assert_eq!(up, vec![5, 3, 1]);
        assert_eq!(down, vec![1, 3, 5]);
    }

    #[test]
    fn test_look_only_current_floor() {
        // Purpose: A lone target on the cabin floor is still scheduled

        // Act
        let result = schedule(&[4], 4, Up);

        // Assert
        assert_eq!(result, vec![4]);
    }

    #[test]
    fn test_look_empty_targets() {
        // Purpose: No targets gives an empty schedule

        // Act
        let result = schedule(&[], 2, Down);

        // Assert
        assert!(result.is_empty());
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Up), Just(Down)]
    }

    /// Number of leading entries belonging to the sweep in `direction`.
    fn first_sweep_len(schedule: &[u8], floor: u8, direction: Direction) -> usize {
        schedule
            .iter()
            .take_while(|&&target| match direction {
                Up => target > floor,
                Down => target < floor,
            })
            .count()
    }

    proptest! {
        #[test]
        fn prop_schedule_is_permutation_of_targets(
            targets in prop::collection::btree_set(1u8..=30, 0..20),
            floor in 1u8..=30,
            direction in direction_strategy(),
        ) {
            let result = look_schedule(&targets, floor, direction);

            prop_assert_eq!(result.len(), targets.len());
            let as_set: BTreeSet<u8> = result.iter().copied().collect();
            prop_assert_eq!(as_set, targets);
        }

        #[test]
        fn prop_each_sweep_is_strictly_monotonic(
            targets in prop::collection::btree_set(1u8..=30, 0..20),
            floor in 1u8..=30,
            direction in direction_strategy(),
        ) {
            let result = look_schedule(&targets, floor, direction);
            let split = first_sweep_len(&result, floor, direction);
            let (first, second) = result.split_at(split);

            match direction {
                Up => {
                    prop_assert!(first.windows(2).all(|w| w[0] < w[1]));
                    prop_assert!(second.windows(2).all(|w| w[0] > w[1]));
                }
                Down => {
                    prop_assert!(first.windows(2).all(|w| w[0] > w[1]));
                    prop_assert!(second.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }

        #[test]
        fn prop_no_reversal_before_targets_ahead_are_served(
            targets in prop::collection::btree_set(1u8..=30, 0..20),
            floor in 1u8..=30,
            direction in direction_strategy(),
        ) {
            let result = look_schedule(&targets, floor, direction);
            let ahead = targets
                .iter()
                .filter(|&&target| match direction {
                    Up => target > floor,
                    Down => target < floor,
                })
                .count();

            prop_assert_eq!(first_sweep_len(&result, floor, direction), ahead);
        }
    }
}
