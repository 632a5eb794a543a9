//! Property-based tests for the sift engine
//!
//! These tests verify, for arbitrary inputs and both heap orders:
//! - The finished sequence is sorted and a permutation of the input
//! - The heap boundary only shrinks, one slot per extraction
//! - Each step swaps at most one pair of elements
//! - Stepping an idle engine changes nothing
//! - History grows by exactly one record per productive step

use heapstep::sift::{HeapOrder, Phase, SiftEngine, SiftError, StepKind};
use proptest::prelude::*;

fn order_strategy() -> impl Strategy<Value = HeapOrder> {
    prop_oneof![Just(HeapOrder::Max), Just(HeapOrder::Min)]
}

fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..48)
}

fn finished_engine(values: Vec<i64>, order: HeapOrder) -> SiftEngine<i64> {
    let mut engine = SiftEngine::new(values);
    engine.start(order);
    engine.run_to_completion().expect("Run failed");
    engine
}

proptest! {
    /// Final sequence is sorted in the order's direction
    #[test]
    fn run_sorts_input(values in values_strategy(), order in order_strategy()) {
        let mut expected = values.clone();
        expected.sort();
        if order == HeapOrder::Min {
            expected.reverse();
        }

        let engine = finished_engine(values, order);
        prop_assert_eq!(engine.values(), expected.as_slice());
        prop_assert_eq!(engine.phase(), Phase::Idle);
        prop_assert_eq!(engine.heap_boundary(), 0);
    }

    /// Boundary equals n while building, then shrinks by one per extraction
    #[test]
    fn boundary_is_monotonic(values in values_strategy(), order in order_strategy()) {
        let n = values.len();
        let engine = finished_engine(values, order);
        let records = engine.history().records();

        let mut previous = n;
        for pair in records.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            match after.kind {
                StepKind::Extracted => {
                    prop_assert_eq!(after.heap_boundary + 1, before.heap_boundary);
                }
                StepKind::Finished => prop_assert_eq!(after.heap_boundary, 0),
                _ => prop_assert_eq!(after.heap_boundary, before.heap_boundary),
            }
            if after.phase == Phase::Building {
                prop_assert_eq!(after.heap_boundary, n);
            }
            prop_assert!(after.heap_boundary <= previous);
            previous = after.heap_boundary;
        }
    }

    /// At most two positions change per step, and only through the recorded swap
    #[test]
    fn each_step_swaps_at_most_once(values in values_strategy(), order in order_strategy()) {
        let engine = finished_engine(values, order);
        let records = engine.history().records();

        for pair in records.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            let changed: Vec<usize> = (0..before.values.len())
                .filter(|&i| before.values[i] != after.values[i])
                .collect();
            prop_assert!(changed.len() <= 2);
            match after.swap {
                Some((a, b)) => {
                    prop_assert_eq!(before.values[a], after.values[b]);
                    prop_assert_eq!(before.values[b], after.values[a]);
                }
                None => prop_assert!(changed.is_empty()),
            }
        }
    }

    /// Work queue indices stay in range; sorting holds a single sift session
    #[test]
    fn work_queue_stays_in_bounds(values in values_strategy(), order in order_strategy()) {
        let n = values.len();
        let engine = finished_engine(values, order);

        for record in engine.history().records() {
            prop_assert!(record.work_queue.iter().all(|&i| i < n));
            prop_assert!(record.active.len() <= 3);
            if record.phase == Phase::Sorting {
                prop_assert!(record.work_queue.len() <= 1);
            }
        }
    }

    /// Stepping after completion is a no-op
    #[test]
    fn completion_is_idempotent(values in values_strategy(), order in order_strategy()) {
        let mut engine = finished_engine(values, order);
        let values_done = engine.values().to_vec();
        let records = engine.history().len();

        for _ in 0..3 {
            prop_assert_eq!(engine.step().unwrap_err(), SiftError::NothingToDo);
        }
        prop_assert_eq!(engine.values(), values_done.as_slice());
        prop_assert_eq!(engine.heap_boundary(), 0);
        prop_assert_eq!(engine.history().len(), records);
    }

    /// len(history) == 1 + number of productive steps
    #[test]
    fn history_grows_one_record_per_step(
        values in values_strategy(),
        order in order_strategy(),
        extra in 0usize..5,
    ) {
        let mut engine = SiftEngine::new(values);
        engine.start(order);

        let mut productive = 0;
        let mut calls = 0;
        loop {
            calls += 1;
            match engine.step() {
                Ok(record) => {
                    productive += 1;
                    prop_assert_eq!(record.index, productive);
                }
                Err(SiftError::NothingToDo) => break,
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }
        for _ in 0..extra {
            calls += 1;
            let _ = engine.step();
        }

        prop_assert_eq!(engine.history().len(), 1 + productive);
        prop_assert!(calls > productive);
    }

    /// Total steps stay within O(n log n)
    #[test]
    fn step_count_is_n_log_n(values in values_strategy(), order in order_strategy()) {
        let n = values.len();
        let mut engine = SiftEngine::new(values);
        engine.start(order);
        let steps = engine.run_to_completion().expect("Run failed");

        let log = (usize::BITS - n.leading_zeros()) as usize;
        prop_assert!(steps <= 4 * n * (log + 1) + 4);
    }
}
