//! Property tests for trace generation and cursor navigation

use bubblestep::core::{generate, generate_with, PlaybackCursor, StepKind, TraceOptions};
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<f64>> {
    // Small range so duplicates show up often
    prop::collection::vec(-20i32..20, 1..12)
        .prop_map(|v| v.into_iter().map(f64::from).collect())
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted
}

proptest! {
    #[test]
    fn final_step_is_sorted_permutation(input in values(), record_no_swap in any::<bool>()) {
        let trace = generate_with(&input, TraceOptions { record_no_swap });
        prop_assert_eq!(trace.final_step().kind, StepKind::Complete);
        let expected = sorted_copy(&input);
        prop_assert_eq!(trace.sorted(), expected.as_slice());
        prop_assert_eq!(trace.input(), input.as_slice());
    }

    #[test]
    fn sequence_numbers_are_contiguous(input in values()) {
        let trace = generate(&input);
        for (i, step) in trace.iter().enumerate() {
            prop_assert_eq!(step.sequence_number, i);
        }
    }

    #[test]
    fn swaps_only_follow_strictly_greater_comparisons(input in values()) {
        let trace = generate(&input);
        let steps = trace.steps();
        for (i, step) in steps.iter().enumerate() {
            if step.kind != StepKind::Swap {
                continue;
            }
            prop_assert!(step.did_swap);
            let compare = &steps[i - 1];
            prop_assert_eq!(compare.kind, StepKind::Compare);
            prop_assert_eq!(compare.compared_indices, step.compared_indices);
            let (l, r) = compare.compared_indices.unwrap();
            prop_assert!(compare.array_state[l] > compare.array_state[r]);
        }
    }

    #[test]
    fn only_swap_steps_are_marked_swapped(input in values()) {
        let trace = generate(&input);
        for step in &trace {
            prop_assert_eq!(step.did_swap, step.kind == StepKind::Swap);
            prop_assert_eq!(step.compared_indices.is_some(), step.kind.has_comparison());
        }
    }

    #[test]
    fn seek_then_advance_equals_next_seek(input in values(), k in 0usize..200) {
        let trace = generate(&input);
        prop_assume!(k + 1 < trace.len());

        let mut a = PlaybackCursor::new(trace.clone());
        a.seek(k).unwrap();
        let advanced = a.advance().clone();

        let mut b = PlaybackCursor::new(trace);
        let sought = b.seek(k + 1).unwrap().clone();

        prop_assert_eq!(advanced, sought);
        prop_assert_eq!(a.position(), b.position());
    }

    #[test]
    fn navigation_never_leaves_bounds(input in values(), moves in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut cursor = PlaybackCursor::new(generate(&input));
        for forward in moves {
            if forward {
                cursor.advance();
            } else {
                cursor.retreat();
            }
            prop_assert!(cursor.position() < cursor.len());
        }
    }
}

#[test]
fn sorted_input_compares_each_pair_once() {
    for record_no_swap in [true, false] {
        let trace = generate_with(&[1.0, 2.0, 3.0, 4.0], TraceOptions { record_no_swap });
        let stats = trace.stats();
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.swaps, 0);
        let kinds: Vec<StepKind> = trace.iter().map(|s| s.kind).collect();
        assert_eq!(kinds[kinds.len() - 2], StepKind::SortedEarly);
        assert_eq!(kinds[kinds.len() - 1], StepKind::Complete);
    }
}

#[test]
fn equal_values_never_swap() {
    let trace = generate(&[2.0, 2.0, 1.0]);
    for step in trace.iter().filter(|s| s.kind == StepKind::Swap) {
        let (l, r) = step.compared_indices.unwrap();
        // the pair holding the two 2s is never the one exchanged
        assert!(step.array_state[l] < step.array_state[r]);
    }
    assert_eq!(trace.sorted(), &[1.0, 2.0, 2.0]);
}
