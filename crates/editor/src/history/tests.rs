use proptest::prelude::*;

use super::*;

#[test]
fn new_history_is_empty() {
	let history: History<u32> = History::default();
	assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
	assert!(!history.can_undo());
	assert!(!history.can_redo());
}

#[test]
fn zero_limit_is_raised() {
	assert_eq!(History::<u32>::new(0).limit(), 1);
}

#[test]
fn undo_redo_cycle() {
	let mut history = History::new(10);
	history.record(1);
	history.record(2);
	// present is 3
	assert_eq!(history.undo(3), Some(2));
	assert_eq!(history.undo(2), Some(1));
	assert_eq!(history.undo(1), None);
	assert_eq!(history.future().copied().collect::<Vec<_>>(), vec![2, 3]);
	assert_eq!(history.redo(1), Some(2));
	assert_eq!(history.redo(2), Some(3));
	assert_eq!(history.redo(3), None);
	assert_eq!(history.past().copied().collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn failed_steps_have_no_side_effects() {
	let mut history: History<u32> = History::new(4);
	assert_eq!(history.undo(7), None);
	assert_eq!(history.redo(7), None);
	assert_eq!(history.past_len(), 0);
	assert_eq!(history.future_len(), 0);
}

#[test]
fn record_clears_future() {
	let mut history = History::new(10);
	history.record(1);
	history.undo(2);
	assert!(history.can_redo());
	history.record(1);
	assert!(!history.can_redo());
}

#[test]
fn past_evicts_oldest() {
	let mut history = History::new(3);
	for i in 0..5 {
		history.record(i);
	}
	assert_eq!(history.past().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
}

#[test]
fn undo_parks_present_on_future() {
	let mut history = History::new(2);
	for i in 0..2 {
		history.record(i);
	}
	assert_eq!(history.undo(2), Some(1));
	assert_eq!(history.undo(1), Some(0));
	assert_eq!(history.future_len(), 2);
	assert_eq!(history.future().copied().collect::<Vec<_>>(), vec![1, 2]);
}

proptest! {
	/// Neither stack ever exceeds the limit.
	#[test]
	fn stacks_stay_bounded(limit in 1usize..8, ops in prop::collection::vec(0u8..3, 0..64)) {
		let mut history = History::new(limit);
		let mut present = 0u32;
		for (i, op) in ops.into_iter().enumerate() {
			match op {
				0 => {
					history.record(present);
					present = i as u32 + 1;
				}
				1 => {
					if let Some(prev) = history.undo(present) {
						present = prev;
					}
				}
				_ => {
					if let Some(next) = history.redo(present) {
						present = next;
					}
				}
			}
			prop_assert!(history.past_len() <= limit);
			prop_assert!(history.future_len() <= limit);
		}
	}

	/// Undo followed by redo returns to the same present.
	#[test]
	fn undo_then_redo_is_identity(
		entries in prop::collection::vec(any::<u32>(), 1..20),
		present in any::<u32>(),
	) {
		let mut history = History::new(32);
		for entry in &entries {
			history.record(*entry);
		}
		let before = history.clone();
		let prev = history.undo(present).unwrap();
		prop_assert_eq!(prev, *entries.last().unwrap());
		prop_assert_eq!(history.redo(prev), Some(present));
		prop_assert_eq!(history, before);
	}
}
