use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{Frame, Path, unzip, zip_down, zip_left, zip_right, zip_up};
use crate::testing::strategies::arb_cursor;
use crate::testing::{Lambda, Rule, Slot, Value, app, at, hol, name, root, sample, var};
use crate::{Cursor, Grammar};

#[test]
fn zip_up_at_root_fails() {
	assert!(zip_up(&Path::empty(), sample()).is_none());
	assert!(root(sample()).move_up().is_none());
}

#[test]
fn zip_down_splits_children() {
	let e = app(var("f"), var("x"));
	let (frame, focus) = zip_down(1, &e).expect("child 1");
	assert_eq!(focus, var("x"));
	assert_eq!(frame.index(), 1);
	assert_eq!(frame.left(), &[var("f")]);
	assert!(frame.right().is_empty());
	assert_eq!(frame.rule(), Rule::App);
	assert_eq!(frame.fill(focus), e);
}

#[test]
fn zip_down_out_of_range_fails() {
	assert!(zip_down(2, &app(var("f"), var("x"))).is_none());
	assert!(zip_down(0, &var("x")).is_none());
}

#[test]
fn left_siblings_are_nearest_first() {
	let (frame, _) = zip_down(0, &app(var("a"), var("b"))).expect("child 0");
	assert_eq!(frame.hole_slot(&Lambda), Slot::Exp);
	let c = at(app(app(var("f"), var("g")), var("h")), &[0, 1]);
	let frame = c.path.innermost().expect("frame");
	assert_eq!(frame.left(), &[var("f")]);
}

#[test]
fn sideways_moves_swap_focus() {
	let c = at(sample(), &[0]);
	let right = c.move_right().expect("right sibling");
	assert_eq!(right.exp, var("y"));
	assert!(right.move_right().is_none());

	let back = right.move_left().expect("left sibling");
	assert_eq!(back, c);
	assert!(back.move_left().is_none());
}

#[test]
fn sideways_at_root_fails() {
	assert!(zip_left(&Path::empty(), hol()).is_none());
	assert!(zip_right(&Path::empty(), hol()).is_none());
}

#[test]
fn unzip_rebuilds_root() {
	let c = at(sample(), &[0, 1, 1]);
	assert_eq!(c.exp, var("x"));
	assert_eq!(c.depth(), 3);
	assert_eq!(unzip(&c.path, c.exp.clone()), sample());
}

#[test]
fn edits_share_untouched_subtrees() {
	let tree = sample();
	let c = at(tree.clone(), &[0, 1, 1]);
	let edited = c.with_exp(hol()).unzip();
	assert!(edited.children()[1].ptr_eq(&tree.children()[1]));
	assert!(edited.children()[0].children()[0].ptr_eq(&tree.children()[0].children()[0]));
}

#[test]
fn append_nests_inner_inside_outer() {
	let c = at(sample(), &[0, 1, 0]);
	let frames: Vec<_> = c.path.iter().cloned().collect();
	let inner = Path::from_frames(frames[..1].to_vec());
	let outer = Path::from_frames(frames[1..].to_vec());
	assert_eq!(inner.append(&outer), c.path);
	assert_eq!(Path::empty().append(&outer), outer);
	assert_eq!(inner.append(&Path::empty()), inner);
}

#[test]
fn split_outermost_returns_root_frame() {
	let c = at(sample(), &[0, 1]);
	let (outermost, inner) = c.path.split_outermost().expect("non-empty");
	assert_eq!(outermost.index(), 0);
	assert_eq!(outermost.rule(), Rule::App);
	assert_eq!(inner.len(), 1);
	assert_eq!(inner.append(&Path::single(outermost)), c.path);
}

#[test]
fn route_lists_indices_root_first() {
	assert_eq!(at(sample(), &[0, 1, 1]).path.route(), vec![0, 1, 1]);
	assert!(Path::<Lambda>::empty().route().is_empty());
}

#[test]
fn frames_with_holes() {
	let value = Lambda.default_value(Rule::App);
	let frame = Frame::with_holes(&Lambda, Slot::Exp, Rule::App, value, 1);
	assert_eq!(frame.left(), &[hol()]);
	assert_eq!(frame.fill(var("x")), app(hol(), var("x")));
	assert_eq!(
		Frame::with_holes(&Lambda, Slot::Exp, Rule::Lam, Value::Unit, 1).left()[0].slot(),
		Slot::Bnd
	);
}

#[test]
fn well_formed_paths_chain_slots() {
	let app_left = Frame::with_holes(&Lambda, Slot::Exp, Rule::App, Value::Unit, 0);
	let lam_body = Frame::with_holes(&Lambda, Slot::Exp, Rule::Lam, Value::Unit, 1);
	let lam_binder = Frame::with_holes(&Lambda, Slot::Exp, Rule::Lam, Value::Unit, 0);

	assert!(Path::<Lambda>::empty().is_well_formed(&Lambda));
	assert!(Path::from_frames([app_left.clone(), lam_body]).is_well_formed(&Lambda));
	// An `Exp` node cannot fill a binder position.
	assert!(!Path::from_frames([app_left, lam_binder]).is_well_formed(&Lambda));

	let foreign = Frame::with_holes(&Lambda, Slot::Bnd, Rule::App, Value::Unit, 0);
	assert!(!Path::single(foreign).is_well_formed(&Lambda));
}

#[test]
fn cursors_check_the_focus_slot() {
	assert!(at(sample(), &[0, 1]).is_well_formed(&Lambda));
	assert!(root(name("x")).is_well_formed(&Lambda));
	assert!(!at(sample(), &[0, 1]).with_exp(name("x")).is_well_formed(&Lambda));
}

#[test]
fn path_equality_is_structural() {
	let a = at(sample(), &[0, 1]).path;
	let b = at(sample(), &[0, 1]).path;
	let c = at(sample(), &[0, 0]).path;
	assert_eq!(a, b);
	assert_ne!(a, c);
	assert_ne!(a, at(sample(), &[0]).path);
}

#[test]
fn long_paths_drop_without_overflow() {
	let mut exp = hol();
	for _ in 0..50_000 {
		exp = app(exp, hol());
	}
	let mut cursor = Cursor::root(exp);
	while let Some(next) = cursor.move_down(0) {
		cursor = next;
	}
	assert_eq!(cursor.depth(), 50_000);
	drop(cursor);
}

proptest! {
	/// Moving up then back down into the same child restores the cursor.
	#[test]
	fn up_then_down_roundtrips(c in arb_cursor()) {
		prop_assume!(!c.path.is_empty());
		let index = c.path.innermost().map(Frame::index).unwrap_or_default();
		let up = c.move_up().expect("non-root cursor moves up");
		prop_assert_eq!(up.move_down(index), Some(c));
	}

	/// Rebuilding the root and descending along the route reproduces the path.
	#[test]
	fn unzip_then_descend_reproduces_path(c in arb_cursor()) {
		let rebuilt = Cursor::root(c.unzip()).descend(&c.path.route());
		prop_assert_eq!(rebuilt, Some(c));
	}

	#[test]
	fn generated_cursors_are_well_formed(c in arb_cursor()) {
		prop_assert!(c.is_well_formed(&Lambda));
	}

	/// Every navigation step keeps the tree intact.
	#[test]
	fn moves_preserve_tree(c in arb_cursor()) {
		let tree = c.unzip();
		for dir in crate::Direction::ALL {
			if let Some(moved) = c.step(dir) {
				prop_assert_eq!(moved.unzip(), tree.clone());
			}
		}
	}
}
