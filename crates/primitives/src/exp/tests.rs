use pretty_assertions::assert_eq;

use super::{Exp, ExpError};
use crate::Grammar;
use crate::testing::{Lambda, Rule, Slot, Value, app, hol, lam, name, sample, var};

#[test]
fn try_new_checks_arity() {
	let err = Exp::try_new(&Lambda, Slot::Exp, Rule::App, Value::Unit, [var("f")]).unwrap_err();
	assert_eq!(
		err,
		ExpError::Arity {
			rule: "App".into(),
			expected: 2,
			got: 1,
		}
	);
}

#[test]
fn try_new_checks_child_slots() {
	let err = Exp::try_new(&Lambda, Slot::Exp, Rule::Lam, Value::Unit, [var("x"), var("x")])
		.unwrap_err();
	assert!(matches!(err, ExpError::ChildSlot { index: 0, .. }), "{err}");
}

#[test]
fn try_new_checks_rule_slot() {
	let err = Exp::try_new(&Lambda, Slot::Bnd, Rule::Var, Value::Unit, []).unwrap_err();
	assert!(matches!(err, ExpError::ForeignRule { .. }));
	assert_eq!(err.to_string(), "rule Var does not belong to slot Bnd");
}

#[test]
#[should_panic(expected = "malformed expression")]
fn new_panics_on_malformed_input() {
	let _ = Exp::new(&Lambda, Slot::Exp, Rule::Var, Value::Unit, [hol()]);
}

#[test]
fn hole_uses_slot_hole_rule() {
	let h = Exp::hole(&Lambda, Slot::Bnd);
	assert_eq!(h.rule(), Rule::BndHol);
	assert!(h.is_hole(&Lambda));
	assert!(!var("x").is_hole(&Lambda));
}

#[test]
fn with_holes_fills_every_child() {
	let l = Exp::with_holes(&Lambda, Slot::Exp, Rule::Lam, Lambda.default_value(Rule::Lam));
	assert_eq!(l.children().len(), 2);
	assert_eq!(l.children()[0].rule(), Rule::BndHol);
	assert_eq!(l.children()[1].rule(), Rule::Hol);
}

#[test]
fn equality_is_structural() {
	assert_eq!(sample(), sample());
	assert_ne!(app(var("f"), var("x")), app(var("x"), var("f")));
	assert_ne!(var("a"), var("b"));
}

#[test]
fn clones_share_storage() {
	let e = sample();
	let c = e.clone();
	assert!(e.ptr_eq(&c));
	assert!(!e.ptr_eq(&sample()));
}

#[test]
fn size_counts_nodes() {
	assert_eq!(hol().size(), 1);
	assert_eq!(sample().size(), 7);
	assert_eq!(lam("x", var("x")).size(), 3);
}

#[test]
fn first_hole_is_preorder() {
	let e = app(app(var("f"), hol()), hol());
	assert_eq!(e.first_hole(&Lambda, None), Some(vec![0, 1]));
	assert_eq!(e.first_hole(&Lambda, Some(&[0])), Some(vec![1]));
	assert_eq!(sample().first_hole(&Lambda, None), None);
	assert_eq!(hol().first_hole(&Lambda, Some(&[])), None);
}

#[test]
fn with_value_keeps_children() {
	let e = lam("x", var("x"));
	let renamed = e.children()[0].with_value(Value::Label("y".into()));
	assert_eq!(renamed, name("y"));
}

#[test]
fn debug_is_compact() {
	assert_eq!(format!("{:?}", app(var("f"), hol())), r#"App(Unit)[Var(Label("f")), Hol(Unit)]"#);
}
