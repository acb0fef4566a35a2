//! A small lambda-calculus grammar for tests.
//!
//! Two slots (`Exp`, `Bnd`) so slot mismatches can be exercised: `lam` binds a
//! `Bnd` name over an `Exp` body.

use crate::{Cursor, Exp, Grammar, Path};

/// Lambda calculus with holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lambda;

/// Slots of [`Lambda`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
	Exp,
	Bnd,
}

/// Rules of [`Lambda`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
	Var,
	App,
	Lam,
	Hol,
	Name,
	BndHol,
}

/// Payloads of [`Lambda`] nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	Label(String),
	Unit,
}

impl Grammar for Lambda {
	type Slot = Slot;
	type Rule = Rule;
	type Value = Value;

	fn rules(&self, slot: Slot) -> &[Rule] {
		match slot {
			Slot::Exp => &[Rule::Var, Rule::App, Rule::Lam, Rule::Hol],
			Slot::Bnd => &[Rule::Name, Rule::BndHol],
		}
	}

	fn child_slots(&self, rule: Rule) -> &[Slot] {
		match rule {
			Rule::Var | Rule::Hol | Rule::Name | Rule::BndHol => &[],
			Rule::App => &[Slot::Exp, Slot::Exp],
			Rule::Lam => &[Slot::Bnd, Slot::Exp],
		}
	}

	fn default_value(&self, rule: Rule) -> Value {
		match rule {
			Rule::Var | Rule::Name => Value::Label(String::new()),
			_ => Value::Unit,
		}
	}

	fn hole_rule(&self, slot: Slot) -> Rule {
		match slot {
			Slot::Exp => Rule::Hol,
			Slot::Bnd => Rule::BndHol,
		}
	}
}

pub type LExp = Exp<Lambda>;
pub type LPath = Path<Lambda>;
pub type LCursor = Cursor<Lambda>;

pub fn var(label: &str) -> LExp {
	Exp::new(&Lambda, Slot::Exp, Rule::Var, Value::Label(label.into()), [])
}

pub fn hol() -> LExp {
	Exp::hole(&Lambda, Slot::Exp)
}

pub fn app(f: LExp, a: LExp) -> LExp {
	Exp::new(&Lambda, Slot::Exp, Rule::App, Value::Unit, [f, a])
}

pub fn name(label: &str) -> LExp {
	Exp::new(&Lambda, Slot::Bnd, Rule::Name, Value::Label(label.into()), [])
}

pub fn lam(binder: &str, body: LExp) -> LExp {
	Exp::new(&Lambda, Slot::Exp, Rule::Lam, Value::Unit, [name(binder), body])
}

/// `(f (g x)) y`, a tree with some depth on both sides.
pub fn sample() -> LExp {
	app(app(var("f"), app(var("g"), var("x"))), var("y"))
}

/// Cursor at the root of `exp`.
pub fn root(exp: LExp) -> LCursor {
	Cursor::root(exp)
}

/// Cursor reached from the root of `exp` by descending along `route`.
///
/// # Panics
///
/// Panics if the route leaves the tree.
pub fn at(exp: LExp, route: &[usize]) -> LCursor {
	Cursor::root(exp)
		.descend(route)
		.unwrap_or_else(|| panic!("route {route:?} leaves the tree"))
}
