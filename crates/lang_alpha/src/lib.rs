#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Alpha: the smallest useful language for the structural editor.
//!
//! One slot, three rules: `var(label)`, `app(f, a)` and the hole `?`. An
//! application whose argument is indented prints it on its own line.
//!
//! Queries: `(` wraps the focus in an application (two candidates: the focus
//! as function or as argument); an identifier replaces the focus with a
//! variable.

use sprig_editor::{Action, Cursor, Engine, Exp, Formatter, Grammar, RuleQueryResolver};


/// The Alpha grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alpha;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
	Exp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
	Var,
	App,
	Hol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	Var { label: String },
	App { indented_arg: bool },
	Hol,
}

impl Grammar for Alpha {
	type Slot = Slot;
	type Rule = Rule;
	type Value = Value;

	fn rules(&self, slot: Slot) -> &[Rule] {
		match slot {
			Slot::Exp => &[Rule::Var, Rule::App, Rule::Hol],
		}
	}

	fn child_slots(&self, rule: Rule) -> &[Slot] {
		match rule {
			Rule::Var | Rule::Hol => &[],
			Rule::App => &[Slot::Exp, Slot::Exp],
		}
	}

	fn default_value(&self, rule: Rule) -> Value {
		match rule {
			Rule::Var => Value::Var { label: String::new() },
			Rule::App => Value::App { indented_arg: false },
			Rule::Hol => Value::Hol,
		}
	}

	fn hole_rule(&self, slot: Slot) -> Rule {
		match slot {
			Slot::Exp => Rule::Hol,
		}
	}
}

pub fn var(label: &str) -> Exp<Alpha> {
	Exp::new(
		&Alpha,
		Slot::Exp,
		Rule::Var,
		Value::Var { label: label.into() },
		[],
	)
}

pub fn app(f: Exp<Alpha>, a: Exp<Alpha>) -> Exp<Alpha> {
	Exp::new(
		&Alpha,
		Slot::Exp,
		Rule::App,
		Value::App { indented_arg: false },
		[f, a],
	)
}

pub fn hol() -> Exp<Alpha> {
	Exp::hole(&Alpha, Slot::Exp)
}

/// Engine accepting every selection.
pub fn engine() -> Engine<Alpha> {
	Engine::new(Alpha)
}

/// Returns `true` for text usable as a variable name.
pub fn is_label(text: &str) -> bool {
	let mut chars = text.chars();
	chars
		.next()
		.is_some_and(|c| c.is_alphabetic() || c == '_')
		&& chars.all(|c| c.is_alphanumeric() || c == '_' || c == '\'')
}

/// Query resolver for Alpha.
pub fn resolver() -> RuleQueryResolver<Alpha> {
	RuleQueryResolver::new(Alpha)
		.insert_when(Rule::App, |_, text| text == "(")
		.replace_with(Rule::Var, |_, text| {
			is_label(text).then(|| Value::Var { label: text.into() })
		})
}

/// Flips argument indentation on a focused application.
pub fn toggle_indent(cursor: &Cursor<Alpha>) -> Option<Action<Alpha>> {
	match cursor.exp.value() {
		Value::App { indented_arg } => {
			let toggled = Value::App {
				indented_arg: !indented_arg,
			};
			Some(Action::ReplaceExp(cursor.exp.with_value(toggled)))
		}
		Value::Var { .. } | Value::Hol => None,
	}
}

/// Text layout for Alpha.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl Formatter<Alpha> for Printer {
	fn node(&self, _rule: Rule, value: &Value, kids: Vec<String>) -> String {
		match (value, kids.as_slice()) {
			(Value::Var { label }, _) => label.clone(),
			(Value::App { indented_arg: true }, [f, a]) => {
				format!("{f}\n  {}", a.replace('\n', "\n  "))
			}
			(Value::App { .. }, [f, a]) => format!("{f} {a}"),
			(Value::App { .. }, _) | (Value::Hol, _) => "?".into(),
		}
	}

	fn kid(&self, parent: Rule, _index: usize, kid: Rule, text: String) -> String {
		match (parent, kid) {
			(Rule::App, Rule::App) => format!("({text})"),
			_ => text,
		}
	}
}
