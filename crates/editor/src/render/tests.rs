use pretty_assertions::assert_eq;
use sprig_primitives::testing::{Lambda, Rule, Slot, Value, at, hol, root, sample, var};
use sprig_primitives::{Frame, Path, Selection, derive};

use super::*;

struct Plain;

impl Formatter<Lambda> for Plain {
	fn node(&self, rule: Rule, value: &Value, kids: Vec<String>) -> String {
		match (rule, value) {
			(Rule::Var | Rule::Name, Value::Label(label)) => label.clone(),
			(Rule::Hol | Rule::BndHol, _) => "?".into(),
			(Rule::App, _) => format!("({} {})", kids[0], kids[1]),
			(Rule::Lam, _) => format!("(\\{}. {})", kids[0], kids[1]),
			_ => "!".into(),
		}
	}
}

type Resolver = fn(&State<Lambda>, &str) -> Vec<Action<Lambda>>;

fn no_candidates(_: &State<Lambda>, _: &str) -> Vec<Action<Lambda>> {
	Vec::new()
}

fn replace_var(_: &State<Lambda>, text: &str) -> Vec<Action<Lambda>> {
	vec![Action::ReplaceExp(var(text))]
}

fn insert_app(_: &State<Lambda>, _: &str) -> Vec<Action<Lambda>> {
	let frame = Frame::with_holes(&Lambda, Slot::Exp, Rule::App, Value::Unit, 0);
	vec![Action::Insert(Path::single(frame))]
}

fn show(state: &State<Lambda>, resolver: Resolver, query: Option<&Query>) -> String {
	let engine = Engine::new(Lambda);
	print(&render(&engine, state, &resolver, query), &Plain)
}

fn cursor_state(exp: Exp<Lambda>, route: &[usize]) -> State<Lambda> {
	State::new(Mode::Cursor(at(exp, route)), 8)
}

fn top_selection() -> Selection<Lambda> {
	derive(&at(sample(), &[0]), &at(sample(), &[0, 1]))
		.into_selection()
		.unwrap()
}

#[test]
fn cursor_marks_the_focus() {
	let state = cursor_state(sample(), &[1]);
	assert_eq!(show(&state, no_candidates, None), "((f (g x)) {y})");
}

#[test]
fn selection_marks_both_ends() {
	let state = State::new(Mode::Select(top_selection()), 8);
	assert_eq!(show(&state, no_candidates, None), "([0]{(f [1]{(g x)}[1])}[0] y)");
}

#[test]
fn selection_reports_validity() {
	let engine = Engine::new(Lambda).with_validator(|_: &Selection<Lambda>| false);
	let state = State::new(Mode::Select(top_selection()), 8);
	let node = render(&engine, &state, &(no_candidates as Resolver), None);
	let Node::Exp { kids, .. } = node else {
		panic!("root should be an expression node");
	};
	assert!(matches!(&kids[0], Node::SelectTop { valid: false, .. }));
}

#[test]
fn query_previews_cover_the_whole_selection() {
	let state = State::new(Mode::Select(top_selection()), 8);
	let query = Query::new("z");
	assert_eq!(
		show(&state, replace_var, Some(&query)),
		"(<z|[0]{(f [1]{(g x)}[1])}[0]> y)"
	);
	assert_eq!(
		show(&state, no_candidates, Some(&query)),
		"(<?z|[0]{(f [1]{(g x)}[1])}[0]> y)"
	);
}

#[test]
fn replace_query_previews_the_replacement() {
	let state = State::new(Mode::Cursor(root(hol())), 8);
	let query = Query::new("y");
	assert_eq!(show(&state, replace_var, Some(&query)), "<y|{?}>");
}

#[test]
fn insert_query_previews_the_wrapping() {
	let state = State::new(Mode::Cursor(root(var("x"))), 8);
	let query = Query::new("(");
	assert_eq!(show(&state, insert_app, Some(&query)), "<({x} ?)>");
}

#[test]
fn unresolved_query_is_flagged() {
	let state = cursor_state(sample(), &[1]);
	let query = Query::new("zz");
	assert_eq!(show(&state, no_candidates, Some(&query)), "((f (g x)) <?zz|{y}>)");
}

#[test]
fn blank_query_renders_plainly() {
	let state = cursor_state(sample(), &[1]);
	let query = Query::new(" ");
	assert_eq!(show(&state, replace_var, Some(&query)), "((f (g x)) {y})");
}

#[test]
fn within_rebuilds_the_tree() {
	let cursor = at(sample(), &[0, 1]);
	let node = Node::from_exp(&cursor.exp).within(&cursor.path);
	assert_eq!(node, Node::from_exp(&sample()));
}
