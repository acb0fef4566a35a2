//! Table-driven query resolution.

use rustc_hash::FxHashMap;
use sprig_primitives::{Cursor, Exp, Frame, Grammar, Path};

use super::QueryResolver;
use crate::action::Action;
use crate::state::{Mode, State};

/// Decides whether query text asks to wrap the focus in a rule.
pub type InsertPredicate<G> = Box<dyn Fn(&Cursor<G>, &str) -> bool + Send + Sync>;

/// Parses query text into the payload of a replacement node.
pub type ReplaceParser<G> =
	Box<dyn Fn(&Cursor<G>, &str) -> Option<<G as Grammar>::Value> + Send + Sync>;

/// Resolver built from per-rule insert predicates and replace parsers.
///
/// Rules are consulted in the grammar's order for the focus slot. The first
/// rule whose predicate accepts the text yields one insert candidate per
/// child position of the focus slot; failing that, the first rule whose
/// parser accepts the text yields a single replacement with hole children.
/// Select mode has no candidates.
pub struct RuleQueryResolver<G: Grammar> {
	grammar: G,
	inserts: FxHashMap<G::Rule, InsertPredicate<G>>,
	replaces: FxHashMap<G::Rule, ReplaceParser<G>>,
}

impl<G: Grammar> RuleQueryResolver<G> {
	pub fn new(grammar: G) -> Self {
		Self {
			grammar,
			inserts: FxHashMap::default(),
			replaces: FxHashMap::default(),
		}
	}

	/// Registers the text that wraps the focus in `rule`.
	pub fn insert_when(
		mut self,
		rule: G::Rule,
		predicate: impl Fn(&Cursor<G>, &str) -> bool + Send + Sync + 'static,
	) -> Self {
		self.inserts.insert(rule, Box::new(predicate));
		self
	}

	/// Registers the text that replaces the focus with a `rule` node.
	pub fn replace_with(
		mut self,
		rule: G::Rule,
		parser: impl Fn(&Cursor<G>, &str) -> Option<G::Value> + Send + Sync + 'static,
	) -> Self {
		self.replaces.insert(rule, Box::new(parser));
		self
	}

	/// Candidates for `text` with the focus at `cursor`.
	pub fn candidates_at(&self, cursor: &Cursor<G>, text: &str) -> Vec<Action<G>> {
		let slot = cursor.exp.slot();
		let rules = self.grammar.rules(slot);

		for &rule in rules {
			if let Some(predicate) = self.inserts.get(&rule)
				&& predicate(cursor, text)
			{
				return self
					.grammar
					.child_slots(rule)
					.iter()
					.enumerate()
					.filter(|&(_, &kid)| kid == slot)
					.map(|(index, _)| {
						let value = self.grammar.default_value(rule);
						let frame = Frame::with_holes(&self.grammar, slot, rule, value, index);
						Action::Insert(Path::single(frame))
					})
					.collect();
			}
		}

		for &rule in rules {
			if let Some(parser) = self.replaces.get(&rule)
				&& let Some(value) = parser(cursor, text)
			{
				return vec![Action::ReplaceExp(Exp::with_holes(&self.grammar, slot, rule, value))];
			}
		}

		Vec::new()
	}
}

impl<G: Grammar> QueryResolver<G> for RuleQueryResolver<G> {
	fn resolve(&self, state: &State<G>, text: &str) -> Vec<Action<G>> {
		match state.mode() {
			Mode::Cursor(cursor) => self.candidates_at(cursor, text),
			Mode::Select(_) => Vec::new(),
		}
	}
}
