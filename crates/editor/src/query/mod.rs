//! Query resolution.
//!
//! A query is the text a user types at the focus. A [`QueryResolver`] turns it
//! into candidate actions; [`Query::index`] picks one of them, wrapping in both
//! directions so the user can cycle through candidates indefinitely.

mod rules;

pub use rules::{InsertPredicate, ReplaceParser, RuleQueryResolver};
use sprig_primitives::Grammar;

use crate::action::Action;
use crate::state::State;

/// Maps query text to candidate actions.
///
/// Closures of type `Fn(&State<G>, &str) -> Vec<Action<G>>` implement this
/// trait.
pub trait QueryResolver<G: Grammar> {
	fn resolve(&self, state: &State<G>, text: &str) -> Vec<Action<G>>;
}

impl<G, F> QueryResolver<G> for F
where
	G: Grammar,
	F: Fn(&State<G>, &str) -> Vec<Action<G>>,
{
	fn resolve(&self, state: &State<G>, text: &str) -> Vec<Action<G>> {
		self(state, text)
	}
}

/// Query text plus the candidate index the user has cycled to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
	pub text: String,
	/// Any integer; reduced modulo the candidate count.
	pub index: isize,
}

impl Query {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			index: 0,
		}
	}

	pub fn with_index(mut self, index: isize) -> Self {
		self.index = index;
		self
	}

	/// Returns `true` if the text is empty or whitespace.
	pub fn is_blank(&self) -> bool {
		self.text.trim().is_empty()
	}

	/// Moves to another candidate.
	pub fn cycle(&mut self, delta: isize) {
		self.index = self.index.wrapping_add(delta);
	}

	/// Position among `count` candidates, or `None` if there are none.
	pub fn position(&self, count: usize) -> Option<usize> {
		let count = isize::try_from(count).ok().filter(|&n| n > 0)?;
		usize::try_from(self.index.rem_euclid(count)).ok()
	}
}

/// Candidates for `text`; blank text has none.
pub fn candidates<G, R>(resolver: &R, state: &State<G>, text: &str) -> Vec<Action<G>>
where
	G: Grammar,
	R: QueryResolver<G> + ?Sized,
{
	if text.trim().is_empty() {
		return Vec::new();
	}
	resolver.resolve(state, text)
}

/// The candidate `query` currently selects.
pub fn resolve<G, R>(resolver: &R, state: &State<G>, query: &Query) -> Option<Action<G>>
where
	G: Grammar,
	R: QueryResolver<G> + ?Sized,
{
	let candidates = candidates(resolver, state, &query.text);
	let position = query.position(candidates.len())?;
	candidates.into_iter().nth(position)
}
