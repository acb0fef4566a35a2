//! Expression trees.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use thiserror::Error;

use crate::grammar::Grammar;

#[cfg(test)]
mod tests;

/// Inline storage for a node's children. Most rules have at most two.
pub type Children<G> = SmallVec<[Exp<G>; 2]>;

/// Errors raised by the checked expression constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpError {
	/// The rule does not produce the requested slot.
	#[error("rule {rule} does not belong to slot {slot}")]
	ForeignRule {
		/// Debug rendering of the rule.
		rule: String,
		/// Debug rendering of the slot.
		slot: String,
	},
	/// Wrong number of children for the rule.
	#[error("rule {rule} expects {expected} children, got {got}")]
	Arity {
		/// Debug rendering of the rule.
		rule: String,
		/// Arity declared by the grammar.
		expected: usize,
		/// Number of children supplied.
		got: usize,
	},
	/// A child does not belong to the slot the rule requires at its position.
	#[error("child {index} of rule {rule} has slot {got}, expected {expected}")]
	ChildSlot {
		/// Debug rendering of the rule.
		rule: String,
		/// Position of the offending child.
		index: usize,
		/// Debug rendering of the required slot.
		expected: String,
		/// Debug rendering of the supplied child's slot.
		got: String,
	},
}

/// An immutable, structurally shared tree node.
///
/// Cloning is a reference-count bump; edits rebuild only the nodes on the
/// path from the edit to the root and share every untouched subtree.
///
/// Invariant: the number of children equals the rule's arity and each child
/// belongs to the slot the rule declares at its position.
pub struct Exp<G: Grammar> {
	node: Arc<Node<G>>,
}

struct Node<G: Grammar> {
	slot: G::Slot,
	rule: G::Rule,
	value: G::Value,
	children: Children<G>,
}

impl<G: Grammar> Exp<G> {
	/// Builds a node, validating it against the grammar.
	pub fn try_new(
		grammar: &G,
		slot: G::Slot,
		rule: G::Rule,
		value: G::Value,
		children: impl IntoIterator<Item = Exp<G>>,
	) -> Result<Self, ExpError> {
		let children: Children<G> = children.into_iter().collect();

		if !grammar.rules(slot).contains(&rule) {
			return Err(ExpError::ForeignRule {
				rule: format!("{rule:?}"),
				slot: format!("{slot:?}"),
			});
		}

		let slots = grammar.child_slots(rule);
		if slots.len() != children.len() {
			return Err(ExpError::Arity {
				rule: format!("{rule:?}"),
				expected: slots.len(),
				got: children.len(),
			});
		}

		if let Some((index, (expected, child))) = slots
			.iter()
			.zip(children.iter())
			.enumerate()
			.find(|(_, (expected, child))| **expected != child.slot())
		{
			return Err(ExpError::ChildSlot {
				rule: format!("{rule:?}"),
				index,
				expected: format!("{expected:?}"),
				got: format!("{:?}", child.slot()),
			});
		}

		Ok(Self::assemble(slot, rule, value, children))
	}

	/// Builds a node, panicking if it violates the grammar.
	///
	/// # Panics
	///
	/// Panics on any condition [`try_new`](Self::try_new) reports.
	pub fn new(
		grammar: &G,
		slot: G::Slot,
		rule: G::Rule,
		value: G::Value,
		children: impl IntoIterator<Item = Exp<G>>,
	) -> Self {
		match Self::try_new(grammar, slot, rule, value, children) {
			Ok(exp) => exp,
			Err(err) => panic!("malformed expression: {err}"),
		}
	}

	/// The placeholder node of `slot`.
	///
	/// # Panics
	///
	/// Panics if the grammar declares a hole rule that has children.
	pub fn hole(grammar: &G, slot: G::Slot) -> Self {
		let rule = grammar.hole_rule(slot);
		assert!(
			grammar.arity(rule) == 0,
			"hole rule {rule:?} of slot {slot:?} must have no children"
		);
		Self::assemble(slot, rule, grammar.default_value(rule), Children::new())
	}

	/// A node of `rule` carrying `value` whose children are all holes.
	///
	/// # Panics
	///
	/// Panics if `rule` does not produce `slot`.
	pub fn with_holes(grammar: &G, slot: G::Slot, rule: G::Rule, value: G::Value) -> Self {
		let children = grammar
			.child_slots(rule)
			.iter()
			.map(|&kid| Self::hole(grammar, kid));
		Self::new(grammar, slot, rule, value, children)
	}

	/// Assembles a node from parts already known to be consistent.
	pub(crate) fn assemble(
		slot: G::Slot,
		rule: G::Rule,
		value: G::Value,
		children: Children<G>,
	) -> Self {
		Self {
			node: Arc::new(Node {
				slot,
				rule,
				value,
				children,
			}),
		}
	}

	/// The slot this node fills.
	#[inline]
	pub fn slot(&self) -> G::Slot {
		self.node.slot
	}

	/// The rule that produced this node.
	#[inline]
	pub fn rule(&self) -> G::Rule {
		self.node.rule
	}

	/// The rule payload.
	#[inline]
	pub fn value(&self) -> &G::Value {
		&self.node.value
	}

	/// Children in order.
	#[inline]
	pub fn children(&self) -> &[Exp<G>] {
		&self.node.children
	}

	/// The child at `index`, if any.
	#[inline]
	pub fn child(&self, index: usize) -> Option<&Exp<G>> {
		self.node.children.get(index)
	}

	/// Returns `true` if this node is the hole of its slot.
	pub fn is_hole(&self, grammar: &G) -> bool {
		grammar.is_hole(self.slot(), self.rule())
	}

	/// Copy of this node with a different payload.
	pub fn with_value(&self, value: G::Value) -> Self {
		Self::assemble(self.slot(), self.rule(), value, self.node.children.clone())
	}

	/// Total number of nodes in the tree.
	pub fn size(&self) -> usize {
		1 + self.children().iter().map(Exp::size).sum::<usize>()
	}

	/// Returns `true` if both handles point at the same allocation.
	#[inline]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.node, &other.node)
	}

	/// Route (child indices from this node) to the first hole in pre-order,
	/// not descending into the subtree at `skip`.
	pub fn first_hole(&self, grammar: &G, skip: Option<&[usize]>) -> Option<Vec<usize>> {
		let mut route = Vec::new();
		first_hole_from(self, grammar, skip, &mut route).then_some(route)
	}
}

fn first_hole_from<G: Grammar>(
	exp: &Exp<G>,
	grammar: &G,
	skip: Option<&[usize]>,
	route: &mut Vec<usize>,
) -> bool {
	if skip == Some(route.as_slice()) {
		return false;
	}
	if exp.is_hole(grammar) {
		return true;
	}
	for (i, kid) in exp.children().iter().enumerate() {
		route.push(i);
		if first_hole_from(kid, grammar, skip, route) {
			return true;
		}
		route.pop();
	}
	false
}

impl<G: Grammar> Clone for Exp<G> {
	fn clone(&self) -> Self {
		Self {
			node: Arc::clone(&self.node),
		}
	}
}

impl<G: Grammar> PartialEq for Exp<G> {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
			|| (self.node.slot == other.node.slot
				&& self.node.rule == other.node.rule
				&& self.node.value == other.node.value
				&& self.node.children == other.node.children)
	}
}

impl<G: Grammar> Eq for Exp<G> {}

impl<G: Grammar> fmt::Debug for Exp<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}({:?})", self.rule(), self.value())?;
		if !self.children().is_empty() {
			f.debug_list().entries(self.children()).finish()?;
		}
		Ok(())
	}
}
