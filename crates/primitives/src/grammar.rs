//! The grammar interface consumed by every tree operation.

use std::fmt::Debug;
use std::hash::Hash;

/// Describes the syntactic categories (slots) and productions (rules) of a
/// tree language.
///
/// Implementations must be total and consistent: every rule returned by
/// [`rules`](Self::rules) is accepted by [`child_slots`](Self::child_slots)
/// and [`default_value`](Self::default_value), and [`hole_rule`](Self::hole_rule)
/// names a zero-arity rule listed under the same slot. An inconsistent grammar
/// is a programming error and tree constructors fail fast on it.
///
/// The grammar type itself parameterizes expressions, paths and editor state,
/// so it carries the same derivable traits they do. Grammars are usually
/// zero-sized markers over static tables.
pub trait Grammar: Clone + Debug + PartialEq + Eq {
	/// Syntactic category tag.
	type Slot: Copy + Eq + Hash + Debug;
	/// Production tag.
	type Rule: Copy + Eq + Hash + Debug;
	/// Rule-specific payload (literal, label, flag).
	type Value: Clone + Eq + Debug;

	/// Rules that produce the given slot, in preference order.
	fn rules(&self, slot: Self::Slot) -> &[Self::Rule];

	/// Ordered child slots of a rule (its arity signature).
	fn child_slots(&self, rule: Self::Rule) -> &[Self::Slot];

	/// Value a freshly built node of this rule carries.
	fn default_value(&self, rule: Self::Rule) -> Self::Value;

	/// The zero-arity placeholder rule for a slot.
	fn hole_rule(&self, slot: Self::Slot) -> Self::Rule;

	/// Number of children a node of `rule` has.
	#[inline]
	fn arity(&self, rule: Self::Rule) -> usize {
		self.child_slots(rule).len()
	}

	/// Returns `true` if `rule` is the hole rule of `slot`.
	#[inline]
	fn is_hole(&self, slot: Self::Slot, rule: Self::Rule) -> bool {
		self.hole_rule(slot) == rule
	}
}
