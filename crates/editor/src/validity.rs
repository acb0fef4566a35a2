//! Host-supplied selection validity.

use sprig_primitives::{Grammar, Selection};

/// Decides whether a selection may exist.
///
/// The engine asks before entering or adjusting a selection and before cut,
/// copy, delete or a path paste consumes one. Closures of type
/// `Fn(&Selection<G>) -> bool` implement this trait.
pub trait SelectionValidator<G: Grammar> {
	fn is_valid(&self, selection: &Selection<G>) -> bool;
}

/// Accepts every selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllowAll;

impl<G: Grammar> SelectionValidator<G> for AllowAll {
	fn is_valid(&self, _selection: &Selection<G>) -> bool {
		true
	}
}

impl<G, F> SelectionValidator<G> for F
where
	G: Grammar,
	F: Fn(&Selection<G>) -> bool,
{
	fn is_valid(&self, selection: &Selection<G>) -> bool {
		self(selection)
	}
}
