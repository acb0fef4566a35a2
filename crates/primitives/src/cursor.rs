//! A focus point in a tree.

use crate::direction::Direction;
use crate::exp::Exp;
use crate::grammar::Grammar;
use crate::path::{self, Path};

/// The focused expression plus the path that rebuilds every ancestor.
///
/// Invariant: [`unzip`](Self::unzip) yields a well-formed root expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<G: Grammar> {
	/// Context from the focus to the root.
	pub path: Path<G>,
	/// The focused subtree.
	pub exp: Exp<G>,
}

impl<G: Grammar> Cursor<G> {
	pub fn new(path: Path<G>, exp: Exp<G>) -> Self {
		Self { path, exp }
	}

	/// Cursor on the root of `exp`.
	pub fn root(exp: Exp<G>) -> Self {
		Self::new(Path::empty(), exp)
	}

	/// Cursor on the parent node.
	pub fn move_up(&self) -> Option<Self> {
		let (path, exp) = path::zip_up(&self.path, self.exp.clone())?;
		Some(Self { path, exp })
	}

	/// Cursor on child `index` of the focus.
	pub fn move_down(&self, index: usize) -> Option<Self> {
		let (frame, exp) = path::zip_down(index, &self.exp)?;
		Some(Self {
			path: self.path.push(frame),
			exp,
		})
	}

	/// Cursor on the previous sibling.
	pub fn move_left(&self) -> Option<Self> {
		let (path, exp) = path::zip_left(&self.path, self.exp.clone())?;
		Some(Self { path, exp })
	}

	/// Cursor on the next sibling.
	pub fn move_right(&self) -> Option<Self> {
		let (path, exp) = path::zip_right(&self.path, self.exp.clone())?;
		Some(Self { path, exp })
	}

	/// Moves one step; `Down` enters the first child.
	pub fn step(&self, dir: Direction) -> Option<Self> {
		match dir {
			Direction::Up => self.move_up(),
			Direction::Down => self.move_down(0),
			Direction::Left => self.move_left(),
			Direction::Right => self.move_right(),
		}
	}

	/// Descends along child indices.
	pub fn descend(&self, route: &[usize]) -> Option<Self> {
		route
			.iter()
			.try_fold(self.clone(), |cursor, &index| cursor.move_down(index))
	}

	/// Cursor on the root of the same tree.
	pub fn to_root(&self) -> Self {
		Self::root(self.unzip())
	}

	/// Rebuilds the whole tree.
	pub fn unzip(&self) -> Exp<G> {
		path::unzip(&self.path, self.exp.clone())
	}

	/// Number of frames between the focus and the root.
	#[inline]
	pub fn depth(&self) -> usize {
		self.path.len()
	}

	/// Same path, different focus.
	pub fn with_exp(&self, exp: Exp<G>) -> Self {
		Self {
			path: self.path.clone(),
			exp,
		}
	}

	/// Slot the focus position requires, or the focus's own slot at the root.
	pub fn required_slot(&self, grammar: &G) -> G::Slot {
		self.path.focus_slot(grammar).unwrap_or_else(|| self.exp.slot())
	}

	/// Returns `true` if the path is well formed and the focus fits its hole.
	pub fn is_well_formed(&self, grammar: &G) -> bool {
		self.path.is_well_formed(grammar) && self.exp.slot() == self.required_slot(grammar)
	}
}
