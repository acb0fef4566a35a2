//! Contiguous ranges between two cursors that share an ancestor context.

use crate::cursor::Cursor;
use crate::direction::Direction;
use crate::exp::Exp;
use crate::grammar::Grammar;
use crate::path::{self, Frame, Path};


/// Which end of a selection is free to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orient {
	/// The ancestor-side end moves; the bottom stays fixed.
	Top,
	/// The descendant-side end moves; the top stays fixed.
	Bot,
}

impl Orient {
	pub fn flip(self) -> Self {
		match self {
			Self::Top => Self::Bot,
			Self::Bot => Self::Top,
		}
	}
}

/// A range of frames between a top endpoint and a bottom endpoint.
///
/// The top endpoint is the focus of `above`; the bottom endpoint is `exp`,
/// reached from the top by the frames of `below` (innermost first). A
/// selection produced by [`derive`] never has an empty `below`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<G: Grammar> {
	/// Shared ancestor context of both endpoints.
	pub above: Path<G>,
	/// Frames from the bottom endpoint up to the top endpoint.
	pub below: Path<G>,
	/// Subtree at the bottom endpoint.
	pub exp: Exp<G>,
	pub orient: Orient,
}

/// Outcome of [`derive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation<G: Grammar> {
	/// Both cursors focus the same node.
	Empty,
	/// The focuses sit on diverging branches; no single range holds both.
	Divergent,
	/// The minimal selection spanning both focuses.
	Range(Selection<G>),
}

impl<G: Grammar> Derivation<G> {
	pub fn into_selection(self) -> Option<Selection<G>> {
		match self {
			Self::Range(sel) => Some(sel),
			Self::Empty | Self::Divergent => None,
		}
	}
}

/// Result of moving the free end of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adjusted<G: Grammar> {
	/// The range is still non-empty.
	Range(Selection<G>),
	/// Both ends met; the range collapsed to this point.
	Collapsed(Cursor<G>),
}

/// Computes the selection spanning two cursors into the same tree.
///
/// `free` becomes the movable end: if it is the ancestor the result is
/// oriented [`Orient::Top`], if it is the descendant [`Orient::Bot`].
pub fn derive<G: Grammar>(free: &Cursor<G>, fixed: &Cursor<G>) -> Derivation<G> {
	let a = free.path.root_first();
	let b = fixed.path.root_first();

	let shared = a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count();

	let rest = |frames: &[&Frame<G>]| -> Path<G> {
		frames[shared..]
			.iter()
			.fold(Path::empty(), |path, frame| path.push((*frame).clone()))
	};

	let above = || {
		// Shared prefix, reusing the tail of `free.path`.
		let mut path = &free.path;
		for _ in shared..a.len() {
			path = match path.split_first() {
				Some((_, rest)) => rest,
				None => break,
			};
		}
		path.clone()
	};

	match (a.len() == shared, b.len() == shared) {
		(true, true) => Derivation::Empty,
		(true, false) => Derivation::Range(Selection {
			above: above(),
			below: rest(&b),
			exp: fixed.exp.clone(),
			orient: Orient::Top,
		}),
		(false, true) => Derivation::Range(Selection {
			above: above(),
			below: rest(&a),
			exp: free.exp.clone(),
			orient: Orient::Bot,
		}),
		(false, false) => Derivation::Divergent,
	}
}

impl<G: Grammar> Selection<G> {
	/// Cursor at the top endpoint.
	pub fn top(&self) -> Cursor<G> {
		Cursor::new(self.above.clone(), path::unzip(&self.below, self.exp.clone()))
	}

	/// Cursor at the bottom endpoint.
	pub fn bottom(&self) -> Cursor<G> {
		Cursor::new(self.below.append(&self.above), self.exp.clone())
	}

	/// Cursor at the free end.
	pub fn free(&self) -> Cursor<G> {
		match self.orient {
			Orient::Top => self.top(),
			Orient::Bot => self.bottom(),
		}
	}

	/// Cursor at the fixed end.
	pub fn fixed(&self) -> Cursor<G> {
		match self.orient {
			Orient::Top => self.bottom(),
			Orient::Bot => self.top(),
		}
	}

	/// Collapses the selection onto its free end.
	pub fn escape(&self) -> Cursor<G> {
		self.free()
	}

	/// Same range, other end free.
	pub fn flipped(&self) -> Self {
		Self {
			orient: self.orient.flip(),
			..self.clone()
		}
	}

	/// Rebuilds the whole tree.
	pub fn unzip(&self) -> Exp<G> {
		path::unzip(&self.above, path::unzip(&self.below, self.exp.clone()))
	}

	/// Returns `true` if both paths chain into each other and the bottom
	/// expression fits the innermost selected frame.
	pub fn is_well_formed(&self, grammar: &G) -> bool {
		self.bottom().is_well_formed(grammar)
	}

	/// Slot of the node at the top endpoint.
	pub fn top_slot(&self) -> G::Slot {
		self.below
			.outermost()
			.map(|frame| frame.slot())
			.unwrap_or_else(|| self.exp.slot())
	}

	/// Moves the free end one step.
	///
	/// Returns `None` if the move would leave the tree or carry the free end
	/// off the line between the endpoints.
	pub fn step(&self, dir: Direction) -> Option<Adjusted<G>> {
		match self.orient {
			Orient::Top => self.step_top(dir),
			Orient::Bot => self.step_bot(dir),
		}
	}

	fn step_top(&self, dir: Direction) -> Option<Adjusted<G>> {
		match dir {
			Direction::Up => {
				let (frame, above) = self.above.split_first()?;
				Some(Adjusted::Range(Self {
					above: above.clone(),
					below: self.below.append(&Path::single(frame.clone())),
					exp: self.exp.clone(),
					orient: Orient::Top,
				}))
			}
			Direction::Down => {
				let (frame, below) = self.below.split_outermost()?;
				let above = self.above.push(frame);
				if below.is_empty() {
					return Some(Adjusted::Collapsed(Cursor::new(above, self.exp.clone())));
				}
				Some(Adjusted::Range(Self {
					above,
					below,
					exp: self.exp.clone(),
					orient: Orient::Top,
				}))
			}
			Direction::Left | Direction::Right => None,
		}
	}

	fn step_bot(&self, dir: Direction) -> Option<Adjusted<G>> {
		let (below, exp) = match dir {
			Direction::Up => path::zip_up(&self.below, self.exp.clone())?,
			Direction::Down => {
				let (frame, exp) = path::zip_down(0, &self.exp)?;
				(self.below.push(frame), exp)
			}
			Direction::Left => path::zip_left(&self.below, self.exp.clone())?,
			Direction::Right => path::zip_right(&self.below, self.exp.clone())?,
		};
		if below.is_empty() {
			return Some(Adjusted::Collapsed(Cursor::new(self.above.clone(), exp)));
		}
		Some(Adjusted::Range(Self {
			above: self.above.clone(),
			below,
			exp,
			orient: Orient::Bot,
		}))
	}
}
