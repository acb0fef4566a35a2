//! Single-hole contexts (frames) and their composition (paths).
//!
//! A [`Path`] is a persistent list of [`Frame`]s, innermost first. Pushing and
//! popping share the tail, so snapshots of a cursor taken before and after a
//! move share every frame they have in common.
//!
//! The zipper algebra lives here as free functions over `(Path, Exp)` pairs:
//!
//! * [`zip_up`] rebuilds the parent of the focus
//! * [`zip_down`] splits a node at one child
//! * [`zip_left`] / [`zip_right`] swap the focus with an adjacent sibling
//! * [`unzip`] rebuilds the root

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::exp::{Children, Exp};
use crate::grammar::Grammar;

#[cfg(test)]
mod tests;

/// One rule node with exactly one child position left open.
///
/// Invariant: `left.len() + 1 + right.len()` equals the arity of `rule`, and the
/// siblings keep the slots the rule declares at their positions.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame<G: Grammar> {
	slot: G::Slot,
	rule: G::Rule,
	value: G::Value,
	/// Siblings before the hole, nearest first.
	left: Children<G>,
	/// Siblings after the hole, in order.
	right: Children<G>,
}

impl<G: Grammar> Frame<G> {
	/// Splits `exp` at child `index`, returning the frame and the child.
	pub fn split(exp: &Exp<G>, index: usize) -> Option<(Self, Exp<G>)> {
		let kids = exp.children();
		let focus = kids.get(index)?.clone();
		let frame = Self {
			slot: exp.slot(),
			rule: exp.rule(),
			value: exp.value().clone(),
			left: kids[..index].iter().rev().cloned().collect(),
			right: kids[index + 1..].iter().cloned().collect(),
		};
		Some((frame, focus))
	}

	/// A frame of `rule` open at `index` whose siblings are all holes.
	///
	/// # Panics
	///
	/// Panics if `index` is not a child position of `rule`.
	pub fn with_holes(
		grammar: &G,
		slot: G::Slot,
		rule: G::Rule,
		value: G::Value,
		index: usize,
	) -> Self {
		let slots = grammar.child_slots(rule);
		assert!(
			index < slots.len(),
			"rule {rule:?} has no child position {index}"
		);
		Self {
			slot,
			rule,
			value,
			left: slots[..index]
				.iter()
				.rev()
				.map(|&s| Exp::hole(grammar, s))
				.collect(),
			right: slots[index + 1..]
				.iter()
				.map(|&s| Exp::hole(grammar, s))
				.collect(),
		}
	}

	/// Plugs `exp` into the hole, rebuilding the node.
	pub fn fill(&self, exp: Exp<G>) -> Exp<G> {
		let mut children: Children<G> =
			SmallVec::with_capacity(self.left.len() + 1 + self.right.len());
		children.extend(self.left.iter().rev().cloned());
		children.push(exp);
		children.extend(self.right.iter().cloned());
		Exp::assemble(self.slot, self.rule, self.value.clone(), children)
	}

	/// Slot of the node this frame rebuilds.
	#[inline]
	pub fn slot(&self) -> G::Slot {
		self.slot
	}

	#[inline]
	pub fn rule(&self) -> G::Rule {
		self.rule
	}

	#[inline]
	pub fn value(&self) -> &G::Value {
		&self.value
	}

	/// Siblings before the hole, nearest first.
	#[inline]
	pub fn left(&self) -> &[Exp<G>] {
		&self.left
	}

	/// Siblings after the hole, in order.
	#[inline]
	pub fn right(&self) -> &[Exp<G>] {
		&self.right
	}

	/// Child position of the hole.
	#[inline]
	pub fn index(&self) -> usize {
		self.left.len()
	}

	/// Slot the hole must be filled with.
	pub fn hole_slot(&self, grammar: &G) -> G::Slot {
		grammar.child_slots(self.rule)[self.index()]
	}
}

impl<G: Grammar> fmt::Debug for Frame<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let left: Vec<_> = self.left.iter().rev().collect();
		write!(f, "{:?}({:?}){:?}_{:?}", self.rule, self.value, left, self.right.as_slice())
	}
}

/// A reconstruction recipe from a focus to the root, innermost frame first.
///
/// Owns no expression. Equality is frame-wise and structural.
pub struct Path<G: Grammar> {
	head: Option<Arc<Link<G>>>,
	len: usize,
}

struct Link<G: Grammar> {
	frame: Frame<G>,
	next: Path<G>,
}

impl<G: Grammar> Path<G> {
	/// The empty path (focus is the root).
	pub const fn empty() -> Self {
		Self { head: None, len: 0 }
	}

	/// A path of one frame.
	pub fn single(frame: Frame<G>) -> Self {
		Self::empty().push(frame)
	}

	/// Builds a path from frames given innermost first.
	pub fn from_frames<I>(frames: I) -> Self
	where
		I: IntoIterator<Item = Frame<G>>,
		I::IntoIter: DoubleEndedIterator,
	{
		frames.into_iter().rev().fold(Self::empty(), |path, frame| path.push(frame))
	}

	/// Number of frames.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// A new path with `frame` as the innermost frame.
	pub fn push(&self, frame: Frame<G>) -> Self {
		Self {
			len: self.len + 1,
			head: Some(Arc::new(Link {
				frame,
				next: self.clone(),
			})),
		}
	}

	/// The innermost frame and the rest of the path.
	pub fn split_first(&self) -> Option<(&Frame<G>, &Path<G>)> {
		self.head.as_deref().map(|link| (&link.frame, &link.next))
	}

	/// The innermost frame.
	pub fn innermost(&self) -> Option<&Frame<G>> {
		self.split_first().map(|(frame, _)| frame)
	}

	/// The outermost frame (nearest the root).
	pub fn outermost(&self) -> Option<&Frame<G>> {
		self.iter().last()
	}

	/// Frames innermost first.
	pub fn iter(&self) -> Iter<'_, G> {
		Iter { cursor: self }
	}

	/// Frames outermost (root side) first.
	pub fn root_first(&self) -> Vec<&Frame<G>> {
		let mut frames: Vec<_> = self.iter().collect();
		frames.reverse();
		frames
	}

	/// Child indices from the root down to the focus.
	pub fn route(&self) -> Vec<usize> {
		self.root_first().into_iter().map(Frame::index).collect()
	}

	/// `self ++ outer`: the frames of `self` placed inside `outer`.
	///
	/// Shares `outer` entirely; only the frames of `self` are relinked.
	pub fn append(&self, outer: &Path<G>) -> Path<G> {
		if outer.is_empty() {
			return self.clone();
		}
		self.root_first()
			.into_iter()
			.fold(outer.clone(), |path, frame| path.push(frame.clone()))
	}

	/// Splits off the outermost frame, returning it and the remaining inner path.
	pub fn split_outermost(&self) -> Option<(Frame<G>, Path<G>)> {
		let mut frames = self.root_first().into_iter();
		let outermost = frames.next()?.clone();
		let inner = frames.fold(Path::empty(), |path, frame| path.push(frame.clone()));
		Some((outermost, inner))
	}

	/// Slot the focus must have for this path to rebuild a well-formed tree.
	pub fn focus_slot(&self, grammar: &G) -> Option<G::Slot> {
		self.innermost().map(|frame| frame.hole_slot(grammar))
	}

	/// Returns `true` if every frame's rule belongs to its slot and each frame
	/// plugs into the hole of the frame outside it.
	pub fn is_well_formed(&self, grammar: &G) -> bool {
		let mut inner: Option<G::Slot> = None;
		for frame in self {
			if !grammar.rules(frame.slot).contains(&frame.rule) {
				return false;
			}
			if let Some(slot) = inner
				&& slot != frame.hole_slot(grammar)
			{
				return false;
			}
			inner = Some(frame.slot);
		}
		true
	}
}

impl<G: Grammar> Clone for Path<G> {
	fn clone(&self) -> Self {
		Self {
			head: self.head.clone(),
			len: self.len,
		}
	}
}

impl<G: Grammar> Default for Path<G> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<G: Grammar> PartialEq for Path<G> {
	fn eq(&self, other: &Self) -> bool {
		if self.len != other.len {
			return false;
		}
		let mut a = self;
		let mut b = other;
		loop {
			match (&a.head, &b.head) {
				(None, None) => return true,
				(Some(x), Some(y)) if Arc::ptr_eq(x, y) => return true,
				(Some(x), Some(y)) => {
					if x.frame != y.frame {
						return false;
					}
					a = &x.next;
					b = &y.next;
				}
				_ => return false,
			}
		}
	}
}

impl<G: Grammar> Eq for Path<G> {}

impl<G: Grammar> fmt::Debug for Path<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<G: Grammar> Drop for Path<G> {
	// Unlink iteratively so long paths do not overflow the stack.
	fn drop(&mut self) {
		let mut head = self.head.take();
		while let Some(link) = head {
			match Arc::try_unwrap(link) {
				Ok(mut link) => head = link.next.head.take(),
				Err(_) => break,
			}
		}
	}
}

impl<G: Grammar> FromIterator<Frame<G>> for Path<G> {
	/// Collects frames given innermost first.
	fn from_iter<T: IntoIterator<Item = Frame<G>>>(iter: T) -> Self {
		let frames: Vec<_> = iter.into_iter().collect();
		Self::from_frames(frames)
	}
}

impl<'a, G: Grammar> IntoIterator for &'a Path<G> {
	type Item = &'a Frame<G>;
	type IntoIter = Iter<'a, G>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over a path's frames, innermost first.
pub struct Iter<'a, G: Grammar> {
	cursor: &'a Path<G>,
}

impl<'a, G: Grammar> Iterator for Iter<'a, G> {
	type Item = &'a Frame<G>;

	fn next(&mut self) -> Option<Self::Item> {
		let (frame, rest) = self.cursor.split_first()?;
		self.cursor = rest;
		Some(frame)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.cursor.len, Some(self.cursor.len))
	}
}

impl<G: Grammar> ExactSizeIterator for Iter<'_, G> {}

/// Pops the innermost frame and rebuilds the parent of `exp`.
///
/// Returns `None` at the root.
pub fn zip_up<G: Grammar>(path: &Path<G>, exp: Exp<G>) -> Option<(Path<G>, Exp<G>)> {
	let (frame, rest) = path.split_first()?;
	Some((rest.clone(), frame.fill(exp)))
}

/// Descends into child `index` of `exp`.
///
/// Returns the new innermost frame and the child; `None` if out of range.
pub fn zip_down<G: Grammar>(index: usize, exp: &Exp<G>) -> Option<(Frame<G>, Exp<G>)> {
	Frame::split(exp, index)
}

/// Swaps the focus with its left sibling.
pub fn zip_left<G: Grammar>(path: &Path<G>, exp: Exp<G>) -> Option<(Path<G>, Exp<G>)> {
	let (frame, rest) = path.split_first()?;
	let (sibling, left) = frame.left.split_first()?;
	let mut right: Children<G> = SmallVec::with_capacity(frame.right.len() + 1);
	right.push(exp);
	right.extend(frame.right.iter().cloned());
	let moved = Frame {
		slot: frame.slot,
		rule: frame.rule,
		value: frame.value.clone(),
		left: left.iter().cloned().collect(),
		right,
	};
	Some((rest.push(moved), sibling.clone()))
}

/// Swaps the focus with its right sibling.
pub fn zip_right<G: Grammar>(path: &Path<G>, exp: Exp<G>) -> Option<(Path<G>, Exp<G>)> {
	let (frame, rest) = path.split_first()?;
	let (sibling, right) = frame.right.split_first()?;
	let mut left: Children<G> = SmallVec::with_capacity(frame.left.len() + 1);
	left.push(exp);
	left.extend(frame.left.iter().cloned());
	let moved = Frame {
		slot: frame.slot,
		rule: frame.rule,
		value: frame.value.clone(),
		left,
		right: right.iter().cloned().collect(),
	};
	Some((rest.push(moved), sibling.clone()))
}

/// Folds `exp` through every frame of `path`, innermost first.
pub fn unzip<G: Grammar>(path: &Path<G>, exp: Exp<G>) -> Exp<G> {
	path.iter().fold(exp, |exp, frame| frame.fill(exp))
}
