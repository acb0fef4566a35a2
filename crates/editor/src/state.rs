//! Editor state values.

use sprig_primitives::{Cursor, Exp, Grammar, Path, Selection};

use crate::history::History;

/// Where the user is working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<G: Grammar> {
	/// A single focus point.
	Cursor(Cursor<G>),
	/// A non-empty range with one movable end.
	Select(Selection<G>),
}

impl<G: Grammar> Mode<G> {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Cursor(_) => "cursor",
			Self::Select(_) => "select",
		}
	}

	pub fn cursor(&self) -> Option<&Cursor<G>> {
		match self {
			Self::Cursor(cursor) => Some(cursor),
			Self::Select(_) => None,
		}
	}

	pub fn selection(&self) -> Option<&Selection<G>> {
		match self {
			Self::Cursor(_) => None,
			Self::Select(selection) => Some(selection),
		}
	}

	/// The cursor, or the free end of the selection.
	pub fn focus(&self) -> Cursor<G> {
		match self {
			Self::Cursor(cursor) => cursor.clone(),
			Self::Select(selection) => selection.free(),
		}
	}

	/// Rebuilds the whole tree.
	pub fn unzip(&self) -> Exp<G> {
		match self {
			Self::Cursor(cursor) => cursor.unzip(),
			Self::Select(selection) => selection.unzip(),
		}
	}
}

/// Copied or cut material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clipboard<G: Grammar> {
	Empty,
	/// A subtree, from cursor mode.
	Exp(Exp<G>),
	/// A run of frames, from select mode.
	Path(Path<G>),
}

impl<G: Grammar> Default for Clipboard<G> {
	fn default() -> Self {
		Self::Empty
	}
}

/// The part of a state that undo and redo restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<G: Grammar> {
	pub mode: Mode<G>,
	pub clipboard: Clipboard<G>,
}

/// A complete editor state.
///
/// States are values: the engine never mutates one in place, and every
/// unchanged tree, path and history entry is shared with the state it was
/// derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State<G: Grammar> {
	pub(crate) mode: Mode<G>,
	pub(crate) clipboard: Clipboard<G>,
	pub(crate) history: History<Snapshot<G>>,
}

impl<G: Grammar> State<G> {
	/// A state in `mode` with an empty clipboard and history.
	pub fn new(mode: Mode<G>, history_limit: usize) -> Self {
		Self {
			mode,
			clipboard: Clipboard::Empty,
			history: History::new(history_limit),
		}
	}

	pub fn mode(&self) -> &Mode<G> {
		&self.mode
	}

	pub fn clipboard(&self) -> &Clipboard<G> {
		&self.clipboard
	}

	pub fn history(&self) -> &History<Snapshot<G>> {
		&self.history
	}

	/// The current tree.
	pub fn root(&self) -> Exp<G> {
		self.mode.unzip()
	}

	/// Copies out the restorable part.
	pub fn snapshot(&self) -> Snapshot<G> {
		Snapshot {
			mode: self.mode.clone(),
			clipboard: self.clipboard.clone(),
		}
	}

	pub(crate) fn restore(&mut self, snapshot: Snapshot<G>) {
		self.mode = snapshot.mode;
		self.clipboard = snapshot.clipboard;
	}
}
