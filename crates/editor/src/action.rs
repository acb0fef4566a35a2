//! The action vocabulary understood by the engine.

use sprig_primitives::{Cursor, Direction, Exp, Grammar, Path, Selection};

/// A requested state transition.
///
/// Hosts build actions from key bindings, menus or [query](crate::query)
/// resolution and hand them to [`Engine::apply`](crate::Engine::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<G: Grammar> {
	/// Move the cursor (or, in select mode, escape to the free end and move).
	MoveCursor(Direction),
	/// Grow or shrink a selection by moving its free end.
	MoveSelect(Direction),
	SetCursor(Cursor<G>),
	SetSelect(Selection<G>),
	/// Replace the focused subtree.
	ReplaceExp(Exp<G>),
	/// Replace the selected frames.
	ReplacePath(Path<G>),
	/// Wrap the focus in the given frames.
	Insert(Path<G>),
	Undo,
	Redo,
	Copy,
	Cut,
	Paste,
	Delete,
	/// Leave select mode, keeping the free end.
	Escape,
}

impl<G: Grammar> Action<G> {
	/// Stable snake_case name of the action kind.
	pub fn name(&self) -> &'static str {
		match self {
			Self::MoveCursor(_) => "move_cursor",
			Self::MoveSelect(_) => "move_select",
			Self::SetCursor(_) => "set_cursor",
			Self::SetSelect(_) => "set_select",
			Self::ReplaceExp(_) => "replace_exp",
			Self::ReplacePath(_) => "replace_path",
			Self::Insert(_) => "insert",
			Self::Undo => "undo",
			Self::Redo => "redo",
			Self::Copy => "copy",
			Self::Cut => "cut",
			Self::Paste => "paste",
			Self::Delete => "delete",
			Self::Escape => "escape",
		}
	}

	/// Short description for logs.
	pub fn describe(&self) -> String {
		match self {
			Self::MoveCursor(dir) | Self::MoveSelect(dir) => {
				format!("{}:{}", self.name(), dir.as_str())
			}
			Self::SetCursor(cursor) => format!("{}@{}", self.name(), cursor.depth()),
			Self::ReplaceExp(exp) => format!("{}:{:?}", self.name(), exp.rule()),
			Self::ReplacePath(path) | Self::Insert(path) => match path.outermost() {
				Some(frame) => format!("{}:{:?}+{}", self.name(), frame.rule(), path.len()),
				None => format!("{}:empty", self.name()),
			},
			_ => self.name().to_string(),
		}
	}

	/// Returns `true` for actions that push a history entry when they apply.
	pub fn is_recorded(&self) -> bool {
		matches!(
			self,
			Self::ReplaceExp(_)
				| Self::ReplacePath(_)
				| Self::Insert(_)
				| Self::Copy
				| Self::Cut
				| Self::Paste
				| Self::Delete
		)
	}

	/// Returns `true` for actions that only move the focus.
	pub fn is_navigation(&self) -> bool {
		matches!(
			self,
			Self::MoveCursor(_)
				| Self::MoveSelect(_)
				| Self::SetCursor(_)
				| Self::SetSelect(_)
				| Self::Escape
		)
	}
}
