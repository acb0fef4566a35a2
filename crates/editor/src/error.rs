//! Error types for the editor engine.

use std::path::PathBuf;

use sprig_primitives::Direction;
use thiserror::Error;

/// Why an action did not apply.
///
/// A rejected action leaves the state untouched; hosts that only care whether
/// anything happened use [`Engine::apply`](crate::Engine::apply), which maps
/// every rejection to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
	/// The move would leave the tree or the selection line.
	#[error("cannot move {} from here", .0.as_str())]
	AtBoundary(Direction),
	/// The action is meaningless in the current mode.
	#[error("action requires {expected} mode")]
	WrongMode {
		/// Mode the action needs.
		expected: &'static str,
	},
	/// The host's validity check refused the selection.
	#[error("selection refused by validator")]
	InvalidSelection,
	/// A selection with no frames between its endpoints.
	#[error("selection is empty")]
	EmptySelection,
	/// Two cursors on diverging branches have no common range.
	#[error("cursors diverge; no selection spans both")]
	DivergentCursors,
	/// A path edit with no frames.
	#[error("path is empty")]
	EmptyPath,
	/// Paste with nothing on the clipboard.
	#[error("clipboard is empty")]
	ClipboardEmpty,
	/// The clipboard kind does not fit the current mode.
	#[error("clipboard contents do not fit the current mode")]
	ClipboardMismatch,
	/// A graft whose slots do not line up with the focus position.
	#[error("slot mismatch at the focus")]
	SlotMismatch,
	#[error("nothing to undo")]
	NothingToUndo,
	#[error("nothing to redo")]
	NothingToRedo,
	/// The query resolved to no candidate.
	#[error("query has no candidate")]
	NoCandidate,
}

/// Errors raised while loading an [`EditorConfig`](crate::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// TOML syntax or schema error.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
	/// The config file could not be read.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// File that failed to read.
		path: PathBuf,
		/// Underlying error.
		error: std::io::Error,
	},
	/// A field parsed but holds an unusable value.
	#[error("invalid value for '{key}': {reason}")]
	InvalidValue {
		/// Offending key.
		key: &'static str,
		/// What is wrong with it.
		reason: String,
	},
}
