//! The action reducer.
//!
//! [`Engine`] is a pure function from `(state, action)` to the next state. It
//! owns the grammar, the host's [`SelectionValidator`] and the
//! [`EditorConfig`], and never mutates the state it was given.
//!
//! # Transitions
//!
//! ```text
//! edit        replace_exp replace_path insert cut copy paste delete
//!             -> push {mode, clipboard} onto past, clear future
//! navigation  move_cursor move_select set_cursor set_select escape
//!             -> no history entry, clear future
//! undo / redo -> swap present with the top of past / future
//! ```


use sprig_primitives::{
	Adjusted, Cursor, Derivation, Direction, Exp, Grammar, Orient, Path, Selection, derive, unzip,
};
use tracing::trace;

use crate::action::Action;
use crate::config::EditorConfig;
use crate::error::Rejection;
use crate::query::{self, Query, QueryResolver};
use crate::state::{Clipboard, Mode, Snapshot, State};
use crate::validity::{AllowAll, SelectionValidator};

/// Pure structural editing reducer.
#[derive(Debug, Clone)]
pub struct Engine<G: Grammar, V = AllowAll> {
	grammar: G,
	validator: V,
	config: EditorConfig,
}

/// What a successful action does to the state.
enum Transition<G: Grammar> {
	Edit(Snapshot<G>),
	Navigate(Mode<G>),
	Undo,
	Redo,
}

impl<G: Grammar> Engine<G> {
	/// An engine that accepts every selection.
	pub fn new(grammar: G) -> Self {
		Self {
			grammar,
			validator: AllowAll,
			config: EditorConfig::default(),
		}
	}
}

impl<G: Grammar, V: SelectionValidator<G>> Engine<G, V> {
	/// Swaps in a selection validator.
	pub fn with_validator<W: SelectionValidator<G>>(self, validator: W) -> Engine<G, W> {
		Engine {
			grammar: self.grammar,
			validator,
			config: self.config,
		}
	}

	pub fn with_config(mut self, config: EditorConfig) -> Self {
		self.config = config;
		self
	}

	pub fn grammar(&self) -> &G {
		&self.grammar
	}

	pub fn validator(&self) -> &V {
		&self.validator
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	/// Cursor on the hole of `root_slot`, empty clipboard and history.
	pub fn initial_state(&self, root_slot: G::Slot) -> State<G> {
		let mode = Mode::Cursor(Cursor::root(Exp::hole(&self.grammar, root_slot)));
		State::new(mode, self.config.history_limit)
	}

	/// Applies `action`, or returns `None` if it does not apply.
	pub fn apply(&self, state: &State<G>, action: &Action<G>) -> Option<State<G>> {
		self.try_apply(state, action).ok()
	}

	/// Applies `action`, reporting why it was refused.
	pub fn try_apply(&self, state: &State<G>, action: &Action<G>) -> Result<State<G>, Rejection> {
		let result = self
			.transition(state, action)
			.and_then(|transition| self.commit(state, transition));
		match &result {
			Ok(next) => trace!(
				action = %action.describe(),
				mode = next.mode().name(),
				past = next.history().past_len(),
				future = next.history().future_len(),
				"engine.apply"
			),
			Err(reason) => trace!(action = %action.describe(), %reason, "engine.reject"),
		}
		result
	}

	/// Resolves `query` against `state` and applies the selected candidate.
	pub fn apply_query<R>(
		&self,
		state: &State<G>,
		resolver: &R,
		query: &Query,
	) -> Result<State<G>, Rejection>
	where
		R: QueryResolver<G> + ?Sized,
	{
		let action = query::resolve(resolver, state, query).ok_or(Rejection::NoCandidate)?;
		self.try_apply(state, &action)
	}

	/// Returns `true` if the selection is non-empty and the validator accepts it.
	pub fn is_valid(&self, selection: &Selection<G>) -> bool {
		!selection.below.is_empty() && self.validator.is_valid(selection)
	}

	fn checked(&self, selection: Selection<G>) -> Result<Selection<G>, Rejection> {
		if selection.below.is_empty() {
			return Err(Rejection::EmptySelection);
		}
		if !self.validator.is_valid(&selection) {
			return Err(Rejection::InvalidSelection);
		}
		Ok(selection)
	}

	fn commit(&self, state: &State<G>, transition: Transition<G>) -> Result<State<G>, Rejection> {
		let mut next = state.clone();
		match transition {
			Transition::Edit(snapshot) => {
				next.history.record(state.snapshot());
				next.restore(snapshot);
			}
			Transition::Navigate(mode) => {
				next.history.clear_future();
				next.mode = mode;
			}
			Transition::Undo => {
				let previous = next
					.history
					.undo(state.snapshot())
					.ok_or(Rejection::NothingToUndo)?;
				next.restore(previous);
			}
			Transition::Redo => {
				let following = next
					.history
					.redo(state.snapshot())
					.ok_or(Rejection::NothingToRedo)?;
				next.restore(following);
			}
		}
		Ok(next)
	}

	fn transition(&self, state: &State<G>, action: &Action<G>) -> Result<Transition<G>, Rejection> {
		let edit = |mode: Mode<G>| {
			Transition::Edit(Snapshot {
				mode,
				clipboard: state.clipboard.clone(),
			})
		};

		match (action, &state.mode) {
			(Action::Undo, _) => Ok(Transition::Undo),
			(Action::Redo, _) => Ok(Transition::Redo),

			(Action::MoveCursor(dir), mode) => mode
				.focus()
				.step(*dir)
				.map(|cursor| Transition::Navigate(Mode::Cursor(cursor)))
				.ok_or(Rejection::AtBoundary(*dir)),
			(Action::MoveSelect(dir), Mode::Cursor(cursor)) => self
				.start_selection(cursor, *dir)
				.map(|sel| Transition::Navigate(Mode::Select(sel))),
			(Action::MoveSelect(dir), Mode::Select(sel)) => {
				match sel.step(*dir).ok_or(Rejection::AtBoundary(*dir))? {
					Adjusted::Range(sel) => {
						Ok(Transition::Navigate(Mode::Select(self.checked(sel)?)))
					}
					Adjusted::Collapsed(cursor) => {
						Ok(Transition::Navigate(Mode::Cursor(cursor)))
					}
				}
			}
			(Action::SetCursor(cursor), _) => {
				if !cursor.is_well_formed(&self.grammar) {
					return Err(Rejection::SlotMismatch);
				}
				Ok(Transition::Navigate(Mode::Cursor(cursor.clone())))
			}
			(Action::SetSelect(sel), _) => {
				if !sel.is_well_formed(&self.grammar) {
					return Err(Rejection::SlotMismatch);
				}
				Ok(Transition::Navigate(Mode::Select(self.checked(sel.clone())?)))
			}
			(Action::Escape, Mode::Select(sel)) => {
				Ok(Transition::Navigate(Mode::Cursor(sel.escape())))
			}
			(Action::Escape, Mode::Cursor(_)) => {
				Err(Rejection::WrongMode { expected: "select" })
			}

			(Action::ReplaceExp(exp), mode) => self.replace_exp(mode, exp).map(edit),
			(Action::ReplacePath(path), Mode::Cursor(cursor)) => self.wrap(cursor, path).map(edit),
			(Action::ReplacePath(path), Mode::Select(sel)) => {
				self.replace_below(sel, path).map(edit)
			}
			(Action::Insert(path), mode) => self.insert(mode, path).map(edit),

			(Action::Delete, Mode::Cursor(cursor)) => {
				Ok(edit(Mode::Cursor(self.hole_at(cursor))))
			}
			(Action::Delete, Mode::Select(sel)) => {
				let sel = self.checked(sel.clone())?;
				Ok(edit(Mode::Cursor(self.collapse_to_hole(&sel))))
			}
			(Action::Copy, Mode::Cursor(cursor)) => Ok(Transition::Edit(Snapshot {
				mode: state.mode.clone(),
				clipboard: Clipboard::Exp(cursor.exp.clone()),
			})),
			(Action::Copy, Mode::Select(sel)) => {
				let sel = self.checked(sel.clone())?;
				Ok(Transition::Edit(Snapshot {
					mode: state.mode.clone(),
					clipboard: Clipboard::Path(sel.below),
				}))
			}
			(Action::Cut, Mode::Cursor(cursor)) => Ok(Transition::Edit(Snapshot {
				mode: Mode::Cursor(self.hole_at(cursor)),
				clipboard: Clipboard::Exp(cursor.exp.clone()),
			})),
			(Action::Cut, Mode::Select(sel)) => {
				let sel = self.checked(sel.clone())?;
				Ok(Transition::Edit(Snapshot {
					mode: Mode::Cursor(self.collapse_to_hole(&sel)),
					clipboard: Clipboard::Path(sel.below),
				}))
			}
			(Action::Paste, mode) => self.paste(mode, &state.clipboard).map(edit),
		}
	}

	/// Selection from the cursor to where one step in `dir` lands.
	fn start_selection(
		&self,
		cursor: &Cursor<G>,
		dir: Direction,
	) -> Result<Selection<G>, Rejection> {
		let moved = cursor.step(dir).ok_or(Rejection::AtBoundary(dir))?;
		match derive(&moved, cursor) {
			Derivation::Range(sel) => self.checked(sel),
			Derivation::Empty => Err(Rejection::EmptySelection),
			Derivation::Divergent => Err(Rejection::DivergentCursors),
		}
	}

	fn hole_at(&self, cursor: &Cursor<G>) -> Cursor<G> {
		cursor.with_exp(Exp::hole(&self.grammar, cursor.exp.slot()))
	}

	/// Cursor at the top endpoint, which now holds the hole of its slot.
	fn collapse_to_hole(&self, sel: &Selection<G>) -> Cursor<G> {
		Cursor::new(sel.above.clone(), Exp::hole(&self.grammar, sel.top_slot()))
	}

	fn replace_exp(&self, mode: &Mode<G>, exp: &Exp<G>) -> Result<Mode<G>, Rejection> {
		match mode {
			Mode::Cursor(cursor) => {
				if exp.slot() != cursor.required_slot(&self.grammar) {
					return Err(Rejection::SlotMismatch);
				}
				Ok(Mode::Cursor(cursor.with_exp(exp.clone())))
			}
			Mode::Select(sel) => {
				if exp.slot() != sel.top_slot() {
					return Err(Rejection::SlotMismatch);
				}
				Ok(Mode::Cursor(Cursor::new(sel.above.clone(), exp.clone())))
			}
		}
	}

	/// Checks that `path` chains frame to frame and can sit between a focus of
	/// slot `inner` and a position requiring slot `outer`.
	fn fits(&self, path: &Path<G>, inner: G::Slot, outer: G::Slot) -> Result<(), Rejection> {
		let (Some(innermost), Some(outermost)) = (path.innermost(), path.outermost()) else {
			return Err(Rejection::EmptyPath);
		};
		if innermost.hole_slot(&self.grammar) != inner
			|| outermost.slot() != outer
			|| !path.is_well_formed(&self.grammar)
		{
			return Err(Rejection::SlotMismatch);
		}
		Ok(())
	}

	/// Wraps the focus of `cursor` in `path`; the focus stays where it was.
	fn wrap(&self, cursor: &Cursor<G>, path: &Path<G>) -> Result<Mode<G>, Rejection> {
		self.fits(path, cursor.exp.slot(), cursor.required_slot(&self.grammar))?;
		Ok(Mode::Cursor(Cursor::new(path.append(&cursor.path), cursor.exp.clone())))
	}

	/// Wraps the focus in `path`, then moves to the first hole the new frames
	/// introduced, if any.
	fn insert(&self, mode: &Mode<G>, path: &Path<G>) -> Result<Mode<G>, Rejection> {
		let cursor = match mode {
			Mode::Cursor(cursor) => cursor.clone(),
			Mode::Select(sel) => sel.top(),
		};
		self.fits(path, cursor.exp.slot(), cursor.required_slot(&self.grammar))?;

		let wrapped = Cursor::new(path.append(&cursor.path), cursor.exp.clone());
		let subtree = Cursor::new(cursor.path.clone(), unzip(path, cursor.exp));
		let route = path.route();
		let target = subtree
			.exp
			.first_hole(&self.grammar, Some(&route))
			.and_then(|hole| subtree.descend(&hole))
			.unwrap_or(wrapped);
		Ok(Mode::Cursor(target))
	}

	/// Swaps the selected frames for `path`, keeping both endpoints.
	fn replace_below(&self, sel: &Selection<G>, path: &Path<G>) -> Result<Mode<G>, Rejection> {
		self.fits(path, sel.exp.slot(), sel.top_slot())?;
		let sel = self.checked(Selection {
			below: path.clone(),
			..sel.clone()
		})?;
		Ok(Mode::Select(sel))
	}

	fn paste(&self, mode: &Mode<G>, clipboard: &Clipboard<G>) -> Result<Mode<G>, Rejection> {
		match (clipboard, mode) {
			(Clipboard::Empty, _) => Err(Rejection::ClipboardEmpty),
			(Clipboard::Exp(exp), Mode::Cursor(_)) => self.replace_exp(mode, exp),
			(Clipboard::Exp(_), Mode::Select(_)) => Err(Rejection::ClipboardMismatch),
			(Clipboard::Path(path), Mode::Cursor(cursor)) => {
				self.fits(path, cursor.exp.slot(), cursor.required_slot(&self.grammar))?;
				self.checked(Selection {
					above: cursor.path.clone(),
					below: path.clone(),
					exp: cursor.exp.clone(),
					orient: Orient::Top,
				})?;
				self.wrap(cursor, path)
			}
			(Clipboard::Path(path), Mode::Select(sel)) => self.replace_below(sel, path),
		}
	}
}
