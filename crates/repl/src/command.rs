//! Line parsing.
//!
//! ```text
//! :up :down :left :right      move the cursor
//! :sup :sdown :sleft :sright  move the selection's free end
//! :esc :undo :redo :copy :cut :paste :delete :indent :root :quit
//! ?TEXT[#N]                   preview a query
//! TEXT[#N]                    apply a query, picking candidate N
//! ```

use sprig_editor::{Action, Direction, Query};
use sprig_lang_alpha::Alpha;
use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Apply(Action<Alpha>),
	Indent,
	Root,
	Quit,
	Preview(Query),
	Query(Query),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("unknown command ':{0}'")]
	Unknown(String),
	#[error("empty query")]
	EmptyQuery,
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
	if let Some(name) = line.strip_prefix(':') {
		return named(name.trim());
	}
	if let Some(text) = line.strip_prefix('?') {
		return query(text).map(Command::Preview);
	}
	query(line).map(Command::Query)
}

fn named(name: &str) -> Result<Command, ParseError> {
	let action = match name {
		"up" => Action::MoveCursor(Direction::Up),
		"down" => Action::MoveCursor(Direction::Down),
		"left" => Action::MoveCursor(Direction::Left),
		"right" => Action::MoveCursor(Direction::Right),
		"sup" => Action::MoveSelect(Direction::Up),
		"sdown" => Action::MoveSelect(Direction::Down),
		"sleft" => Action::MoveSelect(Direction::Left),
		"sright" => Action::MoveSelect(Direction::Right),
		"esc" => Action::Escape,
		"undo" => Action::Undo,
		"redo" => Action::Redo,
		"copy" => Action::Copy,
		"cut" => Action::Cut,
		"paste" => Action::Paste,
		"delete" => Action::Delete,
		"indent" => return Ok(Command::Indent),
		"root" => return Ok(Command::Root),
		"quit" | "q" => return Ok(Command::Quit),
		other => return Err(ParseError::Unknown(other.to_string())),
	};
	Ok(Command::Apply(action))
}

/// Splits an optional `#N` candidate suffix off the query text.
fn query(text: &str) -> Result<Query, ParseError> {
	let (text, index) = match text.rsplit_once('#') {
		Some((head, tail)) if !head.is_empty() => match tail.parse::<isize>() {
			Ok(index) => (head, index),
			Err(_) => (text, 0),
		},
		_ => (text, 0),
	};
	let query = Query::new(text).with_index(index);
	if query.is_blank() {
		return Err(ParseError::EmptyQuery);
	}
	Ok(query)
}
