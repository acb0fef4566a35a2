//! An editing session over one Alpha tree.

use sprig_editor::{
	Action, EditorConfig, Engine, Query, Rejection, RuleQueryResolver, State, print, render,
};
use sprig_lang_alpha::{Alpha, Printer, Slot, resolver, toggle_indent};
use thiserror::Error;
use tracing::debug;

use crate::command::Command;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
	#[error(transparent)]
	Rejected(#[from] Rejection),
	#[error("only an application under the cursor can be indented")]
	NotIndentable,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
	/// Print this and read the next line.
	Show(String),
	Quit,
}

pub struct Session {
	engine: Engine<Alpha>,
	resolver: RuleQueryResolver<Alpha>,
	state: State<Alpha>,
}

impl Session {
	pub fn new(config: EditorConfig) -> Self {
		let engine = Engine::new(Alpha).with_config(config);
		let state = engine.initial_state(Slot::Exp);
		Self {
			engine,
			resolver: resolver(),
			state,
		}
	}

	/// The current tree with markers.
	pub fn show(&self) -> String {
		self.show_with(None)
	}

	fn show_with(&self, query: Option<&Query>) -> String {
		let node = render(&self.engine, &self.state, &self.resolver, query);
		print(&node, &Printer)
	}

	pub fn run(&mut self, command: Command) -> Result<Flow, CommandError> {
		let next = match command {
			Command::Quit => return Ok(Flow::Quit),
			Command::Preview(query) => return Ok(Flow::Show(self.show_with(Some(&query)))),
			Command::Apply(action) => self.engine.try_apply(&self.state, &action)?,
			Command::Query(query) => self.engine.apply_query(&self.state, &self.resolver, &query)?,
			Command::Root => {
				let root = self.state.mode().focus().to_root();
				self.engine.try_apply(&self.state, &Action::SetCursor(root))?
			}
			Command::Indent => {
				let action = self
					.state
					.mode()
					.cursor()
					.and_then(toggle_indent)
					.ok_or(CommandError::NotIndentable)?;
				self.engine.try_apply(&self.state, &action)?
			}
		};
		debug!(
			past = next.history().past_len(),
			future = next.history().future_len(),
			"session.step"
		);
		self.state = next;
		Ok(Flow::Show(self.show()))
	}
}
