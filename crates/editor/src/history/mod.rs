//! Bounded undo/redo stacks.
//!
//! [`History`] stores whole snapshots rather than inverse operations. The
//! snapshots the engine records are built from structurally shared trees, so
//! retaining many of them costs only the nodes each edit rebuilt.
//!
//! Both stacks are capped at the same limit. Pushing onto a full stack evicts
//! its oldest entry.

#[cfg(test)]
mod tests;

use std::collections::VecDeque;

use tracing::{debug, trace};

/// Default number of entries kept on each stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Past and future snapshots around a present value the caller owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
	/// Newest entry at the back.
	past: VecDeque<T>,
	/// Next redo target at the back.
	future: VecDeque<T>,
	limit: usize,
}

impl<T> Default for History<T> {
	fn default() -> Self {
		Self::new(DEFAULT_HISTORY_LIMIT)
	}
}

impl<T> History<T> {
	/// Creates empty stacks holding at most `limit` entries each.
	///
	/// A limit of zero is raised to one.
	pub fn new(limit: usize) -> Self {
		Self {
			past: VecDeque::new(),
			future: VecDeque::new(),
			limit: limit.max(1),
		}
	}

	pub fn limit(&self) -> usize {
		self.limit
	}

	/// Returns the undo stack length.
	pub fn past_len(&self) -> usize {
		self.past.len()
	}

	/// Returns the redo stack length.
	pub fn future_len(&self) -> usize {
		self.future.len()
	}

	pub fn can_undo(&self) -> bool {
		!self.past.is_empty()
	}

	pub fn can_redo(&self) -> bool {
		!self.future.is_empty()
	}

	/// Past entries, most recent first.
	pub fn past(&self) -> impl Iterator<Item = &T> {
		self.past.iter().rev()
	}

	/// Future entries, next redo target first.
	pub fn future(&self) -> impl Iterator<Item = &T> {
		self.future.iter().rev()
	}

	/// Records the pre-edit present and discards the future.
	pub fn record(&mut self, present: T) {
		push_capped(&mut self.past, present, self.limit, "past");
		self.clear_future();
	}

	/// Drops every redo entry.
	pub fn clear_future(&mut self) {
		if !self.future.is_empty() {
			trace!(dropped = self.future.len(), "history.clear_future");
			self.future.clear();
		}
	}

	/// Steps back: returns the previous present and parks `present` on the
	/// future stack. Returns `None` without side effects if there is no past.
	pub fn undo(&mut self, present: T) -> Option<T> {
		let previous = self.past.pop_back()?;
		push_capped(&mut self.future, present, self.limit, "future");
		trace!(past = self.past.len(), future = self.future.len(), "history.undo");
		Some(previous)
	}

	/// Steps forward: returns the next present and parks `present` on the past
	/// stack. Returns `None` without side effects if there is no future.
	pub fn redo(&mut self, present: T) -> Option<T> {
		let next = self.future.pop_back()?;
		push_capped(&mut self.past, present, self.limit, "past");
		trace!(past = self.past.len(), future = self.future.len(), "history.redo");
		Some(next)
	}
}

fn push_capped<T>(stack: &mut VecDeque<T>, entry: T, limit: usize, name: &'static str) {
	stack.push_back(entry);
	if stack.len() > limit {
		stack.pop_front();
		debug!(stack = name, limit, "history.evict_oldest");
	}
}
