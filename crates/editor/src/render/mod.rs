//! Presentation trees.
//!
//! [`render`] turns a state (and an optional pending query) into a [`Node`]
//! tree: the expression tree with cursor, selection and query markers spliced
//! in at the focus. Frontends walk the tree however they like; [`print`]
//! flattens it to text with a grammar-supplied [`Formatter`].

#[cfg(test)]
mod tests;

use sprig_primitives::{Exp, Grammar, Path};

use crate::action::Action;
use crate::engine::Engine;
use crate::query::{self, Query, QueryResolver};
use crate::state::{Mode, State};
use crate::validity::SelectionValidator;

/// One element of a presentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<G: Grammar> {
	/// A grammar node whose children are already rendered.
	Exp {
		slot: G::Slot,
		rule: G::Rule,
		value: G::Value,
		kids: Vec<Node<G>>,
	},
	/// The cursor focus.
	Cursor(Box<Node<G>>),
	/// The top endpoint of a selection.
	SelectTop {
		/// Whether the validator accepts the selection.
		valid: bool,
		kid: Box<Node<G>>,
	},
	/// The bottom endpoint of a selection.
	SelectBot(Box<Node<G>>),
	/// The focus, with the replacement the query would install.
	QueryReplace { preview: Box<Node<G>>, kid: Box<Node<G>> },
	/// The focus, already wrapped in the frames the query would insert.
	QueryInsert(Box<Node<G>>),
	/// The focus, with query text that resolves to nothing.
	QueryInvalid { text: String, kid: Box<Node<G>> },
}

impl<G: Grammar> Node<G> {
	/// Plain rendering of an expression.
	pub fn from_exp(exp: &Exp<G>) -> Self {
		Self::Exp {
			slot: exp.slot(),
			rule: exp.rule(),
			value: exp.value().clone(),
			kids: exp.children().iter().map(Self::from_exp).collect(),
		}
	}

	/// Rule of the expression under any markers.
	pub fn rule(&self) -> G::Rule {
		match self {
			Self::Exp { rule, .. } => *rule,
			Self::Cursor(kid)
			| Self::SelectTop { kid, .. }
			| Self::SelectBot(kid)
			| Self::QueryReplace { kid, .. }
			| Self::QueryInsert(kid)
			| Self::QueryInvalid { kid, .. } => kid.rule(),
		}
	}

	/// Wraps `self` in the frames of `path`, innermost first.
	pub fn within(self, path: &Path<G>) -> Self {
		path.iter().fold(self, |inner, frame| {
			let kids = frame
				.left()
				.iter()
				.rev()
				.map(Self::from_exp)
				.chain(std::iter::once(inner))
				.chain(frame.right().iter().map(Self::from_exp))
				.collect();
			Self::Exp {
				slot: frame.slot(),
				rule: frame.rule(),
				value: frame.value().clone(),
				kids,
			}
		})
	}
}

/// Builds the presentation tree of `state`.
///
/// A non-blank `query` decorates the cursor, or the whole selection, with a
/// preview of the candidate it currently selects.
pub fn render<G, V, R>(
	engine: &Engine<G, V>,
	state: &State<G>,
	resolver: &R,
	query: Option<&Query>,
) -> Node<G>
where
	G: Grammar,
	V: SelectionValidator<G>,
	R: QueryResolver<G> + ?Sized,
{
	let preview = |focus: Node<G>| match query.filter(|q| !q.is_blank()) {
		Some(query) => decorate(focus, query, query::resolve(resolver, state, query)),
		None => focus,
	};
	match state.mode() {
		Mode::Cursor(cursor) => {
			let focus = Node::Cursor(Box::new(Node::from_exp(&cursor.exp)));
			preview(focus).within(&cursor.path)
		}
		Mode::Select(sel) => {
			let bottom = Node::SelectBot(Box::new(Node::from_exp(&sel.exp)));
			let top = Node::SelectTop {
				valid: engine.is_valid(sel),
				kid: Box::new(bottom.within(&sel.below)),
			};
			preview(top).within(&sel.above)
		}
	}
}

fn decorate<G: Grammar>(focus: Node<G>, query: &Query, candidate: Option<Action<G>>) -> Node<G> {
	match candidate {
		Some(Action::ReplaceExp(exp)) => Node::QueryReplace {
			preview: Box::new(Node::from_exp(&exp)),
			kid: Box::new(focus),
		},
		Some(Action::Insert(path)) => Node::QueryInsert(Box::new(focus.within(&path))),
		Some(_) => focus,
		None => Node::QueryInvalid {
			text: query.text.clone(),
			kid: Box::new(focus),
		},
	}
}

/// Grammar-specific text layout of a single node.
pub trait Formatter<G: Grammar> {
	/// Lays out a node given its already printed children.
	fn node(&self, rule: G::Rule, value: &G::Value, kids: Vec<String>) -> String;

	/// Adjusts a printed child before its parent lays it out, e.g. to add
	/// parentheses. `kid` is the rule under any markers.
	fn kid(&self, parent: G::Rule, index: usize, kid: G::Rule, text: String) -> String {
		let _ = (parent, index, kid);
		text
	}
}

/// Flattens a presentation tree to text.
///
/// Markers: `{..}` cursor, `[0]{..}[0]` selection top, `[1]{..}[1]`
/// selection bottom, `<preview|focus>` replacement preview, `<..>` insertion
/// preview and `<?text|focus>` unresolved query.
pub fn print<G, F>(node: &Node<G>, formatter: &F) -> String
where
	G: Grammar,
	F: Formatter<G> + ?Sized,
{
	match node {
		Node::Exp { rule, value, kids, .. } => {
			let kids = kids
				.iter()
				.enumerate()
				.map(|(index, kid)| {
					let text = print(kid, formatter);
					formatter.kid(*rule, index, kid.rule(), text)
				})
				.collect();
			formatter.node(*rule, value, kids)
		}
		Node::Cursor(kid) => format!("{{{}}}", print(kid, formatter)),
		Node::SelectTop { kid, .. } => format!("[0]{{{}}}[0]", print(kid, formatter)),
		Node::SelectBot(kid) => format!("[1]{{{}}}[1]", print(kid, formatter)),
		Node::QueryReplace { preview, kid } => {
			format!("<{}|{}>", print(preview, formatter), print(kid, formatter))
		}
		Node::QueryInsert(kid) => format!("<{}>", print(kid, formatter)),
		Node::QueryInvalid { text, kid } => format!("<?{text}|{}>", print(kid, formatter)),
	}
}
