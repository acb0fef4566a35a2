#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Structural editor engine.
//!
//! Generic over a [`Grammar`]; a language plugs in by implementing the grammar
//! trait, a [`SelectionValidator`] and a [`QueryResolver`].
//!
//! # Main Types
//!
//! - [`Engine`] - Pure reducer from `(State, Action)` to the next [`State`]
//! - [`State`] - Mode, clipboard and bounded [`History`]
//! - [`Action`] - The edit and navigation vocabulary
//!
//! # Data flow
//!
//! ```text
//! key / query ──► Action ──► Engine::try_apply ──► State ──► render ──► Node
//!                  ▲                                  │
//!                  └──── QueryResolver ◄──── Query ───┘
//! ```

/// The action vocabulary.
pub mod action;
/// TOML configuration.
pub mod config;
/// The reducer.
pub mod engine;
pub mod error;
/// Bounded undo/redo stacks.
pub mod history;
/// Query text to candidate actions.
pub mod query;
/// Presentation trees and text printing.
pub mod render;
/// Mode, clipboard and state values.
pub mod state;
/// Selection validity capability.
pub mod validity;

pub use action::Action;
pub use config::EditorConfig;
pub use engine::Engine;
pub use error::{ConfigError, Rejection};
pub use history::{DEFAULT_HISTORY_LIMIT, History};
pub use query::{Query, QueryResolver, RuleQueryResolver};
pub use render::{Formatter, Node, print, render};
pub use sprig_primitives::{Cursor, Direction, Exp, Frame, Grammar, Orient, Path, Selection};
pub use state::{Clipboard, Mode, Snapshot, State};
pub use validity::{AllowAll, SelectionValidator};
