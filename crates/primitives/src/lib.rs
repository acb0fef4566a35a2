//! Core types for structural editing: grammar-checked expression trees,
//! zipper paths, cursors and selections.

/// Focus points.
pub mod cursor;
/// Navigation directions.
pub mod direction;
/// Expression trees.
pub mod exp;
/// The grammar interface.
pub mod grammar;
/// Frames, paths and the zipper algebra.
pub mod path;
/// Ranges between two cursors and their derivation.
pub mod selection;
/// A small two-slot grammar for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use cursor::Cursor;
pub use direction::Direction;
pub use exp::{Exp, ExpError};
pub use grammar::Grammar;
pub use path::{Frame, Path, unzip, zip_down, zip_left, zip_right, zip_up};
pub use selection::{Adjusted, Derivation, Orient, Selection, derive};
