//! Navigation directions.

/// A structural move relative to the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// To the parent node.
	Up,
	/// To the first child.
	Down,
	/// To the previous sibling.
	Left,
	/// To the next sibling.
	Right,
}

impl Direction {
	/// All directions, in a fixed order.
	pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

	/// Lowercase name used in logs and command strings.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Up => "up",
			Self::Down => "down",
			Self::Left => "left",
			Self::Right => "right",
		}
	}
}
