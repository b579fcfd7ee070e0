use std::fmt::{Debug, Display};

use getset::CopyGetters;

/// The four ways the empty cell can reach a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enumn::N)]
#[repr(u8)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

impl Direction {
  pub const COUNT: u8 = 4;

  /// The (row, col) deltas of one step this way.
  pub fn delta(&self) -> (isize, isize) {
    match self {
      Direction::Up => (-1, 0),
      Direction::Down => (1, 0),
      Direction::Left => (0, -1),
      Direction::Right => (0, 1),
    }
  }
}

/// A zero-indexed (row, col) cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Pos {
  row: usize,
  col: usize,
}

impl Pos {
  pub fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  /// Taxicab distance to another position.
  pub fn taxicab(&self, other: &Pos) -> usize {
    self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
  }

  /// Step one cell in the given direction, or `None` if that would leave an
  /// `edge`-by-`edge` grid.
  pub fn step(&self, direction: Direction, edge: usize) -> Option<Pos> {
    let (dr, dc) = direction.delta();
    let row = self.row.checked_add_signed(dr)?;
    let col = self.col.checked_add_signed(dc)?;
    (row < edge && col < edge).then_some(Pos { row, col })
  }
}

/// A numbered tile on the board.
/// Deliberately not `Copy`: a tile should move from cell to cell, never get
/// duplicated on accident.
#[derive(Clone, PartialEq, Eq, Hash, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Tile {
  number: u8,
}

impl Tile {
  pub const MIN_NUMBER: u8 = 1;
  pub const MAX_NUMBER: u8 = 15;

  pub fn new(number: u8) -> Self {
    if !(Self::MIN_NUMBER..=Self::MAX_NUMBER).contains(&number) {
      panic!("tile number must be between 1 and 15 but got {}", number)
    }

    Self { number }
  }
}

impl Display for Tile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.number)
  }
}

impl Debug for Tile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Tile(")?;
    write!(f, "{}", self)?;
    f.write_str(")")
  }
}
