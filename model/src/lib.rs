mod tiles;

pub mod random;
pub use tiles::*;

use getset::CopyGetters;
use itertools::{iproduct, Itertools};

/// The 4x4 sliding-tile board.
///
/// The grid itself is private: `move_tile` is the only way to write a cell,
/// which keeps `empty_pos` agreeing with the grid at all times.
#[derive(Debug, Clone, PartialEq, Eq, Hash, CopyGetters)]
pub struct Board {
  cells: [[Option<Tile>; Board::SIZE]; Board::SIZE],
  /// Where the hole currently is. The grid holds `None` there and nowhere
  /// else.
  #[getset(get_copy = "pub")]
  empty_pos: Pos,
}

impl Board {
  pub const SIZE: usize = 4;
  /// How many random-walk moves `new` scrambles with.
  pub const DEFAULT_SHUFFLE_MOVES: usize = 1000;

  /// A freshly scrambled board, ready to play.
  pub fn new(seed: Option<u64>) -> Self {
    random::walked_random(seed, Board::DEFAULT_SHUFFLE_MOVES)
  }

  /// The canonical arrangement: 1 through 15 in row-major order, hole in
  /// the bottom-right corner.
  pub fn solved() -> Self {
    let last = Board::SIZE - 1;
    let cells = std::array::from_fn(|row| {
      std::array::from_fn(|col| {
        if (row, col) == (last, last) {
          None
        } else {
          Some(Tile::new((row * Board::SIZE + col + 1) as u8))
        }
      })
    });

    Self {
      cells,
      empty_pos: Pos::new(last, last),
    }
  }

  /// Slide the tile at `target` into the hole.
  ///
  /// Only a tile orthogonally next to the hole can slide. Anything else
  /// (the hole itself, a far cell, a coordinate off the board) leaves the
  /// board untouched and reports why.
  pub fn move_tile(&mut self, target: Pos) -> Result<(), TileMoveError> {
    if target.row() >= Board::SIZE || target.col() >= Board::SIZE {
      return Err(TileMoveError::OutOfBounds);
    }
    if target.taxicab(&self.empty_pos) != 1 {
      return Err(TileMoveError::NotAdjacent);
    }

    let moved = self.cells[target.row()][target.col()].take();
    self.cells[self.empty_pos.row()][self.empty_pos.col()] = moved;
    self.empty_pos = target;
    Ok(())
  }

  /// Every cell whose tile could slide into the hole right now: 2 from a
  /// corner, 3 from an edge, 4 from the interior.
  pub fn possible_moves(&self) -> Vec<Pos> {
    (0..Direction::COUNT)
      .map(|idx| Direction::n(idx).expect("direction indices run 0 to COUNT"))
      .filter_map(|direction| self.empty_pos.step(direction, Board::SIZE))
      .collect_vec()
  }

  /// Whether every tile is back in ascending row-major order with the hole
  /// bottom-right.
  pub fn is_solved(&self) -> bool {
    let last = Board::SIZE - 1;
    iproduct!(0..Board::SIZE, 0..Board::SIZE).all(|(row, col)| {
      let want = if (row, col) == (last, last) {
        None
      } else {
        Some(Tile::new((row * Board::SIZE + col + 1) as u8))
      };
      self.cells[row][col] == want
    })
  }

  /// Read the tile at `pos`: `None` off the board and at the hole.
  pub fn tile(&self, pos: Pos) -> Option<&Tile> {
    self.cells.get(pos.row())?.get(pos.col())?.as_ref()
  }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TileMoveError {
  OutOfBounds,
  NotAdjacent,
}
