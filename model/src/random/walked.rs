use fastrand::Rng;

use crate::Board;

/// Walk `move_budget` uniformly random legal moves away from the solved
/// board.
///
/// Every step is an ordinary adjacent slide, so any board this returns can
/// be slid back to solved; dealing the tiles out in a flat random
/// permutation would not have that property, since half of all permutations
/// are unreachable. No rejection pass needed. A budget of 0 returns the
/// solved board itself. Undoing the previous step is allowed; it only
/// shortens the effective scramble.
pub fn walked_random(seed: Option<u64>, move_budget: usize) -> Board {
  let mut rng = match seed {
    Some(seed) => Rng::with_seed(seed),
    None => Rng::new(),
  };

  let mut board = Board::solved();
  for _ in 0..move_budget {
    // Never empty: the hole always has at least two in-bounds neighbors
    let target = rng.choice(board.possible_moves());
    if let Some(target) = target {
      let res = board.move_tile(target);
      assert!(
        res.is_ok(),
        "possible_moves returned an unmovable cell {:?}",
        target,
      );
    }
  }

  board
}
