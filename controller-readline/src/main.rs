use fifteen_model::{Board, Pos};
use itertools::Itertools;

fn main() {
  let mut board = Board::new(None);
  let mut rl = rustyline::DefaultEditor::new().unwrap();
  let mut moves_made = 0u32;

  println!("Welcome to the 15 puzzle.");
  println!("Slide tiles into the hole until they read 1 through 15 in order,");
  println!("with the hole ending up in the bottom-right corner.");
  println!("Type the row and column of the tile to slide, e.g. `3 2`.");
  println!("Type q to give up.");
  println!();

  loop {
    print_board(&board);
    println!();

    if board.is_solved() {
      println!("Congratulations! You solved it in {} moves.", moves_made);
      break;
    }

    let line = match rl.readline("> ") {
      Ok(it) => it,
      Err(_) => break,
    };
    if line.trim() == "q" {
      break;
    }

    let Some(target) = read_pos(line.trim()) else {
      println!("please write a row and a column, each 0-3, separated by a space");
      continue;
    };

    match board.move_tile(target) {
      Ok(()) => {
        moves_made += 1;
        println!("Move made! {} so far.", moves_made);
      }
      Err(ono) => println!("You can't slide that! {:?}", &ono),
    }
  }
}

fn read_pos(s: &str) -> Option<Pos> {
  let (row_s, col_s) = s.split_once(' ')?;
  let row = row_s.trim().parse().ok()?;
  let col = col_s.trim().parse().ok()?;
  if row >= Board::SIZE || col >= Board::SIZE {
    return None;
  }
  Some(Pos::new(row, col))
}

fn print_board(board: &Board) {
  let border = "+----".repeat(Board::SIZE) + "+";

  let rows = (0..Board::SIZE)
    .map(|row| {
      let cells = (0..Board::SIZE)
        .map(|col| match board.tile(Pos::new(row, col)) {
          // note the to_string: Display width flags have to be wired up by
          // hand, so pad the rendered string instead
          Some(tile) => format!(" {:>2} ", tile.to_string()),
          None => "    ".to_string(),
        })
        .join("|");
      format!("{}\n|{}|", border, cells)
    })
    .join("\n");
  println!("{}\n{}", rows, border);

  let slidable = board
    .possible_moves()
    .into_iter()
    .filter_map(|pos| {
      board
        .tile(pos)
        .map(|tile| format!("({}, {}) - tile {}", pos.row(), pos.col(), tile))
    })
    .join(", ");
  println!("You can slide: {}", slidable);
}
