use std::fmt::Write;

use crate::board::{Board, CellState};
use crate::game::{GameEngine, Side};

fn cell_symbol(cell: CellState, hidden: bool) -> char {
    match cell {
        CellState::Empty => '~',
        CellState::Occupied if hidden => '~',
        CellState::Occupied => '■',
        CellState::Hit => 'X',
        CellState::Miss => '•',
    }
}

/// Render a board as text with 1-based row and column labels. Ship cells that have
/// not been hit are drawn as water when the board is hidden.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let _ = write!(out, "   ");
    for c in 0..board.size() {
        let _ = write!(out, "{:>3}", c + 1);
    }
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "\n{:>3}", r + 1);
        for &cell in row {
            let _ = write!(out, "{:>3}", cell_symbol(cell, board.hidden()));
        }
    }
    out.push('\n');
    out
}

/// Print the viewer's own board followed by the opponent's.
pub fn print_player_view(engine: &GameEngine, viewer: Side) {
    println!("{}", "_".repeat(24));
    println!("Your board:");
    print!("{}", render_board(engine.board(viewer)));
    println!("{}", "_".repeat(24));
    println!("Enemy board:");
    print!("{}", render_board(engine.board(viewer.opponent())));
    println!("    Legend: ■=Ship  X=Hit  •=Miss  ~=Water");
}

/// Greeting shown once at program start.
pub fn print_greeting() {
    println!("{}", "_".repeat(24));
    println!("  Welcome to Sea Battle!");
    println!("{}", "_".repeat(24));
    println!(" Input format: row column");
    println!("  row    - counted from the top, starting at 1");
    println!("  column - counted from the left, starting at 1");
}
