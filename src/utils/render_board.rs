//! Terminal-oriented board renderer for debugging and match logs.

use crate::board::board_types::Cell;
use crate::board::othello_board::Board;

/// Render the board with column indices across the top and row indices down
/// the side, matching the `(column, row)` move coordinates.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let header = (0..n)
        .map(|c| (c % 10).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str("  ");
    out.push_str(&header);
    out.push('\n');

    for row in 0..n {
        out.push_str(&(row % 10).to_string());
        out.push(' ');
        for column in 0..n {
            out.push(cell_to_char(board.cell(column, row)));
            if column + 1 < n {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}

fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '·',
        Cell::First => '●',
        Cell::Second => '○',
    }
}
