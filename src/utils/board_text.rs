//! Board payload parser and formatter.
//!
//! The game manager sends the board as a nested list of rows, e.g.
//! `[[0, 0, 0, 0], [0, 2, 1, 0], ...]`. Tuple brackets `((0, 0), ...)` are
//! accepted as well since some managers print tuples.

use crate::board::othello_board::Board;
use crate::errors::BoardError;

pub fn parse_board(payload: &str) -> Result<Board, BoardError> {
    let rows = parse_rows(payload)?;
    Board::from_rows(&rows)
}

fn parse_rows(payload: &str) -> Result<Vec<Vec<i64>>, BoardError> {
    let mut rows = Vec::<Vec<i64>>::new();
    let mut current = Vec::<i64>::new();
    let mut number = String::new();
    let mut depth = 0usize;
    let mut closed = false;

    for ch in payload.trim().chars() {
        if closed {
            return Err(malformed(format!("trailing input after board: '{ch}'")));
        }
        match ch {
            '[' | '(' => {
                depth += 1;
                if depth > 2 {
                    return Err(malformed("nesting deeper than rows of cells"));
                }
            }
            ']' | ')' => {
                flush_number(&mut number, &mut current)?;
                match depth {
                    2 => rows.push(std::mem::take(&mut current)),
                    1 => closed = true,
                    _ => return Err(malformed("unbalanced closing bracket")),
                }
                depth -= 1;
            }
            ',' => flush_number(&mut number, &mut current)?,
            c if c.is_whitespace() => flush_number(&mut number, &mut current)?,
            c if c.is_ascii_digit() || c == '-' => {
                if depth != 2 {
                    return Err(malformed("cell value outside of a row"));
                }
                number.push(c);
            }
            other => return Err(malformed(format!("unexpected character '{other}'"))),
        }
    }

    if !closed {
        return Err(malformed("board is not closed"));
    }
    Ok(rows)
}

fn flush_number(number: &mut String, row: &mut Vec<i64>) -> Result<(), BoardError> {
    if number.is_empty() {
        return Ok(());
    }
    let value = number
        .parse::<i64>()
        .map_err(|_| malformed(format!("invalid cell value '{number}'")))?;
    row.push(value);
    number.clear();
    Ok(())
}

fn malformed(msg: impl Into<String>) -> BoardError {
    BoardError::MalformedPayload(msg.into())
}

/// Inverse of `parse_board`, using list brackets.
pub fn format_board(board: &Board) -> String {
    let rows = board
        .rows()
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{cells}]")
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{rows}]")
}

#[cfg(test)]
mod tests {
    use super::{format_board, parse_board};
    use crate::board::othello_board::Board;
    use crate::errors::BoardError;

    #[test]
    fn parses_list_payload() {
        let board = parse_board("[[0, 0, 0, 0], [0, 2, 1, 0], [0, 1, 2, 0], [0, 0, 0, 0]]")
            .expect("payload should parse");
        assert_eq!(board, Board::new_game(4).expect("valid"));
    }

    #[test]
    fn parses_tuple_payload_without_spaces() {
        let board = parse_board("((0,0,0,0),(0,2,1,0),(0,1,2,0),(0,0,0,0))")
            .expect("tuple payload should parse");
        assert_eq!(board, Board::new_game(4).expect("valid"));
    }

    #[test]
    fn format_matches_manager_layout() {
        let board = Board::new_game(4).expect("valid");
        let text = format_board(&board);
        assert_eq!(text, "[[0, 0, 0, 0], [0, 2, 1, 0], [0, 1, 2, 0], [0, 0, 0, 0]]");
        assert_eq!(parse_board(&text).expect("formatted board parses"), board);
    }

    #[test]
    fn rejects_garbage_and_unclosed_payloads() {
        assert!(matches!(
            parse_board("[[0, 0, x, 0]]"),
            Err(BoardError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_board("[[0, 0, 0, 0], [0, 2, 1, 0]"),
            Err(BoardError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_board("[[[0]]]"),
            Err(BoardError::MalformedPayload(_))
        ));
        assert_eq!(
            parse_board("[[0, 0, 0, 9], [0, 2, 1, 0], [0, 1, 2, 0], [0, 0, 0, 0]]"),
            Err(BoardError::InvalidCell(9))
        );
    }
}
