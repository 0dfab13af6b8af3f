//! Coordinate notation.
//!
//! A board cell is written as its column letter followed by its row number,
//! e.g. `b3` or `s19`. Columns run `a`..`t` and rows 1..20, but only the
//! playable area (`b`..`s`, 2..19) is accepted as a piece center.

use crate::board::{Coord, OUTER_MAX};

/// Errors that can occur while parsing a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("empty coordinate")]
    Empty,

    #[error("invalid column letter: '{0}'")]
    InvalidColumn(char),

    #[error("invalid row number: '{0}'")]
    InvalidRow(String),

    #[error("coordinate '{0}' is outside the playable area")]
    NotPlayable(String),
}

/// Returns the letter for a 1-based column index.
pub fn column_letter(col: u8) -> char {
    (b'a' + col.saturating_sub(1)) as char
}

/// Parses a column letter into its 1-based index.
fn parse_column(c: char) -> Result<u8, NotationError> {
    let lower = c.to_ascii_lowercase();
    if !lower.is_ascii_lowercase() {
        return Err(NotationError::InvalidColumn(c));
    }
    let col = lower as u8 - b'a' + 1;
    if col > OUTER_MAX {
        return Err(NotationError::InvalidColumn(c));
    }
    Ok(col)
}

/// Parses a cell anywhere on the 20x20 grid.
pub fn parse_cell(s: &str) -> Result<Coord, NotationError> {
    let s = s.trim();
    let mut chars = s.chars();
    let first = chars.next().ok_or(NotationError::Empty)?;
    let col = parse_column(first)?;

    let row_part = chars.as_str();
    let invalid_row = || NotationError::InvalidRow(row_part.to_string());
    if row_part.is_empty() || !row_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_row());
    }
    let row: u8 = row_part.parse().map_err(|_| invalid_row())?;
    Coord::new(row as i32, col as i32).map_err(|_| invalid_row())
}

/// Parses a piece center, which must lie in the playable area.
pub fn parse_center(s: &str) -> Result<Coord, NotationError> {
    let cell = parse_cell(s)?;
    if !cell.is_playable() {
        return Err(NotationError::NotPlayable(s.trim().to_string()));
    }
    Ok(cell)
}

/// Formats a cell in notation, e.g. `b3`.
pub fn format_cell(coord: Coord) -> String {
    format!("{}{}", column_letter(coord.col()), coord.row())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn parses_centers() {
        assert_eq!(parse_center("b3"), Ok(at(3, 2)));
        assert_eq!(parse_center("S19"), Ok(at(19, 19)));
        assert_eq!(parse_center(" k10 "), Ok(at(10, 11)));
    }

    #[test]
    fn rejects_edge_centers() {
        assert_eq!(parse_center("a5"), Err(NotationError::NotPlayable("a5".to_string())));
        assert_eq!(parse_center("t5"), Err(NotationError::NotPlayable("t5".to_string())));
        assert_eq!(parse_center("c1"), Err(NotationError::NotPlayable("c1".to_string())));
        assert_eq!(parse_center("c20"), Err(NotationError::NotPlayable("c20".to_string())));
        assert!(parse_cell("c20").is_ok());
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_cell(""), Err(NotationError::Empty));
        assert_eq!(parse_cell("u4"), Err(NotationError::InvalidColumn('u')));
        assert_eq!(parse_cell("44"), Err(NotationError::InvalidColumn('4')));
        assert_eq!(parse_cell("bx"), Err(NotationError::InvalidRow("x".to_string())));
        assert_eq!(parse_cell("b"), Err(NotationError::InvalidRow(String::new())));
        assert_eq!(parse_cell("b21"), Err(NotationError::InvalidRow("21".to_string())));
        assert_eq!(parse_cell("b0"), Err(NotationError::InvalidRow("0".to_string())));
    }

    #[test]
    fn rejects_signed_rows() {
        assert_eq!(parse_cell("b+3"), Err(NotationError::InvalidRow("+3".to_string())));
        assert_eq!(parse_center("c-4"), Err(NotationError::InvalidRow("-4".to_string())));
        assert_eq!(parse_cell("b 3"), Err(NotationError::InvalidRow(" 3".to_string())));
    }

    #[test]
    fn formats_cells() {
        assert_eq!(format_cell(at(3, 2)), "b3");
        assert_eq!(format_cell(at(20, 20)), "t20");
    }
}
