//! Text map loading.
//!
//! A map is a header line followed by one line per grid row:
//!
//! ```text
//! ; comment lines and blank lines are skipped
//! 3 4
//! S.$#
//! #r~.
//! ..RE
//! ```
//!
//! | symbol | cell                      |
//! |--------|---------------------------|
//! | `S`    | start (a floor cell)      |
//! | `E`    | exit                      |
//! | `.`    | floor                     |
//! | `#`    | wall                      |
//! | `~`    | lava                      |
//! | `$`    | gold                      |
//! | `r g b`| red / green / blue key    |
//! | `R G B`| red / green / blue door   |
//!
//! Cell ids are assigned row-major, so `id = row * cols + col`. Anything the
//! loader cannot make sense of is reported as a [`LoadError`] rather than a
//! panic; the walker never runs on a partially built grid.

use crate::grid::Grid;
use crate::{Category, CellId, Color};
use std::path::Path;

/// Why a map could not be turned into a [`Grid`].
///
/// Line and column numbers are 1-based and refer to the input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read map file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("map is empty: expected a '<rows> <cols>' header")]
    MissingHeader,

    #[error("line {line}: invalid header '{text}' (expected '<rows> <cols>' with positive sizes)")]
    InvalidHeader { line: usize, text: String },

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RowWidth { line: usize, expected: usize, found: usize },

    #[error("line {line}, column {column}: unknown map symbol '{symbol}'")]
    UnknownSymbol { line: usize, column: usize, symbol: char },

    #[error("map has no start cell 'S'")]
    MissingStart,

    #[error("map has more than one start cell (cells {first} and {second})")]
    MultipleStarts { first: CellId, second: CellId },
}

/// Read and parse the map stored at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|err| LoadError::Io { path: path.display().to_string(), message: err.to_string() })?;
    parse_map(&text)
}

/// Parse map text into a wired [`Grid`].
pub fn parse_map(text: &str) -> Result<Grid, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end()))
        .filter(|(_, line)| !regex!(r"^\s*(;.*)?$").is_match(line));

    let (header_line, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let (rows, cols) = parse_header(header_line, header)?;

    let mut categories = Vec::new();
    let mut start: Option<CellId> = None;
    let mut found_rows = 0;

    for (line_no, line) in lines {
        found_rows += 1;
        if found_rows > rows {
            continue;
        }

        let width = line.chars().count();
        if width != cols {
            return Err(LoadError::RowWidth { line: line_no, expected: cols, found: width });
        }

        for (col, symbol) in line.chars().enumerate() {
            let id = categories.len();
            if symbol == 'S' {
                if let Some(first) = start {
                    return Err(LoadError::MultipleStarts { first, second: id });
                }
                start = Some(id);
            }
            let category = category_for(symbol).ok_or(LoadError::UnknownSymbol {
                line: line_no,
                column: col + 1,
                symbol,
            })?;
            categories.push(category);
        }
    }

    if found_rows != rows {
        return Err(LoadError::RowCount { expected: rows, found: found_rows });
    }
    let start = start.ok_or(LoadError::MissingStart)?;

    if debug_enabled!() {
        eprintln!("[load] rows={rows} cols={cols} cells={} start={start}", categories.len());
    }

    Grid::from_categories(rows, cols, categories, start)
}

fn parse_header(line: usize, text: &str) -> Result<(usize, usize), LoadError> {
    let invalid = || LoadError::InvalidHeader { line, text: text.trim().to_string() };
    let caps = regex!(r"^\s*(\d+)\s+(\d+)\s*$").captures(text).ok_or_else(invalid)?;

    let rows: usize = caps[1].parse().map_err(|_| invalid())?;
    let cols: usize = caps[2].parse().map_err(|_| invalid())?;
    if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
        return Err(invalid());
    }
    Ok((rows, cols))
}

fn category_for(symbol: char) -> Option<Category> {
    let category = match symbol {
        'S' | '.' => Category::Floor,
        'E' => Category::Exit,
        '#' => Category::Wall,
        '~' => Category::Lava,
        '$' => Category::Gold,
        'r' => Category::Key(Color::Red),
        'g' => Category::Key(Color::Green),
        'b' => Category::Key(Color::Blue),
        'R' => Category::LockedDoor(Color::Red),
        'G' => Category::LockedDoor(Color::Green),
        'B' => Category::LockedDoor(Color::Blue),
        _ => return None,
    };
    Some(category)
}

/// Map symbol for a category (the start cell renders as its floor `.`).
pub fn cell_symbol(category: Category) -> char {
    match category {
        Category::Floor => '.',
        Category::Exit => 'E',
        Category::Wall => '#',
        Category::Lava => '~',
        Category::Gold => '$',
        Category::Key(Color::Red) => 'r',
        Category::Key(Color::Green) => 'g',
        Category::Key(Color::Blue) => 'b',
        Category::LockedDoor(Color::Red) => 'R',
        Category::LockedDoor(Color::Green) => 'G',
        Category::LockedDoor(Color::Blue) => 'B',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellFlags, Direction};

    #[test]
    fn parses_symbols_and_ids() {
        let grid = parse_map("; tiny mine\n2 4\nS$rR\n#~GE\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.start(), 0);
        assert!(grid.cell(0).flags.contains(CellFlags::START));

        assert_eq!(grid.category(0), Category::Floor);
        assert_eq!(grid.category(1), Category::Gold);
        assert_eq!(grid.category(2), Category::Key(Color::Red));
        assert_eq!(grid.category(3), Category::LockedDoor(Color::Red));
        assert_eq!(grid.category(4), Category::Wall);
        assert_eq!(grid.category(5), Category::Lava);
        assert_eq!(grid.category(6), Category::LockedDoor(Color::Green));
        assert_eq!(grid.category(7), Category::Exit);

        assert_eq!(grid.neighbor(1, Direction::South), Some(5));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let grid = parse_map("\n; header next\n\n1 3   \n; row\nS.E  \n\n").unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.category(2), Category::Exit);
    }

    #[test]
    fn symbols_round_trip_through_cell_symbol() {
        for symbol in ".E#~$rgbRGB".chars() {
            let category = category_for(symbol).unwrap();
            assert_eq!(cell_symbol(category), symbol);
        }
    }

    #[test]
    fn reports_header_problems() {
        assert_eq!(parse_map("").unwrap_err(), LoadError::MissingHeader);
        assert_eq!(parse_map("; only comments\n").unwrap_err(), LoadError::MissingHeader);
        assert!(matches!(parse_map("three by four\nS").unwrap_err(), LoadError::InvalidHeader { line: 1, .. }));
        assert!(matches!(parse_map("0 3\n").unwrap_err(), LoadError::InvalidHeader { .. }));
    }

    #[test]
    fn reports_shape_problems() {
        assert_eq!(
            parse_map("2 3\nS.E\n").unwrap_err(),
            LoadError::RowCount { expected: 2, found: 1 }
        );
        assert_eq!(
            parse_map("1 3\nS.E\n...\n").unwrap_err(),
            LoadError::RowCount { expected: 1, found: 2 }
        );
        assert_eq!(
            parse_map("2 3\nS.E\n..\n").unwrap_err(),
            LoadError::RowWidth { line: 3, expected: 3, found: 2 }
        );
    }

    #[test]
    fn reports_cell_problems() {
        assert_eq!(
            parse_map("1 3\nS?E\n").unwrap_err(),
            LoadError::UnknownSymbol { line: 2, column: 2, symbol: '?' }
        );
        assert_eq!(parse_map("1 3\n..E\n").unwrap_err(), LoadError::MissingStart);
        assert_eq!(
            parse_map("1 3\nSSE\n").unwrap_err(),
            LoadError::MultipleStarts { first: 0, second: 1 }
        );
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_file("/definitely/not/a/mine.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/a/mine.txt"));
    }
}
