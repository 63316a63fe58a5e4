//! The mutable 9×9 sudoku grid.

use std::{
    fmt::{self, Display, Write as _},
    fs,
    path::Path,
    str::FromStr,
};

use crate::{
    digit::Digit,
    digit_set::DigitSet,
    error::{LoadError, ParseGridError},
    position::Position,
};

/// A mutable 9×9 sudoku grid.
///
/// Each cell holds `Option<Digit>`: `Some` for a placed digit 1-9, `None`
/// for an empty cell (rendered as `0` in the text form). The grid is always
/// exactly 9×9; derived views ([`row_values`], [`column_values`],
/// [`block_values`], [`options_at`]) are computed fresh on every query and
/// owned by the caller.
///
/// [`place`] is a raw cell write: it performs no legality check against the
/// row, column, or block, so a caller can construct contradictory grids on
/// purpose. A backtracking solver built on top of this type would drive
/// [`next_empty`] and [`options_at`] and use [`place`]/[`unplace`] to try
/// and retract moves.
///
/// [`place`]: Grid::place
/// [`unplace`]: Grid::unplace
/// [`next_empty`]: Grid::next_empty
/// [`options_at`]: Grid::options_at
/// [`row_values`]: Grid::row_values
/// [`column_values`]: Grid::column_values
/// [`block_values`]: Grid::block_values
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let mut grid: Grid = "\
///     530070000\n\
///     600195000\n\
///     098000060\n\
///     800060003\n\
///     400803001\n\
///     700020006\n\
///     060000280\n\
///     000419005\n\
///     000080079"
///     .parse()
///     .unwrap();
///
/// let pos = grid.next_empty().unwrap();
/// assert_eq!(pos, Position::new(2, 0));
///
/// let options = grid.options_at(pos);
/// assert!(options.contains(Digit::D4));
/// assert!(!options.contains(Digit::D5)); // 5 already in row 0
///
/// grid.place(Digit::D4, pos);
/// assert_eq!(grid.value_at(pos), Some(Digit::D4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// `cells[y][x]`, `None` meaning empty.
    cells: [[Option<Digit>; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Creates a grid from 9 rows of 9 raw cell values.
    ///
    /// A value of 0 means an empty cell; 1-9 place that digit. The 9×9 shape
    /// is enforced by the argument type.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::ValueOutOfRange`] if any value is greater
    /// than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, Grid, Position};
    ///
    /// let mut rows = [[0; 9]; 9];
    /// rows[0][4] = 7;
    /// let grid = Grid::from_rows(rows).unwrap();
    /// assert_eq!(grid.value_at(Position::new(4, 0)), Some(Digit::D7));
    /// ```
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, ParseGridError> {
        let mut cells = [[None; 9]; 9];
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                cells[y][x] = match value {
                    0 => None,
                    1..=9 => Some(Digit::from_value(value)),
                    _ => {
                        return Err(ParseGridError::ValueOutOfRange {
                            row: y,
                            cell: x,
                            value,
                        });
                    }
                };
            }
        }
        Ok(Self { cells })
    }

    /// Loads a grid from a text file.
    ///
    /// The file format is 9 lines of 9 digit characters (0 = empty), with
    /// optional comma separators between digits; see the [`FromStr`]
    /// implementation for details.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Parse`] if its contents are not a valid puzzle.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        Ok(text.parse()?)
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub const fn value_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Places a digit at a position, overwriting any previous value.
    ///
    /// This is a raw write: no validation against the row, column, or block
    /// is performed, and placing a digit that conflicts with its neighbors
    /// succeeds. Use [`options_at`] first if legality matters to the caller.
    ///
    /// [`options_at`]: Grid::options_at
    pub const fn place(&mut self, digit: Digit, pos: Position) {
        self.cells[pos.y() as usize][pos.x() as usize] = Some(digit);
    }

    /// Empties the cell at a position, regardless of its previous value.
    pub const fn unplace(&mut self, pos: Position) {
        self.cells[pos.y() as usize][pos.x() as usize] = None;
    }

    /// Returns the digits still playable at a position.
    ///
    /// The result is `{1..9}` minus every digit currently present in the
    /// position's row, column, and block. It is recomputed from the current
    /// cell values on every call; nothing is cached. The cell's own value,
    /// if any, is excluded like any other value in its units.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{DigitSet, Grid, Position};
    ///
    /// let grid = Grid::empty();
    /// assert_eq!(grid.options_at(Position::new(0, 0)), DigitSet::FULL);
    /// ```
    #[must_use]
    pub fn options_at(&self, pos: Position) -> DigitSet {
        let used = unit_set(self.row_values(pos.y()))
            | unit_set(self.column_values(pos.x()))
            | unit_set(self.block_values(pos.block_index()));
        DigitSet::FULL - used
    }

    /// Returns the first empty cell in row-major scan order, or `None` if
    /// every cell is filled.
    #[must_use]
    pub fn next_empty(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.value_at(pos).is_none())
    }

    /// Returns the 9 values of row `y`, ordered by increasing column.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row_values(&self, y: u8) -> [Option<Digit>; 9] {
        assert!(y < 9, "row index must be 0-8, got {y}");
        self.cells[usize::from(y)]
    }

    /// Returns the 9 values of column `x`, ordered by increasing row.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn column_values(&self, x: u8) -> [Option<Digit>; 9] {
        assert!(x < 9, "column index must be 0-8, got {x}");
        let mut values = [None; 9];
        for (value, row) in values.iter_mut().zip(&self.cells) {
            *value = row[usize::from(x)];
        }
        values
    }

    /// Returns the 9 values of block `block`.
    ///
    /// Values are ordered column-major within the block: the block's three
    /// columns are traversed left to right, and within each column its three
    /// rows top to bottom. Callers relying on sequence order get exactly
    /// this traversal.
    ///
    /// # Panics
    ///
    /// Panics if `block` is not in the range 0-8.
    #[must_use]
    pub fn block_values(&self, block: u8) -> [Option<Digit>; 9] {
        assert!(block < 9, "block index must be 0-8, got {block}");
        let x0 = (block % 3) * 3;
        let y0 = (block / 3) * 3;
        let mut values = [None; 9];
        let mut i = 0;
        for x in x0..x0 + 3 {
            for y in y0..y0 + 3 {
                values[i] = self.value_at(Position::new(x, y));
                i += 1;
            }
        }
        values
    }

    /// Returns `true` iff the grid is completely and correctly filled.
    ///
    /// The check verifies that every digit 1-9 is present in every row,
    /// column, and block. With exactly 9 cells per unit, presence of all 9
    /// digits already rules out duplicates and empty cells, so no separate
    /// duplicate check is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Grid;
    ///
    /// assert!(!Grid::empty().is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        for i in 0..9 {
            if unit_set(self.row_values(i)) != DigitSet::FULL {
                return false;
            }
            if unit_set(self.column_values(i)) != DigitSet::FULL {
                return false;
            }
            if unit_set(self.block_values(i)) != DigitSet::FULL {
                return false;
            }
        }
        true
    }
}

/// Collects the placed digits of one row/column/block into a set.
fn unit_set(values: [Option<Digit>; 9]) -> DigitSet {
    values.into_iter().flatten().collect()
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses the on-disk puzzle text format.
    ///
    /// The input must contain exactly 9 non-blank lines, each encoding one
    /// row as 9 digit characters (0 = empty). Commas between digits are
    /// permitted and ignored, so `1,0,0,0,0,0,0,0,0` and `100000000` encode
    /// the same row. Leading and trailing whitespace on each line is
    /// trimmed; blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != 9 {
            return Err(ParseGridError::RowCount { found: lines.len() });
        }

        let mut cells = [[None; 9]; 9];
        for (y, line) in lines.iter().enumerate() {
            let mut x = 0_usize;
            for c in line.chars() {
                if c == ',' {
                    continue;
                }
                let Some(value) = c.to_digit(10) else {
                    return Err(ParseGridError::InvalidCharacter {
                        row: y,
                        cell: x,
                        found: c,
                    });
                };
                if x < 9 {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = value as u8;
                    cells[y][x] = match value {
                        0 => None,
                        _ => Some(Digit::from_value(value)),
                    };
                }
                x += 1;
            }
            if x != 9 {
                return Err(ParseGridError::RowLength { row: y, found: x });
            }
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    /// Renders the grid as 9 lines of 9 digit characters with `0` for empty
    /// cells, newline-joined, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                match cell {
                    Some(digit) => Display::fmt(digit, f)?,
                    None => f.write_char('0')?,
                }
            }
        }
        Ok(())
    }
}
