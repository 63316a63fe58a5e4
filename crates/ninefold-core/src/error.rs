//! Error types for grid construction and loading.

/// Errors that can occur when constructing a [`Grid`] from row data or text.
///
/// Construction is fail-fast: the first malformed row, cell, or character
/// aborts parsing with a position-carrying error. There is no silent
/// truncation or padding.
///
/// [`Grid`]: crate::Grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 9 rows.
    #[display("expected 9 rows, found {found}")]
    RowCount {
        /// Number of rows found in the input.
        found: usize,
    },
    /// A row did not contain exactly 9 cells.
    #[display("row {row}: expected 9 cells, found {found}")]
    RowLength {
        /// Row index (0-8) of the offending row.
        row: usize,
        /// Number of cells found in that row.
        found: usize,
    },
    /// A cell contained a character other than a digit or a comma separator.
    #[display("row {row}, cell {cell}: invalid character {found:?}")]
    InvalidCharacter {
        /// Row index (0-8) of the offending cell.
        row: usize,
        /// Cell index (0-8) within the row.
        cell: usize,
        /// The character that was rejected.
        found: char,
    },
    /// A cell value was outside the range 0-9.
    #[display("row {row}, cell {cell}: value {value} out of range 0-9")]
    ValueOutOfRange {
        /// Row index (0-8) of the offending cell.
        row: usize,
        /// Cell index (0-8) within the row.
        cell: usize,
        /// The value that was rejected.
        value: u8,
    },
}

/// Errors that can occur when loading a [`Grid`] from a file.
///
/// [`Grid`]: crate::Grid
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read puzzle file: {_0}")]
    Io(#[from] std::io::Error),
    /// The file contents were not a valid puzzle.
    #[display("invalid puzzle text: {_0}")]
    Parse(#[from] ParseGridError),
}
