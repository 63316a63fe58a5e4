//! Board position (x, y) coordinates.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Both coordinates are validated at construction time, so a
/// `Position` always refers to one of the 81 cells.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.block_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major scan order: row 0 left to right, then
    /// row 1, and so on. This is the order [`Grid::next_empty`] scans in.
    ///
    /// [`Grid::next_empty`]: crate::Grid::next_empty
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9, "x coordinate must be 0-8");
        assert!(y < 9, "y coordinate must be 0-8");
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3×3 block containing this position.
    ///
    /// Blocks are numbered 0-8 in row-major order: block 0 is top-left,
    /// block 2 top-right, block 6 bottom-left, block 8 bottom-right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).block_index(), 0);
    /// assert_eq!(Position::new(8, 0).block_index(), 2);
    /// assert_eq!(Position::new(4, 4).block_index(), 4);
    /// assert_eq!(Position::new(0, 8).block_index(), 6);
    /// assert_eq!(Position::new(8, 8).block_index(), 8);
    /// ```
    #[must_use]
    pub const fn block_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[1], Position::new(1, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));

        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(usize::from(pos.y()) * 9 + usize::from(pos.x()), i);
        }
    }

    #[test]
    fn test_block_partition_is_exhaustive_and_disjoint() {
        // Every position maps to exactly one block, and each block receives
        // exactly 9 positions forming a 3x3 sub-grid.
        let mut counts = [0_u32; 9];
        for pos in Position::ALL {
            let block = pos.block_index();
            assert!(block < 9);
            counts[usize::from(block)] += 1;

            let x0 = (block % 3) * 3;
            let y0 = (block / 3) * 3;
            assert!((x0..x0 + 3).contains(&pos.x()));
            assert!((y0..y0 + 3).contains(&pos.y()));
        }
        assert_eq!(counts, [9; 9]);
    }

    #[test]
    #[should_panic(expected = "x coordinate must be 0-8")]
    fn test_x_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }

    #[test]
    #[should_panic(expected = "y coordinate must be 0-8")]
    fn test_y_out_of_range_panics() {
        let _ = Position::new(0, 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 5).to_string(), "(3, 5)");
    }
}
