//! Core data structures for a 9×9 sudoku puzzle.
//!
//! This crate provides a mutable [`Grid`] together with the constraint
//! queries a solver or game layer would build on: row/column/block views,
//! per-cell candidate computation, empty-cell scanning, and a solved-state
//! check. No solving algorithm is included; the grid exposes only the
//! primitives one would use.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9; empty cells
//!   are `Option<Digit>::None`
//! - [`digit_set`]: [`DigitSet`], a bitmask set of digits used for
//!   candidate queries
//! - [`position`]: [`Position`], a validated (x, y) cell coordinate with
//!   block indexing
//! - [`grid`]: the [`Grid`] itself, including text parsing and file loading
//! - [`error`]: construction and loading error types
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::empty();
//! grid.place(Digit::D5, Position::new(4, 4));
//!
//! // 5 is no longer a candidate anywhere in row 4, column 4, or block 4
//! let options = grid.options_at(Position::new(4, 5));
//! assert!(!options.contains(Digit::D5));
//!
//! grid.unplace(Position::new(4, 4));
//! assert!(grid.options_at(Position::new(4, 5)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    error::{LoadError, ParseGridError},
    grid::Grid,
    position::Position,
};
