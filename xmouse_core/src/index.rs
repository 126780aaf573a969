//! Type-safe 1-based cell coordinates.
//!
//! Mouse reports address the grid with column 1, line 1 at the top-left
//! cell. `Column` and `Line` keep the two axes apart at compile time.

use std::fmt;

/// Generate conversion and display impls for a newtype index wrapper.
macro_rules! index_ops {
    ($ty:ident, $inner:ty) => {
        impl From<$inner> for $ty {
            fn from(val: $inner) -> Self {
                Self(val)
            }
        }

        impl From<$ty> for $inner {
            fn from(val: $ty) -> Self {
                val.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

/// 1-based column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(pub usize);

index_ops!(Column, usize);

/// 1-based line (row) index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Line(pub usize);

index_ops!(Line, usize);

/// A grid cell addressed the way mouse reports address it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPoint {
    pub column: Column,
    pub line: Line,
}

impl CellPoint {
    /// Create a point at the given column and line.
    pub fn new(column: Column, line: Line) -> Self {
        Self { column, line }
    }
}

impl Default for CellPoint {
    /// The top-left cell.
    fn default() -> Self {
        Self::new(Column(1), Line(1))
    }
}

impl fmt::Display for CellPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.column, self.line)
    }
}
