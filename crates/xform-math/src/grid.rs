//! Fixed-size numeric grid interface
//!
//! The narrow contract a dense matrix type satisfies: a known shape and
//! element access by abstract `(row, col)` position, independent of how the
//! elements are stored.

/// A dense `ROWS x COLS` grid of scalars
pub trait Grid {
    /// Element type
    type Scalar: Copy;

    /// Number of rows
    const ROWS: usize;

    /// Number of columns
    const COLS: usize;

    /// Element at `(row, col)`
    ///
    /// Panics if either index is out of range.
    fn get(&self, row: usize, col: usize) -> Self::Scalar;

    /// Overwrite the element at `(row, col)`
    ///
    /// Panics if either index is out of range.
    fn set(&mut self, row: usize, col: usize, value: Self::Scalar);

    /// Total number of elements
    fn element_count(&self) -> usize {
        Self::ROWS * Self::COLS
    }
}
