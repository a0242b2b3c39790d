//! Storage layout selection
//!
//! A [`Matrix4x4`](crate::Matrix4x4) always encodes the same abstract matrix;
//! the layout only decides which of the 16 storage slots holds element
//! `(row, col)`:
//!
//! - [`RowMajor`]: `data[row * 4 + col]`
//! - [`ColumnMajor`]: `data[col * 4 + row]`
//!
//! Layouts are types, so a row-major and a column-major matrix can never be
//! multiplied or compared by accident.

use std::fmt;

/// Runtime tag for a storage layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Rows are contiguous in storage
    RowMajor,
    /// Columns are contiguous in storage
    ColumnMajor,
}

impl LayoutKind {
    /// Storage index of abstract element `(row, col)` in a 4x4 matrix
    #[inline]
    pub const fn offset(self, row: usize, col: usize) -> usize {
        match self {
            LayoutKind::RowMajor => row * 4 + col,
            LayoutKind::ColumnMajor => col * 4 + row,
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::RowMajor => write!(f, "row-major"),
            LayoutKind::ColumnMajor => write!(f, "column-major"),
        }
    }
}

/// Compile-time storage layout of a 4x4 matrix
pub trait Layout:
    fmt::Debug + Clone + Copy + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Runtime tag for this layout
    const KIND: LayoutKind;

    /// Storage index of abstract element `(row, col)`
    #[inline]
    fn offset(row: usize, col: usize) -> usize {
        Self::KIND.offset(row, col)
    }
}

/// Row-major storage (`data[row * 4 + col]`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl Layout for RowMajor {
    const KIND: LayoutKind = LayoutKind::RowMajor;
}

/// Column-major storage (`data[col * 4 + row]`), the OpenGL/wgpu convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl Layout for ColumnMajor {
    const KIND: LayoutKind = LayoutKind::ColumnMajor;
}

/// Layout used by [`Mat4x4`](crate::Mat4x4)
#[cfg(not(feature = "column-major"))]
pub type DefaultLayout = RowMajor;

/// Layout used by [`Mat4x4`](crate::Mat4x4)
#[cfg(feature = "column-major")]
pub type DefaultLayout = ColumnMajor;
