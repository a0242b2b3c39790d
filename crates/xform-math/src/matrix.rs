//! The 4x4 matrix value type
//!
//! Core storage, element access, transposition, the matrix product and the
//! scalar elementwise operations. Factories for transforms and projections
//! live in [`transform`](crate::transform) and
//! [`projection`](crate::projection).

use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::grid::Grid;
use crate::layout::{DefaultLayout, Layout, LayoutKind};

/// A 4x4 `f32` matrix stored in layout `L`
///
/// Equality is exact per element: a matrix holding NaN is never equal to
/// itself. Use [`Matrix4x4::approx_eq`] to compare computed results.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix4x4<L: Layout = DefaultLayout> {
    e: [f32; 16],
    layout: PhantomData<L>,
}

/// Matrix in the crate-wide default layout
pub type Mat4x4 = Matrix4x4<DefaultLayout>;

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, //
];

impl<L: Layout> Matrix4x4<L> {
    /// Number of stored elements
    pub const LEN: usize = 16;

    /// Wrap 16 values already in this layout's storage order
    #[inline]
    pub const fn from_array(e: [f32; 16]) -> Self {
        Self {
            e,
            layout: PhantomData,
        }
    }

    /// Identity matrix (identical storage in both layouts)
    #[inline]
    pub const fn identity() -> Self {
        Self::from_array(IDENTITY)
    }

    /// Every element set to `value`
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::from_array([value; 16])
    }

    /// Build from the abstract matrix given row by row
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut m = Self::splat(0.0);
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                m.e[L::offset(r, c)] = value;
            }
        }
        m
    }

    /// Build from the abstract matrix given column by column
    pub fn from_columns(columns: [[f32; 4]; 4]) -> Self {
        let mut m = Self::splat(0.0);
        for (c, column) in columns.iter().enumerate() {
            for (r, &value) in column.iter().enumerate() {
                m.e[L::offset(r, c)] = value;
            }
        }
        m
    }

    /// Storage layout of this matrix type
    #[inline]
    pub const fn layout(&self) -> LayoutKind {
        L::KIND
    }

    /// Raw storage, in layout order
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.e
    }

    /// Mutable raw storage, in layout order
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 16] {
        &mut self.e
    }

    /// Abstract row `index`
    pub fn row(&self, index: usize) -> [f32; 4] {
        std::array::from_fn(|col| self.get(index, col))
    }

    /// Abstract column `index`
    pub fn column(&self, index: usize) -> [f32; 4] {
        std::array::from_fn(|row| self.get(row, index))
    }

    /// Same abstract matrix stored in another layout
    pub fn to_layout<M: Layout>(&self) -> Matrix4x4<M> {
        let mut out = Matrix4x4::<M>::splat(0.0);
        for row in 0..4 {
            for col in 0..4 {
                out.e[M::offset(row, col)] = self.e[L::offset(row, col)];
            }
        }
        out
    }

    // ========================================================================
    // Transpose
    // ========================================================================

    /// Transpose of `m` as a new matrix
    pub fn transpose_of(m: &Self) -> Self {
        let mut out = *m;
        for row in 0..4 {
            for col in 0..4 {
                out.e[row * 4 + col] = m.e[col * 4 + row];
            }
        }
        out
    }

    /// Transpose as a new matrix
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self::transpose_of(self)
    }

    /// Transpose in place
    pub fn transpose(&mut self) -> &mut Self {
        *self = Self::transpose_of(self);
        self
    }

    // ========================================================================
    // Scalar operations
    // ========================================================================

    /// Multiply every element by `value` in place
    pub fn scale_by(&mut self, value: f32) -> &mut Self {
        self.e.iter_mut().for_each(|x| *x *= value);
        self
    }

    /// Add `value` to every element in place
    pub fn add_scalar(&mut self, value: f32) -> &mut Self {
        self.e.iter_mut().for_each(|x| *x += value);
        self
    }

    /// Subtract `value` from every element in place
    pub fn sub_scalar(&mut self, value: f32) -> &mut Self {
        self.e.iter_mut().for_each(|x| *x -= value);
        self
    }

    /// Copy with every element multiplied by `value`
    #[must_use]
    pub fn scaled(mut self, value: f32) -> Self {
        self.scale_by(value);
        self
    }

    /// Copy with `value` added to every element
    #[must_use]
    pub fn plus_scalar(mut self, value: f32) -> Self {
        self.add_scalar(value);
        self
    }

    /// Copy with `value` subtracted from every element
    #[must_use]
    pub fn minus_scalar(mut self, value: f32) -> Self {
        self.sub_scalar(value);
        self
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// True if every element differs from `other` by at most `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.e
            .iter()
            .zip(other.e.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// True if within `epsilon` of the identity matrix
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl<L: Layout> Default for Matrix4x4<L> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<L: Layout> Grid for Matrix4x4<L> {
    type Scalar = f32;
    const ROWS: usize = 4;
    const COLS: usize = 4;

    #[inline]
    fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "Out of bounds access to a 4x4 matrix: ({row}, {col})");
        self.e[L::offset(row, col)]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < 4 && col < 4, "Out of bounds access to a 4x4 matrix: ({row}, {col})");
        self.e[L::offset(row, col)] = value;
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<L: Layout> Index<usize> for Matrix4x4<L> {
    type Output = f32;

    /// Storage element by linear index (0..16)
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.e[index]
    }
}

impl<L: Layout> IndexMut<usize> for Matrix4x4<L> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.e[index]
    }
}

impl<L: Layout> Mul for Matrix4x4<L> {
    type Output = Self;

    /// Matrix product `self x rhs`
    fn mul(self, rhs: Self) -> Self {
        // TODO: SIMD path once a 4-wide f32 type is in the dependency tree
        let mut out = Self::splat(0.0);
        for row in 0..4 {
            for col in 0..4 {
                out.e[L::offset(row, col)] = self.e[L::offset(row, 0)] * rhs.e[L::offset(0, col)]
                    + self.e[L::offset(row, 1)] * rhs.e[L::offset(1, col)]
                    + self.e[L::offset(row, 2)] * rhs.e[L::offset(2, col)]
                    + self.e[L::offset(row, 3)] * rhs.e[L::offset(3, col)];
            }
        }
        out
    }
}

impl<L: Layout> MulAssign for Matrix4x4<L> {
    /// Right-multiply in place: `self = self x rhs`
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<L: Layout> Mul<f32> for Matrix4x4<L> {
    type Output = Self;

    fn mul(self, value: f32) -> Self {
        self.scaled(value)
    }
}

impl<L: Layout> MulAssign<f32> for Matrix4x4<L> {
    fn mul_assign(&mut self, value: f32) {
        self.scale_by(value);
    }
}

impl<L: Layout> Add<f32> for Matrix4x4<L> {
    type Output = Self;

    fn add(self, value: f32) -> Self {
        self.plus_scalar(value)
    }
}

impl<L: Layout> AddAssign<f32> for Matrix4x4<L> {
    fn add_assign(&mut self, value: f32) {
        self.add_scalar(value);
    }
}

impl<L: Layout> Sub<f32> for Matrix4x4<L> {
    type Output = Self;

    fn sub(self, value: f32) -> Self {
        self.minus_scalar(value)
    }
}

impl<L: Layout> SubAssign<f32> for Matrix4x4<L> {
    fn sub_assign(&mut self, value: f32) {
        self.sub_scalar(value);
    }
}
