//! Affine transform factories: scale, translation, axis rotations
//!
//! Every factory is written against the abstract matrix (math notation,
//! `M[row][col]`) and placed into storage through the layout, so a
//! row-major and a column-major build of the same call describe the same
//! transform. Rotations are right-handed with angles in radians.

use lin_alg::f32::Vec3;

use crate::layout::Layout;
use crate::matrix::Matrix4x4;

impl<L: Layout> Matrix4x4<L> {
    /// Uniform scale by `rate` on x, y and z
    pub fn scale(rate: f32) -> Self {
        let mut m = Self::identity();
        m[0] = rate;
        m[5] = rate;
        m[10] = rate;
        m
    }

    /// Translation by `offset`
    ///
    /// The offset goes in the last column of the abstract matrix: storage
    /// slots 3, 7, 11 when row-major, 12, 13, 14 when column-major.
    pub fn translation(offset: &Vec3) -> Self {
        let mut m = Self::identity();
        m[L::offset(0, 3)] = offset.x;
        m[L::offset(1, 3)] = offset.y;
        m[L::offset(2, 3)] = offset.z;
        m
    }

    /// Rotation about the X axis
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}
