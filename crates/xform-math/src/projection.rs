//! Camera projection factories (OpenGL clip conventions, depth in [-1, 1])
//!
//! No parameter validation is done. A degenerate volume (`near == far`,
//! `right == left`, `bottom == top`, `aspect == 0`) divides by zero and the
//! resulting infinities/NaNs end up in the matrix.

use crate::layout::Layout;
use crate::matrix::Matrix4x4;

impl<L: Layout> Matrix4x4<L> {
    /// Orthographic projection of the box `[left, right] x [top, bottom] x [near, far]`
    ///
    /// Note the parameter order (`right` before `left`) and that the height
    /// term is `bottom - top`, not `top - bottom`: with the usual
    /// `bottom < top` the Y axis comes out flipped.
    ///
    /// ```text
    /// w = right - left,  h = bottom - top,  d = near - far
    ///
    /// 2/w   0     0     -(right + left)/w
    /// 0     2/h   0     -(top + bottom)/h
    /// 0     0     2/d   (far + near)/d
    /// 0     0     0     1
    /// ```
    #[doc(alias = "ortographic")]
    pub fn orthographic(
        right: f32,
        left: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let width = right - left;
        let height = bottom - top;
        let depth = near - far;

        let mut m = Self::identity();
        m[L::offset(0, 0)] = 2.0 / width;
        m[L::offset(1, 1)] = 2.0 / height;
        m[L::offset(2, 2)] = 2.0 / depth;
        m[L::offset(0, 3)] = -(right + left) / width;
        m[L::offset(1, 3)] = -(top + bottom) / height;
        m[L::offset(2, 3)] = (far + near) / depth;
        m
    }

    /// Same as [`Matrix4x4::orthographic`]
    #[inline]
    pub fn ortographic(
        right: f32,
        left: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self::orthographic(right, left, bottom, top, near, far)
    }

    /// Perspective projection
    ///
    /// `fovy` is the full vertical field of view in radians.
    ///
    /// ```text
    /// f = 1 / tan(fovy / 2)
    ///
    /// f/aspect  0   0                       0
    /// 0         f   0                       0
    /// 0         0   (far + near)/(near - far)   2 far near/(near - far)
    /// 0         0   -1                      0
    /// ```
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy * 0.5).tan();
        let depth = near - far;

        let mut m = Self::splat(0.0);
        m[L::offset(0, 0)] = f / aspect;
        m[L::offset(1, 1)] = f;
        m[L::offset(2, 2)] = (far + near) / depth;
        m[L::offset(2, 3)] = 2.0 * far * near / depth;
        m[L::offset(3, 2)] = -1.0;
        m
    }
}
