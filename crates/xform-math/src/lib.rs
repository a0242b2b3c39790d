//! 4x4 transform and projection matrices
//!
//! This crate provides the matrix type used by the transform and camera
//! layers:
//!
//! - [`Matrix4x4`] - 16 `f32` values with value semantics
//! - [`Layout`] - storage convention as a type parameter ([`RowMajor`],
//!   [`ColumnMajor`]); both encode the same abstract matrix
//! - [`Grid`] - fixed-size grid interface with `(row, col)` access
//! - Factories: identity, splat, scale, translation, axis rotations,
//!   orthographic and perspective projections (OpenGL clip space)
//! - Text form via `Display` / `FromStr`, serde, `lin_alg` and raw bytes
//!
//! # Example
//!
//! ```
//! use std::f32::consts::FRAC_PI_2;
//! use lin_alg::f32::Vec3;
//! use xform_math::{ColumnMajor, Matrix4x4};
//!
//! type Mat = Matrix4x4<ColumnMajor>;
//!
//! let model = Mat::translation(&Vec3::new(0.0, 0.0, -5.0)) * Mat::rotation_y(0.5);
//! let proj = Mat::perspective(FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0);
//! let mvp = proj * model;
//! assert_eq!(mvp[15], 5.0);
//! assert_eq!(Mat::identity().to_string(), "1 0 0 0 0 1 0 0 0 0 1 0 0 0 0 1");
//! ```

mod convert;
mod error;
mod grid;
mod layout;
mod matrix;
mod projection;
mod text;
mod transform;

pub use error::{MatrixError, MatrixResult};
pub use grid::Grid;
pub use layout::{ColumnMajor, DefaultLayout, Layout, LayoutKind, RowMajor};
pub use matrix::{Mat4x4, Matrix4x4};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::{ColumnMajor, Grid, Layout, Mat4x4, Matrix4x4, RowMajor};
}
