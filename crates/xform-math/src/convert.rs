//! Conversions to and from raw storage, `lin_alg` and GPU buffers

use lin_alg::f32::Mat4;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MatrixError, MatrixResult};
use crate::layout::{ColumnMajor, Layout};
use crate::matrix::Matrix4x4;

impl<L: Layout> Matrix4x4<L> {
    /// Storage as raw bytes (native endianness), ready for a buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self.as_array())
    }

    /// Columns of the abstract matrix, the shape uniform structs carry
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        std::array::from_fn(|col| self.column(col))
    }

    /// Convert to a `lin_alg` matrix (column-major storage)
    pub fn to_lin_alg(&self) -> Mat4 {
        Mat4 {
            data: *self.to_layout::<ColumnMajor>().as_array(),
        }
    }

    /// Convert from a `lin_alg` matrix (column-major storage)
    pub fn from_lin_alg(m: &Mat4) -> Self {
        Matrix4x4::<ColumnMajor>::from_array(m.data).to_layout::<L>()
    }
}

impl<L: Layout> From<[f32; 16]> for Matrix4x4<L> {
    fn from(e: [f32; 16]) -> Self {
        Self::from_array(e)
    }
}

impl<L: Layout> From<Matrix4x4<L>> for [f32; 16] {
    fn from(m: Matrix4x4<L>) -> Self {
        *m.as_array()
    }
}

impl<L: Layout> TryFrom<&[f32]> for Matrix4x4<L> {
    type Error = MatrixError;

    fn try_from(values: &[f32]) -> MatrixResult<Self> {
        let e: [f32; 16] = values.try_into().map_err(|_| MatrixError::ElementCount {
            expected: Self::LEN,
            found: values.len(),
        })?;
        Ok(Self::from_array(e))
    }
}

impl<L: Layout> From<&Mat4> for Matrix4x4<L> {
    fn from(m: &Mat4) -> Self {
        Self::from_lin_alg(m)
    }
}

impl<L: Layout> From<Matrix4x4<L>> for Mat4 {
    fn from(m: Matrix4x4<L>) -> Self {
        m.to_lin_alg()
    }
}

// Serialized as the bare 16-element storage array
impl<L: Layout> Serialize for Matrix4x4<L> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_array().serialize(serializer)
    }
}

impl<'de, L: Layout> Deserialize<'de> for Matrix4x4<L> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let e: [f32; 16] = Deserialize::deserialize(deserializer)?;
        Ok(Self::from_array(e))
    }
}
