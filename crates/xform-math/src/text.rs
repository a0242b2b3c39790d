//! Plain-text form of a matrix
//!
//! All 16 elements in storage order, separated by single spaces, each in
//! the default `f32` rendering: the identity prints as
//! `1 0 0 0 0 1 0 0 0 0 1 0 0 0 0 1`. Parsing accepts the same form with
//! any whitespace between tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::{MatrixError, MatrixResult};
use crate::layout::Layout;
use crate::matrix::Matrix4x4;

impl<L: Layout> fmt::Display for Matrix4x4<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.as_array().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<L: Layout> FromStr for Matrix4x4<L> {
    type Err = MatrixError;

    fn from_str(s: &str) -> MatrixResult<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != Self::LEN {
            log::debug!("Rejected matrix text with {} elements", tokens.len());
            return Err(MatrixError::ElementCount {
                expected: Self::LEN,
                found: tokens.len(),
            });
        }

        let mut e = [0.0f32; 16];
        for (index, (slot, token)) in e.iter_mut().zip(tokens).enumerate() {
            *slot = token.parse().map_err(|_| {
                log::debug!("Failed to parse matrix element {}: {:?}", index, token);
                MatrixError::InvalidElement {
                    index,
                    token: token.to_string(),
                }
            })?;
        }
        Ok(Self::from_array(e))
    }
}
