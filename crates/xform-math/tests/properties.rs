//! Property tests for xform-math
//!
//! These tests verify the algebraic laws of the matrix type in both
//! storage layouts.

use lin_alg::f32::Vec3;
use proptest::prelude::*;
use xform_math::{ColumnMajor, Grid, Layout, Matrix4x4, RowMajor};

const TOLERANCE: f32 = 1e-4;

fn elements() -> impl Strategy<Value = [f32; 16]> {
    prop::array::uniform16(-100.0f32..100.0)
}

fn angle() -> impl Strategy<Value = f32> {
    -std::f32::consts::TAU..std::f32::consts::TAU
}

fn rotations<L: Layout>(theta: f32) -> [Matrix4x4<L>; 3] {
    [
        Matrix4x4::rotation_x(theta),
        Matrix4x4::rotation_y(theta),
        Matrix4x4::rotation_z(theta),
    ]
}

// ============================================================
// Identity and transpose
// ============================================================

proptest! {
    #[test]
    fn identity_is_neutral_row_major(e in elements()) {
        let m = Matrix4x4::<RowMajor>::from_array(e);
        prop_assert_eq!(m * Matrix4x4::identity(), m);
        prop_assert_eq!(Matrix4x4::identity() * m, m);
    }

    #[test]
    fn identity_is_neutral_column_major(e in elements()) {
        let m = Matrix4x4::<ColumnMajor>::from_array(e);
        prop_assert_eq!(m * Matrix4x4::identity(), m);
        prop_assert_eq!(Matrix4x4::identity() * m, m);
    }

    #[test]
    fn transpose_is_involution(e in elements()) {
        let m = Matrix4x4::<RowMajor>::from_array(e);
        prop_assert_eq!(Matrix4x4::transpose_of(&Matrix4x4::transpose_of(&m)), m);
    }

    #[test]
    fn transpose_in_place_matches_pure(e in elements()) {
        let original = Matrix4x4::<ColumnMajor>::from_array(e);
        let mut m = original;
        m.transpose();
        prop_assert_eq!(m, Matrix4x4::transpose_of(&original));
        for row in 0..4 {
            for col in 0..4 {
                prop_assert_eq!(m.get(row, col), original.get(col, row));
            }
        }
    }

    #[test]
    fn equality_is_reflexive(e in elements()) {
        let m = Matrix4x4::<RowMajor>::from_array(e);
        prop_assert_eq!(m, m);
    }

    #[test]
    fn any_changed_element_breaks_equality(e in elements(), index in 0usize..16, delta in 1.0f32..10.0) {
        let a = Matrix4x4::<RowMajor>::from_array(e);
        let mut b = a;
        b[index] += delta;
        prop_assert_ne!(a, b);
    }
}

// ============================================================
// Rotations
// ============================================================

proptest! {
    #[test]
    fn rotations_are_orthogonal(theta in angle()) {
        for r in rotations::<RowMajor>(theta) {
            prop_assert!((r * r.transposed()).is_identity(TOLERANCE), "{}", r);
        }
        for r in rotations::<ColumnMajor>(theta) {
            prop_assert!((r * r.transposed()).is_identity(TOLERANCE), "{}", r);
        }
    }

    #[test]
    fn rotation_z_composes_additively(a in angle(), b in angle()) {
        let composed = Matrix4x4::<RowMajor>::rotation_z(a) * Matrix4x4::rotation_z(b);
        prop_assert!(composed.approx_eq(&Matrix4x4::rotation_z(a + b), TOLERANCE));

        let composed = Matrix4x4::<ColumnMajor>::rotation_z(a) * Matrix4x4::rotation_z(b);
        prop_assert!(composed.approx_eq(&Matrix4x4::rotation_z(a + b), TOLERANCE));
    }

    #[test]
    fn rotation_x_and_y_compose_additively(a in angle(), b in angle()) {
        let x = Matrix4x4::<ColumnMajor>::rotation_x(a) * Matrix4x4::rotation_x(b);
        prop_assert!(x.approx_eq(&Matrix4x4::rotation_x(a + b), TOLERANCE));

        let y = Matrix4x4::<RowMajor>::rotation_y(a) * Matrix4x4::rotation_y(b);
        prop_assert!(y.approx_eq(&Matrix4x4::rotation_y(a + b), TOLERANCE));
    }

    #[test]
    fn rotation_inverse_is_negative_angle(theta in angle()) {
        let r = rotations::<RowMajor>(theta);
        let inv = rotations::<RowMajor>(-theta);
        for (m, m_inv) in r.iter().zip(inv.iter()) {
            prop_assert!((*m * *m_inv).is_identity(TOLERANCE));
            prop_assert!(m.transposed().approx_eq(m_inv, TOLERANCE));
        }
    }
}

// ============================================================
// Layout duality
// ============================================================

proptest! {
    #[test]
    fn factories_encode_same_matrix_in_both_layouts(
        theta in angle(),
        rate in -10.0f32..10.0,
        x in -50.0f32..50.0,
        y in -50.0f32..50.0,
        z in -50.0f32..50.0
    ) {
        let offset = Vec3::new(x, y, z);
        prop_assert_eq!(
            Matrix4x4::<RowMajor>::translation(&offset).to_layout::<ColumnMajor>(),
            Matrix4x4::<ColumnMajor>::translation(&offset)
        );
        prop_assert_eq!(
            Matrix4x4::<RowMajor>::scale(rate).to_layout::<ColumnMajor>(),
            Matrix4x4::<ColumnMajor>::scale(rate)
        );
        let row = rotations::<RowMajor>(theta);
        let col = rotations::<ColumnMajor>(theta);
        for (r, c) in row.iter().zip(col.iter()) {
            prop_assert_eq!(r.to_layout::<ColumnMajor>(), *c);
        }
    }

    #[test]
    fn perspective_encodes_same_matrix_in_both_layouts(
        fovy in 0.1f32..3.0,
        aspect in 0.2f32..4.0,
        near in 0.01f32..10.0,
        depth in 1.0f32..1000.0
    ) {
        let far = near + depth;
        let r = Matrix4x4::<RowMajor>::perspective(fovy, aspect, near, far);
        let c = Matrix4x4::<ColumnMajor>::perspective(fovy, aspect, near, far);
        prop_assert_eq!(r.to_layout::<ColumnMajor>(), c);
        prop_assert!(r.as_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn product_is_layout_independent(a in elements(), b in elements()) {
        let ra = Matrix4x4::<RowMajor>::from_array(a);
        let rb = Matrix4x4::<RowMajor>::from_array(b);
        let product = (ra.to_layout::<ColumnMajor>() * rb.to_layout::<ColumnMajor>())
            .to_layout::<RowMajor>();
        prop_assert_eq!(product, ra * rb);
    }
}

// ============================================================
// Scalar operations and text
// ============================================================

proptest! {
    #[test]
    fn scalar_ops_apply_elementwise(e in elements(), s in -10.0f32..10.0) {
        let m = Matrix4x4::<RowMajor>::from_array(e);
        let scaled = m * s;
        let added = m + s;
        let subtracted = m - s;
        for i in 0..16 {
            prop_assert_eq!(scaled[i], e[i] * s);
            prop_assert_eq!(added[i], e[i] + s);
            prop_assert_eq!(subtracted[i], e[i] - s);
        }

        let mut in_place = m;
        in_place *= s;
        prop_assert_eq!(in_place, scaled);
    }

    #[test]
    fn text_roundtrip(e in elements()) {
        let m = Matrix4x4::<ColumnMajor>::from_array(e);
        let parsed: Matrix4x4<ColumnMajor> = m.to_string().parse().unwrap();
        prop_assert_eq!(parsed, m);
        prop_assert_eq!(m.to_string().split(' ').count(), 16);
    }
}

#[test]
fn splat_scenarios() {
    assert_eq!(
        Matrix4x4::<RowMajor>::splat(0.0) + 5.0,
        Matrix4x4::<RowMajor>::splat(5.0)
    );
    assert_eq!(
        Matrix4x4::<RowMajor>::splat(2.0) * 3.0,
        Matrix4x4::<RowMajor>::splat(6.0)
    );
}

#[test]
fn perspective_scenario_is_finite() {
    let m = Matrix4x4::<ColumnMajor>::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
    for i in [10, 11, 14] {
        assert!(m[i].is_finite() && !m[i].is_nan(), "slot {i} = {}", m[i]);
    }
}
