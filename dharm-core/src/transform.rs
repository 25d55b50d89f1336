use nalgebra::{Matrix4, Point3, Vector3};

use crate::joint::NormalizedJoint;

/// Homogeneous 4x4 transform.
///
/// The upper left 3x3 block is a rotation, the right column the translation
/// and the bottom row is `[0, 0, 0, 1]`. The matrix is stack allocated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(Matrix4<f64>);

impl Transform {
    /// Identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Construct a transform from 16 scalars in row-major order.
    pub fn from_row_major(values: [f64; 16]) -> Self {
        Self(Matrix4::from_row_slice(&values))
    }

    /// Local transform of a single joint.
    ///
    /// Classic convention: `Rz(theta) * Tz(d) * Tx(a) * Rx(alpha)`.
    pub fn from_dh(joint: &NormalizedJoint) -> Self {
        let (st, ct) = joint.theta.sin_cos();
        let (sa, ca) = joint.alpha.sin_cos();

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            ct,  -st * ca,  st * sa, joint.a * ct,
            st,   ct * ca, -ct * sa, joint.a * st,
            0.0,  sa,       ca,      joint.d,
            0.0,  0.0,      0.0,     1.0,
        );

        Self(matrix)
    }

    /// Element at `row` and `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[(row, col)]
    }

    /// All 16 elements in row-major order.
    pub fn to_row_major(&self) -> [f64; 16] {
        let mut values = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                values[row * 4 + col] = self.0[(row, col)];
            }
        }
        values
    }

    /// Translation part of the transform.
    #[inline]
    pub fn translation(&self) -> Point3<f64> {
        Point3::new(self.0[(0, 3)], self.0[(1, 3)], self.0[(2, 3)])
    }

    /// Column `col` of the rotation block.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in `0..3`.
    #[inline]
    pub fn rotation_column(&self, col: usize) -> Vector3<f64> {
        assert!(col < 3, "rotation column out of range");
        Vector3::new(self.0[(0, col)], self.0[(1, col)], self.0[(2, col)])
    }

    /// Map a point from the local frame into the reference frame.
    #[inline]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from_homogeneous(self.0 * point.to_homogeneous()).unwrap_or(*point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        Transform(self.0 * rhs.0)
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[{:+.4} {:+.4} {:+.4} {:+.4}]",
                self.0[(row, 0)],
                self.0[(row, 1)],
                self.0[(row, 2)],
                self.0[(row, 3)]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_zero_joint_is_identity() {
        let joint = NormalizedJoint {
            theta: 0.0,
            a: 0.0,
            d: 0.0,
            alpha: 0.0,
        };

        let transform = Transform::from_dh(&joint);

        for (lhs, rhs) in transform
            .to_row_major()
            .iter()
            .zip(Transform::identity().to_row_major().iter())
        {
            assert!((lhs - rhs).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_dh_entries() {
        let joint = NormalizedJoint {
            theta: 0.3,
            a: 1.5,
            d: -0.4,
            alpha: 0.7,
        };

        let transform = Transform::from_dh(&joint);

        assert!((transform.get(0, 0) - 0.3_f64.cos()).abs() < TOLERANCE);
        assert!((transform.get(0, 1) + 0.3_f64.sin() * 0.7_f64.cos()).abs() < TOLERANCE);
        assert!((transform.get(0, 2) - 0.3_f64.sin() * 0.7_f64.sin()).abs() < TOLERANCE);
        assert!((transform.get(1, 3) - 1.5 * 0.3_f64.sin()).abs() < TOLERANCE);
        assert!((transform.get(2, 1) - 0.7_f64.sin()).abs() < TOLERANCE);
        assert!((transform.get(2, 3) + 0.4).abs() < TOLERANCE);
        assert_eq!(transform.get(3, 0), 0.0);
        assert_eq!(transform.get(3, 1), 0.0);
        assert_eq!(transform.get(3, 2), 0.0);
        assert_eq!(transform.get(3, 3), 1.0);
    }

    #[test]
    fn test_row_major() {
        let values = [
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 0.0, 0.0, 0.0, 1.0,
        ];

        let transform = Transform::from_row_major(values);

        assert_eq!(transform.get(0, 3), 4.0);
        assert_eq!(transform.get(2, 0), 9.0);
        assert_eq!(transform.translation(), Point3::new(4.0, 8.0, 12.0));
        assert_eq!(transform.rotation_column(1), Vector3::new(2.0, 6.0, 10.0));
        assert_eq!(transform.to_row_major(), values);
    }

    #[test]
    fn test_transform_point() {
        let joint = NormalizedJoint {
            theta: std::f64::consts::FRAC_PI_2,
            a: 2.0,
            d: 1.0,
            alpha: 0.0,
        };

        let point = Transform::from_dh(&joint).transform_point(&Point3::new(1.0, 0.0, 0.0));

        assert!(point.x.abs() < TOLERANCE);
        assert!((point.y - 3.0).abs() < TOLERANCE);
        assert!((point.z - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_display() {
        let text = Transform::identity().to_string();

        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().next(), Some("[+1.0000 +0.0000 +0.0000 +0.0000]"));
    }
}
