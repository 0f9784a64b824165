//! 2D affine transform helpers.
//!
//! External formats encode transforms as a row-major 2×3 matrix
//! `[[a, b, tx], [c, d, ty]]` where `x' = a·x + b·y + tx`. kurbo stores the same
//! matrix column-major as `[a, c, b, d, tx, ty]`; the conversions below are the
//! only place the two layouts meet.

use kurbo::{Affine, Point};

/// Row-major 2×3 matrix as found in Figma `relativeTransform` and SVG IR nodes.
pub type TransformRows = [[f64; 3]; 2];

/// Build an [`Affine`] from row-major 2×3 rows.
pub fn from_rows(rows: TransformRows) -> Affine {
    let [[a, b, tx], [c, d, ty]] = rows;
    Affine::new([a, c, b, d, tx, ty])
}

/// Row-major 2×3 rows of an [`Affine`].
pub fn to_rows(affine: &Affine) -> TransformRows {
    let [a, c, b, d, tx, ty] = affine.as_coeffs();
    [[a, b, tx], [c, d, ty]]
}

/// Translation component `(tx, ty)`.
pub fn translation(affine: &Affine) -> (f64, f64) {
    let t = affine.translation();
    (t.x, t.y)
}

/// Rotation angle in degrees implied by the transform's x-axis basis vector.
///
/// Only the rotation survives: skew and non-uniform scale are ignored.
pub fn angle(affine: &Affine) -> f64 {
    let [a, c, ..] = affine.as_coeffs();
    c.atan2(a).to_degrees()
}

/// Gradient transform mapping the unit gradient space onto three control points:
/// the origin lands on `a`, `(1, 0)` on `b` and `(0, 1)` on `c`.
pub fn from_control_points(a: Point, b: Point, c: Point) -> Affine {
    Affine::new([b.x - a.x, b.y - a.y, c.x - a.x, c.y - a.y, a.x, a.y])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_round_trip() {
        let rows = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(to_rows(&from_rows(rows)), rows);
    }

    #[test]
    fn test_rows_apply_like_matrix() {
        let affine = from_rows([[1.0, 0.0, 10.0], [0.0, 1.0, 20.0]]);
        let p = affine * Point::new(1.0, 2.0);
        assert!((p.x - 11.0).abs() < f64::EPSILON);
        assert!((p.y - 22.0).abs() < f64::EPSILON);
        assert_eq!(translation(&affine), (10.0, 20.0));
    }

    #[test]
    fn test_identity_angle_is_zero() {
        assert_eq!(angle(&Affine::IDENTITY), 0.0);
    }

    #[test]
    fn test_quarter_turn_angle() {
        let affine = from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0]]);
        assert!((angle(&affine) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_control_points() {
        let affine = from_control_points(
            Point::new(0.5, 0.0),
            Point::new(0.5, 1.0),
            Point::new(0.0, 0.0),
        );
        let end = affine * Point::new(1.0, 0.0);
        assert!((end.x - 0.5).abs() < f64::EPSILON);
        assert!((end.y - 1.0).abs() < f64::EPSILON);
        assert!((angle(&affine) - 90.0).abs() < 1e-9);
    }
}
