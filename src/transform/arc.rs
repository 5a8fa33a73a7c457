//! Elliptical arc transforms.
//!
//! An SVG arc is described by its endpoints plus an ellipse (`rx`, `ry`, `x_axis_rotation`) and
//! two flags that pick one of four candidate arcs. Mapping the endpoints alone is not enough
//! under scale, rotation or skew: the ellipse itself has to be refit so the transformed arc
//! traces the image of the source ellipse.

use crate::foundation::core::{Affine, Point};
use crate::foundation::math::EPSILON;
use crate::transform::affine::{compose, is_translation_only};

/// The part of an `A` command that follows its start point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcParams {
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse's x axis, in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point,
}

/// Recompute `arc` under `matrices` (first matrix applied first).
///
/// The transformed ellipse is the image of the unit circle under `M * R(rotation) * S(rx, ry)`.
/// Its quadratic form `A * A^T` has the squared semi-axes as eigenvalues and the major axis
/// along the leading eigenvector. The returned rotation is normalized to `[0, 180)` except in
/// the two cases that keep the input ellipse as is:
///
/// - pure translations, which only move `end`;
/// - results that are circular, where any rotation is valid.
///
/// A reflection (negative determinant) reverses the direction of travel, so `sweep` flips.
/// `large_arc` is invariant under affine maps.
pub fn transform_arc(arc: ArcParams, matrices: &[Affine]) -> ArcParams {
    let m = compose(matrices);
    let end = m * arc.end;

    if is_translation_only(m) {
        return ArcParams { end, ..arc };
    }

    let [a, b, c, d, _, _] = m.as_coeffs();
    let det = a * d - b * c;
    let sweep = if det < 0.0 { !arc.sweep } else { arc.sweep };

    if arc.rx == 0.0 || arc.ry == 0.0 {
        tracing::debug!(rx = arc.rx, ry = arc.ry, "zero-radius arc, mapping endpoint only");
        return ArcParams { end, sweep, ..arc };
    }
    if det == 0.0 {
        tracing::debug!("non-invertible matrix collapses arc ellipse");
    }

    let (sin, cos) = arc.x_axis_rotation.to_radians().sin_cos();

    // Columns of M * R * S.
    let a11 = arc.rx * (a * cos + c * sin);
    let a21 = arc.rx * (b * cos + d * sin);
    let a12 = arc.ry * (-a * sin + c * cos);
    let a22 = arc.ry * (-b * sin + d * cos);

    let j = a11 * a11 + a12 * a12;
    let k = a21 * a21 + a22 * a22;
    let l = a11 * a21 + a12 * a22;

    let mean = (j + k) * 0.5;
    let half_gap = ((j - k) * 0.5).hypot(l);

    if half_gap <= EPSILON * mean || mean == 0.0 {
        let r = mean.sqrt();
        return ArcParams {
            rx: r,
            ry: r,
            x_axis_rotation: arc.x_axis_rotation,
            large_arc: arc.large_arc,
            sweep,
            end,
        };
    }

    let rx = (mean + half_gap).sqrt();
    let ry = (mean - half_gap).max(0.0).sqrt();
    let rotation = 0.5 * (2.0 * l).atan2(j - k).to_degrees();
    let x_axis_rotation = if rotation < 0.0 {
        rotation + 180.0
    } else {
        rotation.abs()
    };

    ArcParams {
        rx,
        ry,
        x_axis_rotation,
        large_arc: arc.large_arc,
        sweep,
        end,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/arc.rs"]
mod tests;
