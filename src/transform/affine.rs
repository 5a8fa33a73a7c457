//! Affine transform helpers.

use crate::foundation::core::{Affine, Point};

/// Compose `matrices` so that `matrices[0]` is applied first.
#[inline]
pub fn compose(matrices: &[Affine]) -> Affine {
    matrices.iter().fold(identity(), |acc, m| *m * acc)
}

/// What [`compose`] returns for an empty slice.
#[inline]
pub fn identity() -> Affine {
    Affine::IDENTITY
}

/// Map `point` through `matrices`, first matrix first.
#[inline]
pub fn transform_point(point: Point, matrices: &[Affine]) -> Point {
    compose(matrices) * point
}

/// True when the linear part of `m` is exactly the identity.
#[inline]
pub(crate) fn is_translation_only(m: Affine) -> bool {
    let [a, b, c, d, _, _] = m.as_coeffs();
    a == 1.0 && b == 0.0 && c == 0.0 && d == 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
