//! Point and elliptical-arc transforms under ordered affine matrices.

pub mod affine;
pub mod arc;
