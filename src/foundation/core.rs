pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Number formatting used when re-serializing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormatOptions {
    /// Decimal places kept on each coordinate.
    pub precision: u32,
}

impl FormatOptions {
    /// Precision of the cached serialized form of every command.
    pub const DEFAULT_PRECISION: u32 = 3;
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
        }
    }
}

/// Options for lowering commands into a [`BezPath`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BezierOptions {
    /// Maximum distance between an arc and its cubic approximation.
    pub tolerance: f64,
}

impl Default for BezierOptions {
    fn default() -> Self {
        Self { tolerance: 0.1 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
