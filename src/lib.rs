//! pathmorph is the path command model behind shape-morphing animation.
//!
//! A [`PathCommand`] is one absolute SVG path instruction (`M`, `L`, `Q`, `C`, `A`, `Z`). It is
//! an immutable value: transforming, reversing, converting or blending a command always
//! produces a new one, and its serialized form is fixed at construction.
//!
//! # Typical flow
//!
//! 1. **Load**: commands come from a parser or a [`PathDocument`] (JSON).
//! 2. **Align**: two paths to be morphed are made kind-compatible with
//!    [`PathCommand::can_convert_to`] / [`PathCommand::convert_to`].
//! 3. **Blend**: [`PathCommand::interpolate`] produces the in-between frames.
//! 4. **Emit**: [`path_data`] rebuilds the SVG `d` attribute, [`to_bez_path`] feeds a renderer.
#![forbid(unsafe_code)]

mod command;
mod document;
mod foundation;

/// Point and arc transforms under ordered affine matrices.
pub mod transform;

pub use command::bez::to_bez_path;
pub use command::convert::{CONVERSION_TABLE, ConversionRule, rule};
pub use command::kind::CommandKind;
pub use command::path_command::{PathCommand, Segment};
pub use command::path_data::{path_data, path_data_with};
pub use document::PathDocument;
pub use foundation::core::{Affine, BezPath, BezierOptions, FormatOptions, Point, Vec2};
pub use foundation::error::{PathMorphError, PathMorphResult};
pub use transform::affine::{compose, transform_point};
pub use transform::arc::{ArcParams, transform_arc};
