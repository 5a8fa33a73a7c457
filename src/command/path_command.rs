use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::command::kind::CommandKind;
use crate::foundation::core::{Affine, FormatOptions, Point};
use crate::foundation::error::{PathMorphError, PathMorphResult};
use crate::foundation::math::format_number;
use crate::transform::affine::compose;
use crate::transform::arc::{ArcParams, transform_arc};

/// Geometry of one path instruction, with the payload each kind needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// `start` is `None` for the first move of a path, which has no prior point.
    Move { start: Option<Point>, end: Point },
    Line { start: Point, end: Point },
    QuadraticCurve {
        start: Point,
        control: Point,
        end: Point,
    },
    BezierCurve {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// The arc's end point lives in `arc.end`.
    Arc { start: Point, arc: ArcParams },
    ClosePath { start: Point, end: Point },
}

impl Segment {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Move { .. } => CommandKind::Move,
            Self::Line { .. } => CommandKind::Line,
            Self::QuadraticCurve { .. } => CommandKind::QuadraticCurve,
            Self::BezierCurve { .. } => CommandKind::BezierCurve,
            Self::Arc { .. } => CommandKind::Arc,
            Self::ClosePath { .. } => CommandKind::ClosePath,
        }
    }

    pub fn start(&self) -> Option<Point> {
        match *self {
            Self::Move { start, .. } => start,
            Self::Line { start, .. }
            | Self::QuadraticCurve { start, .. }
            | Self::BezierCurve { start, .. }
            | Self::Arc { start, .. }
            | Self::ClosePath { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Self::Move { end, .. }
            | Self::Line { end, .. }
            | Self::QuadraticCurve { end, .. }
            | Self::BezierCurve { end, .. }
            | Self::ClosePath { end, .. } => end,
            Self::Arc { arc, .. } => arc.end,
        }
    }

    pub fn points(&self) -> SmallVec<[Point; 4]> {
        match *self {
            Self::Move { start: None, end } => smallvec![end],
            Self::Move {
                start: Some(start),
                end,
            } => smallvec![start, end],
            Self::Line { start, end } | Self::ClosePath { start, end } => smallvec![start, end],
            Self::QuadraticCurve {
                start,
                control,
                end,
            } => smallvec![start, control, end],
            Self::BezierCurve {
                start,
                control1,
                control2,
                end,
            } => smallvec![start, control1, control2, end],
            Self::Arc { start, arc } => smallvec![start, arc.end],
        }
    }
}

/// One immutable SVG path instruction.
///
/// Every operation returns a new command; nothing is mutated after construction. The
/// serialized form (`"L 9.877, 0"`, `"Z"`) is computed once here and kept as a plain field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CommandRepr", into = "CommandRepr")]
pub struct PathCommand {
    segment: Segment,
    is_split: bool,
    serialized: String,
}

impl PathCommand {
    pub(crate) fn from_segment(segment: Segment, is_split: bool) -> Self {
        let serialized = serialize(&segment, FormatOptions::DEFAULT_PRECISION);
        Self {
            segment,
            is_split,
            serialized,
        }
    }

    /// # Panics
    ///
    /// Panics if a coordinate is not finite.
    pub fn new_move(start: Option<Point>, end: Point) -> Self {
        if let Some(start) = start {
            assert_finite(&[start]);
        }
        assert_finite(&[end]);
        Self::from_segment(Segment::Move { start, end }, false)
    }

    /// # Panics
    ///
    /// Panics if a coordinate is not finite.
    pub fn new_line(start: Point, end: Point) -> Self {
        assert_finite(&[start, end]);
        Self::from_segment(Segment::Line { start, end }, false)
    }

    /// # Panics
    ///
    /// Panics if a coordinate is not finite.
    pub fn new_quadratic_curve(start: Point, control: Point, end: Point) -> Self {
        assert_finite(&[start, control, end]);
        Self::from_segment(
            Segment::QuadraticCurve {
                start,
                control,
                end,
            },
            false,
        )
    }

    /// # Panics
    ///
    /// Panics if a coordinate is not finite.
    pub fn new_bezier_curve(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        assert_finite(&[start, control1, control2, end]);
        Self::from_segment(
            Segment::BezierCurve {
                start,
                control1,
                control2,
                end,
            },
            false,
        )
    }

    /// `x_axis_rotation` is in degrees, as in path data.
    ///
    /// # Panics
    ///
    /// Panics if a coordinate, radius or the rotation is not finite.
    pub fn new_arc(
        start: Point,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    ) -> Self {
        assert_finite(&[start, end]);
        assert!(
            rx.is_finite() && ry.is_finite() && x_axis_rotation.is_finite(),
            "arc radii and rotation must be finite"
        );
        Self::from_segment(
            Segment::Arc {
                start,
                arc: ArcParams {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    end,
                },
            },
            false,
        )
    }

    /// # Panics
    ///
    /// Panics if a coordinate is not finite.
    pub fn new_close_path(start: Point, end: Point) -> Self {
        assert_finite(&[start, end]);
        Self::from_segment(Segment::ClosePath { start, end }, false)
    }

    /// Checked construction from a flat argument list laid out like [`PathCommand::args`].
    ///
    /// A move with only 2 args is a leading move without a start point. Arc flags must be
    /// exactly `0` or `1`.
    pub fn from_args(kind: CommandKind, args: &[f64], is_split: bool) -> PathMorphResult<Self> {
        if let Some(i) = args.iter().position(|v| !v.is_finite()) {
            return Err(PathMorphError::validation(format!(
                "{kind} arg {i} is not finite"
            )));
        }

        let pt = |i: usize| Point::new(args[i], args[i + 1]);
        let segment = match (kind, args.len()) {
            (CommandKind::Move, 2) => Segment::Move {
                start: None,
                end: pt(0),
            },
            (CommandKind::Move, 4) => Segment::Move {
                start: Some(pt(0)),
                end: pt(2),
            },
            (CommandKind::Line, 4) => Segment::Line {
                start: pt(0),
                end: pt(2),
            },
            (CommandKind::QuadraticCurve, 6) => Segment::QuadraticCurve {
                start: pt(0),
                control: pt(2),
                end: pt(4),
            },
            (CommandKind::BezierCurve, 8) => Segment::BezierCurve {
                start: pt(0),
                control1: pt(2),
                control2: pt(4),
                end: pt(6),
            },
            (CommandKind::Arc, 9) => Segment::Arc {
                start: pt(0),
                arc: ArcParams {
                    rx: args[2],
                    ry: args[3],
                    x_axis_rotation: args[4],
                    large_arc: parse_flag(args[5], "large-arc")?,
                    sweep: parse_flag(args[6], "sweep")?,
                    end: pt(7),
                },
            },
            (CommandKind::ClosePath, 4) => Segment::ClosePath {
                start: pt(0),
                end: pt(2),
            },
            (kind, n) => {
                return Err(PathMorphError::validation(format!(
                    "{kind} expects {} args, got {n}",
                    kind.arg_count()
                )));
            }
        };
        Ok(Self::from_segment(segment, is_split))
    }

    /// Same command with the split flag set to `is_split`.
    pub fn with_split(self, is_split: bool) -> Self {
        Self { is_split, ..self }
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn kind(&self) -> CommandKind {
        self.segment.kind()
    }

    /// Whether this command is a synthetic anchor inserted to align interpolation.
    pub fn is_split(&self) -> bool {
        self.is_split
    }

    pub fn points(&self) -> SmallVec<[Point; 4]> {
        self.segment.points()
    }

    /// Numeric arguments: flattened points, or the 9 arc values
    /// `[x0, y0, rx, ry, rotation, large_arc, sweep, x1, y1]`.
    pub fn args(&self) -> SmallVec<[f64; 9]> {
        match self.segment {
            Segment::Arc { start, arc } => smallvec![
                start.x,
                start.y,
                arc.rx,
                arc.ry,
                arc.x_axis_rotation,
                flag_value(arc.large_arc),
                flag_value(arc.sweep),
                arc.end.x,
                arc.end.y,
            ],
            _ => self.points().iter().flat_map(|p| [p.x, p.y]).collect(),
        }
    }

    /// `None` only for a leading move.
    pub fn start(&self) -> Option<Point> {
        self.segment.start()
    }

    pub fn end(&self) -> Point {
        self.segment.end()
    }

    /// Apply `matrices` in order to every point.
    ///
    /// Arcs are refit with [`transform_arc`] so radii, rotation and sweep follow the
    /// transformed geometry.
    ///
    /// Matrix coefficients must be finite. Debug builds assert it; release builds would carry
    /// non-finite coordinates into the result.
    #[tracing::instrument(level = "trace", skip(self, matrices), fields(kind = %self.kind()))]
    pub fn transform(&self, matrices: &[Affine]) -> Self {
        let m = compose(matrices);
        debug_assert!(m.is_finite(), "transform matrices must be finite");
        let map = |p: Point| m * p;
        let segment = match self.segment {
            Segment::Move { start, end } => Segment::Move {
                start: start.map(map),
                end: map(end),
            },
            Segment::Line { start, end } => Segment::Line {
                start: map(start),
                end: map(end),
            },
            Segment::QuadraticCurve {
                start,
                control,
                end,
            } => Segment::QuadraticCurve {
                start: map(start),
                control: map(control),
                end: map(end),
            },
            Segment::BezierCurve {
                start,
                control1,
                control2,
                end,
            } => Segment::BezierCurve {
                start: map(start),
                control1: map(control1),
                control2: map(control2),
                end: map(end),
            },
            Segment::Arc { start, arc } => Segment::Arc {
                start: map(start),
                arc: transform_arc(arc, &[m]),
            },
            Segment::ClosePath { start, end } => Segment::ClosePath {
                start: map(start),
                end: map(end),
            },
        };
        Self::from_segment(segment, self.is_split)
    }

    /// The same shape traced in the opposite direction.
    ///
    /// Arcs also invert their sweep flag. A leading move has nothing to swap with and is
    /// returned unchanged.
    pub fn reverse(&self) -> Self {
        let segment = match self.segment {
            Segment::Move { start: None, .. } => self.segment,
            Segment::Move {
                start: Some(start),
                end,
            } => Segment::Move {
                start: Some(end),
                end: start,
            },
            Segment::Line { start, end } => Segment::Line {
                start: end,
                end: start,
            },
            Segment::QuadraticCurve {
                start,
                control,
                end,
            } => Segment::QuadraticCurve {
                start: end,
                control,
                end: start,
            },
            Segment::BezierCurve {
                start,
                control1,
                control2,
                end,
            } => Segment::BezierCurve {
                start: end,
                control1: control2,
                control2: control1,
                end: start,
            },
            Segment::Arc { start, arc } => Segment::Arc {
                start: arc.end,
                arc: ArcParams {
                    sweep: !arc.sweep,
                    end: start,
                    ..arc
                },
            },
            Segment::ClosePath { start, end } => Segment::ClosePath {
                start: end,
                end: start,
            },
        };
        Self::from_segment(segment, self.is_split)
    }

    pub fn toggle_split(&self) -> Self {
        Self {
            is_split: !self.is_split,
            ..self.clone()
        }
    }

    /// Serialize at a precision other than the cached default.
    pub fn to_svg_string(&self, opts: &FormatOptions) -> String {
        if opts.precision == FormatOptions::DEFAULT_PRECISION {
            return self.serialized.clone();
        }
        serialize(&self.segment, opts.precision)
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized)
    }
}

fn serialize(segment: &Segment, precision: u32) -> String {
    match segment {
        Segment::ClosePath { .. } => "Z".to_string(),
        _ => {
            let end = segment.end();
            format!(
                "{} {}, {}",
                segment.kind().svg_char(),
                format_number(end.x, precision),
                format_number(end.y, precision)
            )
        }
    }
}

fn assert_finite(points: &[Point]) {
    assert!(
        points.iter().all(|p| p.is_finite()),
        "path command points must be finite"
    );
}

fn flag_value(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

fn parse_flag(value: f64, name: &str) -> PathMorphResult<bool> {
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(PathMorphError::validation(format!(
            "arc {name} flag must be 0 or 1, got {value}"
        )))
    }
}

/// JSON shape of a command: `{"kind": "L", "args": [...], "split": false}`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct CommandRepr {
    kind: CommandKind,
    args: Vec<f64>,
    #[serde(default)]
    split: bool,
}

impl TryFrom<CommandRepr> for PathCommand {
    type Error = PathMorphError;

    fn try_from(repr: CommandRepr) -> Result<Self, Self::Error> {
        Self::from_args(repr.kind, &repr.args, repr.split)
    }
}

impl From<PathCommand> for CommandRepr {
    fn from(cmd: PathCommand) -> Self {
        Self {
            kind: cmd.kind(),
            args: cmd.args().to_vec(),
            split: cmd.is_split,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/path_command.rs"]
mod tests;
