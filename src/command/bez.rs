//! Lowering commands into a kurbo [`BezPath`] for rendering.

use kurbo::{Arc, SvgArc, Vec2};

use crate::command::kind::CommandKind;
use crate::command::path_command::{PathCommand, Segment};
use crate::foundation::core::{BezPath, BezierOptions};

/// Build a [`BezPath`] tracing `commands`.
///
/// Arcs are approximated by cubics within `opts.tolerance`; arcs that SVG renders as straight
/// lines (zero radius, coincident endpoints) become line segments. A subpath that does not open
/// with a move gets one at its first command's start.
#[tracing::instrument(skip(commands), fields(len = commands.len()))]
pub fn to_bez_path(commands: &[PathCommand], opts: &BezierOptions) -> BezPath {
    let mut path = BezPath::new();
    let mut open = false;

    for cmd in commands {
        if !open
            && cmd.kind() != CommandKind::Move
            && let Some(start) = cmd.start()
        {
            path.move_to(start);
            open = true;
        }

        match *cmd.segment() {
            Segment::Move { end, .. } => {
                path.move_to(end);
                open = true;
            }
            Segment::Line { end, .. } => path.line_to(end),
            Segment::QuadraticCurve { control, end, .. } => path.quad_to(control, end),
            Segment::BezierCurve {
                control1,
                control2,
                end,
                ..
            } => path.curve_to(control1, control2, end),
            Segment::Arc { start, arc } => {
                let svg_arc = SvgArc {
                    from: start,
                    to: arc.end,
                    radii: Vec2::new(arc.rx, arc.ry),
                    x_rotation: arc.x_axis_rotation.to_radians(),
                    large_arc: arc.large_arc,
                    sweep: arc.sweep,
                };
                match Arc::from_svg_arc(&svg_arc) {
                    Some(a) => a.to_cubic_beziers(opts.tolerance, |p1, p2, p| {
                        path.curve_to(p1, p2, p);
                    }),
                    None => {
                        tracing::debug!(%cmd, "arc degenerates to a line");
                        path.line_to(arc.end);
                    }
                }
            }
            Segment::ClosePath { .. } => {
                path.close_path();
                open = false;
            }
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/command/bez.rs"]
mod tests;
