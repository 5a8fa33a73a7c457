use crate::command::path_command::{PathCommand, Segment};
use crate::foundation::core::Point;
use crate::foundation::error::{PathMorphError, PathMorphResult};
use crate::transform::arc::ArcParams;

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blend ellipse rotations (degrees) along the shorter way around a half turn.
///
/// An ellipse at `r` and `r + 180` is the same ellipse, so the step is taken in `(-90, 90]`.
/// Results that leave `[0, 180)` are wrapped back into it.
fn lerp_rotation(a: f64, b: f64, t: f64) -> f64 {
    let step = 90.0 - (90.0 - (b - a)).rem_euclid(180.0);
    let r = a + step * t;
    if (0.0..180.0).contains(&r) {
        r
    } else {
        // rem_euclid can round a tiny negative up to exactly 180.
        let wrapped = r.rem_euclid(180.0);
        if wrapped >= 180.0 { 0.0 } else { wrapped }
    }
}

impl PathCommand {
    /// Blend toward `to` at parameter `t` (clamped to `[0, 1]`).
    ///
    /// Both commands must have the same kind; align them first with
    /// [`PathCommand::convert_to`]. Arc flags cannot be blended and switch to `to`'s at
    /// `t >= 0.5`, and the ellipse rotation turns the shorter way modulo 180 degrees. The result
    /// keeps this command's split flag.
    pub fn interpolate(&self, to: &PathCommand, t: f64) -> PathMorphResult<Self> {
        if !t.is_finite() {
            return Err(PathMorphError::interpolation("t must be finite"));
        }
        let t = t.clamp(0.0, 1.0);
        let pt = |a: Point, b: Point| a.lerp(b, t);

        let segment = match (*self.segment(), *to.segment()) {
            (Segment::Move { start: s0, end: e0 }, Segment::Move { start: s1, end: e1 }) => {
                let start = match (s0, s1) {
                    (None, None) => None,
                    (Some(a), Some(b)) => Some(pt(a, b)),
                    _ => {
                        return Err(PathMorphError::interpolation(
                            "cannot blend a leading move with a move that has a start point",
                        ));
                    }
                };
                Segment::Move {
                    start,
                    end: pt(e0, e1),
                }
            }
            (Segment::Line { start: s0, end: e0 }, Segment::Line { start: s1, end: e1 }) => {
                Segment::Line {
                    start: pt(s0, s1),
                    end: pt(e0, e1),
                }
            }
            (
                Segment::QuadraticCurve {
                    start: s0,
                    control: c0,
                    end: e0,
                },
                Segment::QuadraticCurve {
                    start: s1,
                    control: c1,
                    end: e1,
                },
            ) => Segment::QuadraticCurve {
                start: pt(s0, s1),
                control: pt(c0, c1),
                end: pt(e0, e1),
            },
            (
                Segment::BezierCurve {
                    start: s0,
                    control1: a0,
                    control2: b0,
                    end: e0,
                },
                Segment::BezierCurve {
                    start: s1,
                    control1: a1,
                    control2: b1,
                    end: e1,
                },
            ) => Segment::BezierCurve {
                start: pt(s0, s1),
                control1: pt(a0, a1),
                control2: pt(b0, b1),
                end: pt(e0, e1),
            },
            (Segment::Arc { start: s0, arc: a0 }, Segment::Arc { start: s1, arc: a1 }) => {
                let flags = if t >= 0.5 { a1 } else { a0 };
                Segment::Arc {
                    start: pt(s0, s1),
                    arc: ArcParams {
                        rx: lerp(a0.rx, a1.rx, t),
                        ry: lerp(a0.ry, a1.ry, t),
                        x_axis_rotation: lerp_rotation(a0.x_axis_rotation, a1.x_axis_rotation, t),
                        large_arc: flags.large_arc,
                        sweep: flags.sweep,
                        end: pt(a0.end, a1.end),
                    },
                }
            }
            (
                Segment::ClosePath { start: s0, end: e0 },
                Segment::ClosePath { start: s1, end: e1 },
            ) => Segment::ClosePath {
                start: pt(s0, s1),
                end: pt(e0, e1),
            },
            _ => {
                return Err(PathMorphError::interpolation(format!(
                    "cannot blend {} with {}",
                    self.kind(),
                    to.kind()
                )));
            }
        };

        Ok(Self::from_segment(segment, self.is_split()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/interpolate.rs"]
mod tests;
