//! Which command kinds can stand in for which, for aligning two paths before interpolation.
//!
//! The animation side only interpolates commands of equal kind. When two paths disagree,
//! lower-order commands get promoted (a line becomes a curve); curves are demoted to lines only
//! when they are visibly straight. Arcs never take part in either direction.

use kurbo::QuadBez;

use crate::command::kind::CommandKind;
use crate::command::path_command::{PathCommand, Segment};
use crate::foundation::core::Point;
use crate::foundation::error::{PathMorphError, PathMorphResult};

/// Outcome of looking up a `from -> to` pair in [`CONVERSION_TABLE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ConversionRule {
    Never,
    Always,
    /// Only when the command has at most two distinct points.
    WhenStraight,
}

use ConversionRule::{Always as Y, Never as N, WhenStraight as S};

/// Rows are the source kind, columns the target, both in [`CommandKind::ALL`] order:
/// `M L Q C A Z`.
// TODO: allow Arc -> BezierCurve by approximating the arc with one cubic (kurbo `SvgArc`), then open the Arc row.
pub const CONVERSION_TABLE: [[ConversionRule; 6]; 6] = [
    //     M  L  Q  C  A  Z
    /* M */ [N, N, N, N, N, N],
    /* L */ [N, N, Y, Y, N, N],
    /* Q */ [N, S, N, Y, N, N],
    /* C */ [N, S, N, N, N, N],
    /* A */ [N, N, N, N, N, N],
    /* Z */ [N, Y, Y, Y, N, N],
];

pub fn rule(from: CommandKind, to: CommandKind) -> ConversionRule {
    CONVERSION_TABLE[from.index()][to.index()]
}

fn distinct_point_count(points: &[Point]) -> usize {
    let mut seen: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if !seen.contains(&p) {
            seen.push(p);
        }
    }
    seen.len()
}

impl PathCommand {
    /// Whether this command's shape can be re-expressed as `target` for interpolation.
    ///
    /// Directional: `L -> Q` is allowed, `Q -> L` only for a straight curve.
    pub fn can_convert_to(&self, target: CommandKind) -> bool {
        match rule(self.kind(), target) {
            ConversionRule::Never => false,
            ConversionRule::Always => true,
            ConversionRule::WhenStraight => distinct_point_count(&self.points()) <= 2,
        }
    }

    /// Re-express this command as `target`, keeping its endpoints and split flag.
    ///
    /// Promotions are exact degree elevations, so the traced shape does not change.
    pub fn convert_to(&self, target: CommandKind) -> PathMorphResult<Self> {
        if !self.can_convert_to(target) {
            return Err(PathMorphError::conversion(self.kind(), target));
        }

        let (start, end) = match *self.segment() {
            Segment::Line { start, end }
            | Segment::ClosePath { start, end }
            | Segment::QuadraticCurve { start, end, .. }
            | Segment::BezierCurve { start, end, .. } => (start, end),
            Segment::Move { .. } | Segment::Arc { .. } => {
                return Err(PathMorphError::conversion(self.kind(), target));
            }
        };

        let converted = match (self.segment(), target) {
            (Segment::QuadraticCurve { control, .. }, CommandKind::BezierCurve) => {
                let cubic = QuadBez::new(start, *control, end).raise();
                PathCommand::new_bezier_curve(cubic.p0, cubic.p1, cubic.p2, cubic.p3)
            }
            (_, CommandKind::Line) => PathCommand::new_line(start, end),
            (_, CommandKind::QuadraticCurve) => {
                PathCommand::new_quadratic_curve(start, start.midpoint(end), end)
            }
            (_, CommandKind::BezierCurve) => PathCommand::new_bezier_curve(
                start,
                start.lerp(end, 1.0 / 3.0),
                start.lerp(end, 2.0 / 3.0),
                end,
            ),
            _ => return Err(PathMorphError::conversion(self.kind(), target)),
        };
        Ok(converted.with_split(self.is_split()))
    }

    /// Every kind this command can currently be converted to, in table order.
    pub fn convertible_kinds(&self) -> Vec<CommandKind> {
        CommandKind::ALL
            .into_iter()
            .filter(|&k| self.can_convert_to(k))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/convert.rs"]
mod tests;
