use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn line() -> PathCommand {
    PathCommand::new_line(p(0.0, 0.0), p(3.0, 6.0))
}

fn curve() -> PathCommand {
    PathCommand::new_quadratic_curve(p(0.0, 0.0), p(1.0, 2.0), p(3.0, 0.0))
}

fn arc() -> PathCommand {
    PathCommand::new_arc(p(0.0, 0.0), 1.0, 1.0, 0.0, false, true, p(2.0, 0.0))
}

#[test]
fn move_and_same_kind_never_convert() {
    for kind in CommandKind::ALL {
        assert_eq!(rule(CommandKind::Move, kind), ConversionRule::Never);
        assert_eq!(rule(kind, CommandKind::Move), ConversionRule::Never);
        assert_eq!(rule(kind, kind), ConversionRule::Never);
    }
}

#[test]
fn arcs_are_excluded_in_both_directions() {
    for kind in CommandKind::ALL {
        assert!(!arc().can_convert_to(kind));
        assert_eq!(rule(kind, CommandKind::Arc), ConversionRule::Never);
    }
    assert!(!line().can_convert_to(CommandKind::Arc));
}

#[test]
fn line_promotes_to_curves() {
    assert!(line().can_convert_to(CommandKind::QuadraticCurve));
    assert!(line().can_convert_to(CommandKind::BezierCurve));
    assert!(!line().can_convert_to(CommandKind::ClosePath));
}

#[test]
fn close_path_converts_to_line_and_curves() {
    let z = PathCommand::new_close_path(p(4.0, 4.0), p(0.0, 0.0));
    assert_eq!(
        z.convertible_kinds(),
        vec![
            CommandKind::Line,
            CommandKind::QuadraticCurve,
            CommandKind::BezierCurve
        ]
    );
}

#[test]
fn curves_demote_to_line_only_when_straight() {
    assert!(!curve().can_convert_to(CommandKind::Line));
    assert!(curve().can_convert_to(CommandKind::BezierCurve));

    let flat = PathCommand::new_quadratic_curve(p(0.0, 0.0), p(0.0, 0.0), p(5.0, 5.0));
    assert!(flat.can_convert_to(CommandKind::Line));

    let dot = PathCommand::new_quadratic_curve(p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0));
    assert!(dot.can_convert_to(CommandKind::Line));

    let cubic = PathCommand::new_bezier_curve(p(0.0, 0.0), p(0.0, 0.0), p(2.0, 2.0), p(2.0, 2.0));
    assert!(cubic.can_convert_to(CommandKind::Line));
    assert!(!cubic.can_convert_to(CommandKind::QuadraticCurve));

    let bent = PathCommand::new_bezier_curve(p(0.0, 0.0), p(1.0, 3.0), p(2.0, 2.0), p(2.0, 2.0));
    assert!(!bent.can_convert_to(CommandKind::Line));
}

#[test]
fn line_to_quadratic_puts_control_at_midpoint() {
    let q = line().convert_to(CommandKind::QuadraticCurve).unwrap();
    assert_eq!(
        q.points().as_slice(),
        &[p(0.0, 0.0), p(1.5, 3.0), p(3.0, 6.0)]
    );
}

#[test]
fn line_to_cubic_uses_thirds() {
    let c = line().convert_to(CommandKind::BezierCurve).unwrap();
    let pts = c.points();
    assert_eq!(pts[0], p(0.0, 0.0));
    assert!((pts[1] - p(1.0, 2.0)).hypot() < 1e-12);
    assert!((pts[2] - p(2.0, 4.0)).hypot() < 1e-12);
    assert_eq!(pts[3], p(3.0, 6.0));
}

#[test]
fn quadratic_raises_to_equivalent_cubic() {
    let c = curve().convert_to(CommandKind::BezierCurve).unwrap();
    let pts = c.points();
    assert_eq!(pts[0], p(0.0, 0.0));
    assert!((pts[1] - p(2.0 / 3.0, 4.0 / 3.0)).hypot() < 1e-12);
    assert!((pts[2] - p(5.0 / 3.0, 4.0 / 3.0)).hypot() < 1e-12);
    assert_eq!(pts[3], p(3.0, 0.0));
}

#[test]
fn conversion_keeps_split_flag() {
    let split = line().with_split(true);
    assert!(split.convert_to(CommandKind::BezierCurve).unwrap().is_split());

    let z = PathCommand::new_close_path(p(4.0, 4.0), p(0.0, 0.0)).with_split(true);
    let l = z.convert_to(CommandKind::Line).unwrap();
    assert_eq!(l.kind(), CommandKind::Line);
    assert!(l.is_split());
}

#[test]
fn disallowed_conversion_is_an_error() {
    let err = curve().convert_to(CommandKind::Line).unwrap_err();
    assert!(matches!(
        err,
        PathMorphError::Conversion {
            from: CommandKind::QuadraticCurve,
            to: CommandKind::Line
        }
    ));
    assert!(arc().convert_to(CommandKind::BezierCurve).is_err());
}
