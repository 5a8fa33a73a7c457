use super::*;
use crate::command::kind::CommandKind;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn lines_blend_pointwise() {
    let a = PathCommand::new_line(p(0.0, 0.0), p(10.0, 0.0));
    let b = PathCommand::new_line(p(0.0, 10.0), p(20.0, 10.0));
    let mid = a.interpolate(&b, 0.5).unwrap();
    assert_eq!(mid.points().as_slice(), &[p(0.0, 5.0), p(15.0, 5.0)]);
    assert_eq!(mid.to_string(), "L 15, 5");
}

#[test]
fn endpoints_of_t_reproduce_inputs() {
    let a = PathCommand::new_bezier_curve(p(0.0, 0.0), p(1.0, 2.0), p(3.0, 2.0), p(4.0, 0.0));
    let b = PathCommand::new_bezier_curve(p(1.0, 1.0), p(2.0, 5.0), p(6.0, 1.0), p(9.0, 9.0));
    assert_eq!(a.interpolate(&b, 0.0).unwrap(), a);
    assert_eq!(a.interpolate(&b, 1.0).unwrap().points(), b.points());
}

#[test]
fn t_is_clamped() {
    let a = PathCommand::new_line(p(0.0, 0.0), p(1.0, 0.0));
    let b = PathCommand::new_line(p(0.0, 0.0), p(3.0, 0.0));
    assert_eq!(a.interpolate(&b, 4.0).unwrap().end(), p(3.0, 0.0));
    assert_eq!(a.interpolate(&b, -1.0).unwrap().end(), p(1.0, 0.0));
    assert!(a.interpolate(&b, f64::NAN).is_err());
}

#[test]
fn arc_flags_switch_halfway() {
    let a = PathCommand::new_arc(p(0.0, 0.0), 2.0, 2.0, 0.0, false, false, p(4.0, 0.0));
    let b = PathCommand::new_arc(p(0.0, 0.0), 4.0, 6.0, 90.0, true, true, p(8.0, 0.0));

    let early = a.interpolate(&b, 0.25).unwrap();
    let args = early.args();
    assert_eq!(&args[2..7], &[2.5, 3.0, 22.5, 0.0, 0.0]);

    let late = a.interpolate(&b, 0.5).unwrap();
    let args = late.args();
    assert_eq!(&args[2..7], &[3.0, 4.0, 45.0, 1.0, 1.0]);
    assert_eq!(late.end(), p(6.0, 0.0));
}

#[test]
fn arc_rotation_turns_the_short_way() {
    let a = PathCommand::new_arc(p(0.0, 0.0), 4.0, 2.0, 170.0, false, true, p(4.0, 0.0));
    let b = PathCommand::new_arc(p(0.0, 0.0), 4.0, 2.0, 10.0, false, true, p(4.0, 0.0));

    assert_eq!(a.interpolate(&b, 0.25).unwrap().args()[4], 175.0);
    assert_eq!(a.interpolate(&b, 0.5).unwrap().args()[4], 0.0);
    assert_eq!(a.interpolate(&b, 1.0).unwrap().args()[4], 10.0);
    assert_eq!(b.interpolate(&a, 0.25).unwrap().args()[4], 5.0);
    assert_eq!(b.interpolate(&a, 0.5).unwrap().args()[4], 0.0);
}

#[test]
fn rotation_blend_stays_in_half_turn_range() {
    for (a, b) in [(179.0, 1.0), (1.0, 179.0), (0.0, 90.0), (45.0, 135.0)] {
        for t in [0.0, 0.3, 0.5, 0.7, 1.0] {
            let r = lerp_rotation(a, b, t);
            assert!((0.0..180.0).contains(&r), "{a} -> {b} at {t}: {r}");
        }
    }
    assert!((lerp_rotation(179.0, 1.0, 0.5) - 0.0).abs() < 1e-12);
    assert_eq!(lerp_rotation(0.0, 90.0, 0.5), 45.0);
}

#[test]
fn leading_moves_blend_only_with_leading_moves() {
    let a = PathCommand::new_move(None, p(0.0, 0.0));
    let b = PathCommand::new_move(None, p(2.0, 2.0));
    let mid = a.interpolate(&b, 0.5).unwrap();
    assert_eq!(mid.start(), None);
    assert_eq!(mid.end(), p(1.0, 1.0));

    let c = PathCommand::new_move(Some(p(0.0, 0.0)), p(2.0, 2.0));
    assert!(a.interpolate(&c, 0.5).is_err());
}

#[test]
fn mismatched_kinds_need_conversion_first() {
    let line = PathCommand::new_line(p(0.0, 0.0), p(4.0, 0.0));
    let quad = PathCommand::new_quadratic_curve(p(0.0, 0.0), p(2.0, 4.0), p(4.0, 0.0));
    let err = line.interpolate(&quad, 0.5).unwrap_err();
    assert!(err.to_string().contains("cannot blend L with Q"));

    let promoted = line.convert_to(CommandKind::QuadraticCurve).unwrap();
    let mid = promoted.interpolate(&quad, 0.5).unwrap();
    assert_eq!(mid.points()[1], p(2.0, 2.0));
}

#[test]
fn result_keeps_source_split_flag() {
    let a = PathCommand::new_line(p(0.0, 0.0), p(1.0, 0.0)).with_split(true);
    let b = PathCommand::new_line(p(0.0, 0.0), p(3.0, 0.0));
    assert!(a.interpolate(&b, 0.5).unwrap().is_split());
    assert!(!b.interpolate(&a, 0.5).unwrap().is_split());
}
