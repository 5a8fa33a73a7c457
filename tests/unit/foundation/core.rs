use super::*;

#[test]
fn format_options_default_to_three_places() {
    assert_eq!(FormatOptions::default().precision, 3);
}

#[test]
fn options_deserialize_from_json() {
    let fmt: FormatOptions = serde_json::from_str(r#"{"precision":5}"#).unwrap();
    assert_eq!(fmt.precision, 5);

    let bez: BezierOptions = serde_json::from_str(r#"{"tolerance":0.25}"#).unwrap();
    assert_eq!(bez.tolerance, 0.25);
    assert_eq!(BezierOptions::default().tolerance, 0.1);
}
